mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render_once::RenderOnceController;
pub use controllers::interactive::cache::{CachedRender, RenderCache};
pub use controllers::interactive::config::{
    ConfigError, DEFAULT_CACHE_CAPACITY, DEFAULT_TILE_SIZE, SchedulerConfig,
};
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::progress_data::ProgressData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::events::control::ControlEvent;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::intake::ResultIntake;
pub use controllers::interactive::ports::presenter::RenderEventPort;
pub use controllers::interactive::resize::ResizeCoalescer;
pub use controllers::interactive::scheduler::{
    RenderScheduler, SchedulerAction, SchedulerError, SchedulerStats,
};
pub use controllers::interactive::task::{RenderTask, TileSource};
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::assemble_frame::frame_assembly::{
    AssembledFrame, DiscardReason, FrameAssembly, IntakeOutcome, TileResult,
};
pub use crate::core::actions::escape_time::escape_time::{ESCAPE_RADIUS_SQUARED, escape_time};
pub use crate::core::actions::escape_time::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
pub use crate::core::actions::generation::GenerationCounter;
pub use crate::core::actions::render_tile::escape_map_lookup::EscapeMapLookup;
pub use crate::core::actions::render_tile::ports::colour_map::ColourMap;
pub use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_tile::render_tile::{RenderedTile, render_tile};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::coloured_pixel::ColouredPixel;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape::Escape;
pub use crate::core::data::image_properties::{ImageProperties, ImagePropertiesError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::burning_ship::formula::BurningShipFormula;
pub use crate::core::fractals::colour_mapping::maps::smooth_hsb::SmoothHsbColourMap;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::julia::formula::{DEFAULT_JULIA_CONSTANT, JuliaFormula};
pub use crate::core::fractals::mandelbrot::formula::MandelbrotFormula;
pub use crate::core::util::calculate_worker_threads::calculate_worker_threads;
pub use crate::core::util::hsb_to_rgb::hsb_to_rgb;
pub use crate::core::util::partition_tiles::partition_tiles;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub use presenters::file::ppm::PpmFilePresenter;
