use crate::controllers::interactive::intake::ResultIntake;
use crate::core::actions::assemble_frame::frame_assembly::TileResult;
use crate::core::actions::escape_time::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_tile::escape_map_lookup::EscapeMapLookup;
use crate::core::actions::render_tile::render_tile::{RenderedTile, render_tile};
use crate::core::data::escape::Escape;
use crate::core::data::image_properties::ImageProperties;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::maps::smooth_hsb::SmoothHsbColourMap;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::sync::Arc;

/// Where a task gets its escapes from.
#[derive(Debug, Clone)]
pub enum TileSource {
    Iterate(FractalKind),
    /// Escapes of an earlier render of the same geometry, row-major over the viewport.
    Recolour(Arc<[Escape]>),
}

/// One tile of one generation. Tasks never touch the framebuffer and always
/// deliver, even when their generation has been superseded.
pub struct RenderTask {
    intake: ResultIntake,
    generation: u64,
    tile_index: usize,
    tile: PixelRect,
    viewport: Viewport,
    properties: Arc<ImageProperties>,
    source: TileSource,
}

impl RenderTask {
    pub fn new(
        intake: ResultIntake,
        generation: u64,
        tile_index: usize,
        tile: PixelRect,
        viewport: Viewport,
        properties: Arc<ImageProperties>,
        source: TileSource,
    ) -> Self {
        Self {
            intake,
            generation,
            tile_index,
            tile,
            viewport,
            properties,
            source,
        }
    }

    pub fn run(self) {
        let colour_map = SmoothHsbColourMap::new(self.properties.colour_shift());

        let RenderedTile { pixels, escapes } = match &self.source {
            TileSource::Iterate(fractal) => {
                let algorithm =
                    EscapeTimeAlgorithm::new(*fractal, Arc::clone(&self.properties), self.viewport);
                render_tile(self.tile, &algorithm, &colour_map)
            }
            TileSource::Recolour(escapes) => {
                let lookup = EscapeMapLookup::new(self.viewport, escapes);
                render_tile(self.tile, &lookup, &colour_map)
            }
        };

        self.intake.deliver(TileResult {
            generation: self.generation,
            tile_index: self.tile_index,
            tile: self.tile,
            pixels,
            escapes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::intake::IntakeMessage;
    use crate::core::data::point::Point;
    use crossbeam_channel::Receiver;

    fn properties(colour_shift: f64) -> Arc<ImageProperties> {
        Arc::new(ImageProperties::new(50, 0.5, -0.5, 0.0, colour_shift).unwrap())
    }

    fn run_task(
        viewport: Viewport,
        tile: PixelRect,
        properties: Arc<ImageProperties>,
        source: TileSource,
    ) -> TileResult {
        let (sender, receiver): (_, Receiver<IntakeMessage>) = crossbeam_channel::unbounded();
        RenderTask::new(ResultIntake::new(sender), 7, 3, tile, viewport, properties, source).run();

        match receiver.try_recv() {
            Ok(IntakeMessage::Tile(result)) => result,
            _ => panic!("task did not deliver a tile"),
        }
    }

    #[test]
    fn test_delivers_stamped_tile() {
        let viewport = Viewport::new(8, 6).unwrap();
        let tile = PixelRect::new(Point { x: 4, y: 2 }, Point { x: 7, y: 5 }).unwrap();

        let result = run_task(
            viewport,
            tile,
            properties(0.0),
            TileSource::Iterate(FractalKind::Mandelbrot),
        );

        assert_eq!(result.generation, 7);
        assert_eq!(result.tile_index, 3);
        assert_eq!(result.tile, tile);
        assert_eq!(result.pixels.len(), 16);
        assert_eq!(result.escapes.len(), 16);
        assert_eq!(result.pixels[0].point, Point { x: 4, y: 2 });
    }

    #[test]
    fn test_recolour_matches_fresh_iteration() {
        let viewport = Viewport::new(8, 6).unwrap();
        let whole = viewport.pixel_rect();
        let tile = PixelRect::new(Point { x: 0, y: 3 }, Point { x: 7, y: 5 }).unwrap();

        let first = run_task(
            viewport,
            whole,
            properties(0.0),
            TileSource::Iterate(FractalKind::Mandelbrot),
        );
        let recoloured = run_task(
            viewport,
            tile,
            properties(0.6),
            TileSource::Recolour(first.escapes.into()),
        );
        let fresh = run_task(
            viewport,
            tile,
            properties(0.6),
            TileSource::Iterate(FractalKind::Mandelbrot),
        );

        assert_eq!(recoloured.pixels, fresh.pixels);
        assert_eq!(recoloured.escapes, fresh.escapes);
    }
}
