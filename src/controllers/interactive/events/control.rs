use crate::core::data::image_properties::ImageProperties;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Inbound changes from the presentation side, handled by
/// `RenderScheduler::handle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Render {
        properties: ImageProperties,
        viewport: Viewport,
    },
    ResizeStarted,
    ResizeEnded,
    /// Re-renders the last request with another fractal.
    FractalChanged(FractalKind),
    /// Re-renders the last request with another colour shift.
    ColourShiftChanged(f64),
}
