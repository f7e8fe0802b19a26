use crate::core::data::image_properties::ImageProperties;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Everything one generation renders. `PartialEq` doubles as the cache key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    /// Which iteration formula to run.
    pub fractal: FractalKind,
    /// View, iteration cap and colour shift.
    pub properties: ImageProperties,
    /// Target size in pixels.
    pub viewport: Viewport,
}

impl RenderRequest {
    /// Same pixels to iterate, possibly coloured differently.
    #[must_use]
    pub fn same_geometry(&self, other: &Self) -> bool {
        self.fractal == other.fractal
            && self.viewport == other.viewport
            && self.properties.same_geometry(&other.properties)
    }
}
