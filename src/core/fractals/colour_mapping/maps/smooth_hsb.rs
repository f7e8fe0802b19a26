use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape::Escape;
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

const HUE_PER_ITERATION: f64 = 1.0 / 100.0;

/// Smooth (normalised iteration count) hue, rotated by `colour_shift`.
/// Bounded points are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothHsbColourMap {
    colour_shift: f64,
}

impl SmoothHsbColourMap {
    #[must_use]
    pub fn new(colour_shift: f64) -> Self {
        Self { colour_shift }
    }

    #[must_use]
    pub fn hue(&self, iterations: u32, magnitude_squared: f64) -> f64 {
        let log_magnitude = 0.5 * magnitude_squared.ln();
        let smoothed = iterations as f64 + 1.0 - log_magnitude.ln() / std::f64::consts::LN_2;
        let hue = self.colour_shift + smoothed * HUE_PER_ITERATION;

        if hue.is_finite() { hue } else { self.colour_shift }
    }
}

impl ColourMap for SmoothHsbColourMap {
    fn map(&self, escape: Escape) -> Colour {
        match escape {
            Escape::Bounded => Colour::BLACK,
            Escape::Escaped {
                iterations,
                final_z,
            } => hsb_to_rgb(self.hue(iterations, final_z.magnitude_squared()), 1.0, 1.0),
        }
    }
}
