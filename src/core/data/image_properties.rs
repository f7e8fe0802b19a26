use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ImagePropertiesError {
    ZeroMaxIterations,
    InvalidScale { scale: f64 },
    NonFiniteShift { x_shift: f64, y_shift: f64 },
    NonFiniteColourShift { colour_shift: f64 },
}

impl fmt::Display for ImagePropertiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidScale { scale } => {
                write!(f, "scale must be finite and greater than zero: {}", scale)
            }
            Self::NonFiniteShift { x_shift, y_shift } => {
                write!(f, "view shift must be finite: ({}, {})", x_shift, y_shift)
            }
            Self::NonFiniteColourShift { colour_shift } => {
                write!(f, "colour shift must be finite: {}", colour_shift)
            }
        }
    }
}

impl Error for ImagePropertiesError {}

/// Snapshot of everything a render needs apart from the viewport size.
///
/// `scale` is plane units per pixel and the shifts are the plane coordinate
/// shown at the image centre. Values are never edited in place: every change
/// builds a new snapshot, so tasks holding an older one keep a consistent view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageProperties {
    max_iterations: u32,
    scale: f64,
    x_shift: f64,
    y_shift: f64,
    colour_shift: f64,
}

impl ImageProperties {
    pub fn new(
        max_iterations: u32,
        scale: f64,
        x_shift: f64,
        y_shift: f64,
        colour_shift: f64,
    ) -> Result<Self, ImagePropertiesError> {
        if max_iterations == 0 {
            return Err(ImagePropertiesError::ZeroMaxIterations);
        }

        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ImagePropertiesError::InvalidScale { scale });
        }

        if !(x_shift.is_finite() && y_shift.is_finite()) {
            return Err(ImagePropertiesError::NonFiniteShift { x_shift, y_shift });
        }

        if !colour_shift.is_finite() {
            return Err(ImagePropertiesError::NonFiniteColourShift { colour_shift });
        }

        Ok(Self {
            max_iterations,
            scale,
            x_shift,
            y_shift,
            colour_shift,
        })
    }

    /// Scale and shift that fit `region` inside `viewport`, keeping pixels
    /// square. The axis that needs the larger scale decides, so the other
    /// axis shows more of the plane than asked for.
    pub fn fit(
        viewport: Viewport,
        region: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, ImagePropertiesError> {
        let scale_x = region.width() / viewport.width() as f64;
        let scale_y = region.height() / viewport.height() as f64;
        let centre = region.centre();

        Self::new(max_iterations, scale_x.max(scale_y), centre.real, centre.imag, 0.0)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn x_shift(&self) -> f64 {
        self.x_shift
    }

    #[must_use]
    pub fn y_shift(&self) -> f64 {
        self.y_shift
    }

    #[must_use]
    pub fn shift(&self) -> Complex {
        Complex::new(self.x_shift, self.y_shift)
    }

    #[must_use]
    pub fn colour_shift(&self) -> f64 {
        self.colour_shift
    }

    pub fn with_colour_shift(&self, colour_shift: f64) -> Result<Self, ImagePropertiesError> {
        Self::new(
            self.max_iterations,
            self.scale,
            self.x_shift,
            self.y_shift,
            colour_shift,
        )
    }

    /// True when both snapshots iterate identically and differ at most in colour.
    #[must_use]
    pub fn same_geometry(&self, other: &Self) -> bool {
        self.max_iterations == other.max_iterations
            && self.scale == other.scale
            && self.x_shift == other.x_shift
            && self.y_shift == other.y_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let properties = ImageProperties::new(100, 0.01, -0.5, 0.25, 0.3).unwrap();

        assert_eq!(properties.max_iterations(), 100);
        assert_eq!(properties.scale(), 0.01);
        assert_eq!(properties.shift(), Complex::new(-0.5, 0.25));
        assert_eq!(properties.colour_shift(), 0.3);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        assert_eq!(
            ImageProperties::new(0, 0.01, 0.0, 0.0, 0.0),
            Err(ImagePropertiesError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_new_rejects_non_positive_scale() {
        assert_eq!(
            ImageProperties::new(10, 0.0, 0.0, 0.0, 0.0),
            Err(ImagePropertiesError::InvalidScale { scale: 0.0 })
        );
        assert!(ImageProperties::new(10, -1.0, 0.0, 0.0, 0.0).is_err());
        assert!(ImageProperties::new(10, f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(ImageProperties::new(10, f64::INFINITY, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_shifts() {
        assert!(ImageProperties::new(10, 1.0, f64::NAN, 0.0, 0.0).is_err());
        assert!(ImageProperties::new(10, 1.0, 0.0, f64::NEG_INFINITY, 0.0).is_err());
        assert!(ImageProperties::new(10, 1.0, 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_fit_covers_region_exactly_when_aspect_matches() {
        let viewport = Viewport::new(300, 250).unwrap();
        let region = ComplexRect::new(Complex::new(-2.0, -1.25), Complex::new(1.0, 1.25)).unwrap();

        let properties = ImageProperties::fit(viewport, region, 100).unwrap();

        assert_eq!(properties.scale(), 0.01);
        assert_eq!(properties.shift(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_fit_uses_larger_scale_for_mismatched_aspect() {
        let viewport = Viewport::new(100, 100).unwrap();
        let region = ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0)).unwrap();

        let properties = ImageProperties::fit(viewport, region, 50).unwrap();

        assert_eq!(properties.scale(), 0.035);
        assert_eq!(properties.shift(), Complex::new(-0.75, 0.0));
    }

    #[test]
    fn test_with_colour_shift_builds_new_snapshot() {
        let original = ImageProperties::new(100, 0.01, 0.0, 0.0, 0.0).unwrap();

        let recoloured = original.with_colour_shift(0.5).unwrap();

        assert_eq!(original.colour_shift(), 0.0);
        assert_eq!(recoloured.colour_shift(), 0.5);
        assert!(original.same_geometry(&recoloured));
        assert_ne!(original, recoloured);
    }

    #[test]
    fn test_same_geometry_detects_iteration_change() {
        let original = ImageProperties::new(100, 0.01, 0.0, 0.0, 0.0).unwrap();
        let deeper = ImageProperties::new(200, 0.01, 0.0, 0.0, 0.0).unwrap();

        assert!(!original.same_geometry(&deeper));
    }
}
