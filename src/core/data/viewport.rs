use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

const MAX_DIMENSION: u32 = i32::MAX as u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be between 1 and {} pixels per side: {}x{}",
                    MAX_DIMENSION, width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Pixel size of the image being rendered, with its origin at (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        let invalid = ViewportError::InvalidSize { width, height };

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(invalid);
        }

        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(invalid),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Image centre in pixel space, the point that maps to the view's shift.
    #[must_use]
    pub fn centre(&self) -> (f64, f64) {
        (self.width() as f64 / 2.0, self.height() as f64 / 2.0)
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::with_size(Point { x: 0, y: 0 }, self.width, self.height)
    }
}
