use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "pixel rect size must be between 1 and {}: {}x{}",
                    u32::MAX,
                    width,
                    height
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// Pixel-space rectangle with an inclusive bottom-right corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        let max_span = i64::from(u32::MAX);

        if !(1..=max_span).contains(&width) || !(1..=max_span).contains(&height) {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a rect from its origin and size. Sizes past `i32::MAX` saturate.
    #[must_use]
    pub fn with_size(top_left: Point, width: NonZeroU32, height: NonZeroU32) -> Self {
        let span_x = i32::try_from(width.get() - 1).unwrap_or(i32::MAX);
        let span_y = i32::try_from(height.get() - 1).unwrap_or(i32::MAX);

        Self {
            top_left,
            bottom_right: Point {
                x: top_left.x.saturating_add(span_x),
                y: top_left.y.saturating_add(span_y),
            },
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x as i64 - self.top_left.x as i64 + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y as i64 - self.top_left.y as i64 + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn contains_rect(&self, other: PixelRect) -> bool {
        self.contains_point(other.top_left) && self.contains_point(other.bottom_right)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Every point in the rect, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (left, right) = (self.top_left.x, self.bottom_right.x);

        (self.top_left.y..=self.bottom_right.y)
            .flat_map(move |y| (left..=right).map(move |x| Point { x, y }))
    }
}
