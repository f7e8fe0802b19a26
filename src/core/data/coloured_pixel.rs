use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// One resolved pixel, produced once per pixel per generation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColouredPixel {
    pub point: Point,
    pub colour: Colour,
}
