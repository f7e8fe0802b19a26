use crate::core::data::escape::Escape;
use crate::core::data::point::Point;

pub trait FractalAlgorithm: Send + Sync {
    fn compute(&self, pixel: Point) -> Escape;
}
