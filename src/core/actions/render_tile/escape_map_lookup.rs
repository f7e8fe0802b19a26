use crate::core::actions::render_tile::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape::Escape;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Replays escapes stored row-major for a whole viewport, so a new colour map
/// can be applied without iterating again. Pixels with no stored escape read as
/// bounded.
#[derive(Debug, Clone, Copy)]
pub struct EscapeMapLookup<'a> {
    viewport: Viewport,
    escapes: &'a [Escape],
}

impl<'a> EscapeMapLookup<'a> {
    pub fn new(viewport: Viewport, escapes: &'a [Escape]) -> Self {
        debug_assert_eq!(escapes.len() as u64, viewport.size());

        Self { viewport, escapes }
    }
}

impl FractalAlgorithm for EscapeMapLookup<'_> {
    fn compute(&self, pixel: Point) -> Escape {
        if !self.viewport.pixel_rect().contains_point(pixel) {
            return Escape::Bounded;
        }

        let index = pixel.y as usize * self.viewport.width() as usize + pixel.x as usize;

        self.escapes.get(index).copied().unwrap_or(Escape::Bounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_lookup_reads_row_major() {
        let viewport = Viewport::new(2, 2).unwrap();
        let escaped = Escape::Escaped {
            iterations: 7,
            final_z: Complex::new(3.0, 0.0),
        };
        let escapes = [Escape::Bounded, Escape::Bounded, escaped, Escape::Bounded];

        let lookup = EscapeMapLookup::new(viewport, &escapes);

        assert_eq!(lookup.compute(Point { x: 0, y: 1 }), escaped);
        assert_eq!(lookup.compute(Point { x: 1, y: 0 }), Escape::Bounded);
    }

    #[test]
    fn test_lookup_outside_viewport_is_bounded() {
        let viewport = Viewport::new(1, 1).unwrap();
        let escapes = [Escape::Escaped {
            iterations: 1,
            final_z: Complex::new(3.0, 0.0),
        }];

        let lookup = EscapeMapLookup::new(viewport, &escapes);

        assert_eq!(lookup.compute(Point { x: 1, y: 0 }), Escape::Bounded);
        assert_eq!(lookup.compute(Point { x: 0, y: -1 }), Escape::Bounded);
    }
}
