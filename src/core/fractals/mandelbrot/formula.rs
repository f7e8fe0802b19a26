use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;

/// `z0 = 0`, `c = point`, `z -> z² + c`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MandelbrotFormula;

impl IterationFormula for MandelbrotFormula {
    fn seed(&self, point: Complex) -> (Complex, Complex) {
        (Complex::ZERO, point)
    }

    fn next(&self, z: Complex, c: Complex) -> Complex {
        z.square() + c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_starts_at_zero() {
        let point = Complex::new(-0.5, 0.25);

        assert_eq!(MandelbrotFormula.seed(point), (Complex::ZERO, point));
    }

    #[test]
    fn test_next_squares_and_adds() {
        let next = MandelbrotFormula.next(Complex::new(2.0, 3.0), Complex::new(1.0, 1.0));

        assert_eq!(next, Complex::new(-4.0, 13.0));
    }
}
