use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;

/// Mandelbrot with both components folded to positive before squaring.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BurningShipFormula;

impl IterationFormula for BurningShipFormula {
    fn seed(&self, point: Complex) -> (Complex, Complex) {
        (Complex::ZERO, point)
    }

    fn next(&self, z: Complex, c: Complex) -> Complex {
        z.abs_components().square() + c
    }
}
