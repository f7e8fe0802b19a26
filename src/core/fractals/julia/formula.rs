use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

/// `z0 = point`, `c` fixed for the whole image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaFormula {
    constant: Complex,
}

impl JuliaFormula {
    #[must_use]
    pub fn new(constant: Complex) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

impl Default for JuliaFormula {
    fn default() -> Self {
        Self::new(DEFAULT_JULIA_CONSTANT)
    }
}

impl IterationFormula for JuliaFormula {
    fn seed(&self, point: Complex) -> (Complex, Complex) {
        (point, self.constant)
    }

    fn next(&self, z: Complex, c: Complex) -> Complex {
        z.square() + c
    }
}
