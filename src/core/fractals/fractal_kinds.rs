use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::formula::BurningShipFormula;
use crate::core::fractals::julia::formula::{DEFAULT_JULIA_CONSTANT, JuliaFormula};
use crate::core::fractals::mandelbrot::formula::MandelbrotFormula;

/// Fractal family chosen once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia { constant: Complex },
    BurningShip,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia {
            constant: DEFAULT_JULIA_CONSTANT,
        },
        Self::BurningShip,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }
}

impl IterationFormula for FractalKind {
    fn seed(&self, point: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => MandelbrotFormula.seed(point),
            Self::Julia { constant } => JuliaFormula::new(*constant).seed(point),
            Self::BurningShip => BurningShipFormula.seed(point),
        }
    }

    fn next(&self, z: Complex, c: Complex) -> Complex {
        match self {
            Self::Mandelbrot => MandelbrotFormula.next(z, c),
            Self::Julia { constant } => JuliaFormula::new(*constant).next(z, c),
            Self::BurningShip => BurningShipFormula.next(z, c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_distinct() {
        let names: Vec<&str> = FractalKind::ALL.iter().map(|kind| kind.display_name()).collect();

        assert_eq!(names, vec!["Mandelbrot", "Julia", "Burning Ship"]);
    }

    #[test]
    fn test_default_is_mandelbrot() {
        assert_eq!(FractalKind::default(), FractalKind::Mandelbrot);
    }

    #[test]
    fn test_julia_kind_delegates_to_formula() {
        let constant = Complex::new(0.1, 0.2);
        let kind = FractalKind::Julia { constant };
        let point = Complex::new(1.0, 1.0);

        assert_eq!(kind.seed(point), JuliaFormula::new(constant).seed(point));
    }

    #[test]
    fn test_burning_ship_kind_folds_components() {
        let z = Complex::new(-1.0, 1.0);

        assert_eq!(
            FractalKind::BurningShip.next(z, Complex::ZERO),
            BurningShipFormula.next(z, Complex::ZERO)
        );
        assert_ne!(
            FractalKind::BurningShip.next(z, Complex::ZERO),
            FractalKind::Mandelbrot.next(z, Complex::ZERO)
        );
    }
}
