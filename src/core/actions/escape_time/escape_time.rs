use crate::core::actions::escape_time::ports::iteration_formula::IterationFormula;
use crate::core::data::complex::Complex;
use crate::core::data::escape::Escape;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `formula` from `point` until `|z|^2` leaves the escape radius or
/// `max_iterations` steps have run.
///
/// An iterate exactly equal to the one before it means the orbit has settled on
/// a fixed point, so the point is reported as bounded straight away. Only exact
/// repeats are caught; near-periodic orbits run to the cap.
#[must_use]
pub fn escape_time<F: IterationFormula + ?Sized>(
    formula: &F,
    point: Complex,
    max_iterations: u32,
) -> Escape {
    let (mut z, c) = formula.seed(point);
    let mut iterations = 0;

    while z.squared_real() + z.squared_imag() <= ESCAPE_RADIUS_SQUARED
        && iterations < max_iterations
    {
        let previous = z;
        z = formula.next(z, c);

        if z == previous {
            return Escape::Bounded;
        }

        iterations += 1;
    }

    if iterations < max_iterations {
        Escape::Escaped {
            iterations,
            final_z: z,
        }
    } else {
        Escape::Bounded
    }
}
