use crate::core::data::complex::Complex;

/// The only part that differs between escape-time fractal families: where the
/// orbit starts and how the next iterate is produced.
pub trait IterationFormula: Send + Sync {
    /// Starting iterate `z0` and additive constant `c` for a plane point.
    fn seed(&self, point: Complex) -> (Complex, Complex);

    fn next(&self, z: Complex, c: Complex) -> Complex;
}
