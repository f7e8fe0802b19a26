use crate::core::data::complex::Complex;

/// Outcome of escape-time iteration for one plane point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Escape {
    /// Reached the iteration cap, or the orbit repeated exactly.
    Bounded,
    Escaped { iterations: u32, final_z: Complex },
}

impl Escape {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }
}
