#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressData {
    pub generation: u64,
    pub tiles_completed: usize,
    pub tiles_total: usize,
}
