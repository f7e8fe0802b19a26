use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic render generation. The coordinator advances it; workers and the
/// result intake only read it. Generation 0 means nothing has been requested.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation and returns its id.
    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    #[inline]
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.current()
    }
}
