use std::num::NonZeroUsize;

/// Worker pool size: the requested count, else the available hardware parallelism.
#[must_use]
pub fn calculate_worker_threads(requested: Option<NonZeroUsize>) -> NonZeroUsize {
    requested.unwrap_or_else(|| {
        std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    })
}
