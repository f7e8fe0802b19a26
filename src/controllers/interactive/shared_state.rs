use crate::controllers::interactive::cache::RenderCache;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::core::actions::generation::GenerationCounter;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub(crate) struct SchedulerCounters {
    pub(crate) generations_started: AtomicU64,
    pub(crate) tiles_dispatched: AtomicU64,
    pub(crate) tiles_discarded: AtomicU64,
}

/// State shared between the coordinator side of the scheduler and its intake thread.
pub(crate) struct SharedState {
    pub(crate) generation: GenerationCounter,
    pub(crate) last_completed_generation: AtomicU64,
    pub(crate) latest_frame: Mutex<Option<Arc<PixelBuffer>>>,
    pub(crate) cache: Mutex<RenderCache>,
    pub(crate) counters: SchedulerCounters,
    pub(crate) presenter_port: Arc<dyn RenderEventPort>,
}

impl SharedState {
    pub(crate) fn new(presenter_port: Arc<dyn RenderEventPort>, cache_capacity: usize) -> Self {
        Self {
            generation: GenerationCounter::new(),
            last_completed_generation: AtomicU64::new(0),
            latest_frame: Mutex::new(None),
            cache: Mutex::new(RenderCache::new(cache_capacity)),
            counters: SchedulerCounters::default(),
            presenter_port,
        }
    }
}

/// Locks `mutex`, carrying on with the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
