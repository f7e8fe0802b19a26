use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render events. Called from the scheduler's intake thread, never
/// from the coordinator.
pub trait RenderEventPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
