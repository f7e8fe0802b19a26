use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::escape::Escape;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CachedRender {
    pub request: RenderRequest,
    pub pixel_buffer: Arc<PixelBuffer>,
    pub escapes: Arc<[Escape]>,
}

/// Bounded store of completed renders, oldest evicted first.
#[derive(Debug)]
pub struct RenderCache {
    capacity: usize,
    entries: VecDeque<Arc<CachedRender>>,
}

impl RenderCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn find_exact(&self, request: &RenderRequest) -> Option<Arc<CachedRender>> {
        self.entries
            .iter()
            .find(|entry| entry.request == *request)
            .cloned()
    }

    /// A render of the same pixels under any colour shift.
    #[must_use]
    pub fn find_recolourable(&self, request: &RenderRequest) -> Option<Arc<CachedRender>> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.request.same_geometry(request))
            .cloned()
    }

    pub fn insert(&mut self, render: CachedRender) {
        if self.capacity == 0 {
            return;
        }

        self.entries.retain(|entry| entry.request != render.request);

        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(Arc::new(render));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
