use crate::controllers::interactive::data::render_request::RenderRequest;

/// Holds back render requests while a resize is in progress, keeping only the
/// newest so resize end starts a single generation.
#[derive(Debug, Default)]
pub struct ResizeCoalescer {
    resizing: bool,
    pending_request: Option<RenderRequest>,
}

impl ResizeCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.resizing = true;
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Replaces any request already waiting.
    pub fn defer(&mut self, request: RenderRequest) {
        self.pending_request = Some(request);
    }

    #[must_use]
    pub fn pending(&self) -> Option<&RenderRequest> {
        self.pending_request.as_ref()
    }

    /// Ends the resize and hands back the request to render, if any arrived.
    pub fn finish(&mut self) -> Option<RenderRequest> {
        self.resizing = false;
        self.pending_request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image_properties::ImageProperties;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::fractal_kinds::FractalKind;

    fn request(width: u32) -> RenderRequest {
        RenderRequest {
            fractal: FractalKind::Mandelbrot,
            properties: ImageProperties::new(10, 0.01, 0.0, 0.0, 0.0).unwrap(),
            viewport: Viewport::new(width, 10).unwrap(),
        }
    }

    #[test]
    fn test_idle_until_begin() {
        let coalescer = ResizeCoalescer::new();

        assert!(!coalescer.is_resizing());
        assert!(coalescer.pending().is_none());
    }

    #[test]
    fn test_multiple_deferred_requests_keep_only_newest() {
        let mut coalescer = ResizeCoalescer::new();
        coalescer.begin();

        coalescer.defer(request(100));
        coalescer.defer(request(120));
        coalescer.defer(request(140));

        assert_eq!(coalescer.pending(), Some(&request(140)));
        assert_eq!(coalescer.finish(), Some(request(140)));
        assert!(!coalescer.is_resizing());
        assert!(coalescer.pending().is_none());
    }

    #[test]
    fn test_finish_without_requests_gives_nothing() {
        let mut coalescer = ResizeCoalescer::new();
        coalescer.begin();

        assert_eq!(coalescer.finish(), None);
        assert!(!coalescer.is_resizing());
    }

    #[test]
    fn test_repeated_begin_keeps_pending_request() {
        let mut coalescer = ResizeCoalescer::new();
        coalescer.begin();
        coalescer.defer(request(100));

        coalescer.begin();

        assert_eq!(coalescer.finish(), Some(request(100)));
    }
}
