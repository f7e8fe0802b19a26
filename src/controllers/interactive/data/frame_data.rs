use std::sync::Arc;
use std::time::Duration;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: Arc<PixelBuffer>,
    pub render_duration: Duration,
    pub from_cache: bool,
}
