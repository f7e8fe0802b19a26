use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Persists a finished frame. Implemented outside the core, which never does file I/O.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
