use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary (P6) PPM images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(std::fs::File::create(filepath)?);

        Self::encode(buffer, &mut writer)?;
        writer.flush()
    }
}
