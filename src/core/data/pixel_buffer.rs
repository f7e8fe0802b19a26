use crate::core::data::colour::Colour;
use crate::core::data::coloured_pixel::ColouredPixel;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 raster covering `pixel_rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.index_of(pixel) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        };

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Writes every pixel or none of them.
    pub fn write_pixels(&mut self, pixels: &[ColouredPixel]) -> Result<(), PixelBufferError> {
        if let Some(outside) = pixels
            .iter()
            .find(|pixel| !self.pixel_rect.contains_point(pixel.point))
        {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel: outside.point,
                pixel_rect: self.pixel_rect,
            });
        }

        for pixel in pixels {
            self.set_pixel(pixel.point, pixel.colour)?;
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x as i64 - self.pixel_rect.top_left().x as i64) as usize;
        let relative_y = (pixel.y as i64 - self.pixel_rect.top_left().y as i64) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    fn create_offset_pixel_rect(x: i32, y: i32, width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x, y },
            Point {
                x: x + width - 1,
                y: y + height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_width_and_height_follow_rect() {
        let buffer = PixelBuffer::new(create_pixel_rect(7, 3));

        assert_eq!(buffer.width(), 7);
        assert_eq!(buffer.height(), 3);
    }

    #[test]
    fn test_set_pixel_valid() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let red = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: 1, y: 1 }, red);

        assert!(result.is_ok());
        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let blue = Colour { r: 0, g: 0, b: 255 };

        buffer.set_pixel(Point { x: 2, y: 2 }, blue).unwrap();

        assert_eq!(&buffer.buffer()[24..27], &[0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_with_offset_rect() {
        let pixel_rect = create_offset_pixel_rect(10, 20, 3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let white = Colour {
            r: 255,
            g: 255,
            b: 255,
        };

        buffer.set_pixel(Point { x: 11, y: 21 }, white).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 255, 255]);
        assert_eq!(buffer.pixel(Point { x: 11, y: 21 }), Some(white));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let colour = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: 5, y: 1 }, colour);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(create_pixel_rect(3, 3));

        assert_eq!(buffer.pixel(Point { x: 3, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: -1 }), None);
    }

    #[test]
    fn test_write_pixels_writes_all() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let white = Colour { r: 255, g: 255, b: 255 };
        let pixels = [
            ColouredPixel { point: Point { x: 0, y: 0 }, colour: white },
            ColouredPixel { point: Point { x: 1, y: 1 }, colour: white },
        ];

        buffer.write_pixels(&pixels).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(white));
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(white));
    }

    #[test]
    fn test_write_pixels_rejects_batch_with_outside_pixel() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let white = Colour { r: 255, g: 255, b: 255 };
        let pixels = [
            ColouredPixel { point: Point { x: 0, y: 0 }, colour: white },
            ColouredPixel { point: Point { x: 2, y: 0 }, colour: white },
        ];

        let result = buffer.write_pixels(&pixels);

        assert!(matches!(result, Err(PixelBufferError::PixelOutsideBounds { .. })));
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }
}
