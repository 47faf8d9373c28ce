use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn size_to_buffer_len(size: PixelSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, size: PixelSize },
    BoundsMismatch { expected_len: usize, buffer_len: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_len,
                buffer_len,
            } => {
                write!(
                    f,
                    "expected a buffer of {} bytes but got {}",
                    expected_len, buffer_len
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, size.width, size.height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: PixelSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(size: PixelSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_len = size_to_buffer_len(size);

        if expected_len != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_len,
                buffer_len: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains(pixel.x, pixel.y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok((pixel.y as usize * self.size.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
