use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_size::PixelSize;
use std::error::Error;
use std::fmt;

/// Distinguishes a superseded frame from a malformed input.
#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Cancelled> for GeneratePixelBufferError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// Colours row-major `input` values into an RGB buffer of `size`.
///
/// Rows are coloured in parallel; each row polls the cancellation token
/// before it starts.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    size: PixelSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    C: CancelToken,
{
    if input.len() != size.pixel_count() {
        return Err(PixelBufferError::BoundsMismatch {
            expected_len: size.pixel_count() * BYTES_PER_PIXEL,
            buffer_len: input.len() * BYTES_PER_PIXEL,
        }
        .into());
    }

    let row_width = size.width as usize;
    let mut buffer = vec![0u8; size.pixel_count() * BYTES_PER_PIXEL];

    if row_width > 0 {
        buffer
            .par_chunks_mut(row_width * BYTES_PER_PIXEL)
            .zip(input.par_chunks(row_width))
            .try_for_each(|(row_bytes, row_values)| {
                if cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                for (pixel, &value) in row_bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(row_values) {
                    let colour = mapper.map(value);
                    pixel[0] = colour.r;
                    pixel[1] = colour.g;
                    pixel[2] = colour.b;
                }

                Ok(())
            })?;
    }

    Ok(PixelBuffer::from_data(size, buffer)?)
}
