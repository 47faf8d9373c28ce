//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_size::PixelSize;

const RGB_BYTES: usize = 3;
const RGBA_BYTES: usize = 4;

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Panics
/// Panics if `src` is not a multiple of 3 or if `dst` does not hold the
/// same number of pixels.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % RGB_BYTES == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / RGB_BYTES) * RGBA_BYTES;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(RGB_BYTES).zip(dst.chunks_exact_mut(RGBA_BYTES)) {
        dst_pixel[..RGB_BYTES].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

/// Rescales an RGB image of `src_size` into an RGBA frame of `dst_size`.
///
/// Each destination pixel covers a rectangle of source pixels. When that
/// rectangle spans several source pixels they are averaged, otherwise the
/// nearest source pixel is taken. Equal sizes reduce to a plain copy.
///
/// # Panics
/// Panics if either buffer length disagrees with its size.
pub fn resample_rgb_to_rgba(src: &[u8], src_size: PixelSize, dst: &mut [u8], dst_size: PixelSize) {
    assert_eq!(
        src.len(),
        src_size.pixel_count() * RGB_BYTES,
        "src length {} does not match {}x{}",
        src.len(),
        src_size.width,
        src_size.height
    );
    assert_eq!(
        dst.len(),
        dst_size.pixel_count() * RGBA_BYTES,
        "dst length {} does not match {}x{}",
        dst.len(),
        dst_size.width,
        dst_size.height
    );

    if dst_size.is_empty() {
        return;
    }

    if src_size.is_empty() {
        for pixel in dst.chunks_exact_mut(RGBA_BYTES) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
        return;
    }

    if src_size == dst_size {
        copy_rgb_to_rgba(src, dst);
        return;
    }

    let columns = source_spans(src_size.width, dst_size.width);
    let rows = source_spans(src_size.height, dst_size.height);
    let src_stride = src_size.width as usize * RGB_BYTES;

    for (dst_row, &(row_start, row_end)) in dst
        .chunks_exact_mut(dst_size.width as usize * RGBA_BYTES)
        .zip(rows.iter())
    {
        for (dst_pixel, &(col_start, col_end)) in dst_row.chunks_exact_mut(RGBA_BYTES).zip(columns.iter()) {
            let mut sum = [0u64; RGB_BYTES];

            for y in row_start..row_end {
                let row = &src[y * src_stride..(y + 1) * src_stride];
                for x in col_start..col_end {
                    let offset = x * RGB_BYTES;
                    for (channel, total) in sum.iter_mut().enumerate() {
                        *total += u64::from(row[offset + channel]);
                    }
                }
            }

            let count = ((row_end - row_start) * (col_end - col_start)) as u64;
            for (channel, total) in sum.iter().enumerate() {
                dst_pixel[channel] = ((total + count / 2) / count) as u8;
            }
            dst_pixel[3] = 255;
        }
    }
}

/// Half-open source index ranges covered by each destination index.
///
/// Every range holds at least one source index, so upscaling repeats the
/// nearest source pixel.
fn source_spans(src_len: u32, dst_len: u32) -> Vec<(usize, usize)> {
    let src_len = src_len as u64;
    let dst_len = dst_len as u64;

    (0..dst_len)
        .map(|i| {
            let start = i * src_len / dst_len;
            let end = ((i + 1) * src_len / dst_len).max(start + 1).min(src_len);
            let start = start.min(src_len - 1);
            (start as usize, end as usize)
        })
        .collect()
}
