//! In-place BT.709 grayscale kernels over raw RGBA8888 bytes.

use crate::error::{FilterError, Result};

const BYTES_PER_PIXEL: usize = 4;

/// ITU-R BT.709 luma for one pixel, truncated toward zero.
///
/// The weighted sum is evaluated in `f64` and narrowed with a truncating `as`
/// cast, NOT rounded: white is 254, not 255, because the weighted sum for
/// (255,255,255) lands fractionally below 255.0 in IEEE double.
#[inline]
pub fn luma_bt709(r: u8, g: u8, b: u8) -> u8 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) as u8
}

/// Convert the first `width * height` RGBA pixels of `data` to grayscale,
/// in place.
///
/// Each pixel's r/g/b bytes are replaced by its [`luma_bt709`] value; the
/// alpha byte is left untouched, as are all bytes at and beyond
/// `width * height * 4`. A zero `width` or `height` is a successful no-op.
///
/// Fails with [`FilterError::DimensionsOutOfRange`] when
/// `width * height * 4` exceeds `data.len()` (or overflows), without touching
/// a single byte.
pub fn grayscale_in_place(data: &mut [u8], width: u32, height: u32) -> Result<()> {
    // u32 * u32 cannot overflow u64; only the *4 needs a checked multiply.
    let pixel_count = u64::from(width) * u64::from(height);
    let byte_len = pixel_count
        .checked_mul(BYTES_PER_PIXEL as u64)
        .filter(|&len| len <= data.len() as u64)
        .ok_or(FilterError::DimensionsOutOfRange {
            width,
            height,
            capacity: data.len(),
        })?;

    convert_region(&mut data[..byte_len as usize]);
    Ok(())
}

/// Convert pixels with index in `[start_pixel, end_pixel)` to grayscale,
/// in place.
///
/// Ranged variant of [`grayscale_in_place`] so a host can shard one frame
/// across workers, each converting a disjoint pixel range. An empty range
/// (`start_pixel >= end_pixel`) is a successful no-op.
pub fn grayscale_range_in_place(data: &mut [u8], start_pixel: u32, end_pixel: u32) -> Result<()> {
    if start_pixel >= end_pixel {
        return Ok(());
    }

    let end_byte = u64::from(end_pixel)
        .checked_mul(BYTES_PER_PIXEL as u64)
        .filter(|&end| end <= data.len() as u64)
        .ok_or(FilterError::RangeOutOfBounds {
            start_pixel,
            end_pixel,
            capacity: data.len(),
        })?;
    let start_byte = u64::from(start_pixel) * BYTES_PER_PIXEL as u64;

    convert_region(&mut data[start_byte as usize..end_byte as usize]);
    Ok(())
}

fn convert_region(region: &mut [u8]) {
    for px in region.chunks_exact_mut(BYTES_PER_PIXEL) {
        let v = luma_bt709(px[0], px[1], px[2]);
        px[0] = v;
        px[1] = v;
        px[2] = v;
    }
}
