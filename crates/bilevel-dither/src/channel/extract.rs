//! Channel extraction and grayscale conversion.

use super::{check_rgba, RGBA_STRIDE};
use crate::api::DitherError;
use crate::buffer::IntensityBuffer;

/// One colour channel of an RGBA raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Red, green, blue.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Widen an 8-bit sample to 16 bits and premultiply by alpha.
#[inline]
fn premultiplied16(sample: u8, alpha: u8) -> u32 {
    let s = sample as u32 * 0x101;
    let a = alpha as u32 * 0x101;
    s * a / 0xffff
}

/// Copy one premultiplied channel of `rgba` into an [`IntensityBuffer`].
///
/// # Errors
///
/// [`DitherError::EmptyImage`] or [`DitherError::DimensionMismatch`] if the
/// raster does not match `width x height`.
pub fn extract_channel(
    rgba: &[u8],
    width: usize,
    height: usize,
    channel: Channel,
) -> Result<IntensityBuffer, DitherError> {
    check_rgba(rgba, width, height)?;
    let offset = channel.offset();
    let samples = rgba
        .chunks_exact(RGBA_STRIDE)
        .map(|px| (premultiplied16(px[offset], px[3]) >> 8) as u8)
        .collect();
    IntensityBuffer::new(width, height, samples)
}

/// Convert `rgba` to a luma [`IntensityBuffer`].
///
/// Uses 16-bit fixed-point BT.601 weights:
///
/// ```text
/// Y = (19595 R + 38470 G + 7471 B + 2^15) >> 24
/// ```
///
/// on premultiplied 16-bit samples, yielding an 8-bit result.
pub fn to_luma(rgba: &[u8], width: usize, height: usize) -> Result<IntensityBuffer, DitherError> {
    check_rgba(rgba, width, height)?;
    let samples = rgba
        .chunks_exact(RGBA_STRIDE)
        .map(|px| {
            let r = premultiplied16(px[0], px[3]);
            let g = premultiplied16(px[1], px[3]);
            let b = premultiplied16(px[2], px[3]);
            ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
        })
        .collect();
    IntensityBuffer::new(width, height, samples)
}
