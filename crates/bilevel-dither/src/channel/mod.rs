//! Splitting RGBA rasters into intensity buffers and joining them back.
//!
//! Input rasters are tightly packed RGBA8, row-major, 4 bytes per pixel.
//! Colour samples are alpha-premultiplied before use, so a fully transparent
//! pixel reads as black in every channel and in luma.

mod composite;
mod extract;

pub use composite::compose_rgba;
pub use extract::{extract_channel, to_luma, Channel};

use crate::api::DitherError;

/// Bytes per RGBA8 pixel.
pub const RGBA_STRIDE: usize = 4;

/// Check that `rgba` holds exactly `width * height` RGBA8 pixels.
pub(crate) fn check_rgba(rgba: &[u8], width: usize, height: usize) -> Result<(), DitherError> {
    if width == 0 || height == 0 {
        return Err(DitherError::EmptyImage);
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(RGBA_STRIDE))
        .unwrap_or(usize::MAX);
    if rgba.len() != expected {
        return Err(DitherError::DimensionMismatch {
            expected,
            actual: rgba.len(),
        });
    }
    Ok(())
}
