//! Recombining dithered channels into an RGBA raster.

use super::RGBA_STRIDE;
use crate::api::DitherError;
use crate::buffer::IntensityBuffer;

/// Interleave three single-channel buffers into opaque RGBA8.
///
/// # Errors
///
/// [`DitherError::DimensionMismatch`] if the buffers differ in size.
pub fn compose_rgba(
    red: &IntensityBuffer,
    green: &IntensityBuffer,
    blue: &IntensityBuffer,
) -> Result<Vec<u8>, DitherError> {
    for other in [green, blue] {
        if !red.same_dimensions(other) {
            return Err(DitherError::DimensionMismatch {
                expected: red.samples().len(),
                actual: other.samples().len(),
            });
        }
    }

    let mut rgba = Vec::with_capacity(red.samples().len() * RGBA_STRIDE);
    for ((&r, &g), &b) in red
        .samples()
        .iter()
        .zip(green.samples())
        .zip(blue.samples())
    {
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    Ok(rgba)
}
