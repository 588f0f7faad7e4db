//! DitheredImage: the canonical output of the dithering pipeline.

use crate::api::DitherError;
use crate::buffer::IntensityBuffer;
use crate::channel::compose_rgba;
use crate::dither::ColorMode;

/// The result of dithering an image.
///
/// Every sample in every buffer is exactly 0 or 255, and all buffers share
/// the input's dimensions.
///
/// # Example
///
/// ```
/// use bilevel_dither::{DitheredImage, IntensityBuffer};
///
/// let luma = IntensityBuffer::new(2, 1, vec![0, 255]).unwrap();
/// let image = DitheredImage::Mono(luma);
///
/// assert_eq!(image.to_rgba().unwrap(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitheredImage {
    /// Single bilevel luma channel.
    Mono(IntensityBuffer),
    /// Three independently dithered channels.
    Color {
        red: IntensityBuffer,
        green: IntensityBuffer,
        blue: IntensityBuffer,
    },
}

impl DitheredImage {
    /// Which mode produced this image.
    pub fn mode(&self) -> ColorMode {
        match self {
            DitheredImage::Mono(_) => ColorMode::Mono,
            DitheredImage::Color { .. } => ColorMode::Color,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.primary().width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.primary().height()
    }

    /// The luma buffer, if this is a mono image.
    pub fn luma(&self) -> Option<&IntensityBuffer> {
        match self {
            DitheredImage::Mono(luma) => Some(luma),
            DitheredImage::Color { .. } => None,
        }
    }

    /// `true` if every sample of every channel is 0 or 255.
    pub fn is_bilevel(&self) -> bool {
        match self {
            DitheredImage::Mono(luma) => luma.is_bilevel(),
            DitheredImage::Color { red, green, blue } => {
                red.is_bilevel() && green.is_bilevel() && blue.is_bilevel()
            }
        }
    }

    /// Opaque RGBA8 bytes, 4 per pixel, row-major.
    ///
    /// Mono images replicate luma into R, G and B.
    ///
    /// # Errors
    ///
    /// [`DitherError::DimensionMismatch`] if a hand-built colour image has
    /// channels of different sizes.
    pub fn to_rgba(&self) -> Result<Vec<u8>, DitherError> {
        match self {
            DitheredImage::Mono(luma) => compose_rgba(luma, luma, luma),
            DitheredImage::Color { red, green, blue } => compose_rgba(red, green, blue),
        }
    }

    fn primary(&self) -> &IntensityBuffer {
        match self {
            DitheredImage::Mono(luma) => luma,
            DitheredImage::Color { red, .. } => red,
        }
    }
}
