//! IntensityBuffer: a width x height grid of 8-bit samples.

use crate::api::DitherError;

/// A single-channel image, one `u8` sample per pixel in row-major order.
///
/// Construction guarantees a non-empty area and a sample count of exactly
/// `width * height`, so the engine never has to re-check either.
///
/// # Example
///
/// ```
/// use bilevel_dither::IntensityBuffer;
///
/// let buffer = IntensityBuffer::new(2, 1, vec![0, 255]).unwrap();
/// assert_eq!(buffer.get(1, 0), 255);
/// assert!(buffer.is_bilevel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityBuffer {
    samples: Vec<u8>,
    width: usize,
    height: usize,
}

impl IntensityBuffer {
    /// Wrap existing samples.
    ///
    /// # Errors
    ///
    /// - [`DitherError::EmptyImage`] if either dimension is zero
    /// - [`DitherError::DimensionMismatch`] if `samples.len() != width * height`
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::EmptyImage);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(DitherError::DimensionMismatch {
                expected: usize::MAX,
                actual: samples.len(),
            })?;
        if samples.len() != expected {
            return Err(DitherError::DimensionMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// A buffer with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self, DitherError> {
        Self::new(width, height, vec![value; width.saturating_mul(height)])
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at `(x, y)`.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.samples[y * self.width + x]
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.samples[y * self.width + x] = value;
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// `true` if every sample is exactly 0 or 255.
    pub fn is_bilevel(&self) -> bool {
        self.samples.iter().all(|&s| s == 0 || s == 255)
    }

    /// `true` if `other` has the same width and height.
    pub fn same_dimensions(&self, other: &IntensityBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
}
