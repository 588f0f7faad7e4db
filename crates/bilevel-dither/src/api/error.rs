//! Unified error type for the bilevel-dither public API.
//!
//! [`DitherError`] covers every configuration error the crate can report.
//! All of them are raised before any pixel is diffused.

use crate::dither::KernelError;
use std::fmt;

/// Unified error type for the bilevel-dither public API.
///
/// # Example
///
/// ```
/// use bilevel_dither::{DitherError, IntensityBuffer};
///
/// let result = IntensityBuffer::new(0, 10, Vec::new());
/// assert_eq!(result, Err(DitherError::EmptyImage));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DitherError {
    /// Width or height is zero
    EmptyImage,
    /// Pixel data length does not match the stated dimensions
    DimensionMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// The diffusion kernel failed validation
    InvalidKernel(KernelError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::EmptyImage => write!(f, "image has zero width or height"),
            DitherError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            DitherError::InvalidKernel(err) => write!(f, "invalid kernel: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::InvalidKernel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KernelError> for DitherError {
    fn from(err: KernelError) -> Self {
        DitherError::InvalidKernel(err)
    }
}
