//! Error type for kernel validation.

use std::fmt;

/// Error type for malformed diffusion kernels.
///
/// Returned by [`Kernel::validate()`](super::Kernel::validate) before any
/// pixel is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The weight table has no rows or a zero-width first row
    EmptyTable,
    /// A row has a different width than row 0
    RaggedRow {
        /// Index of the offending row
        row: usize,
    },
    /// The anchor column does not exist in row 0
    AnchorOutOfRange {
        /// Configured anchor column
        anchor: usize,
        /// Width of the weight table
        width: usize,
    },
    /// Every weight is zero
    NoWeights,
    /// Divisor is zero, negative, or not finite
    InvalidDivisor(f64),
    /// Every nonzero row-0 weight sits on or left of the anchor, so the
    /// scan row only points at already quantized pixels
    WeightBehindAnchor {
        /// Column of the first nonzero row-0 weight
        col: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::EmptyTable => write!(f, "kernel weight table is empty"),
            KernelError::RaggedRow { row } => {
                write!(f, "kernel row {} has a different width than row 0", row)
            }
            KernelError::AnchorOutOfRange { anchor, width } => {
                write!(
                    f,
                    "kernel anchor column {} is outside a table of width {}",
                    anchor, width
                )
            }
            KernelError::NoWeights => write!(f, "kernel has no nonzero weights"),
            KernelError::InvalidDivisor(divisor) => {
                write!(f, "kernel divisor must be positive, got {}", divisor)
            }
            KernelError::WeightBehindAnchor { col } => {
                write!(
                    f,
                    "kernel row 0 has no weight right of the anchor (first weight at column {})",
                    col
                )
            }
        }
    }
}

impl std::error::Error for KernelError {}
