//! Error diffusion kernel definitions.
//!
//! A kernel is a small weight table plus a divisor. Row 0 of the table is the
//! row being scanned; the `anchor` column in that row is the pixel currently
//! being quantized. Each nonzero weight at `(row, col)` sends
//! `error * weight / divisor` to the pixel at offset
//! `(col - anchor, row)` from the current one. In row 0 only weights strictly
//! right of the anchor take part; the rest of that row is ignored.

use super::KernelError;

/// An error diffusion kernel.
///
/// The anchor is stored explicitly instead of being inferred from the table
/// width, so tables of different shapes can share one engine. Row-0 weights
/// at or left of the anchor would land on pixels that are already final, so
/// they are skipped.
///
/// # Error Propagation
///
/// The total error propagated is the sum of the weights that take part,
/// over the divisor. Most kernels propagate 100% of error; Atkinson's table
/// keeps a weight on the anchor itself, so it passes on only 5/8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Stable name used for selection and output file naming.
    pub name: &'static str,

    /// Row-major weight table. `weights[0]` is the current scan row.
    pub weights: &'static [&'static [u8]],

    /// Normalizing divisor, normally the sum of all weights.
    pub divisor: f64,

    /// Column of `weights[0]` that corresponds to the current pixel.
    pub anchor: usize,
}

/// Atkinson dithering kernel.
///
/// Anchored at column 2 of a 4-wide table. The weight under the anchor is
/// skipped, leaving 5 neighbors and 62.5% total propagation (5/8).
///
/// ```text
///    .   .  (X)  1
///    1   1   1   .
///    .   1   .   .
/// ```
pub const ATKINSON: Kernel = Kernel {
    name: "atkinson",
    weights: &[&[0, 0, 1, 1], &[1, 1, 1, 0], &[0, 1, 0, 0]],
    divisor: 8.0,
    anchor: 2,
};

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "floyd_steinberg",
    weights: &[&[0, 0, 7], &[3, 5, 1]],
    divisor: 16.0,
    anchor: 1,
};

/// Shtuki (Stucki) dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (42/42).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const SHTUKI: Kernel = Kernel {
    name: "shtuki",
    weights: &[&[0, 0, 0, 8, 4], &[2, 4, 8, 4, 2], &[1, 2, 4, 2, 1]],
    divisor: 42.0,
    anchor: 2,
};

/// Sierra Lite dithering kernel.
///
/// ```text
///        X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    name: "sierra_lite",
    weights: &[&[0, 0, 2], &[1, 1, 0]],
    divisor: 4.0,
    anchor: 1,
};

impl Kernel {
    /// Check the kernel's structural invariants.
    ///
    /// Called by the engine before any pixel is touched, so a malformed
    /// kernel never produces a partially diffused buffer.
    pub fn validate(&self) -> Result<(), KernelError> {
        let Some(first) = self.weights.first() else {
            return Err(KernelError::EmptyTable);
        };
        let width = first.len();
        if width == 0 {
            return Err(KernelError::EmptyTable);
        }
        if let Some(row) = self.weights.iter().position(|r| r.len() != width) {
            return Err(KernelError::RaggedRow { row });
        }
        if self.anchor >= width {
            return Err(KernelError::AnchorOutOfRange {
                anchor: self.anchor,
                width,
            });
        }
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Err(KernelError::InvalidDivisor(self.divisor));
        }
        if self.weights.iter().all(|row| row.iter().all(|&w| w == 0)) {
            return Err(KernelError::NoWeights);
        }
        // A scan row that only points backwards is malformed.
        let ahead = first[self.anchor + 1..].iter().any(|&w| w != 0);
        if !ahead {
            if let Some(col) = first.iter().position(|&w| w != 0) {
                return Err(KernelError::WeightBehindAnchor { col });
            }
        }
        Ok(())
    }

    /// Iterate the weights that take part as `(dx, dy, weight)` relative to
    /// the anchor. Zero weights and row-0 weights at or left of the anchor
    /// are left out.
    pub fn entries(&self) -> impl Iterator<Item = (isize, usize, u8)> + '_ {
        let anchor = self.anchor as isize;
        self.weights.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .map(move |(col, &w)| (col as isize - anchor, dy, w))
                .filter(|&(dx, dy, w)| w != 0 && (dy > 0 || dx > 0))
        })
    }

    /// Sum of the weights that take part.
    pub fn weight_sum(&self) -> u32 {
        self.entries().map(|(_, _, w)| w as u32).sum()
    }

    /// Fraction of the quantization error passed on to neighbors.
    pub fn propagation(&self) -> f64 {
        self.weight_sum() as f64 / self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: [Kernel; 4] = [ATKINSON, FLOYD_STEINBERG, SHTUKI, SIERRA_LITE];

    #[test]
    fn test_catalog_is_valid() {
        for kernel in CATALOG {
            assert_eq!(kernel.validate(), Ok(()), "{} should validate", kernel.name);
        }
    }

    #[test]
    fn test_atkinson_propagation() {
        assert_eq!(ATKINSON.weight_sum(), 5, "Atkinson anchor weight must be skipped");
        assert!(
            (ATKINSON.propagation() - 0.625).abs() < f64::EPSILON,
            "Atkinson should propagate 5/8 of error"
        );
    }

    #[test]
    fn test_full_propagation_kernels() {
        for kernel in [FLOYD_STEINBERG, SHTUKI, SIERRA_LITE] {
            assert_eq!(
                kernel.weight_sum() as f64,
                kernel.divisor,
                "{} weights should sum to its divisor",
                kernel.name
            );
        }
    }

    #[test]
    fn test_atkinson_entries() {
        let entries: Vec<_> = ATKINSON.entries().collect();
        assert_eq!(
            entries,
            vec![(1, 0, 1), (-2, 1, 1), (-1, 1, 1), (0, 1, 1), (-1, 2, 1)]
        );
    }

    #[test]
    fn test_floyd_steinberg_entries() {
        let entries: Vec<_> = FLOYD_STEINBERG.entries().collect();
        assert_eq!(entries, vec![(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)]);
    }

    #[test]
    fn test_shtuki_entries() {
        let entries: Vec<_> = SHTUKI.entries().collect();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0], (1, 0, 8));
        assert_eq!(entries[1], (2, 0, 4));
        assert_eq!(entries[2], (-2, 1, 2));
        assert_eq!(entries[11], (2, 2, 1));
    }

    #[test]
    fn test_row_zero_entries_are_ahead_of_anchor() {
        for kernel in CATALOG {
            for (dx, dy, _) in kernel.entries() {
                if dy == 0 {
                    assert!(dx > 0, "{} has a row-0 weight at dx={}", kernel.name, dx);
                }
            }
        }
    }

    #[test]
    fn test_rejects_weight_left_of_anchor() {
        let kernel = Kernel {
            name: "backwards",
            weights: &[&[7, 0, 0], &[1, 5, 3]],
            divisor: 16.0,
            anchor: 2,
        };
        assert_eq!(
            kernel.validate(),
            Err(KernelError::WeightBehindAnchor { col: 0 })
        );
    }

    #[test]
    fn test_rejects_weight_only_on_anchor() {
        let kernel = Kernel {
            name: "stuck",
            weights: &[&[0, 0, 4, 0], &[1, 2, 1, 0]],
            divisor: 8.0,
            anchor: 2,
        };
        assert_eq!(
            kernel.validate(),
            Err(KernelError::WeightBehindAnchor { col: 2 })
        );
    }

    #[test]
    fn test_anchor_weight_skipped_when_row_points_ahead() {
        let kernel = Kernel {
            name: "mixed",
            weights: &[&[3, 0, 5, 7], &[0, 1, 0, 0]],
            divisor: 16.0,
            anchor: 2,
        };
        assert_eq!(kernel.validate(), Ok(()));
        assert_eq!(kernel.entries().collect::<Vec<_>>(), vec![(1, 0, 7), (-1, 1, 1)]);
    }

    #[test]
    fn test_lower_rows_only_is_valid() {
        let kernel = Kernel {
            name: "down",
            weights: &[&[0, 0, 0], &[1, 2, 1]],
            divisor: 4.0,
            anchor: 1,
        };
        assert_eq!(kernel.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let kernel = Kernel {
            name: "zero",
            weights: &[&[0, 0, 0], &[0, 0, 0]],
            divisor: 1.0,
            anchor: 1,
        };
        assert_eq!(kernel.validate(), Err(KernelError::NoWeights));
    }

    #[test]
    fn test_rejects_bad_divisor() {
        for divisor in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let kernel = Kernel {
                divisor,
                ..SIERRA_LITE
            };
            assert!(
                matches!(kernel.validate(), Err(KernelError::InvalidDivisor(_))),
                "divisor {} should be rejected",
                divisor
            );
        }
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let kernel = Kernel {
            name: "ragged",
            weights: &[&[0, 0, 7], &[3, 5]],
            divisor: 15.0,
            anchor: 1,
        };
        assert_eq!(kernel.validate(), Err(KernelError::RaggedRow { row: 1 }));
    }

    #[test]
    fn test_rejects_empty_table_and_bad_anchor() {
        let empty = Kernel {
            name: "empty",
            weights: &[],
            divisor: 1.0,
            anchor: 0,
        };
        assert_eq!(empty.validate(), Err(KernelError::EmptyTable));

        let kernel = Kernel {
            anchor: 3,
            ..FLOYD_STEINBERG
        };
        assert_eq!(
            kernel.validate(),
            Err(KernelError::AnchorOutOfRange { anchor: 3, width: 3 })
        );
    }
}
