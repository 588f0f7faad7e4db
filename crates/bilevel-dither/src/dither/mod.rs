//! Two-level error diffusion dithering.
//!
//! # Architecture
//!
//! There is a single engine, [`diffuse()`], parameterized by a [`Kernel`].
//! The named methods in [`DitherAlgorithm`] are table lookups into the kernel
//! catalog, not separate implementations. Adding a method means adding a
//! kernel constant and an enum variant; the engine does not change.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::{diffuse, IntensityBuffer, FLOYD_STEINBERG};
//!
//! let input = IntensityBuffer::new(2, 1, vec![100, 100]).unwrap();
//! let output = diffuse(&input, &FLOYD_STEINBERG).unwrap();
//!
//! assert_eq!(output.samples(), &[0, 255]);
//! ```

mod error;
mod kernel;

pub use error::KernelError;
pub use kernel::*;

use std::fmt;

use crate::api::DitherError;
use crate::buffer::IntensityBuffer;

/// Samples below this value quantize to black.
pub const THRESHOLD: u8 = 128;

/// Quantize a sample to the nearest of the two output levels.
///
/// This is the only place that knows the output has two levels; the engine
/// calls it and never inspects the levels itself.
#[inline]
pub fn quantize(sample: u8) -> u8 {
    if sample < THRESHOLD {
        0
    } else {
        255
    }
}

/// Core error diffusion pass.
///
/// Validates `kernel`, copies `input` into a private working buffer and scans
/// it top-to-bottom, left-to-right. Each cell is quantized from its current
/// working value (including error received from earlier cells), and the
/// difference `old - new` is spread to the kernel's neighbors:
///
/// ```text
/// neighbor = clamp(neighbor + error * (weight / divisor), 0, 255)
/// ```
///
/// truncated toward zero when stored back as a `u8`. Neighbors outside the
/// buffer are skipped.
///
/// # Errors
///
/// Returns [`DitherError::InvalidKernel`] if the kernel fails validation. In
/// that case no work is done.
pub fn diffuse(input: &IntensityBuffer, kernel: &Kernel) -> Result<IntensityBuffer, DitherError> {
    kernel.validate()?;

    let width = input.width();
    let height = input.height();

    // weight / divisor first, then scaled by the error
    let entries: Vec<(isize, usize, f64)> = kernel
        .entries()
        .map(|(dx, dy, w)| (dx, dy, w as f64 / kernel.divisor))
        .collect();

    let mut work = input.clone();

    for y in 0..height {
        for x in 0..width {
            let old = work.get(x, y);
            let new = quantize(old);
            work.set(x, y, new);

            let error = old as i32 - new as i32;
            if error == 0 {
                continue;
            }

            for &(dx, dy, factor) in &entries {
                let ny = y + dy;
                if ny >= height {
                    continue;
                }
                let Some(nx) = x.checked_add_signed(dx).filter(|&nx| nx < width) else {
                    continue;
                };
                let neighbor = work.get(nx, ny) as f64 + error as f64 * factor;
                work.set(nx, ny, neighbor.clamp(0.0, 255.0) as u8);
            }
        }
    }

    Ok(work)
}

/// Named dithering method.
///
/// Each variant selects one kernel from the catalog. [`Atkinson`] is the
/// default.
///
/// [`Atkinson`]: DitherAlgorithm::Atkinson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Atkinson error diffusion (62.5% propagation, 5 neighbors).
    #[default]
    Atkinson,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    FloydSteinberg,

    /// Shtuki (Stucki) error diffusion (100% propagation, 12 neighbors).
    Shtuki,

    /// Sierra Lite error diffusion (100% propagation, 3 neighbors).
    SierraLite,
}

impl DitherAlgorithm {
    /// Every method, in menu order.
    pub const ALL: [DitherAlgorithm; 4] = [
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Shtuki,
        DitherAlgorithm::SierraLite,
    ];

    /// The diffusion kernel for this method.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherAlgorithm::Atkinson => &ATKINSON,
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitherAlgorithm::Shtuki => &SHTUKI,
            DitherAlgorithm::SierraLite => &SIERRA_LITE,
        }
    }

    /// Stable lowercase name, e.g. `"floyd_steinberg"`.
    pub fn name(self) -> &'static str {
        self.kernel().name
    }

    /// Look up a method by name.
    ///
    /// Matching ignores case and treats `-` and `_` alike, so
    /// `"Floyd-Steinberg"` and `"floyd_steinberg"` both resolve. Returns
    /// `None` for unknown names; choosing a fallback is up to the caller.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|algo| algo.name() == normalized)
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether to dither each RGB channel or a single luma channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Dither red, green and blue independently with the same kernel.
    Color,
    /// Convert to grayscale and dither once.
    #[default]
    Mono,
}

impl ColorMode {
    /// `"color"` or `"mono"`.
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Color => "color",
            ColorMode::Mono => "mono",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
