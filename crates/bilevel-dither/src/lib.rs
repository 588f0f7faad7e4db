//! bilevel-dither: two-level error diffusion dithering
//!
//! This library turns continuous-tone images into black/white (mono) or
//! per-channel black/white (colour) approximations. Each pixel is snapped to
//! 0 or 255 and the rounding error is pushed onto pixels not yet visited, so
//! local averages of the output track the input.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use bilevel_dither::{ColorMode, DitherAlgorithm, Ditherer};
//!
//! let rgba = vec![100u8; 3 * 2 * 4];
//! let result = Ditherer::new(DitherAlgorithm::Atkinson)
//!     .mode(ColorMode::Mono)
//!     .dither_rgba(&rgba, 3, 2)
//!     .unwrap();
//!
//! assert_eq!(result.width(), 3);
//! assert!(result.is_bilevel());
//! ```
//!
//! # Engine
//!
//! [`diffuse()`] is the whole algorithm. It is parameterized by a [`Kernel`]:
//! a weight table, a divisor and an anchor column. The four named methods in
//! [`DitherAlgorithm`] are just entries in the kernel catalog:
//!
//! | Method | Kernel | Divisor | Propagation |
//! |--------|--------|---------|-------------|
//! | `atkinson` (default) | [`ATKINSON`] | 8 | 62.5% |
//! | `floyd_steinberg` | [`FLOYD_STEINBERG`] | 16 | 100% |
//! | `shtuki` | [`SHTUKI`] | 42 | 100% |
//! | `sierra_lite` | [`SIERRA_LITE`] | 4 | 100% |
//!
//! Scanning is strictly top-to-bottom, left-to-right. Neighbor updates are
//! computed in `f64`, saturated to `[0, 255]` and truncated, so output is
//! bit-exact across runs and platforms.
//!
//! # Colour Mode
//!
//! Colour mode splits the image into R, G and B buffers and runs the engine
//! on each with the same kernel. Channels do not exchange error. The three
//! passes share no state and may run on the rayon pool
//! ([`Ditherer::parallel`], `rayon` feature).

pub mod api;
pub mod buffer;
pub mod channel;
pub mod dither;
pub mod output;


pub use api::{DitherError, Ditherer};
pub use buffer::IntensityBuffer;
pub use channel::{compose_rgba, extract_channel, to_luma, Channel};
pub use dither::{
    diffuse, quantize, ColorMode, DitherAlgorithm, Kernel, KernelError, ATKINSON,
    FLOYD_STEINBERG, SHTUKI, SIERRA_LITE,
};
pub use output::DitheredImage;
