//! Ditherer builder -- the primary entry point for the crate.
//!
//! [`Ditherer`] wraps kernel selection and the colour/mono dispatch behind a
//! small fluent builder.

use tracing::debug;

use crate::buffer::IntensityBuffer;
use crate::channel::{check_rgba, extract_channel, to_luma, Channel};
use crate::dither::{diffuse, ColorMode, DitherAlgorithm};
use crate::output::DitheredImage;

use super::DitherError;

/// High-level dithering builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`dither_rgba()`](Self::dither_rgba) takes `&self` so one builder can be
///   reused across images
/// - Colour mode runs the engine once per channel with the same kernel.
///   Channels never share error.
///
/// # Example
///
/// ```
/// use bilevel_dither::{ColorMode, DitherAlgorithm, Ditherer};
///
/// let ditherer = Ditherer::new(DitherAlgorithm::FloydSteinberg).mode(ColorMode::Color);
///
/// let rgba = vec![128u8; 4 * 4 * 4];
/// let result = ditherer.dither_rgba(&rgba, 4, 4).unwrap();
///
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.height(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ditherer {
    algorithm: DitherAlgorithm,
    mode: ColorMode,
    parallel: bool,
}

impl Ditherer {
    /// Create a mono ditherer using `algorithm`.
    pub fn new(algorithm: DitherAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Select colour or mono output.
    #[inline]
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Run the three colour channels in parallel.
    ///
    /// Each pass owns its channel's working copy; output is identical to
    /// the sequential path. Has no effect in mono mode, or when the `rayon`
    /// feature (on by default) is disabled.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// The configured method.
    pub fn algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// The configured mode.
    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    /// Dither a tightly packed RGBA8 raster.
    ///
    /// # Errors
    ///
    /// Fails on zero-area input, on a raster whose length is not
    /// `width * height * 4`, or on an invalid kernel. Nothing is returned
    /// unless every channel was fully dithered.
    pub fn dither_rgba(
        &self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<DitheredImage, DitherError> {
        check_rgba(rgba, width, height)?;
        debug!(
            width,
            height,
            algorithm = %self.algorithm,
            mode = %self.mode,
            "Dithering image"
        );

        match self.mode {
            ColorMode::Mono => {
                let luma = to_luma(rgba, width, height)?;
                self.dither_luma(&luma)
            }
            ColorMode::Color => {
                let [red, green, blue] = Channel::RGB;
                let red = extract_channel(rgba, width, height, red)?;
                let green = extract_channel(rgba, width, height, green)?;
                let blue = extract_channel(rgba, width, height, blue)?;

                let [red, green, blue] = if self.parallel {
                    self.diffuse_parallel([&red, &green, &blue])?
                } else {
                    [
                        self.diffuse(&red)?,
                        self.diffuse(&green)?,
                        self.diffuse(&blue)?,
                    ]
                };
                Ok(DitheredImage::Color { red, green, blue })
            }
        }
    }

    /// Dither an existing single-channel buffer.
    pub fn dither_luma(&self, luma: &IntensityBuffer) -> Result<DitheredImage, DitherError> {
        Ok(DitheredImage::Mono(self.diffuse(luma)?))
    }

    fn diffuse(&self, buffer: &IntensityBuffer) -> Result<IntensityBuffer, DitherError> {
        diffuse(buffer, self.algorithm.kernel())
    }

    /// Channel passes on the rayon pool.
    #[cfg(feature = "rayon")]
    fn diffuse_parallel(
        &self,
        [red, green, blue]: [&IntensityBuffer; 3],
    ) -> Result<[IntensityBuffer; 3], DitherError> {
        let kernel = self.algorithm.kernel();
        let (red, (green, blue)) = rayon::join(
            || diffuse(red, kernel),
            || rayon::join(|| diffuse(green, kernel), || diffuse(blue, kernel)),
        );
        Ok([red?, green?, blue?])
    }

    #[cfg(not(feature = "rayon"))]
    fn diffuse_parallel(
        &self,
        [red, green, blue]: [&IntensityBuffer; 3],
    ) -> Result<[IntensityBuffer; 3], DitherError> {
        Ok([self.diffuse(red)?, self.diffuse(green)?, self.diffuse(blue)?])
    }
}
