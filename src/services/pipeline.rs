//! End-to-end dithering job: decode, dither, encode, write.

use crate::error::RenderError;
use crate::rendering::{decode_file, encode_png, Raster};
use bilevel_dither::{ColorMode, DitherAlgorithm, Ditherer};
use std::path::{Path, PathBuf};

/// One input image and how to dither it.
#[derive(Debug, Clone)]
pub struct DitherJob {
    /// JPEG or PNG file to read
    pub input: PathBuf,
    pub algorithm: DitherAlgorithm,
    pub mode: ColorMode,
    /// Directory for the default output name
    pub output_dir: PathBuf,
    /// Explicit output path, overriding `output_dir`
    pub output: Option<PathBuf>,
    /// Dither colour channels in parallel
    pub parallel: bool,
}

impl DitherJob {
    pub fn new(input: impl Into<PathBuf>, algorithm: DitherAlgorithm, mode: ColorMode) -> Self {
        Self {
            input: input.into(),
            algorithm,
            mode,
            output_dir: PathBuf::from("output"),
            output: None,
            parallel: false,
        }
    }

    /// Where the result will be written.
    ///
    /// Defaults to `<output_dir>/output_<method>_<mode>.png`.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.output_dir
                .join(default_file_name(self.algorithm, self.mode))
        })
    }

    /// Run the job and return the path written.
    ///
    /// Nothing is written unless decoding, dithering and encoding all
    /// succeed.
    pub fn run(&self) -> Result<PathBuf, RenderError> {
        let raster = decode_file(&self.input)?;
        self.write_raster(&raster)
    }

    /// Dither an already decoded `raster` and write it to [`output_path`].
    ///
    /// [`output_path`]: Self::output_path
    pub fn write_raster(&self, raster: &Raster) -> Result<PathBuf, RenderError> {
        let dithered = Ditherer::new(self.algorithm)
            .mode(self.mode)
            .parallel(self.parallel)
            .dither_rgba(&raster.rgba, raster.width as usize, raster.height as usize)?;

        let png_bytes = encode_png(&dithered)?;

        let output = self.output_path();
        ensure_parent_dir(&output)?;
        std::fs::write(&output, &png_bytes)?;

        tracing::info!(
            input = %self.input.display(),
            output = %output.display(),
            algorithm = %self.algorithm,
            mode = %self.mode,
            width = raster.width,
            height = raster.height,
            bytes = png_bytes.len(),
            "Dithered image written"
        );
        Ok(output)
    }
}

/// `output_<method>_<mode>.png`
pub fn default_file_name(algorithm: DitherAlgorithm, mode: ColorMode) -> String {
    format!("output_{}_{}.png", algorithm.name(), mode.name())
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
