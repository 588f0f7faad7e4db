//! Interactive console session.
//!
//! Asks for an image path and decodes it straight away, then asks for a mode
//! and a method and runs a [`DitherJob`]. Reader and writer are generic so
//! the flow can be driven from tests.

use crate::error::RenderError;
use crate::models::selection::{parse_algorithm, resolve_mode, DEFAULT_ALGORITHM, METHOD_MENU};
use crate::models::AppConfig;
use crate::rendering::decode_file;
use crate::services::DitherJob;
use bilevel_dither::{ColorMode, DitherAlgorithm};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Mode and method the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptAnswers {
    pub mode: ColorMode,
    pub algorithm: DitherAlgorithm,
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for the mode and the method.
pub fn ask_choices<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<PromptAnswers> {
    let mode = ask(input, out, "Choose dithering mode (1 for color, 2 for mono): ")?;

    writeln!(out, "Choose a dithering method:")?;
    for (i, (_, label)) in METHOD_MENU.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, label)?;
    }
    let choice = ask(input, out, "Enter your choice: ")?;

    let algorithm = match parse_algorithm(&choice) {
        Some(algorithm) => algorithm,
        None => {
            writeln!(out, "Invalid choice. Using Atkinson dithering by default.")?;
            tracing::warn!(choice = %choice, "Invalid method choice");
            DEFAULT_ALGORITHM
        }
    };

    Ok(PromptAnswers {
        mode: resolve_mode(&mode),
        algorithm,
    })
}

/// Console line for a failure while opening or decoding the input.
fn input_failure(error: &RenderError) -> String {
    match error {
        RenderError::Io(e) => format!("Error opening image file: {e}"),
        RenderError::UnsupportedFormat(_) => {
            "Unsupported image format. Please use a JPEG or PNG image.".to_string()
        }
        other => other.to_string(),
    }
}

/// Console line for a failure while producing the output.
fn output_failure(error: &RenderError) -> String {
    match error {
        RenderError::Io(e) => format!("Error creating output file: {e}"),
        RenderError::PngEncode(e) => format!("Error encoding image: {e}"),
        other => other.to_string(),
    }
}

/// Run a full interactive session and return the written path.
///
/// A bad input file ends the session before the mode is asked for.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &AppConfig,
) -> Result<PathBuf, RenderError> {
    let path = PathBuf::from(ask(input, out, "Enter the path to the image file: ")?);
    let raster = match decode_file(&path) {
        Ok(raster) => raster,
        Err(e) => {
            writeln!(out, "{}", input_failure(&e))?;
            return Err(e);
        }
    };

    let answers = ask_choices(input, out)?;
    let job = DitherJob {
        output_dir: config.output_dir.clone(),
        parallel: config.parallel_channels,
        ..DitherJob::new(path, answers.algorithm, answers.mode)
    };

    match job.write_raster(&raster) {
        Ok(written) => {
            writeln!(out, "Dithered image saved as {}", written.display())?;
            Ok(written)
        }
        Err(e) => {
            writeln!(out, "{}", output_failure(&e))?;
            Err(e)
        }
    }
}
