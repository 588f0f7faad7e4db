//! PNG encoding of dithered images.
//!
//! The output format follows the image mode:
//! - Mono → grayscale color type 0, 1-bit (8 pixels per byte)
//! - Color → RGBA color type 6, 8-bit, fully opaque

use crate::error::RenderError;
use bilevel_dither::DitheredImage;
use std::io::Cursor;

/// Encode a dithered image as PNG bytes.
pub fn encode_png(image: &DitheredImage) -> Result<Vec<u8>, RenderError> {
    let width = dimension(image.width())?;
    let height = dimension(image.height())?;

    match image {
        DitheredImage::Mono(luma) => {
            let packed = pack_bits(luma.samples(), luma.width());
            write_png(
                width,
                height,
                png::ColorType::Grayscale,
                png::BitDepth::One,
                &packed,
            )
        }
        DitheredImage::Color { .. } => {
            let rgba = image.to_rgba()?;
            write_png(
                width,
                height,
                png::ColorType::Rgba,
                png::BitDepth::Eight,
                &rgba,
            )
        }
    }
}

fn dimension(value: usize) -> Result<u32, RenderError> {
    u32::try_from(value)
        .map_err(|_| RenderError::PngEncode(format!("dimension {value} exceeds PNG limits")))
}

/// Encode packed pixel data as a PNG.
fn write_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack bilevel samples into 1-bit PNG rows, MSB first.
///
/// A sample is white when its high bit is set. Each row starts on a fresh
/// byte; trailing bits of the last byte stay zero.
fn pack_bits(samples: &[u8], width: usize) -> Vec<u8> {
    let mut packed = Vec::with_capacity(width.div_ceil(8) * (samples.len() / width));
    for row in samples.chunks(width) {
        packed.extend(row.chunks(8).map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &s)| byte | ((s >> 7) << (7 - i)))
        }));
    }
    packed
}
