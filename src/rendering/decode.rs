//! Decoding JPEG and PNG input into RGBA8 rasters.

use crate::error::RenderError;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

/// Input formats accepted by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Pick a format from the file extension (case-insensitive).
    ///
    /// `.jpg`/`.jpeg` are JPEG and `.png` is PNG; anything else is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// A decoded image: tightly packed RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Open and decode an image file.
///
/// # Errors
///
/// - [`RenderError::Io`] if the file cannot be opened
/// - [`RenderError::UnsupportedFormat`] for extensions other than JPEG/PNG
/// - [`RenderError::Decode`] if the codec rejects the data
pub fn decode_file(path: &Path) -> Result<Raster, RenderError> {
    let file = std::fs::File::open(path)?;
    let format =
        ImageFormat::from_path(path).ok_or_else(|| RenderError::UnsupportedFormat(path.into()))?;
    let raster = decode_reader(BufReader::new(file), format)?;
    tracing::debug!(
        path = %path.display(),
        width = raster.width,
        height = raster.height,
        ?format,
        "Decoded image"
    );
    Ok(raster)
}

/// Decode an in-memory image.
pub fn decode_bytes(data: &[u8], format: ImageFormat) -> Result<Raster, RenderError> {
    decode_reader(Cursor::new(data), format)
}

fn decode_reader<R: BufRead + Seek>(reader: R, format: ImageFormat) -> Result<Raster, RenderError> {
    let decoded = image::ImageReader::with_format(reader, format.codec()).decode()?;
    let rgba = decoded.into_rgba8();
    Ok(Raster {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn png_bytes(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("a/photo.JPG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("photo.jpeg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("scan.Png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::from_path(&PathBuf::from("anim.gif")), None);
        assert_eq!(ImageFormat::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_decode_rgb_png_is_opaque_rgba() {
        let data = png_bytes(2, 1, png::ColorType::Rgb, &[10, 20, 30, 40, 50, 60]);
        let raster = decode_bytes(&data, ImageFormat::Png).unwrap();
        assert_eq!((raster.width, raster.height), (2, 1));
        assert_eq!(raster.rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_decode_grayscale_png() {
        let data = png_bytes(3, 1, png::ColorType::Grayscale, &[0, 128, 255]);
        let raster = decode_bytes(&data, ImageFormat::Png).unwrap();
        assert_eq!(
            raster.rgba,
            vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let result = decode_bytes(b"definitely not a png", ImageFormat::Png);
        assert!(matches!(result, Err(RenderError::Decode(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.bmp");
        std::fs::write(&path, b"BM").unwrap();
        assert!(matches!(
            decode_file(&path),
            Err(RenderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_file(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
