//! Test images written to disk.

use std::path::{Path, PathBuf};

/// Diagonal RGB gradient, a different ramp per channel.
pub fn gradient(width: u32, height: u32) -> image::RgbImage {
    image::RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / (width - 1).max(1)) as u8;
        let g = (y * 255 / (height - 1).max(1)) as u8;
        let b = ((x + y) * 255 / (width + height)) as u8;
        image::Rgb([r, g, b])
    })
}

/// Write a gradient PNG into `dir` and return its path.
pub fn write_gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Write a gradient JPEG into `dir` and return its path.
pub fn write_gradient_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height)
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Write a uniform gray PNG.
pub fn write_gray_png(dir: &Path, name: &str, width: u32, height: u32, level: u8) -> PathBuf {
    let path = dir.join(name);
    image::GrayImage::from_pixel(width, height, image::Luma([level]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}
