//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// PNG header fields of a written file.
pub fn png_header(path: &Path) -> (u32, u32, png::ColorType, png::BitDepth) {
    let file = std::fs::File::open(path).unwrap();
    let reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .unwrap();
    let info = reader.info();
    (info.width, info.height, info.color_type, info.bit_depth)
}

/// Assert the file is a 1-bit grayscale PNG of the given size
pub fn assert_mono_png(path: &Path, width: u32, height: u32) {
    assert_eq!(
        png_header(path),
        (width, height, png::ColorType::Grayscale, png::BitDepth::One),
        "Unexpected PNG header for {}",
        path.display()
    );
}

/// Assert the file is an 8-bit RGBA PNG of the given size
pub fn assert_color_png(path: &Path, width: u32, height: u32) {
    assert_eq!(
        png_header(path),
        (width, height, png::ColorType::Rgba, png::BitDepth::Eight),
        "Unexpected PNG header for {}",
        path.display()
    );
}

/// Assert every channel of every pixel is 0 or 255 and alpha is opaque
pub fn assert_bilevel_file(path: &Path) {
    let rgba = image::open(path).unwrap().into_rgba8();
    for (x, y, px) in rgba.enumerate_pixels() {
        assert!(
            px.0[..3].iter().all(|&c| c == 0 || c == 255),
            "Pixel ({x}, {y}) is not bilevel: {:?}",
            px
        );
        assert_eq!(px.0[3], 255, "Pixel ({x}, {y}) is not opaque");
    }
}
