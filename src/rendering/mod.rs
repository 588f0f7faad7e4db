//! Image decoding and PNG encoding around the dithering core.

pub mod decode;
pub mod encode;

pub use decode::{decode_bytes, decode_file, ImageFormat, Raster};
pub use encode::encode_png;
