//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] is the result of dithering: either one bilevel luma
//! buffer or three bilevel colour channels, convertible to RGBA on demand.

mod dithered_image;

pub use dithered_image::DitheredImage;
