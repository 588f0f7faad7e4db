//! Bilevel - error diffusion dithering for JPEG and PNG images
//!
//! Decoding, encoding, configuration and the interactive session around the
//! `bilevel-dither` core. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
