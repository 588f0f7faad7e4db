//! Single-channel intensity buffers.

mod intensity;

pub use intensity::IntensityBuffer;
