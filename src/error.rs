//! Error type and result alias for the renderer.
//!
//! Geometry and randomness never fail; only canvas allocation, font loading
//! and image output can.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SketchError>;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to parse font '{}': {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
