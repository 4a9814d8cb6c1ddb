//! Error types for sheet loading and pixel buffers

use std::path::PathBuf;

/// Errors produced while loading a sprite sheet or wrapping raw pixels.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Failed to load sprite sheet {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("RGBA buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
