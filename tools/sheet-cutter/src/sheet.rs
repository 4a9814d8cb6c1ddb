//! Sprite sheet loading (PNG/JPG -> RGBA8)

use std::path::Path;

use image::RgbaImage;

use crate::error::SheetError;

/// Decode the image at `path` into an RGBA8 pixel grid
///
/// Formats without an alpha channel come back fully opaque.
pub fn load_sheet(path: &Path) -> Result<RgbaImage, SheetError> {
    let img = image::open(path).map_err(|source| SheetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!("Loaded sprite sheet {:?}: {}x{}", path, width, height);

    Ok(rgba)
}
