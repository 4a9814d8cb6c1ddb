//! Test sprite sheet generation
//!
//! Builds small RGBA sheets with the image crate for integration testing.

use std::path::Path;

use image::{Rgba, RgbaImage};

/// Solid rectangle to paint onto a sheet: (x, y, w, h)
pub type Block = (u32, u32, u32, u32);

/// Save a `width × height` transparent sheet with opaque `blocks` painted on it
pub fn generate_sheet_png(
    path: &Path,
    width: u32,
    height: u32,
    blocks: &[Block],
) -> image::ImageResult<()> {
    let mut img = RgbaImage::new(width, height);
    for &(x, y, w, h) in blocks {
        for py in y..y + h {
            for px in x..x + w {
                // Vary the colour so sprites are not flat fills
                let shade = ((px * 37 + py * 11) % 256) as u8;
                img.put_pixel(px, py, Rgba([shade, 255 - shade, 128, 255]));
            }
        }
    }
    img.save(path)
}

/// Three sprites stacked vertically, each followed by a transparent gap
pub fn generate_stacked_sheet(path: &Path) -> image::ImageResult<()> {
    generate_sheet_png(
        path,
        32,
        40,
        &[(4, 1, 16, 8), (0, 12, 32, 10), (10, 26, 6, 12)],
    )
}

/// Fully opaque RGB (no alpha) image
pub fn generate_opaque_rgb_png(path: &Path) -> image::ImageResult<()> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
    img.save(path)
}
