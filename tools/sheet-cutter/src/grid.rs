//! Read-only pixel access for the band scan
//!
//! The scan only ever asks one question per pixel: is it fully transparent?
//! [`AlphaGrid`] exposes exactly that, so decoded images and hand-built
//! buffers go through the same code path.

use image::RgbaImage;

use crate::error::SheetError;

/// A `width × height` grid of pixels with an alpha channel.
///
/// Coordinates are `(x, y)` with the origin at the top-left corner.
/// Callers must keep `x < width()` and `y < height()`.
pub trait AlphaGrid {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Alpha of the pixel at `(x, y)`. 0 is fully transparent.
    fn alpha(&self, x: u32, y: u32) -> u8;
}

impl AlphaGrid for RgbaImage {
    #[inline]
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    #[inline]
    fn height(&self) -> u32 {
        self.dimensions().1
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[3]
    }
}

/// Owned row-major RGBA8 pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelGrid {
    /// Create a fully transparent grid
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    /// Wrap a tightly packed RGBA8 byte buffer (4 bytes per pixel, row-major)
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SheetError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(SheetError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// RGBA value at `(x, y)`
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx] = rgba;
    }

    /// Fill the `w × h` rectangle whose top-left corner is `(x, y)`
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, rgba: [u8; 4]) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py, rgba);
            }
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl AlphaGrid for PixelGrid {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        self.get(x, y)[3]
    }
}

impl<G: AlphaGrid + ?Sized> AlphaGrid for &G {
    #[inline]
    fn width(&self) -> u32 {
        G::width(*self)
    }

    #[inline]
    fn height(&self) -> u32 {
        G::height(*self)
    }

    #[inline]
    fn alpha(&self, x: u32, y: u32) -> u8 {
        G::alpha(*self, x, y)
    }
}
