//! Band scan over a sprite sheet
//!
//! Rows are scanned top to bottom. Every non-transparent pixel grows the
//! currently open [`BoundingBox`]; the first fully transparent row after some
//! content closes it and yields one [`SpriteRect`].
//!
//! The scan tracks vertical bands only. Two sprites that share any row are
//! reported as a single rect covering both.

use std::iter::FusedIterator;

use crate::grid::AlphaGrid;
use crate::rect::{BoundingBox, SpriteRect};

/// Scan behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Yield a band that is still open when the last row has been scanned.
    ///
    /// Off by default: content touching the bottom edge of the sheet is
    /// dropped unless a fully transparent row follows it.
    pub flush_trailing: bool,
}

/// Scan `grid` with default options
pub fn extract<G: AlphaGrid + ?Sized>(grid: &G) -> Sprites<'_, G> {
    extract_with(grid, ExtractOptions::default())
}

/// Scan `grid` with explicit options
pub fn extract_with<G: AlphaGrid + ?Sized>(grid: &G, options: ExtractOptions) -> Sprites<'_, G> {
    Sprites {
        grid,
        options,
        next_row: 0,
        open: None,
        finished: false,
    }
}

/// Lazy, single-pass iterator over the sprite rects of a sheet
///
/// Each call to `next` scans only as many rows as it takes to close the next
/// band.
#[derive(Debug)]
pub struct Sprites<'a, G: ?Sized> {
    grid: &'a G,
    options: ExtractOptions,
    next_row: u32,
    open: Option<BoundingBox>,
    finished: bool,
}

impl<G: AlphaGrid + ?Sized> Sprites<'_, G> {
    /// Scan one row into the open box. Returns whether the row had content.
    fn scan_row(&mut self, y: u32) -> bool {
        let mut row_has_content = false;

        for x in 0..self.grid.width() {
            if self.grid.alpha(x, y) == 0 {
                continue;
            }
            row_has_content = true;

            match &mut self.open {
                Some(bbox) => bbox.include(x, y),
                None => self.open = Some(BoundingBox::at(x, y)),
            }
        }

        row_has_content
    }
}

impl<G: AlphaGrid + ?Sized> Iterator for Sprites<'_, G> {
    type Item = SpriteRect;

    fn next(&mut self) -> Option<SpriteRect> {
        while self.next_row < self.grid.height() {
            let y = self.next_row;
            self.next_row += 1;

            if self.scan_row(y) {
                continue;
            }

            if let Some(bbox) = self.open.take() {
                let rect = bbox.to_rect();
                tracing::trace!(
                    "Band rows {}..{} closed at row {}: {:?}",
                    bbox.min_y,
                    bbox.max_y,
                    y,
                    rect
                );
                return Some(rect);
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;

        let bbox = self.open.take()?;
        if self.options.flush_trailing {
            tracing::trace!("Flushing trailing band rows {}..{}", bbox.min_y, bbox.max_y);
            Some(bbox.to_rect())
        } else {
            tracing::debug!(
                "Dropping band rows {}..{}: no transparent row below it",
                bbox.min_y,
                bbox.max_y
            );
            None
        }
    }
}

impl<G: AlphaGrid + ?Sized> FusedIterator for Sprites<'_, G> {}
