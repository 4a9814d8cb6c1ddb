//! sheet-cutter library
//!
//! Finds the bounding boxes of sprites on a sprite sheet and formats them as
//! designated-initializer rect literals for inclusion in game source code.
//!
//! Sprites are expected to be separated by fully transparent rows. Every run
//! of rows holding non-transparent pixels (a "band") becomes one rectangle.
//!
//! # Modules
//!
//! - [`grid`] - Read-only alpha access over decoded pixels
//! - [`rect`] - Bounding box accumulator and the emitted rect record
//! - [`extract`] - The band scan itself
//! - [`sheet`] - Sprite sheet loading from disk
//! - [`output`] - Rect literal writer

pub mod error;
pub mod extract;
pub mod grid;
pub mod output;
pub mod rect;
pub mod sheet;

pub use error::SheetError;
pub use extract::{ExtractOptions, Sprites, extract, extract_with};
pub use grid::{AlphaGrid, PixelGrid};
pub use output::write_rects;
pub use rect::{BoundingBox, SpriteRect};
pub use sheet::load_sheet;
