//! Bounding box accumulator and the emitted sprite rect

use std::fmt;

/// Running bounding box over the non-transparent pixels of one band
///
/// `max_x` and `max_y` are exclusive, so a box opened on a single pixel
/// already has a width and height of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Open a box around the single pixel at `(x, y)`
    #[inline]
    pub fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + 1,
            max_y: y + 1,
        }
    }

    /// Grow the box to cover the pixel at `(x, y)`
    #[inline]
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x + 1);
        self.max_y = self.max_y.max(y + 1);
    }

    #[inline]
    pub fn to_rect(&self) -> SpriteRect {
        SpriteRect {
            x: self.min_x,
            y: self.min_y,
            w: self.max_x - self.min_x,
            h: self.max_y - self.min_y,
        }
    }
}

/// One sprite's rectangle on the sheet
///
/// Displays as a designated-initializer literal that downstream C/C++ code
/// pastes straight into a rect array:
///
/// ```
/// use sheet_cutter::SpriteRect;
///
/// let rect = SpriteRect { x: 1, y: 2, w: 3, h: 4 };
/// assert_eq!(rect.to_string(), "{ .x = 1, .y = 2, .w = 3, .h = 4, },");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl fmt::Display for SpriteRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ .x = {}, .y = {}, .w = {}, .h = {}, }},",
            self.x, self.y, self.w, self.h
        )
    }
}

impl From<BoundingBox> for SpriteRect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_box() {
        let bbox = BoundingBox::at(5, 7);
        assert_eq!(
            bbox.to_rect(),
            SpriteRect {
                x: 5,
                y: 7,
                w: 1,
                h: 1,
            }
        );
    }

    #[test]
    fn test_include_grows_in_every_direction() {
        let mut bbox = BoundingBox::at(4, 4);
        bbox.include(2, 5);
        bbox.include(6, 4);
        bbox.include(4, 8);
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 2,
                min_y: 4,
                max_x: 7,
                max_y: 9,
            }
        );
        assert_eq!(
            bbox.to_rect(),
            SpriteRect {
                x: 2,
                y: 4,
                w: 5,
                h: 5,
            }
        );
    }

    #[test]
    fn test_include_inside_is_noop() {
        let mut bbox = BoundingBox::at(0, 0);
        bbox.include(3, 3);
        let before = bbox;
        bbox.include(1, 2);
        assert_eq!(bbox, before);
    }

    #[test]
    fn test_display_literal() {
        let rect = SpriteRect {
            x: 0,
            y: 10,
            w: 32,
            h: 48,
        };
        assert_eq!(rect.to_string(), "{ .x = 0, .y = 10, .w = 32, .h = 48, },");
    }

    #[test]
    fn test_display_has_no_leading_zeros() {
        let rect: SpriteRect = BoundingBox::at(100, 9).into();
        assert_eq!(rect.to_string(), "{ .x = 100, .y = 9, .w = 1, .h = 1, },");
    }
}
