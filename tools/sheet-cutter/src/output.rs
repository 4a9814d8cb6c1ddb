//! Rect literal output

use std::io::{self, Write};

use crate::rect::SpriteRect;

/// Write one rect literal per line. Returns the number of rects written.
pub fn write_rects<W, I>(writer: &mut W, rects: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = SpriteRect>,
{
    let mut count = 0;
    for rect in rects {
        writeln!(writer, "{}", rect)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_line_per_rect() {
        let rects = [
            SpriteRect {
                x: 0,
                y: 0,
                w: 16,
                h: 24,
            },
            SpriteRect {
                x: 3,
                y: 30,
                w: 8,
                h: 8,
            },
        ];

        let mut out = Vec::new();
        let count = write_rects(&mut out, rects).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{ .x = 0, .y = 0, .w = 16, .h = 24, },\n\
             { .x = 3, .y = 30, .w = 8, .h = 8, },\n"
        );
    }

    #[test]
    fn test_no_rects_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(write_rects(&mut out, std::iter::empty::<SpriteRect>()).unwrap(), 0);
        assert!(out.is_empty());
    }
}
