//! Line wrapping for multi-line cells.

use super::fonts::CoreFont;

/// One output row of a wrapped cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    /// Byte range of the row in the encoded text
    pub start: usize,
    /// End of the byte range (exclusive)
    pub end: usize,
    /// Width of the row in 1/1000 em units
    pub width: u32,
    /// Spaces inside the row
    pub spaces: usize,
    /// Row ended at a space because the next word did not fit
    pub soft_break: bool,
}

/// Split encoded text into rows no wider than `max_width` (1/1000 em units).
///
/// Rows break at the last space that fits; the space is dropped. A word
/// wider than a row is cut where it overflows, keeping at least one byte per
/// row. `\n` always ends a row. Text ending in `\n` yields no extra row,
/// while empty text yields a single empty row.
pub fn wrap_text(font: CoreFont, text: &[u8], max_width: u32) -> Vec<WrappedLine> {
    let mut len = text.len();
    if len > 0 && text[len - 1] == b'\n' {
        len -= 1;
    }

    let mut lines = Vec::new();
    let mut sep: Option<(usize, u32, usize)> = None;
    let mut start = 0;
    let mut i = 0;
    let mut width = 0u32;
    let mut spaces = 0usize;
    let mut after_overflow = false;

    while i < len {
        let b = text[i];
        if b == b'\n' {
            lines.push(WrappedLine {
                start,
                end: i,
                width,
                spaces,
                soft_break: false,
            });
            i += 1;
            start = i;
            sep = None;
            width = 0;
            spaces = 0;
            after_overflow = false;
            continue;
        }
        if b == b' ' {
            sep = Some((i, width, spaces));
            spaces += 1;
        }
        width += u32::from(font.byte_width(b));
        if width > max_width {
            match sep {
                None => {
                    if i == start {
                        i += 1;
                    }
                    let row_width = font.text_width(&text[start..i]);
                    lines.push(WrappedLine {
                        start,
                        end: i,
                        width: row_width,
                        spaces,
                        soft_break: false,
                    });
                }
                Some((at, row_width, row_spaces)) => {
                    lines.push(WrappedLine {
                        start,
                        end: at,
                        width: row_width,
                        spaces: row_spaces,
                        soft_break: true,
                    });
                    i = at + 1;
                }
            }
            start = i;
            sep = None;
            width = 0;
            spaces = 0;
            after_overflow = true;
        } else {
            i += 1;
            after_overflow = false;
        }
    }

    // An overflow that consumed the last byte leaves nothing to write.
    if after_overflow && start == len {
        return lines;
    }
    lines.push(WrappedLine {
        start,
        end: i,
        width: font.text_width(&text[start..i]),
        spaces,
        soft_break: false,
    });
    lines
}
