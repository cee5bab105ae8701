//! Standard Type1 font metrics and WinAnsi text encoding.
//!
//! Reports use the Helvetica family of the 14 standard fonts, which every
//! PDF reader provides, so no font program is embedded. Widths are the
//! Adobe AFM advance widths in 1/1000 em.

use crate::model::FontStyle;
use unicode_normalization::UnicodeNormalization;

/// Helvetica widths for bytes 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Helvetica-Bold widths for bytes 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// WinAnsi bytes 0x80..=0x9F; `None` marks unassigned codes.
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

/// Widths (regular, bold) of WinAnsi glyphs that are not plain or accented
/// Latin letters.
#[rustfmt::skip]
const SYMBOL_WIDTHS: &[(char, u16, u16)] = &[
    ('\u{20AC}', 556, 556), ('\u{201A}', 222, 278), ('\u{0192}', 556, 556),
    ('\u{201E}', 333, 500), ('\u{2026}', 1000, 1000), ('\u{2020}', 556, 556),
    ('\u{2021}', 556, 556), ('\u{02C6}', 333, 333), ('\u{2030}', 1000, 1000),
    ('\u{2039}', 333, 333), ('\u{0152}', 1000, 1000), ('\u{2018}', 222, 278),
    ('\u{2019}', 222, 278), ('\u{201C}', 333, 500), ('\u{201D}', 333, 500),
    ('\u{2022}', 350, 350), ('\u{2013}', 556, 556), ('\u{2014}', 1000, 1000),
    ('\u{02DC}', 333, 333), ('\u{2122}', 1000, 1000), ('\u{203A}', 333, 333),
    ('\u{0153}', 944, 944), ('\u{00A0}', 278, 278), ('\u{00A1}', 333, 333),
    ('\u{00A2}', 556, 556), ('\u{00A3}', 556, 556), ('\u{00A4}', 556, 556),
    ('\u{00A5}', 556, 556), ('\u{00A6}', 260, 280), ('\u{00A7}', 556, 556),
    ('\u{00A8}', 333, 333), ('\u{00A9}', 737, 737), ('\u{00AA}', 370, 370),
    ('\u{00AB}', 556, 556), ('\u{00AC}', 584, 584), ('\u{00AD}', 333, 333),
    ('\u{00AE}', 737, 737), ('\u{00AF}', 333, 333), ('\u{00B0}', 400, 400),
    ('\u{00B1}', 584, 584), ('\u{00B2}', 333, 333), ('\u{00B3}', 333, 333),
    ('\u{00B4}', 333, 333), ('\u{00B5}', 556, 611), ('\u{00B6}', 537, 556),
    ('\u{00B7}', 278, 278), ('\u{00B8}', 333, 333), ('\u{00B9}', 333, 333),
    ('\u{00BA}', 365, 365), ('\u{00BB}', 556, 556), ('\u{00BC}', 834, 834),
    ('\u{00BD}', 834, 834), ('\u{00BE}', 834, 834), ('\u{00BF}', 611, 611),
    ('\u{00C6}', 1000, 1000), ('\u{00D0}', 722, 722), ('\u{00D7}', 584, 584),
    ('\u{00D8}', 778, 778), ('\u{00DE}', 667, 667), ('\u{00DF}', 611, 611),
    ('\u{00E6}', 889, 889), ('\u{00F0}', 556, 611), ('\u{00F7}', 584, 584),
    ('\u{00F8}', 611, 611), ('\u{00FE}', 556, 611),
];

const FALLBACK_WIDTH: u16 = 556;

/// Byte written for characters WinAnsi cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// One of the four Helvetica core fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoreFont {
    /// Helvetica
    Helvetica,
    /// Helvetica-Bold
    HelveticaBold,
    /// Helvetica-Oblique
    HelveticaOblique,
    /// Helvetica-BoldOblique
    HelveticaBoldOblique,
}

impl CoreFont {
    /// Font used for a style.
    pub fn for_style(style: FontStyle) -> Self {
        match style {
            FontStyle::Regular => CoreFont::Helvetica,
            FontStyle::Bold => CoreFont::HelveticaBold,
            FontStyle::Italic => CoreFont::HelveticaOblique,
            FontStyle::BoldItalic => CoreFont::HelveticaBoldOblique,
        }
    }

    /// PostScript name used as `/BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            CoreFont::Helvetica => "Helvetica",
            CoreFont::HelveticaBold => "Helvetica-Bold",
            CoreFont::HelveticaOblique => "Helvetica-Oblique",
            CoreFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Name of the font in page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            CoreFont::Helvetica => "F1",
            CoreFont::HelveticaBold => "F2",
            CoreFont::HelveticaOblique => "F3",
            CoreFont::HelveticaBoldOblique => "F4",
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, CoreFont::HelveticaBold | CoreFont::HelveticaBoldOblique)
    }

    // Oblique variants share the upright metrics.
    fn ascii_widths(self) -> &'static [u16; 95] {
        if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        }
    }

    /// Advance width of one WinAnsi byte, in 1/1000 em.
    pub fn byte_width(self, byte: u8) -> u16 {
        if (32..=126).contains(&byte) {
            return self.ascii_widths()[(byte - 32) as usize];
        }
        match decode_win_ansi(byte) {
            Some(c) => self.char_width(c),
            None => FALLBACK_WIDTH,
        }
    }

    fn char_width(self, c: char) -> u16 {
        if let Some(&(_, regular, bold)) = SYMBOL_WIDTHS.iter().find(|(s, _, _)| *s == c) {
            return if self.is_bold() { bold } else { regular };
        }
        // Accented letters measure as their base letter.
        match c.to_string().nfd().next() {
            Some(base) if base.is_ascii_graphic() => self.ascii_widths()[(base as u8 - 32) as usize],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of encoded text, in 1/1000 em.
    pub fn text_width(self, bytes: &[u8]) -> u32 {
        bytes.iter().map(|&b| u32::from(self.byte_width(b))).sum()
    }
}

/// Character represented by a WinAnsi byte.
pub fn decode_win_ansi(byte: u8) -> Option<char> {
    match byte {
        0x80..=0x9F => WIN_ANSI_HIGH[(byte - 0x80) as usize],
        0x20..=0x7E | 0xA0..=0xFF => Some(byte as char),
        _ => None,
    }
}

/// WinAnsi byte for a character, if it has one.
pub fn encode_win_ansi_char(c: char) -> Option<u8> {
    match c {
        '\t' => Some(b' '),
        '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .position(|&high| high == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Text encoded for a WinAnsi font.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedText {
    /// Encoded bytes
    pub bytes: Vec<u8>,

    /// Number of characters replaced with [`REPLACEMENT_BYTE`]
    pub replaced: usize,
}

/// Encode text for a WinAnsi font.
///
/// Text is NFC-normalized first so that decomposed accents combine into
/// Latin-1 letters. Newlines are kept as `\n`, carriage returns dropped.
pub fn encode_win_ansi(text: &str) -> EncodedText {
    let mut encoded = EncodedText::default();
    for c in text.nfc() {
        match c {
            '\r' => {}
            '\n' => encoded.bytes.push(b'\n'),
            c => match encode_win_ansi_char(c) {
                Some(b) => encoded.bytes.push(b),
                None => {
                    encoded.bytes.push(REPLACEMENT_BYTE);
                    encoded.replaced += 1;
                }
            },
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_names() {
        assert_eq!(CoreFont::for_style(FontStyle::Bold).base_font(), "Helvetica-Bold");
        assert_eq!(
            CoreFont::for_style(FontStyle::Italic).base_font(),
            "Helvetica-Oblique"
        );
        assert_eq!(CoreFont::HelveticaBoldOblique.resource_name(), "F4");
    }

    #[test]
    fn test_ascii_widths() {
        let font = CoreFont::Helvetica;
        assert_eq!(font.byte_width(b' '), 278);
        assert_eq!(font.byte_width(b'A'), 667);
        assert_eq!(font.byte_width(b'i'), 222);
        assert_eq!(font.byte_width(b'~'), 584);
        assert_eq!(CoreFont::HelveticaBold.byte_width(b'i'), 278);
        assert_eq!(CoreFont::HelveticaOblique.byte_width(b'W'), 944);
        assert_eq!(font.text_width(b"Page"), 667 + 556 + 556 + 556);
    }

    #[test]
    fn test_accented_widths_follow_base_letter() {
        let font = CoreFont::Helvetica;
        let e_acute = encode_win_ansi_char('é').unwrap();
        assert_eq!(font.byte_width(e_acute), font.byte_width(b'e'));
        let c_cedilla = encode_win_ansi_char('Ç').unwrap();
        assert_eq!(font.byte_width(c_cedilla), font.byte_width(b'C'));
    }

    #[test]
    fn test_symbol_widths() {
        let bullet = encode_win_ansi_char('•').unwrap();
        assert_eq!(bullet, 0x95);
        assert_eq!(CoreFont::Helvetica.byte_width(bullet), 350);
        let em_dash = encode_win_ansi_char('—').unwrap();
        assert_eq!(CoreFont::HelveticaBold.byte_width(em_dash), 1000);
    }

    #[test]
    fn test_encode_latin_text() {
        let encoded = encode_win_ansi("Café – 10€");
        assert_eq!(encoded.replaced, 0);
        assert_eq!(encoded.bytes, b"Caf\xE9 \x96 10\x80".to_vec());
    }

    #[test]
    fn test_encode_composes_accents() {
        let encoded = encode_win_ansi("e\u{301}");
        assert_eq!(encoded.bytes, vec![0xE9]);
    }

    #[test]
    fn test_encode_replaces_unmappable() {
        let encoded = encode_win_ansi("日本 ok");
        assert_eq!(encoded.bytes, b"?? ok".to_vec());
        assert_eq!(encoded.replaced, 2);
    }

    #[test]
    fn test_encode_whitespace() {
        assert_eq!(encode_win_ansi("a\tb\r\nc").bytes, b"a b\nc".to_vec());
    }

    #[test]
    fn test_decode_roundtrip_high_range() {
        for byte in 0x80u8..=0xFF {
            if let Some(c) = decode_win_ansi(byte) {
                assert_eq!(encode_win_ansi_char(c), Some(byte));
            }
        }
        assert_eq!(decode_win_ansi(0x81), None);
    }
}
