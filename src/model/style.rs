//! Text styling types.

use serde::{Deserialize, Serialize};

/// Weight/slant combination of the report font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Upright, normal weight
    #[default]
    Regular,
    /// Upright, bold weight
    Bold,
    /// Oblique, normal weight
    Italic,
    /// Oblique, bold weight
    BoldItalic,
}

impl FontStyle {
    /// Check if the style uses the bold weight.
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    /// Check if the style is slanted.
    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// Font style and size used to write a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Weight and slant
    pub font: FontStyle,

    /// Font size in points
    pub size: f32,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(font: FontStyle, size: f32) -> Self {
        Self { font, size }
    }

    /// Regular text at the given size.
    pub const fn regular(size: f32) -> Self {
        Self::new(FontStyle::Regular, size)
    }

    /// Bold text at the given size.
    pub const fn bold(size: f32) -> Self {
        Self::new(FontStyle::Bold, size)
    }

    /// Italic text at the given size.
    pub const fn italic(size: f32) -> Self {
        Self::new(FontStyle::Italic, size)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(12.0)
    }
}
