//! Static mapping from token kinds to display colors.

use crate::fragment::TokenKind;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const COMMENT: Color = Color::rgb(0x3F, 0x7F, 0x5F);
const LITERAL: Color = Color::rgb(0x2A, 0x00, 0xFF);
const RESERVED: Color = Color::rgb(0x7F, 0x00, 0x55);

/// Colors indexed by [`TokenKind::index`].
const DEFAULT_COLORS: [Color; TokenKind::ALL.len()] = [
    // Undefined: loud so unresolved tokens stand out
    Color::rgb(255, 0, 255),
    COMMENT,
    COMMENT,
    LITERAL,
    LITERAL,
    Color::BLACK,
    Color::BLACK,
    RESERVED,
    RESERVED,
    Color::BLACK,
    Color::WHITE,
    LITERAL,
    Color::rgb(0x64, 0x64, 0x64),
    Color::WHITE,
];

/// One color per token kind plus the canvas background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; TokenKind::ALL.len()],
    background: Color,
}

impl Palette {
    /// Eclipse-style default colors on white.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            background: Color::WHITE,
        }
    }

    #[must_use]
    pub const fn color(&self, kind: TokenKind) -> Color {
        self.colors[kind.index()]
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Override the color of one kind.
    #[must_use]
    pub const fn with_color(mut self, kind: TokenKind, color: Color) -> Self {
        self.colors[kind.index()] = color;
        self
    }

    /// Override the background color.
    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
