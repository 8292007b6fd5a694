use log::debug;

use crate::fragment::{Fragment, TokenKind};
use crate::palette::{Color, Palette};

/// Pixel constants for the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Width of one character.
    pub char_width: u32,
    /// Height of every box.
    pub line_height: u32,
    /// Horizontal gap between boxes and vertical gap between rows.
    pub box_gap: u32,
}

impl Geometry {
    pub const DEFAULT: Self = Self {
        char_width: 4,
        line_height: 4,
        box_gap: 0,
    };

    #[must_use]
    pub const fn char_width(mut self, value: u32) -> Self {
        self.char_width = value;
        self
    }

    #[must_use]
    pub const fn line_height(mut self, value: u32) -> Self {
        self.line_height = value;
        self
    }

    #[must_use]
    pub const fn box_gap(mut self, value: u32) -> Self {
        self.box_gap = value;
        self
    }

    /// Pixel width of `fragment`.
    #[must_use]
    pub fn width_of(&self, fragment: &Fragment) -> u32 {
        let chars = u32::try_from(fragment.char_len()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.char_width)
    }

    /// Top edge of row `line`.
    #[must_use]
    pub const fn row_y(&self, line: u32) -> u32 {
        line.saturating_mul(self.line_height.saturating_add(self.box_gap))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A positioned, colored rectangle standing for one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub fragment: Fragment,
}

impl TokenBox {
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.fragment.kind
    }

    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// The area a renderer fills, as `(x, y, width, height)`.
    ///
    /// Delimiters only cover the lower half of their row.
    #[must_use]
    pub const fn paint_area(&self) -> (u32, u32, u32, u32) {
        if matches!(self.fragment.kind, TokenKind::Delimiter) {
            let half = self.height / 2;
            (self.x, self.y + (self.height - half), self.width, half)
        } else {
            (self.x, self.y, self.width, self.height)
        }
    }
}

/// Ordered boxes with a running bounding size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxCollection {
    boxes: Vec<TokenBox>,
    max_x: u32,
    max_y: u32,
}

impl BoxCollection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boxes: Vec::new(),
            max_x: 0,
            max_y: 0,
        }
    }

    /// Append a box and widen the bounding size to contain it.
    pub fn push(&mut self, token_box: TokenBox) {
        self.max_x = self.max_x.max(token_box.right());
        self.max_y = self.max_y.max(token_box.bottom());
        self.boxes.push(token_box);
    }

    /// Bounding `(width, height)` in pixels.
    #[must_use]
    pub const fn dimension(&self) -> (u32, u32) {
        (self.max_x, self.max_y)
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.max_x
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.max_y
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenBox> {
        self.boxes.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TokenBox] {
        &self.boxes
    }
}

impl<'a> IntoIterator for &'a BoxCollection {
    type Item = &'a TokenBox;
    type IntoIter = std::slice::Iter<'a, TokenBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

impl IntoIterator for BoxCollection {
    type Item = TokenBox;
    type IntoIter = std::vec::IntoIter<TokenBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

/// Place condensed fragments on the canvas.
///
/// Each line feed starts a new row; every other fragment becomes a
/// box to the right of the previous one.
#[must_use]
pub fn layout(fragments: Vec<Fragment>, geometry: &Geometry, palette: &Palette) -> BoxCollection {
    let mut collection = BoxCollection::new();
    let mut x: u32 = 0;
    let mut line: u32 = 0;

    for fragment in fragments {
        if fragment.kind == TokenKind::LineFeed {
            line = line.saturating_add(1);
            x = 0;
            continue;
        }

        let width = geometry.width_of(&fragment);
        collection.push(TokenBox {
            x,
            y: geometry.row_y(line),
            width,
            height: geometry.line_height,
            color: palette.color(fragment.kind),
            fragment,
        });
        x = x.saturating_add(width).saturating_add(geometry.box_gap);
    }

    let (width, height) = collection.dimension();
    debug!(
        "laid out {} boxes over {} rows, canvas {width}x{height}",
        collection.len(),
        line.saturating_add(1)
    );
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lay(fragments: Vec<Fragment>) -> BoxCollection {
        layout(fragments, &Geometry::default(), &Palette::default())
    }

    #[test]
    fn boxes_advance_along_row() {
        let boxes = lay(vec![
            Fragment::new("int", TokenKind::Datatype),
            Fragment::new(" ", TokenKind::Space),
            Fragment::new("x", TokenKind::Identifier),
        ]);
        let xs: Vec<_> = boxes.iter().map(|b| (b.x, b.width)).collect();
        assert_eq!(xs, vec![(0, 12), (12, 4), (16, 4)]);
        assert_eq!(boxes.dimension(), (20, 4));
    }

    #[test]
    fn linefeed_starts_new_row() {
        let boxes = lay(vec![
            Fragment::new("ab", TokenKind::Identifier),
            Fragment::new("\n", TokenKind::LineFeed),
            Fragment::new("\n", TokenKind::LineFeed),
            Fragment::new("c", TokenKind::Identifier),
        ]);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes.as_slice()[1].x, 0);
        assert_eq!(boxes.as_slice()[1].y, 8);
        assert_eq!(boxes.dimension(), (8, 12));
    }

    #[test]
    fn gap_applies_to_both_axes() {
        let geometry = Geometry::default().box_gap(1).char_width(2).line_height(3);
        let boxes = layout(
            vec![
                Fragment::new("a", TokenKind::Identifier),
                Fragment::new("b", TokenKind::Identifier),
                Fragment::new("\n", TokenKind::LineFeed),
                Fragment::new("c", TokenKind::Identifier),
            ],
            &geometry,
            &Palette::default(),
        );
        let pos: Vec<_> = boxes.iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(pos, vec![(0, 0), (3, 0), (0, 4)]);
        assert_eq!(boxes.dimension(), (5, 7));
    }

    #[test]
    fn color_comes_from_palette() {
        let boxes = lay(vec![Fragment::new("\u{e9}", TokenKind::Undefined)]);
        assert_eq!(boxes.as_slice()[0].color, Color::rgb(255, 0, 255));
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let boxes = lay(vec![Fragment::new("\u{e9}\u{e9}", TokenKind::Undefined)]);
        assert_eq!(boxes.as_slice()[0].width, 8);
    }

    #[test]
    fn delimiter_paints_lower_half() {
        let boxes = lay(vec![Fragment::new(";", TokenKind::Delimiter)]);
        assert_eq!(boxes.as_slice()[0].paint_area(), (0, 2, 4, 2));
    }

    #[test]
    fn delimiter_odd_height_is_bottom_anchored() {
        let geometry = Geometry::default().line_height(5);
        let boxes = layout(
            vec![Fragment::new(";", TokenKind::Delimiter)],
            &geometry,
            &Palette::default(),
        );
        assert_eq!(boxes.as_slice()[0].paint_area(), (0, 3, 4, 2));
    }

    #[test]
    fn empty_layout() {
        let boxes = lay(Vec::new());
        assert!(boxes.is_empty());
        assert_eq!(boxes.dimension(), (0, 0));
    }

    #[test]
    fn only_linefeeds_give_empty_canvas() {
        let boxes = lay(vec![Fragment::new("\n", TokenKind::LineFeed)]);
        assert!(boxes.is_empty());
        assert_eq!(boxes.dimension(), (0, 0));
    }
}
