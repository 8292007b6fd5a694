//! Java source x-ray: render source files as pixel maps.
//!
//! Every lexical token becomes a colored rectangle placed where the
//! token sits in the file, giving a compressed picture of the code's
//! texture. The pipeline runs in four stages: a character-driven
//! [lexer], a [classifier] for words and numbers, a [merger] that
//! joins neighbouring fragments of the same kind, and the [layout]
//! engine that turns fragments into boxes. [render] paints the boxes
//! into a PNG.
//!
//! # Quick start
//!
//! ```
//! use javaxray::{TokenKind, convert};
//!
//! let boxes = convert("int x = 1;\n").unwrap();
//! assert_eq!(boxes.len(), 8);
//! assert_eq!(boxes.dimension(), (40, 4));
//! assert_eq!(boxes.as_slice()[0].kind(), TokenKind::Datatype);
//! ```
//!
//! ## Custom configuration
//!
//! ```
//! use javaxray::{Color, Converter, Geometry, Palette, TokenKind, Vocabulary};
//!
//! let converter = Converter::new()
//!     .with_geometry(Geometry::default().char_width(2).line_height(2))
//!     .with_palette(Palette::default().with_color(TokenKind::Identifier, Color::rgb(200, 0, 0)))
//!     .with_vocabulary(Vocabulary::new(["fn", "let"], ["u8"]));
//!
//! let boxes = converter.convert("let v").unwrap();
//! assert_eq!(boxes.as_slice()[0].kind(), TokenKind::Keyword);
//! assert_eq!(boxes.as_slice()[2].color, Color::rgb(200, 0, 0));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classifier;
pub mod converter;
pub mod fragment;
pub mod layout;
pub mod lexer;
pub mod merger;
pub mod palette;
pub mod render;

pub use classifier::{Vocabulary, classify};
pub use converter::Converter;
pub use fragment::{Fragment, MergeError, TokenKind};
pub use layout::{BoxCollection, Geometry, TokenBox, layout};
pub use lexer::{Lexer, lex, tokenize};
pub use merger::merge;
pub use palette::{Color, Palette};
pub use render::{RenderError, render, save_png};

/// Unified error type for the pipeline and its file and image I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fragments of different kinds were joined.
    #[error("{0}")]
    Merge(#[from] MergeError),
    /// Reading the source file failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Rendering or writing the image failed.
    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Convert a source buffer into boxes with the default configuration.
pub fn convert(input: &str) -> Result<BoxCollection, Error> {
    Converter::new().convert(input)
}
