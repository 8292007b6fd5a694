use std::fs;
use std::path::Path;

use log::debug;

use crate::Error;
use crate::classifier::{self, Vocabulary};
use crate::fragment::Fragment;
use crate::layout::{self, BoxCollection, Geometry};
use crate::lexer;
use crate::merger;
use crate::palette::Palette;

/// Source-to-boxes pipeline with its configuration.
///
/// Runs lexing, classification, merging and layout in that order,
/// each stage finishing before the next starts.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    geometry: Geometry,
    palette: Palette,
    vocabulary: Vocabulary,
}

impl Converter {
    /// A converter with the Java vocabulary and default geometry and
    /// palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Lex, classify and merge `input` into the condensed fragment
    /// stream.
    pub fn fragments(&self, input: &str) -> Result<Vec<Fragment>, Error> {
        let mut fragments = lexer::tokenize(input);
        debug!("lexed {} fragments", fragments.len());
        classifier::classify(&mut fragments, &self.vocabulary);
        Ok(merger::merge(fragments)?)
    }

    /// Run the whole pipeline on an in-memory buffer.
    pub fn convert(&self, input: &str) -> Result<BoxCollection, Error> {
        let fragments = self.fragments(input)?;
        Ok(layout::layout(fragments, &self.geometry, &self.palette))
    }

    /// Read `path` and convert its contents.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than
    /// rejected; they end up as unresolved fragments.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<BoxCollection, Error> {
        let bytes = fs::read(path.as_ref())?;
        let input = String::from_utf8_lossy(&bytes);
        self.convert(&input)
    }
}
