use std::fmt;

/// Lexical kinds a fragment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Not yet resolved, or unresolvable.
    Undefined,
    /// `// ...` up to the end of the line.
    LineComment,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,
    /// Double-quoted string literal.
    StringLiteral,
    /// Single-quoted character literal.
    CharacterLiteral,
    /// Run of punctuation from the delimiter set.
    Delimiter,
    /// Word that is neither a keyword nor a datatype.
    Identifier,
    /// Reserved word.
    Keyword,
    /// Primitive datatype name.
    Datatype,
    /// Single punctuation character outside the delimiter set.
    Symbol,
    /// Spaces or expanded tabs.
    Space,
    /// Decimal or hexadecimal number.
    Numeric,
    /// `@Something`.
    Annotation,
    /// Line break.
    LineFeed,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Undefined,
        Self::LineComment,
        Self::BlockComment,
        Self::StringLiteral,
        Self::CharacterLiteral,
        Self::Delimiter,
        Self::Identifier,
        Self::Keyword,
        Self::Datatype,
        Self::Symbol,
        Self::Space,
        Self::Numeric,
        Self::Annotation,
        Self::LineFeed,
    ];

    /// Position of this kind in [`TokenKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether adjacent fragments of this kind may be merged.
    #[must_use]
    pub const fn is_mergeable(self) -> bool {
        !matches!(self, Self::Undefined | Self::LineFeed)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Attempt to join two fragments of different kinds.
///
/// The merger never does this on its own, so seeing this error
/// means a logic regression rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("incompatible fragment merge: {left} with {right}")]
pub struct MergeError {
    pub left: TokenKind,
    pub right: TokenKind,
}

/// A contiguous run of source text tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub content: String,
    pub kind: TokenKind,
}

impl Fragment {
    /// Create a fragment.
    #[must_use]
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Number of characters in the content.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Append `other`'s content onto this fragment.
    ///
    /// # Errors
    ///
    /// Returns `MergeError` when the kinds differ; `self` is left
    /// untouched in that case.
    pub fn join(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.kind != other.kind {
            return Err(MergeError {
                left: self.kind,
                right: other.kind,
            });
        }
        self.content.push_str(&other.content);
        Ok(())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.content)
    }
}
