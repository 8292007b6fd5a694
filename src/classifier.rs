//! Resolves `Undefined` fragments into concrete kinds.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::fragment::{Fragment, TokenKind};

static SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+$").unwrap());
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-Fx]+[lL]?$").unwrap());

/// Single characters classified as `Symbol`.
const SYMBOLS: &str = "+*~#-.:,;?=)(/&%!{}[]<>|";

/// Java reserved words.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "interface",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "threadsafe",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "volatile",
    "while",
];

/// Java primitive datatypes.
pub const JAVA_DATATYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

/// Word tables used to tell keywords and datatypes from identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    datatypes: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from external tables.
    pub fn new<K, D>(keywords: K, datatypes: D) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            datatypes: datatypes.into_iter().map(Into::into).collect(),
        }
    }

    /// The Java vocabulary.
    #[must_use]
    pub fn java() -> Self {
        Self::new(
            JAVA_KEYWORDS.iter().copied(),
            JAVA_DATATYPES.iter().copied(),
        )
    }

    /// Resolve a word: keyword first, then datatype, else identifier.
    #[must_use]
    pub fn resolve_word(&self, word: &str) -> TokenKind {
        if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if self.datatypes.contains(word) {
            TokenKind::Datatype
        } else {
            TokenKind::Identifier
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::java()
    }
}

/// Classify the content of an `Undefined` fragment.
///
/// Rules are tried in order; the first match wins. Content that
/// matches nothing stays `Undefined`.
#[must_use]
pub fn classify_content(content: &str, vocabulary: &Vocabulary) -> TokenKind {
    let mut chars = content.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    };

    if SPACE.is_match(content) {
        TokenKind::Space
    } else if single.is_some_and(|ch| SYMBOLS.contains(ch)) {
        TokenKind::Symbol
    } else if WORD.is_match(content) {
        vocabulary.resolve_word(content)
    } else if NUMERIC.is_match(content) {
        TokenKind::Numeric
    } else if content.starts_with('@') {
        TokenKind::Annotation
    } else {
        TokenKind::Undefined
    }
}

/// Resolve a single fragment in place. Fragments that already have
/// a kind are left alone.
pub fn classify_fragment(fragment: &mut Fragment, vocabulary: &Vocabulary) {
    if fragment.kind == TokenKind::Undefined {
        fragment.kind = classify_content(&fragment.content, vocabulary);
    }
}

/// Resolve every `Undefined` fragment in place.
pub fn classify(fragments: &mut [Fragment], vocabulary: &Vocabulary) {
    for fragment in fragments.iter_mut() {
        classify_fragment(fragment, vocabulary);
    }
    let unresolved = fragments
        .iter()
        .filter(|f| f.kind == TokenKind::Undefined)
        .count();
    debug!(
        "classified {} fragments, {unresolved} unresolved",
        fragments.len()
    );
}
