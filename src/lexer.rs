use log::trace;

use crate::fragment::{Fragment, TokenKind};

/// Spaces a tab expands to.
pub const TAB_REPLACEMENT: &str = "    ";

/// Whether `ch` belongs to the punctuation alphabet the lexer
/// collects into `Delimiter` runs.
#[must_use]
pub const fn is_delimiter(ch: char) -> bool {
    matches!(
        ch,
        '!' | '%'
            | '&'
            | '('
            | ')'
            | '='
            | '?'
            | '{'
            | '['
            | ']'
            | '}'
            | '+'
            | '*'
            | '-'
            | '.'
            | ':'
            | ','
            | ';'
            | '|'
            | '<'
            | '>'
    )
}

const fn whitespace(ch: char) -> Option<&'static str> {
    match ch {
        ' ' => Some(" "),
        '\t' => Some(TAB_REPLACEMENT),
        _ => None,
    }
}

/// Tokenize a source buffer into raw fragments.
///
/// Fragments are emitted in source order. Words come out as
/// `Undefined` and are resolved later by the classifier.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    lex(input, |fragment| fragments.push(fragment));
    fragments
}

/// Run the fragment machine over `input`, handing every fragment
/// to `sink` as soon as it is complete.
pub fn lex<F: FnMut(Fragment)>(input: &str, mut sink: F) {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut lexer = Lexer::new();
    for ch in input.chars() {
        lexer.push(ch, &mut sink);
    }
    lexer.finish(&mut sink);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    /// Saw `/`, waiting to learn whether a comment starts.
    CommentPending,
    StringLit {
        escaping: bool,
    },
    CharLit {
        escaping: bool,
    },
    BlockComment,
    /// Inside a block comment right after `*`.
    BlockCommentClosing,
    LineComment,
    Delimiter,
}

/// Character-driven fragment machine.
///
/// Feed characters with [`Lexer::push`] and call [`Lexer::finish`]
/// at the end of input to flush whatever is still pending. Each
/// instance carries its own state, so independent buffers can be
/// lexed concurrently with separate lexers.
#[derive(Debug, Default)]
pub struct Lexer {
    state: State,
    content: String,
}

impl Lexer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one character.
    pub fn push<F: FnMut(Fragment)>(&mut self, ch: char, sink: &mut F) {
        if ch == '\r' {
            return;
        }

        match self.state {
            State::Idle => self.idle(ch, sink),
            State::Delimiter => {
                if is_delimiter(ch) {
                    self.content.push(ch);
                } else {
                    self.flush(TokenKind::Delimiter, sink);
                    self.state = State::Idle;
                    self.idle(ch, sink);
                }
            }
            State::CommentPending => match ch {
                '*' => {
                    self.content.push(ch);
                    self.state = State::BlockComment;
                }
                '/' => {
                    self.content.push(ch);
                    self.state = State::LineComment;
                }
                _ => {
                    // lone slash
                    self.flush(TokenKind::Delimiter, sink);
                    self.state = State::Idle;
                    self.idle(ch, sink);
                }
            },
            State::BlockComment => self.block_comment(ch, sink),
            State::BlockCommentClosing => match ch {
                '/' => {
                    self.content.push(ch);
                    self.flush(TokenKind::BlockComment, sink);
                    self.state = State::Idle;
                }
                '*' => self.content.push(ch),
                _ => {
                    self.state = State::BlockComment;
                    self.block_comment(ch, sink);
                }
            },
            State::LineComment => self.line_comment(ch, sink),
            State::StringLit { escaping } => {
                self.state = self
                    .literal(ch, escaping, '"', TokenKind::StringLiteral, sink)
                    .map_or(State::Idle, |escaping| State::StringLit { escaping });
            }
            State::CharLit { escaping } => {
                self.state = self
                    .literal(ch, escaping, '\'', TokenKind::CharacterLiteral, sink)
                    .map_or(State::Idle, |escaping| State::CharLit { escaping });
            }
        }
    }

    /// Flush pending content at end of input.
    pub fn finish<F: FnMut(Fragment)>(mut self, sink: &mut F) {
        let kind = match self.state {
            State::Idle => TokenKind::Undefined,
            State::Delimiter | State::CommentPending => TokenKind::Delimiter,
            State::StringLit { .. } => TokenKind::StringLiteral,
            State::CharLit { .. } => TokenKind::CharacterLiteral,
            State::BlockComment | State::BlockCommentClosing => TokenKind::BlockComment,
            State::LineComment => TokenKind::LineComment,
        };
        self.flush(kind, sink);
    }

    fn idle<F: FnMut(Fragment)>(&mut self, ch: char, sink: &mut F) {
        match ch {
            '\n' => {
                self.flush(TokenKind::Undefined, sink);
                emit("\n", TokenKind::LineFeed, sink);
            }
            '/' => {
                self.flush(TokenKind::Undefined, sink);
                self.content.push(ch);
                self.state = State::CommentPending;
            }
            '"' => {
                self.flush(TokenKind::Undefined, sink);
                self.content.push(ch);
                self.state = State::StringLit { escaping: false };
            }
            '\'' => {
                self.flush(TokenKind::Undefined, sink);
                self.content.push(ch);
                self.state = State::CharLit { escaping: false };
            }
            c if is_delimiter(c) => {
                self.flush(TokenKind::Undefined, sink);
                self.content.push(c);
                self.state = State::Delimiter;
            }
            c => {
                if let Some(space) = whitespace(c) {
                    self.flush(TokenKind::Undefined, sink);
                    emit(space, TokenKind::Space, sink);
                } else {
                    self.content.push(c);
                }
            }
        }
    }

    fn block_comment<F: FnMut(Fragment)>(&mut self, ch: char, sink: &mut F) {
        match ch {
            '\n' => {
                self.flush(TokenKind::BlockComment, sink);
                emit("\n", TokenKind::LineFeed, sink);
            }
            '*' => {
                self.content.push(ch);
                self.state = State::BlockCommentClosing;
            }
            c => {
                if let Some(space) = whitespace(c) {
                    self.flush(TokenKind::BlockComment, sink);
                    emit(space, TokenKind::BlockComment, sink);
                } else {
                    self.content.push(c);
                }
            }
        }
    }

    fn line_comment<F: FnMut(Fragment)>(&mut self, ch: char, sink: &mut F) {
        if ch == '\n' {
            self.flush(TokenKind::LineComment, sink);
            emit("\n", TokenKind::LineFeed, sink);
            self.state = State::Idle;
        } else if let Some(space) = whitespace(ch) {
            self.flush(TokenKind::LineComment, sink);
            emit(space, TokenKind::LineComment, sink);
        } else {
            self.content.push(ch);
        }
    }

    /// Returns the next escape flag, or `None` once the literal is
    /// closed.
    fn literal<F: FnMut(Fragment)>(
        &mut self,
        ch: char,
        escaping: bool,
        quote: char,
        kind: TokenKind,
        sink: &mut F,
    ) -> Option<bool> {
        match ch {
            '\n' => {
                self.flush(kind, sink);
                emit("\n", TokenKind::LineFeed, sink);
                Some(false)
            }
            c if c == quote && !escaping => {
                self.content.push(c);
                self.flush(kind, sink);
                None
            }
            '\\' if !escaping => {
                self.content.push(ch);
                Some(true)
            }
            '\t' => {
                self.content.push_str(TAB_REPLACEMENT);
                Some(false)
            }
            c => {
                self.content.push(c);
                Some(false)
            }
        }
    }

    fn flush<F: FnMut(Fragment)>(&mut self, kind: TokenKind, sink: &mut F) {
        if self.content.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.content);
        trace!("fragment {kind}: {content:?}");
        sink(Fragment { content, kind });
    }
}

fn emit<F: FnMut(Fragment)>(text: &str, kind: TokenKind, sink: &mut F) {
    sink(Fragment::new(text, kind));
}
