//! Token system for StringQuery lexical analysis
//!
//! Every token carries its kind, its normalized text, and the span it covers
//! in the raw input. Kind ordering is load-bearing: the two stringable kinds
//! sort before all punctuation, which lets the parser's match primitive
//! accept a bare word wherever a string value is expected and vice versa.

use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kinds of the StringQuery language.
///
/// Ordering: `String < Identifier < punctuation < Eof`. See
/// [`TokenKind::accepts`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TokenKind {
    /// Quoted or bare string value
    String,
    /// Field name directly followed by `:` (the `:` is consumed)
    Identifier,

    // === PUNCTUATION ===
    OpenParen,    // (
    CloseParen,   // )
    OpenBracket,  // [  (inclusive bound marker)
    CloseBracket, // ]  (exclusive bound marker)
    Comma,        // ,
    Semicolon,    // ;
    Minus,        // -
    LowerThan,    // <
    GreaterThan,  // >
    Equals,       // =
    Tilde,        // ~
    Negate,       // !
    Multiply,     // *
    QuestionMark, // ?

    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Map a punctuation character to its token kind
    pub fn from_punctuation(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '[' => Some(Self::OpenBracket),
            ']' => Some(Self::CloseBracket),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            '-' => Some(Self::Minus),
            '<' => Some(Self::LowerThan),
            '>' => Some(Self::GreaterThan),
            '=' => Some(Self::Equals),
            '~' => Some(Self::Tilde),
            '!' => Some(Self::Negate),
            '*' => Some(Self::Multiply),
            '?' => Some(Self::QuestionMark),
            _ => None,
        }
    }

    pub fn is_punctuation(self) -> bool {
        self > Self::Identifier && self < Self::Eof
    }

    /// Whether this kind holds string content (a value or a field name)
    pub fn is_stringable(self) -> bool {
        self <= Self::Identifier
    }

    /// Token matching rule used by the parser's match primitive.
    ///
    /// Expecting a stringable kind accepts any lookahead kind up to and
    /// including `Identifier`; punctuation and EOF expectations match
    /// exactly.
    pub fn accepts(self, actual: TokenKind) -> bool {
        if self.is_stringable() {
            actual.is_stringable()
        } else {
            actual == self
        }
    }

    /// Textual rendering used in error messages
    pub fn describe(self) -> &'static str {
        match self {
            Self::String => "a string value",
            Self::Identifier => "a field name",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Minus => "'-'",
            Self::LowerThan => "'<'",
            Self::GreaterThan => "'>'",
            Self::Equals => "'='",
            Self::Tilde => "'~'",
            Self::Negate => "'!'",
            Self::Multiply => "'*'",
            Self::QuestionMark => "'?'",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A single token with normalized text and source location.
///
/// Immutable once produced. For quoted strings `value` holds the unescaped
/// content; for identifiers the field name without the trailing `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// End-of-input marker at the given position
    pub fn eof(pos: Position) -> Self {
        Self {
            kind: TokenKind::Eof,
            value: String::new(),
            span: Span::empty(pos),
        }
    }

    /// Starting position, used in error reports
    pub fn position(&self) -> Position {
        self.span.start()
    }

    /// Rendering of this token for error messages
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::Eof {
            self.kind.describe().to_string()
        } else {
            format!("'{}'", self.value)
        }
    }

    /// Whether `other` starts exactly where this token ends
    pub fn is_adjacent_to(&self, other: &Token) -> bool {
        self.span.end().offset == other.span.start().offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
