//! Error types for query parsing
//!
//! Two tiers: [`ParseError`] is the fail-fast tier (malformed token
//! sequences, unknown fields, structural limits) that unwinds the whole
//! parse; [`ConditionErrorMessage`] records are the accumulating tier
//! (validator rejections, range ordering, value overflow) collected while
//! parsing continues. Both surface to callers through
//! [`InvalidSearchConditionError`].

use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::tokens::Token;
use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type SyntaxResult<T> = Result<T, ParseError>;

/// Fail-fast structural and syntax errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token: expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("unknown field '{label}' at {position}")]
    UnknownField { label: String, position: Position },

    #[error("maximum nesting level {max} exceeded at group {path}")]
    NestingLimitExceeded { path: String, max: usize },

    #[error("maximum group count {max} exceeded at group {path}")]
    GroupLimitExceeded { path: String, max: usize },

    #[error("internal parser error: {message}")]
    Internal { message: String },
}

impl ParseError {
    /// Create an unexpected-token error from the offending lookahead;
    /// running out of input maps to the end-of-input variant.
    pub fn unexpected_token(expected: &str, found: &Token) -> Self {
        if found.kind == crate::tokens::TokenKind::Eof {
            Self::UnexpectedEnd {
                expected: expected.to_string(),
            }
        } else {
            Self::UnexpectedToken {
                expected: expected.to_string(),
                found: found.describe(),
                position: found.position(),
            }
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEnd { .. } => codes::syntax::UNEXPECTED_END,
            Self::Lexer(inner) => inner.error_code(),
            Self::UnknownField { .. } => codes::fields::UNKNOWN_FIELD,
            Self::NestingLimitExceeded { .. } => codes::syntax::NESTING_LIMIT_EXCEEDED,
            Self::GroupLimitExceeded { .. } => codes::syntax::GROUP_LIMIT_EXCEEDED,
            Self::Internal { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// Path of the offending group, for structural-limit errors
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NestingLimitExceeded { path, .. } | Self::GroupLimitExceeded { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

/// One entry of the aggregated error report.
///
/// `path` identifies the originating field-value or sub-group position,
/// rendered as a bracketed string such as `[tags][2]` or `[0][1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionErrorMessage {
    pub message: String,
    pub field_name: Option<String>,
    pub path: String,
}

impl ConditionErrorMessage {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_name: None,
            path: path.into(),
        }
    }

    pub fn for_field(
        field_name: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            field_name: Some(field_name.into()),
            path: path.into(),
        }
    }
}

impl fmt::Display for ConditionErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field_name {
            Some(field) if !self.path.is_empty() => {
                write!(f, "{} (field '{}', at {})", self.message, field, self.path)
            }
            Some(field) => write!(f, "{} (field '{}')", self.message, field),
            None if !self.path.is_empty() => write!(f, "{} (at {})", self.message, self.path),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Aggregated failure report of one `process` call.
///
/// Holds either exactly one structural/syntax entry or one-or-more
/// accumulated semantic entries; the two cannot co-occur because the
/// structural tier aborts parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidSearchConditionError {
    errors: Vec<ConditionErrorMessage>,
}

impl InvalidSearchConditionError {
    pub fn new(errors: Vec<ConditionErrorMessage>) -> Self {
        debug_assert!(!errors.is_empty(), "error report must not be empty");
        Self { errors }
    }

    pub fn errors(&self) -> &[ConditionErrorMessage] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ParseError> for InvalidSearchConditionError {
    fn from(error: ParseError) -> Self {
        let path = error.path().unwrap_or("").to_string();
        let field_name = match &error {
            ParseError::UnknownField { label, .. } => Some(label.clone()),
            _ => None,
        };
        Self {
            errors: vec![ConditionErrorMessage {
                message: error.to_string(),
                field_name,
                path,
            }],
        }
    }
}

impl fmt::Display for InvalidSearchConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "search query is invalid ({} error(s)):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidSearchConditionError {}
