//! Pull-based lexer for StringQuery text
//!
//! The lexer scans tokens on demand and keeps a two-token window: the last
//! consumed token (`current`) and the lookahead the parser inspects. A
//! third slot is filled lazily by [`Lexer::peek_beyond`], the "glimpse" peek
//! the parser needs to tell a bare value from the lower bound of a range.
//!
//! Tokenizing rules:
//! - Whitespace (including newlines) is insignificant and skipped.
//! - A quoted string begins and ends with `"`; a doubled quote (`""`) inside
//!   is normalized to one literal `"` and does not terminate the string.
//! - A bare string is a contiguous run of characters that are neither
//!   whitespace nor punctuation (`( ) [ ] , ; - < > = ~ ! ? *`). `:` is not
//!   punctuation, so values like `12:30` stay one token.
//! - Field identification happens here: an identifier-shaped run followed by
//!   optional whitespace and `:` becomes one `Identifier` token with the `:`
//!   consumed. Every other run is a `String` token.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error};

/// Lexical analysis errors with compile-time security boundaries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },

    #[error("query input too large: {size} bytes (max {MAX_INPUT_LENGTH})")]
    InputTooLarge { size: usize },

    #[error("quoted string too large: {size} bytes (max {MAX_QUOTED_STRING_SIZE}) at {position}")]
    StringTooLarge { size: usize, position: Position },

    #[error("field name too long: {length} characters (max {MAX_IDENTIFIER_LENGTH}) at {position}")]
    IdentifierTooLong { length: usize, position: Position },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::InputTooLarge { .. } => codes::lexical::INPUT_TOO_LARGE,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
        }
    }

    /// Position of the offending input, when known
    pub fn position(&self) -> Option<Position> {
        match self {
            LexerError::UnterminatedString { position }
            | LexerError::StringTooLarge { position, .. }
            | LexerError::IdentifierTooLong { position, .. } => Some(*position),
            LexerError::InputTooLarge { .. } => None,
        }
    }
}

/// Essential lexical analysis metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub string_tokens: usize,
    pub identifier_tokens: usize,
    pub punctuation_tokens: usize,
    pub max_string_length: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind {
            TokenKind::String => {
                self.string_tokens += 1;
                self.record_string_length(token.value.len(), preferences);
            }
            TokenKind::Identifier => self.identifier_tokens += 1,
            TokenKind::Eof => {}
            _ => self.punctuation_tokens += 1,
        }
    }

    fn record_string_length(&mut self, length: usize, preferences: &LexicalPreferences) {
        self.max_string_length = self.max_string_length.max(length);

        if preferences.log_string_statistics {
            log_debug!("String value tokenized",
                "length" => length,
                "max_so_far" => self.max_string_length
            );
        }
    }
}

/// Pull-based lexer with a current/lookahead buffer plus glimpse slot
pub struct Lexer<'a> {
    input: &'a str,
    pos: Position,
    current: Option<Token>,
    lookahead: Token,
    glimpse: Option<Token>,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input` and prime the lookahead token
    pub fn new(input: &'a str) -> Result<Self, LexerError> {
        Self::with_preferences(input, LexicalPreferences::default())
    }

    pub fn with_preferences(
        input: &'a str,
        preferences: LexicalPreferences,
    ) -> Result<Self, LexerError> {
        if input.len() > MAX_INPUT_LENGTH {
            let error = LexerError::InputTooLarge { size: input.len() };
            log_error!(error.error_code(), "Query input rejected",
                "size" => input.len(),
                "limit" => MAX_INPUT_LENGTH
            );
            return Err(error);
        }

        let mut lexer = Self {
            input,
            pos: Position::start(),
            current: None,
            lookahead: Token::eof(Position::start()),
            glimpse: None,
            metrics: LexicalMetrics::default(),
            preferences,
        };
        lexer.lookahead = lexer.scan_token()?;
        Ok(lexer)
    }

    /// The last consumed token, if any
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The lookahead token under examination
    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Kind of the lookahead token
    pub fn peek_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Glimpse: true if, skipping the lookahead, the next token has `kind`
    pub fn peek_beyond(&mut self, kind: TokenKind) -> Result<bool, LexerError> {
        if self.glimpse.is_none() {
            let token = self.scan_token()?;
            self.glimpse = Some(token);
        }
        Ok(self
            .glimpse
            .as_ref()
            .map(|t| t.kind == kind)
            .unwrap_or(false))
    }

    /// Move the lookahead forward one token, returning the consumed token
    pub fn advance(&mut self) -> Result<Token, LexerError> {
        let next = match self.glimpse.take() {
            Some(token) => token,
            None => self.scan_token()?,
        };
        let consumed = std::mem::replace(&mut self.lookahead, next);
        self.current = Some(consumed.clone());
        Ok(consumed)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    // === SCANNING ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();
        let start = self.pos;

        let token = match self.peek_char() {
            None => Token::eof(start),
            Some('"') => self.scan_quoted(start)?,
            Some(ch) => match TokenKind::from_punctuation(ch) {
                Some(kind) => {
                    self.bump();
                    Token::new(kind, ch.to_string(), Span::new(start, self.pos))
                }
                None => self.scan_bare(start)?,
            },
        };

        self.metrics.record_token(&token, &self.preferences);
        Ok(token)
    }

    /// Scan a quoted string, normalizing `""` to a literal `"`
    fn scan_quoted(&mut self, start: Position) -> Result<Token, LexerError> {
        self.bump(); // opening quote
        let mut value = String::new();

        loop {
            match self.bump() {
                None => {
                    let error = LexerError::UnterminatedString { position: start };
                    log_error!(error.error_code(), "Unterminated quoted string",
                        "position" => start
                    );
                    return Err(error);
                }
                Some('"') => {
                    if self.peek_char() == Some('"') {
                        self.bump();
                        value.push('"');
                    } else {
                        break;
                    }
                }
                Some(ch) => value.push(ch),
            }

            if value.len() > MAX_QUOTED_STRING_SIZE {
                return Err(LexerError::StringTooLarge {
                    size: value.len(),
                    position: start,
                });
            }
        }

        Ok(Token::new(
            TokenKind::String,
            value,
            Span::new(start, self.pos),
        ))
    }

    /// Scan a bare run, deciding between a field identifier and a string value
    fn scan_bare(&mut self, start: Position) -> Result<Token, LexerError> {
        // Field identification first: an identifier-shaped run (which may
        // contain '-', ordinarily a punctuation token) followed by optional
        // whitespace and a colon is one Identifier token; the colon is
        // consumed and not part of the name. Anything else backtracks and
        // is scanned as a plain value.
        if let Some(token) = self.scan_field_identifier(start)? {
            return Ok(token);
        }

        let mut value = String::new();
        self.consume_bare_run(&mut value);

        // Colons are ordinary value characters (`12:30` stays one token)
        while self.peek_char() == Some(':') {
            value.push(':');
            self.bump();
            self.consume_bare_run(&mut value);
        }

        Ok(Token::new(
            TokenKind::String,
            value,
            Span::new(start, self.pos),
        ))
    }

    fn scan_field_identifier(&mut self, start: Position) -> Result<Option<Token>, LexerError> {
        match self.peek_char() {
            Some(ch) if ch.is_alphabetic() || ch == '_' => {}
            _ => return Ok(None),
        }

        let saved = self.pos;
        let mut name = String::new();
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.bump();
            } else {
                break;
            }
        }

        let name_end = self.pos;
        self.skip_whitespace();
        if self.peek_char() != Some(':') {
            self.pos = saved;
            return Ok(None);
        }
        self.bump();

        if name.chars().count() > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length: name.chars().count(),
                position: start,
            });
        }

        Ok(Some(Token::new(
            TokenKind::Identifier,
            name,
            Span::new(start, name_end),
        )))
    }

    fn consume_bare_run(&mut self, value: &mut String) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() || ch == ':' || ch == '"' || TokenKind::from_punctuation(ch).is_some()
            {
                break;
            }
            value.push(ch);
            self.bump();
        }
    }
}
