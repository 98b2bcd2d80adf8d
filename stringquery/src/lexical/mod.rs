//! Lexical analysis for StringQuery text
//!
//! Owns tokenization: whitespace handling, quote/escape normalization,
//! field identification, and the lookahead/glimpse window the parser
//! drives. See [`lexer::Lexer`] for the tokenizing rules.

pub mod lexer;

pub use lexer::{Lexer, LexerError, LexicalMetrics};
