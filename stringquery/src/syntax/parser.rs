//! Recursive-descent parser for the StringQuery grammar
//!
//! ```text
//! Query            ::= ["*"] FieldValuesPairs
//! Group            ::= ["*"] "(" FieldValuesPairs ")" [";"]
//! FieldValuesPairs ::= ( Group | FieldId ":" FieldValues )*
//! FieldValues      ::= ValuePart ("," ValuePart)* [";"]
//! ValuePart        ::= ("!")? SingleOrRange | Comparison | PatternMatch
//! SingleOrRange    ::= StringValue | Range
//! Range            ::= ("["|"]")? StringValue "-" StringValue ("["|"]")?
//! Comparison       ::= ("<"|"<="|"<>"|">"|">=") StringValue
//! PatternMatch     ::= "~" ("i")? PatternOp StringValue
//! PatternOp        ::= "*" | ">" | "<" | "?" | "=" | "!" PatternOp
//! ```
//!
//! The grammar is LL(1) with one targeted exception: a string value inside
//! `FieldValues` is the lower bound of a range exactly when the glimpse
//! (one token past the lookahead) is `-`. No backtracking is needed.
//!
//! Structural limits are enforced while descending: nesting depth and
//! sibling group counts are tracked per rendered group path, and the first
//! violation aborts the whole parse. Semantic value errors never abort;
//! they accumulate in the parse state and are reported together.

use crate::condition::{CompareOp, Group, Logical, PatternOp};
use crate::config::constants::compile_time::errors::MAX_ERROR_COLLECTION;
use crate::config::ProcessorConfig;
use crate::fields::{FieldSet, ValueValidator};
use crate::ingestion::ValuesFactory;
use crate::lexical::Lexer;
use crate::log_debug;
use crate::syntax::error::{ConditionErrorMessage, ParseError, SyntaxResult};
use crate::tokens::{Token, TokenKind};
use std::collections::HashMap;

/// Parser-internal state, created fresh per parse and discarded at its end
struct ParseState {
    nesting_level: usize,
    group_counts: HashMap<String, usize>,
    errors: Vec<ConditionErrorMessage>,
}

impl ParseState {
    fn new() -> Self {
        Self {
            nesting_level: 0,
            group_counts: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Index of the next sibling sub-group under `parent_path`
    fn next_group_index(&mut self, parent_path: &str) -> usize {
        let counter = self
            .group_counts
            .entry(parent_path.to_string())
            .or_insert(0);
        let index = *counter;
        *counter += 1;
        index
    }

    fn record_errors(&mut self, errors: Vec<ConditionErrorMessage>) {
        for error in errors {
            if self.errors.len() >= MAX_ERROR_COLLECTION {
                break;
            }
            self.errors.push(error);
        }
    }
}

/// Recursive-descent parser over a single query string.
///
/// One parser instance serves exactly one `parse` call; it holds mutable
/// lookahead state and is not meant to be shared or reused.
pub struct QueryParser<'a> {
    lexer: Lexer<'a>,
    field_set: &'a FieldSet,
    validator: &'a dyn ValueValidator,
    config: &'a ProcessorConfig,
    state: ParseState,
}

impl<'a> QueryParser<'a> {
    pub fn new(
        input: &'a str,
        field_set: &'a FieldSet,
        validator: &'a dyn ValueValidator,
        config: &'a ProcessorConfig,
    ) -> SyntaxResult<Self> {
        let lexer = Lexer::new(input)?;
        Ok(Self {
            lexer,
            field_set,
            validator,
            config,
            state: ParseState::new(),
        })
    }

    /// Parse the whole query into a root group plus accumulated semantic
    /// errors. A returned `Err` is a fail-fast structural/syntax error and
    /// carries no partial result.
    pub fn parse(mut self) -> SyntaxResult<(Group, Vec<ConditionErrorMessage>)> {
        log_debug!("Starting query parse",
            "fields_registered" => self.field_set.len()
        );

        // A leading '*' switches the root group to OR, unless it prefixes
        // the first sub-group.
        let mut root = Group::new(Logical::And);
        if self.lexer.peek_kind() == TokenKind::Multiply
            && !self.peek_beyond(TokenKind::OpenParen)?
        {
            self.bump()?;
            root = Group::new(Logical::Or);
        }

        self.parse_field_values_pairs(&mut root, "")?;

        if self.lexer.peek_kind() != TokenKind::Eof {
            return Err(ParseError::unexpected_token(
                "'(' or a field name",
                self.lexer.peek(),
            ));
        }

        log_debug!("Query parse completed",
            "fields" => root.field_count(),
            "groups" => root.groups().len(),
            "semantic_errors" => self.state.errors.len(),
            "tokens" => self.lexer.metrics().total_tokens
        );

        Ok((root, self.state.errors))
    }

    fn parse_field_values_pairs(&mut self, group: &mut Group, path: &str) -> SyntaxResult<()> {
        loop {
            match self.lexer.peek_kind() {
                TokenKind::Multiply | TokenKind::OpenParen => self.parse_group(group, path)?,
                TokenKind::Identifier => self.parse_field_pair(group, path)?,
                TokenKind::CloseParen | TokenKind::Eof => return Ok(()),
                _ => {
                    return Err(ParseError::unexpected_token(
                        "'(' or a field name",
                        self.lexer.peek(),
                    ))
                }
            }
        }
    }

    fn parse_group(&mut self, parent: &mut Group, parent_path: &str) -> SyntaxResult<()> {
        let logical = if self.lexer.peek_kind() == TokenKind::Multiply {
            self.bump()?;
            Logical::Or
        } else {
            Logical::And
        };

        let index = self.state.next_group_index(parent_path);
        let path = format!("{}[{}]", parent_path, index);

        if index >= self.config.max_group_count() {
            return Err(ParseError::GroupLimitExceeded {
                path,
                max: self.config.max_group_count(),
            });
        }

        self.state.nesting_level += 1;
        if self.state.nesting_level > self.config.max_nesting_level() {
            return Err(ParseError::NestingLimitExceeded {
                path,
                max: self.config.max_nesting_level(),
            });
        }

        self.match_kind(TokenKind::OpenParen)?;
        let mut child = Group::new(logical);
        self.parse_field_values_pairs(&mut child, &path)?;
        self.match_kind(TokenKind::CloseParen)?;
        if self.lexer.peek_kind() == TokenKind::Semicolon {
            self.bump()?;
        }

        self.state.nesting_level -= 1;
        parent.add_group(child);
        Ok(())
    }

    fn parse_field_pair(&mut self, group: &mut Group, path: &str) -> SyntaxResult<()> {
        let token = self.match_kind(TokenKind::Identifier)?;

        let field_set = self.field_set;
        let Some(field) = field_set.resolve(&token.value) else {
            return Err(ParseError::UnknownField {
                position: token.position(),
                label: token.value,
            });
        };

        let name = field.name().to_string();
        // A repeated mention of a field continues its existing bag, so the
        // per-field cardinality limit spans all mentions in this group.
        let bag = group.remove_field(&name).unwrap_or_default();
        let base_path = format!("{}[{}]", path, name);
        let max_values = field
            .max_values()
            .unwrap_or(self.config.max_values_per_field());

        let validator = self.validator;
        let mut factory = ValuesFactory::new(field, validator, bag, base_path, max_values);
        self.parse_field_values(&mut factory)?;

        let (bag, errors) = factory.finish();
        self.state.record_errors(errors);
        group
            .add_field(name, bag)
            .map_err(|e| ParseError::internal(e.to_string()))?;
        Ok(())
    }

    fn parse_field_values(&mut self, factory: &mut ValuesFactory<'_>) -> SyntaxResult<()> {
        loop {
            self.parse_value_part(factory)?;
            if self.lexer.peek_kind() != TokenKind::Comma {
                break;
            }
            self.bump()?;
        }
        if self.lexer.peek_kind() == TokenKind::Semicolon {
            self.bump()?;
        }
        Ok(())
    }

    fn parse_value_part(&mut self, factory: &mut ValuesFactory<'_>) -> SyntaxResult<()> {
        match self.lexer.peek_kind() {
            TokenKind::Negate => {
                self.bump()?;
                match self.lexer.peek_kind() {
                    TokenKind::OpenBracket | TokenKind::CloseBracket => {
                        self.parse_range(factory, true)
                    }
                    kind if kind.is_stringable() => {
                        if self.peek_beyond(TokenKind::Minus)? {
                            self.parse_range(factory, true)
                        } else {
                            let token = self.match_kind(TokenKind::String)?;
                            factory.add_excluded_simple_value(&token.value);
                            Ok(())
                        }
                    }
                    _ => Err(ParseError::unexpected_token(
                        "a value or range after '!'",
                        self.lexer.peek(),
                    )),
                }
            }
            TokenKind::OpenBracket | TokenKind::CloseBracket => self.parse_range(factory, false),
            TokenKind::LowerThan | TokenKind::GreaterThan => self.parse_comparison(factory),
            TokenKind::Tilde => self.parse_pattern_match(factory),
            kind if kind.is_stringable() => {
                if self.peek_beyond(TokenKind::Minus)? {
                    self.parse_range(factory, false)
                } else {
                    let token = self.match_kind(TokenKind::String)?;
                    factory.add_simple_value(&token.value);
                    Ok(())
                }
            }
            _ => Err(ParseError::unexpected_token("a value", self.lexer.peek())),
        }
    }

    /// Range ::= ("["|"]")? StringValue "-" StringValue ("["|"]")?
    ///
    /// A leading `]` excludes the lower bound, a trailing `[` excludes the
    /// upper bound; both default to inclusive.
    fn parse_range(&mut self, factory: &mut ValuesFactory<'_>, excluded: bool) -> SyntaxResult<()> {
        let mut lower_inclusive = true;
        match self.lexer.peek_kind() {
            TokenKind::OpenBracket => {
                self.bump()?;
            }
            TokenKind::CloseBracket => {
                self.bump()?;
                lower_inclusive = false;
            }
            _ => {}
        }

        let lower = self.match_kind(TokenKind::String)?;
        self.match_kind(TokenKind::Minus)?;
        let upper = self.match_kind(TokenKind::String)?;

        let mut upper_inclusive = true;
        match self.lexer.peek_kind() {
            TokenKind::CloseBracket => {
                self.bump()?;
            }
            TokenKind::OpenBracket => {
                self.bump()?;
                upper_inclusive = false;
            }
            _ => {}
        }

        if excluded {
            factory.add_excluded_range(&lower.value, &upper.value, lower_inclusive, upper_inclusive);
        } else {
            factory.add_range(&lower.value, &upper.value, lower_inclusive, upper_inclusive);
        }
        Ok(())
    }

    /// Comparison ::= ("<"|"<="|"<>"|">"|">=") StringValue
    ///
    /// The lexer emits single-character tokens; `<=`, `>=`, and `<>` are
    /// composed here, and only from byte-adjacent tokens.
    fn parse_comparison(&mut self, factory: &mut ValuesFactory<'_>) -> SyntaxResult<()> {
        let first = self.bump()?;
        let operator = match first.kind {
            TokenKind::LowerThan => {
                if self.lexer.peek_kind() == TokenKind::Equals
                    && first.is_adjacent_to(self.lexer.peek())
                {
                    self.bump()?;
                    CompareOp::LowerThanOrEqual
                } else if self.lexer.peek_kind() == TokenKind::GreaterThan
                    && first.is_adjacent_to(self.lexer.peek())
                {
                    self.bump()?;
                    CompareOp::NotEqual
                } else {
                    CompareOp::LowerThan
                }
            }
            TokenKind::GreaterThan => {
                if self.lexer.peek_kind() == TokenKind::Equals
                    && first.is_adjacent_to(self.lexer.peek())
                {
                    self.bump()?;
                    CompareOp::GreaterThanOrEqual
                } else {
                    CompareOp::GreaterThan
                }
            }
            _ => {
                return Err(ParseError::internal(
                    "comparison parser called on a non-comparison token",
                ))
            }
        };

        let value = self.match_kind(TokenKind::String)?;
        factory.add_comparison(operator, &value.value);
        Ok(())
    }

    /// PatternMatch ::= "~" ("i")? ("!")? ("*"|">"|"<"|"?"|"=") StringValue
    fn parse_pattern_match(&mut self, factory: &mut ValuesFactory<'_>) -> SyntaxResult<()> {
        self.match_kind(TokenKind::Tilde)?;

        let mut case_insensitive = false;
        if self.lexer.peek_kind().is_stringable() && self.lexer.peek().value == "i" {
            self.bump()?;
            case_insensitive = true;
        }

        // One level of '!' only; a second one falls through to the
        // operator expectation below and errors there.
        let negated = if self.lexer.peek_kind() == TokenKind::Negate {
            self.bump()?;
            true
        } else {
            false
        };

        let base = match self.lexer.peek_kind() {
            TokenKind::Multiply => PatternOp::Contains,
            TokenKind::GreaterThan => PatternOp::StartsWith,
            TokenKind::LowerThan => PatternOp::EndsWith,
            TokenKind::QuestionMark => PatternOp::Regex,
            TokenKind::Equals => PatternOp::Equals,
            _ => {
                return Err(ParseError::unexpected_token(
                    "a pattern operator ('*', '>', '<', '?', '=')",
                    self.lexer.peek(),
                ))
            }
        };
        self.bump()?;

        let operator = if negated { base.negated() } else { base };
        let value = self.match_kind(TokenKind::String)?;
        factory.add_pattern_match(operator, &value.value, case_insensitive);
        Ok(())
    }

    // === TOKEN PRIMITIVES ===

    /// Match primitive: stringable expectations accept any stringable
    /// lookahead; punctuation expectations match exactly.
    fn match_kind(&mut self, expected: TokenKind) -> SyntaxResult<Token> {
        if expected.accepts(self.lexer.peek_kind()) {
            self.bump()
        } else {
            Err(ParseError::unexpected_token(
                expected.describe(),
                self.lexer.peek(),
            ))
        }
    }

    fn bump(&mut self) -> SyntaxResult<Token> {
        Ok(self.lexer.advance()?)
    }

    fn peek_beyond(&mut self, kind: TokenKind) -> SyntaxResult<bool> {
        Ok(self.lexer.peek_beyond(kind)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldConfig, FieldSet, FieldSetBuilder, FieldType, TypeValidator, TypedValue};
    use assert_matches::assert_matches;

    fn field_set() -> FieldSet {
        FieldSetBuilder::new("test")
            .field("name", FieldType::Text)
            .field("num", FieldType::Integer)
            .add(FieldConfig::new("first_name", FieldType::Text).with_label("first-name"))
            .build()
    }

    fn parse_with(
        input: &str,
        set: &FieldSet,
        config: &ProcessorConfig,
    ) -> SyntaxResult<(Group, Vec<ConditionErrorMessage>)> {
        QueryParser::new(input, set, &TypeValidator, config)?.parse()
    }

    fn parse(input: &str) -> SyntaxResult<(Group, Vec<ConditionErrorMessage>)> {
        parse_with(input, &field_set(), &ProcessorConfig::default())
    }

    fn parse_ok(input: &str) -> Group {
        let (group, errors) = parse(input).unwrap();
        assert!(errors.is_empty(), "unexpected semantic errors: {:?}", errors);
        group
    }

    #[test]
    fn test_single_field_two_values() {
        let root = parse_ok("name: v1, v2;");

        assert_eq!(root.logical(), Logical::And);
        assert_eq!(root.field_count(), 1);
        let bag = root.field("name").unwrap();
        assert_eq!(
            bag.simple_values(),
            &[
                TypedValue::Text("v1".to_string()),
                TypedValue::Text("v2".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_semicolon_optional() {
        assert_eq!(parse_ok("name: a"), parse_ok("name: a;"));
    }

    #[test]
    fn test_one_entry_per_category() {
        let root = parse_ok("name: a, !b, c-d, !]e-g[, >h, ~*x;");
        let bag = root.field("name").unwrap();

        assert_eq!(bag.simple_values().len(), 1);
        assert_eq!(bag.excluded_simple_values().len(), 1);
        assert_eq!(bag.ranges().len(), 1);
        assert_eq!(bag.excluded_ranges().len(), 1);
        assert_eq!(bag.comparisons().len(), 1);
        assert_eq!(bag.pattern_matchers().len(), 1);

        let excluded = &bag.excluded_ranges()[0];
        assert!(!excluded.lower_inclusive);
        assert!(!excluded.upper_inclusive);
    }

    #[test]
    fn test_range_inclusivity() {
        let root = parse_ok("num: ]1-100[;");
        let range = &root.field("num").unwrap().ranges()[0];
        assert_eq!(range.lower, TypedValue::Integer(1));
        assert_eq!(range.upper, TypedValue::Integer(100));
        assert!(!range.lower_inclusive);
        assert!(!range.upper_inclusive);

        let root = parse_ok("num: 1-100;");
        let range = &root.field("num").unwrap().ranges()[0];
        assert!(range.lower_inclusive);
        assert!(range.upper_inclusive);

        let root = parse_ok("num: [1-100[;");
        let range = &root.field("num").unwrap().ranges()[0];
        assert!(range.lower_inclusive);
        assert!(!range.upper_inclusive);
    }

    #[test]
    fn test_glimpse_disambiguates_range_from_value() {
        let root = parse_ok("num: 1, 2-3, 4;");
        let bag = root.field("num").unwrap();

        assert_eq!(
            bag.simple_values(),
            &[TypedValue::Integer(1), TypedValue::Integer(4)]
        );
        assert_eq!(bag.ranges().len(), 1);
        assert_eq!(bag.ranges()[0].lower, TypedValue::Integer(2));
    }

    #[test]
    fn test_quote_escaping() {
        let root = parse_ok(r#"name: "va""lue";"#);
        assert_eq!(
            root.field("name").unwrap().simple_values(),
            &[TypedValue::Text("va\"lue".to_string())]
        );
    }

    #[test]
    fn test_or_group() {
        let root = parse_ok("*(name: a; num: 1)");

        assert_eq!(root.logical(), Logical::And);
        assert_eq!(root.field_count(), 0);
        assert_eq!(root.groups().len(), 1);

        let child = &root.groups()[0];
        assert_eq!(child.logical(), Logical::Or);
        assert_eq!(child.field_count(), 2);
    }

    #[test]
    fn test_top_level_or_prefix() {
        let (root, _) = parse("* name: a; num: 1;").unwrap();
        assert_eq!(root.logical(), Logical::Or);
        assert_eq!(root.field_count(), 2);
    }

    #[test]
    fn test_nested_groups() {
        let root = parse_ok("name: a; (num: 1; *(name: b))");

        assert_eq!(root.field_count(), 1);
        let child = &root.groups()[0];
        assert_eq!(child.logical(), Logical::And);
        assert_eq!(child.groups()[0].logical(), Logical::Or);
    }

    #[test]
    fn test_empty_group_allowed() {
        let root = parse_ok("()");
        assert_eq!(root.groups().len(), 1);
        assert!(root.groups()[0].is_empty());
    }

    #[test]
    fn test_nesting_limit() {
        let config = ProcessorConfig::default().with_max_nesting_level(1);
        let result = parse_with("((name: a))", &field_set(), &config);

        assert_matches!(
            result,
            Err(ParseError::NestingLimitExceeded { path, max: 1 }) if path == "[0][0]"
        );
    }

    #[test]
    fn test_group_count_limit() {
        let config = ProcessorConfig::default().with_max_group_count(1);
        let result = parse_with("(name: a)(name: b)", &field_set(), &config);

        assert_matches!(
            result,
            Err(ParseError::GroupLimitExceeded { path, max: 1 }) if path == "[1]"
        );
    }

    #[test]
    fn test_group_count_is_per_parent() {
        // Two sub-groups per parent, spread over two parents: fine at
        // limit 2.
        let config = ProcessorConfig::default().with_max_group_count(2);
        let result = parse_with("((name: a)(name: b))((name: c)(name: d))", &field_set(), &config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_field() {
        let result = parse("nofield: 1;");
        assert_matches!(
            result,
            Err(ParseError::UnknownField { label, .. }) if label == "nofield"
        );
    }

    #[test]
    fn test_field_resolved_by_label() {
        let root = parse_ok("first-name: sebastiaan;");
        // Registered under its canonical name
        assert!(root.field("first_name").is_some());
    }

    #[test]
    fn test_value_overflow() {
        let config = ProcessorConfig::default().with_max_values_per_field(2);
        let (root, errors) = parse_with("num: 1, 2, 3;", &field_set(), &config).unwrap();

        let bag = root.field("num").unwrap();
        assert_eq!(bag.simple_values().len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_name.as_deref(), Some("num"));
    }

    #[test]
    fn test_repeated_field_mention_merges() {
        let (root, errors) = parse("name: a; name: b;").unwrap();

        assert!(errors.is_empty());
        assert_eq!(root.field_count(), 1);
        assert_eq!(root.field("name").unwrap().simple_values().len(), 2);
    }

    #[test]
    fn test_repeated_mention_shares_value_limit() {
        let config = ProcessorConfig::default().with_max_values_per_field(2);
        let (root, errors) = parse_with("num: 1, 2; num: 3;", &field_set(), &config).unwrap();

        assert_eq!(root.field("num").unwrap().len(), 2);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_comparisons() {
        let root = parse_ok("num: <5, <=6, >7, >=8, <>9;");
        let comparisons = root.field("num").unwrap().comparisons();

        let operators: Vec<CompareOp> = comparisons.iter().map(|c| c.operator).collect();
        assert_eq!(
            operators,
            vec![
                CompareOp::LowerThan,
                CompareOp::LowerThanOrEqual,
                CompareOp::GreaterThan,
                CompareOp::GreaterThanOrEqual,
                CompareOp::NotEqual,
            ]
        );
        assert_eq!(comparisons[4].value, TypedValue::Integer(9));
    }

    #[test]
    fn test_spaced_comparison_operator_is_error() {
        // '< =' does not compose; the '=' is then an unexpected token
        let result = parse("num: < = 5;");
        assert_matches!(result, Err(ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_pattern_matches() {
        let root = parse_ok("name: ~*foo, ~i>bar, ~!*baz, ~i!?qux, ~=exact, ~<tail;");
        let patterns = root.field("name").unwrap().pattern_matchers();

        assert_eq!(patterns[0].operator, PatternOp::Contains);
        assert!(!patterns[0].case_insensitive);

        assert_eq!(patterns[1].operator, PatternOp::StartsWith);
        assert!(patterns[1].case_insensitive);
        assert_eq!(patterns[1].value, TypedValue::Text("bar".to_string()));

        assert_eq!(patterns[2].operator, PatternOp::NotContains);
        assert_eq!(patterns[3].operator, PatternOp::NotRegex);
        assert!(patterns[3].case_insensitive);

        assert_eq!(patterns[4].operator, PatternOp::Equals);
        assert_eq!(patterns[5].operator, PatternOp::EndsWith);
    }

    #[test]
    fn test_double_negated_pattern_is_error() {
        let result = parse("name: ~!!*x;");
        assert_matches!(result, Err(ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_excluded_range_without_brackets() {
        let root = parse_ok("num: !10-20;");
        let bag = root.field("num").unwrap();
        assert!(bag.ranges().is_empty());
        assert_eq!(bag.excluded_ranges().len(), 1);
    }

    #[test]
    fn test_semantic_errors_do_not_abort() {
        let (root, errors) = parse("num: abc; name: ok;").unwrap();

        // The bad value is recorded, the parse still visits 'name'
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("abc"));
        assert_eq!(
            root.field("name").unwrap().simple_values(),
            &[TypedValue::Text("ok".to_string())]
        );
    }

    #[test]
    fn test_stray_value_is_syntax_error() {
        let result = parse("name: a b;");
        assert_matches!(
            result,
            Err(ParseError::UnexpectedToken { expected, .. })
                if expected.contains("field name")
        );
    }

    #[test]
    fn test_unmatched_close_paren() {
        let result = parse("name: a)");
        assert_matches!(result, Err(ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_unclosed_group() {
        let result = parse("(name: a");
        assert_matches!(
            result,
            Err(ParseError::UnexpectedEnd { expected }) if expected == "')'"
        );
    }

    #[test]
    fn test_missing_value_after_comma() {
        let result = parse("name: a, ;");
        assert_matches!(result, Err(ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_unterminated_string_surfaces_as_lexer_error() {
        let result = parse(r#"name: "abc"#);
        assert_matches!(result, Err(ParseError::Lexer(_)));
    }
}
