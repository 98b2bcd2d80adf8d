//! Per-field value containers
//!
//! A [`ValueBag`] holds six disjoint, ordered sequences of value entries for
//! one field. The bag is dumb data: cardinality enforcement lives in the
//! value ingestion layer, not here.

use crate::fields::TypedValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    LowerThan,          // <
    LowerThanOrEqual,   // <=
    GreaterThan,        // >
    GreaterThanOrEqual, // >=
    NotEqual,           // <>
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::LowerThan => "<",
            CompareOp::LowerThanOrEqual => "<=",
            CompareOp::GreaterThan => ">",
            CompareOp::GreaterThanOrEqual => ">=",
            CompareOp::NotEqual => "<>",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pattern-match operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternOp {
    Contains,      // ~*
    StartsWith,    // ~>
    EndsWith,      // ~<
    Regex,         // ~?
    Equals,        // ~=
    NotContains,   // ~!*
    NotStartsWith, // ~!>
    NotEndsWith,   // ~!<
    NotRegex,      // ~!?
    NotEquals,     // ~!=
}

impl PatternOp {
    /// The NOT_-prefixed counterpart of a base operator
    pub fn negated(self) -> Self {
        match self {
            PatternOp::Contains => PatternOp::NotContains,
            PatternOp::StartsWith => PatternOp::NotStartsWith,
            PatternOp::EndsWith => PatternOp::NotEndsWith,
            PatternOp::Regex => PatternOp::NotRegex,
            PatternOp::Equals => PatternOp::NotEquals,
            negated => negated,
        }
    }

    pub fn is_negated(self) -> bool {
        matches!(
            self,
            PatternOp::NotContains
                | PatternOp::NotStartsWith
                | PatternOp::NotEndsWith
                | PatternOp::NotRegex
                | PatternOp::NotEquals
        )
    }
}

/// A range entry with per-bound inclusivity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub lower: TypedValue,
    pub upper: TypedValue,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl Range {
    pub fn new(lower: TypedValue, upper: TypedValue) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive: true,
            upper_inclusive: true,
        }
    }

    pub fn with_bounds(
        lower: TypedValue,
        upper: TypedValue,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }
}

/// A comparison entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub operator: CompareOp,
    pub value: TypedValue,
}

/// A pattern-match entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub operator: PatternOp,
    pub value: TypedValue,
    pub case_insensitive: bool,
}

/// Container for all value entries of one field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueBag {
    simple_values: Vec<TypedValue>,
    excluded_simple_values: Vec<TypedValue>,
    ranges: Vec<Range>,
    excluded_ranges: Vec<Range>,
    comparisons: Vec<Comparison>,
    pattern_matchers: Vec<PatternMatch>,
}

impl ValueBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entry count across all six sequences
    pub fn len(&self) -> usize {
        self.simple_values.len()
            + self.excluded_simple_values.len()
            + self.ranges.len()
            + self.excluded_ranges.len()
            + self.comparisons.len()
            + self.pattern_matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_simple_value(&mut self, value: TypedValue) {
        self.simple_values.push(value);
    }

    pub fn add_excluded_simple_value(&mut self, value: TypedValue) {
        self.excluded_simple_values.push(value);
    }

    pub fn add_range(&mut self, range: Range) {
        self.ranges.push(range);
    }

    pub fn add_excluded_range(&mut self, range: Range) {
        self.excluded_ranges.push(range);
    }

    pub fn add_comparison(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn add_pattern_match(&mut self, pattern: PatternMatch) {
        self.pattern_matchers.push(pattern);
    }

    pub fn simple_values(&self) -> &[TypedValue] {
        &self.simple_values
    }

    pub fn excluded_simple_values(&self) -> &[TypedValue] {
        &self.excluded_simple_values
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn excluded_ranges(&self) -> &[Range] {
        &self.excluded_ranges
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn pattern_matchers(&self) -> &[PatternMatch] {
        &self.pattern_matchers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_counts_all_sequences() {
        let mut bag = ValueBag::new();
        assert!(bag.is_empty());

        bag.add_simple_value(TypedValue::Integer(1));
        bag.add_excluded_simple_value(TypedValue::Integer(2));
        bag.add_range(Range::new(TypedValue::Integer(1), TypedValue::Integer(5)));
        bag.add_excluded_range(Range::new(TypedValue::Integer(7), TypedValue::Integer(9)));
        bag.add_comparison(Comparison {
            operator: CompareOp::GreaterThan,
            value: TypedValue::Integer(3),
        });
        bag.add_pattern_match(PatternMatch {
            operator: PatternOp::Contains,
            value: TypedValue::Text("x".into()),
            case_insensitive: false,
        });

        assert_eq!(bag.len(), 6);
    }

    #[test]
    fn test_entry_order_preserved() {
        let mut bag = ValueBag::new();
        bag.add_simple_value(TypedValue::Text("first".into()));
        bag.add_simple_value(TypedValue::Text("second".into()));

        assert_eq!(bag.simple_values()[0], TypedValue::Text("first".into()));
        assert_eq!(bag.simple_values()[1], TypedValue::Text("second".into()));
    }

    #[test]
    fn test_pattern_negation() {
        assert_eq!(PatternOp::Contains.negated(), PatternOp::NotContains);
        assert_eq!(PatternOp::Regex.negated(), PatternOp::NotRegex);
        // Already-negated operators stay unchanged
        assert_eq!(PatternOp::NotEquals.negated(), PatternOp::NotEquals);
        assert!(PatternOp::NotStartsWith.is_negated());
        assert!(!PatternOp::EndsWith.is_negated());
    }

    #[test]
    fn test_range_default_inclusivity() {
        let range = Range::new(TypedValue::Integer(1), TypedValue::Integer(10));
        assert!(range.lower_inclusive);
        assert!(range.upper_inclusive);
    }
}
