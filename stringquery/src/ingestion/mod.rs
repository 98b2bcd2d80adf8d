//! Value ingestion layer
//!
//! A [`ValuesFactory`] is scoped to one field for the duration of building
//! its [`ValueBag`]. It converts raw string tokens into typed entries via
//! the external validator, enforces the per-field cardinality limit, and
//! records semantic errors without ever aborting the parse. The first entry
//! past the limit records an overflow error; everything after it for the
//! same field is dropped silently so one oversized list cannot flood the
//! report.

use crate::condition::{Comparison, CompareOp, PatternMatch, PatternOp, Range, ValueBag};
use crate::fields::{FieldConfig, TypedValue, ValueValidator};
use crate::log_debug;
use crate::syntax::error::ConditionErrorMessage;
use std::cmp::Ordering;

/// Per-field ingestion of raw values into a [`ValueBag`]
pub struct ValuesFactory<'a> {
    field: &'a FieldConfig,
    validator: &'a dyn ValueValidator,
    bag: ValueBag,
    errors: Vec<ConditionErrorMessage>,
    base_path: String,
    max_values: usize,
    count: usize,
    overflowed: bool,
}

impl<'a> ValuesFactory<'a> {
    /// Start ingestion for `field`, continuing an existing bag when the
    /// field was already mentioned in the same group.
    pub fn new(
        field: &'a FieldConfig,
        validator: &'a dyn ValueValidator,
        bag: ValueBag,
        base_path: String,
        max_values: usize,
    ) -> Self {
        let count = bag.len();
        Self {
            field,
            validator,
            bag,
            errors: Vec::new(),
            base_path,
            max_values,
            count,
            overflowed: false,
        }
    }

    /// Finish ingestion, handing back the bag and the recorded errors
    pub fn finish(self) -> (ValueBag, Vec<ConditionErrorMessage>) {
        log_debug!("Field value ingestion finished",
            "field" => self.field.name(),
            "entries" => self.bag.len(),
            "errors" => self.errors.len()
        );
        (self.bag, self.errors)
    }

    pub fn add_simple_value(&mut self, raw: &str) {
        if !self.has_capacity() {
            return;
        }
        if let Some(value) = self.convert(raw) {
            self.bag.add_simple_value(value);
            self.count += 1;
        }
    }

    pub fn add_excluded_simple_value(&mut self, raw: &str) {
        if !self.has_capacity() {
            return;
        }
        if let Some(value) = self.convert(raw) {
            self.bag.add_excluded_simple_value(value);
            self.count += 1;
        }
    }

    pub fn add_range(
        &mut self,
        lower_raw: &str,
        upper_raw: &str,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) {
        self.add_range_entry(lower_raw, upper_raw, lower_inclusive, upper_inclusive, false);
    }

    pub fn add_excluded_range(
        &mut self,
        lower_raw: &str,
        upper_raw: &str,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) {
        self.add_range_entry(lower_raw, upper_raw, lower_inclusive, upper_inclusive, true);
    }

    pub fn add_comparison(&mut self, operator: CompareOp, raw: &str) {
        if !self.has_capacity() {
            return;
        }
        if let Some(value) = self.convert(raw) {
            self.bag.add_comparison(Comparison { operator, value });
            self.count += 1;
        }
    }

    pub fn add_pattern_match(&mut self, operator: PatternOp, raw: &str, case_insensitive: bool) {
        if !self.has_capacity() {
            return;
        }
        if let Some(value) = self.convert(raw) {
            self.bag.add_pattern_match(PatternMatch {
                operator,
                value,
                case_insensitive,
            });
            self.count += 1;
        }
    }

    // === INTERNALS ===

    fn add_range_entry(
        &mut self,
        lower_raw: &str,
        upper_raw: &str,
        lower_inclusive: bool,
        upper_inclusive: bool,
        excluded: bool,
    ) {
        if !self.has_capacity() {
            return;
        }

        let lower = self.convert(lower_raw);
        let upper = self.convert(upper_raw);
        let (Some(lower), Some(upper)) = (lower, upper) else {
            // A rejected bound rejects the whole range entry
            return;
        };

        if lower.partial_cmp_same(&upper) == Some(Ordering::Greater) {
            self.record_error(format!(
                "invalid range: lower bound '{}' is not lower than upper bound '{}'",
                lower_raw, upper_raw
            ));
            return;
        }

        let range = Range::with_bounds(lower, upper, lower_inclusive, upper_inclusive);
        if excluded {
            self.bag.add_excluded_range(range);
        } else {
            self.bag.add_range(range);
        }
        self.count += 1;
    }

    /// Cardinality check, run before every entry
    fn has_capacity(&mut self) -> bool {
        if self.overflowed {
            return false;
        }
        if self.count >= self.max_values {
            self.overflowed = true;
            self.record_error(format!(
                "field accepts no more than {} values",
                self.max_values
            ));
            return false;
        }
        true
    }

    fn convert(&mut self, raw: &str) -> Option<TypedValue> {
        match self.validator.validate(self.field, raw) {
            Ok(value) => Some(value),
            Err(rejection) => {
                self.record_error(format!("invalid value \"{}\": {}", raw, rejection));
                None
            }
        }
    }

    fn record_error(&mut self, message: String) {
        self.errors.push(ConditionErrorMessage::for_field(
            self.field.name(),
            self.entry_path(),
            message,
        ));
    }

    fn entry_path(&self) -> String {
        format!("{}[{}]", self.base_path, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldConfig, FieldType, TypeValidator};

    fn factory<'a>(field: &'a FieldConfig, max_values: usize) -> ValuesFactory<'a> {
        ValuesFactory::new(
            field,
            &TypeValidator,
            ValueBag::new(),
            "[f]".to_string(),
            max_values,
        )
    }

    #[test]
    fn test_simple_value_ingestion() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut factory = factory(&field, 10);

        factory.add_simple_value("1");
        factory.add_excluded_simple_value("2");

        let (bag, errors) = factory.finish();
        assert!(errors.is_empty());
        assert_eq!(bag.simple_values(), &[TypedValue::Integer(1)]);
        assert_eq!(bag.excluded_simple_values(), &[TypedValue::Integer(2)]);
    }

    #[test]
    fn test_rejected_value_recorded_and_skipped() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut factory = factory(&field, 10);

        factory.add_simple_value("abc");
        factory.add_simple_value("2");

        let (bag, errors) = factory.finish();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_name.as_deref(), Some("f"));
        assert_eq!(errors[0].path, "[f][0]");
        assert!(errors[0].message.contains("abc"));
        // The rejected value occupies no slot
        assert_eq!(bag.simple_values(), &[TypedValue::Integer(2)]);
    }

    #[test]
    fn test_overflow_errors_once_then_silent() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut factory = factory(&field, 2);

        factory.add_simple_value("1");
        factory.add_simple_value("2");
        factory.add_simple_value("3");
        factory.add_simple_value("4");

        let (bag, errors) = factory.finish();
        assert_eq!(bag.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("no more than 2"));
    }

    #[test]
    fn test_range_with_bad_bound_rejected_whole() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut factory = factory(&field, 10);

        factory.add_range("x", "10", true, true);

        let (bag, errors) = factory.finish();
        assert!(bag.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_range_order_violation() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut factory = factory(&field, 10);

        factory.add_range("10", "1", true, true);
        factory.add_range("1", "10", true, true);

        let (bag, errors) = factory.finish();
        assert_eq!(bag.ranges().len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("not lower than"));
    }

    #[test]
    fn test_range_order_not_checked_across_text() {
        // Text bounds compare lexicographically and are checked too
        let field = FieldConfig::new("f", FieldType::Text);
        let mut factory = factory(&field, 10);
        factory.add_range("b", "a", true, true);

        let (bag, errors) = factory.finish();
        assert!(bag.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_counting_continues_from_existing_bag() {
        let field = FieldConfig::new("f", FieldType::Integer);
        let mut bag = ValueBag::new();
        bag.add_simple_value(TypedValue::Integer(1));

        let mut factory =
            ValuesFactory::new(&field, &TypeValidator, bag, "[f]".to_string(), 2);
        factory.add_simple_value("2");
        factory.add_simple_value("3");

        let (bag, errors) = factory.finish();
        assert_eq!(bag.len(), 2);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_comparison_and_pattern_ingestion() {
        let field = FieldConfig::new("f", FieldType::Text);
        let mut factory = factory(&field, 10);

        factory.add_comparison(CompareOp::GreaterThan, "m");
        factory.add_pattern_match(PatternOp::Contains, "foo", true);

        let (bag, errors) = factory.finish();
        assert!(errors.is_empty());
        assert_eq!(bag.comparisons()[0].operator, CompareOp::GreaterThan);
        let pattern = &bag.pattern_matchers()[0];
        assert_eq!(pattern.operator, PatternOp::Contains);
        assert!(pattern.case_insensitive);
    }
}
