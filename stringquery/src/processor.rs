//! Top-level query processing
//!
//! [`StringQueryProcessor`] ties the pieces together: it owns the read-only
//! configuration, borrows the field set and validator, and turns one input
//! string into one [`SearchCondition`] per call. Every `process` call runs
//! with its own lexer and parse state, so a single processor can be reused
//! sequentially for any number of queries without state leaking between
//! them.

use crate::condition::{Group, Logical, SearchCondition};
use crate::config::ProcessorConfig;
use crate::fields::{FieldSet, TypeValidator, ValueValidator};
use crate::logging::codes;
use crate::syntax::{InvalidSearchConditionError, QueryParser};
use crate::{log_debug, log_error, log_success};

/// Translates StringQuery text into typed search conditions
pub struct StringQueryProcessor<'a> {
    field_set: &'a FieldSet,
    validator: &'a dyn ValueValidator,
    config: ProcessorConfig,
}

impl<'a> StringQueryProcessor<'a> {
    /// Processor over `field_set` with default limits and the type-driven
    /// default validator
    pub fn new(field_set: &'a FieldSet) -> Self {
        Self {
            field_set,
            validator: &TypeValidator,
            config: ProcessorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_validator(mut self, validator: &'a dyn ValueValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Process one query string into a search condition.
    ///
    /// Input that is empty after trimming yields an empty root group rather
    /// than an error. Otherwise the call either returns a fully built
    /// condition tree, or fails with the aggregated error report: exactly
    /// one structural/syntax entry, or one-or-more semantic entries.
    pub fn process(&self, input: &str) -> Result<SearchCondition, InvalidSearchConditionError> {
        log_debug!("Processing string query",
            "field_set" => self.field_set.name(),
            "input_bytes" => input.len()
        );

        if input.trim().is_empty() {
            return Ok(SearchCondition::new(
                self.field_set.name(),
                Group::new(Logical::And),
            ));
        }

        let parser = match QueryParser::new(input, self.field_set, self.validator, &self.config) {
            Ok(parser) => parser,
            Err(error) => {
                log_error!(error.error_code(), "Query rejected before parsing",
                    "error" => error
                );
                return Err(error.into());
            }
        };

        match parser.parse() {
            Ok((root, errors)) if errors.is_empty() => {
                log_success!(codes::success::CONDITION_BUILT,
                    "Search condition built",
                    "fields" => root.field_count(),
                    "groups" => root.groups().len()
                );
                Ok(SearchCondition::new(self.field_set.name(), root))
            }
            Ok((_, errors)) => {
                log_error!(codes::values::INVALID_VALUE,
                    "Query produced semantic errors",
                    "error_count" => errors.len()
                );
                Err(InvalidSearchConditionError::new(errors))
            }
            Err(error) => {
                log_error!(error.error_code(), "Query parse failed",
                    "error" => error
                );
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldConfig, FieldSetBuilder, FieldType};

    fn field_set() -> FieldSet {
        FieldSetBuilder::new("users")
            .field("name", FieldType::Text)
            .field("age", FieldType::Integer)
            .add(FieldConfig::new("tags", FieldType::Text).with_max_values(2))
            .build()
    }

    #[test]
    fn test_empty_input_yields_empty_condition() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        for input in ["", "   ", "\n\t  \n"] {
            let condition = processor.process(input).unwrap();
            assert!(condition.is_empty());
            assert_eq!(condition.field_set(), "users");
        }
    }

    #[test]
    fn test_successful_processing() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        let condition = processor.process("name: alice; age: 30-40;").unwrap();
        assert_eq!(condition.root().field_count(), 2);
        assert_eq!(condition.root().logical(), Logical::And);
    }

    #[test]
    fn test_structural_failure_reports_single_entry() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        let error = processor.process("nofield: 1;").unwrap_err();
        assert_eq!(error.len(), 1);
        assert_eq!(error.errors()[0].field_name.as_deref(), Some("nofield"));
    }

    #[test]
    fn test_semantic_failures_all_reported() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        let error = processor.process("age: x, y, 30;").unwrap_err();
        assert_eq!(error.len(), 2);
        assert!(error.errors().iter().all(|e| e.field_name.as_deref() == Some("age")));
    }

    #[test]
    fn test_per_field_max_values_override() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        let error = processor.process("tags: a, b, c;").unwrap_err();
        assert_eq!(error.len(), 1);
        assert!(error.errors()[0].message.contains("no more than 2"));
    }

    #[test]
    fn test_configured_limits_applied() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set)
            .with_config(ProcessorConfig::default().with_max_nesting_level(1));

        let error = processor.process("((name: a))").unwrap_err();
        assert_eq!(error.len(), 1);
        assert_eq!(error.errors()[0].path, "[0][0]");
    }

    #[test]
    fn test_idempotent_processing() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);
        let input = "name: a, !b; (age: ]1-9[; *(name: ~*x))";

        let first = processor.process(input).unwrap();
        let second = processor.process(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_condition_serde_round_trip() {
        let set = field_set();
        let processor = StringQueryProcessor::new(&set);

        let condition = processor
            .process("name: alice, ~i>al; age: <=42, !10-20;")
            .unwrap();

        let json = serde_json::to_string(&condition).unwrap();
        let restored: SearchCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(condition, restored);
    }

    #[test]
    fn test_custom_validator() {
        use crate::fields::{FieldConfig, TypedValue, ValidationError, ValueValidator};

        struct Uppercasing;

        impl ValueValidator for Uppercasing {
            fn validate(
                &self,
                _field: &FieldConfig,
                raw: &str,
            ) -> Result<TypedValue, ValidationError> {
                Ok(TypedValue::Text(raw.to_uppercase()))
            }
        }

        let set = field_set();
        let validator = Uppercasing;
        let processor = StringQueryProcessor::new(&set).with_validator(&validator);

        let condition = processor.process("name: alice;").unwrap();
        assert_eq!(
            condition.root().field("name").unwrap().simple_values(),
            &[TypedValue::Text("ALICE".to_string())]
        );
    }
}
