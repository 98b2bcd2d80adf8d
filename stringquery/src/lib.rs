//! StringQuery: a compact textual query language parsed into typed
//! search-condition trees.
//!
//! ```
//! use stringquery::{FieldSetBuilder, FieldType, StringQueryProcessor};
//!
//! let field_set = FieldSetBuilder::new("users")
//!     .field("name", FieldType::Text)
//!     .field("age", FieldType::Integer)
//!     .build();
//!
//! let processor = StringQueryProcessor::new(&field_set);
//! let condition = processor.process("name: alice, bob; age: 25-35;").unwrap();
//!
//! assert_eq!(condition.root().field_count(), 2);
//! ```

// Internal modules
pub mod condition;
pub mod config;
pub mod fields;
pub mod ingestion;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod processor;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use condition::{
    CompareOp, Comparison, Group, Logical, PatternMatch, PatternOp, Range, SearchCondition,
    ValueBag,
};
pub use config::ProcessorConfig;
pub use fields::{
    FieldConfig, FieldSet, FieldSetBuilder, FieldType, TypeValidator, TypedValue, ValidationError,
    ValueValidator,
};
pub use processor::StringQueryProcessor;
pub use syntax::{ConditionErrorMessage, InvalidSearchConditionError, ParseError};
