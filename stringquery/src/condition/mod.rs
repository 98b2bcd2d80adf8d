//! Condition model: the typed search-condition tree
//!
//! Pure data structures produced by the parser and consumed by storage
//! backends: [`SearchCondition`] at the top, [`Group`] nodes below it, and a
//! [`ValueBag`] per field.

pub mod group;
pub mod values;

pub use group::{DuplicateFieldError, Group, Logical, SearchCondition};
pub use values::{CompareOp, Comparison, PatternMatch, PatternOp, Range, ValueBag};
