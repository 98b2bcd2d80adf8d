//! Configuration module for the query processor
//!
//! Compile-time security bounds live in [`constants`]; caller-facing runtime
//! limits are carried by [`ProcessorConfig`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;

use constants::compile_time::syntax::{
    DEFAULT_MAX_GROUP_COUNT, DEFAULT_MAX_NESTING_LEVEL, MAX_NESTING_LEVEL_CAP,
};
use constants::compile_time::values::DEFAULT_MAX_VALUES_PER_FIELD;
use serde::{Deserialize, Serialize};

/// Read-only structural limits supplied by the caller before parsing begins.
///
/// The nesting level is clamped against a compile-time cap so caller
/// configuration can never unbound parser recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    max_nesting_level: usize,
    max_group_count: usize,
    max_values_per_field: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_nesting_level: DEFAULT_MAX_NESTING_LEVEL,
            max_group_count: DEFAULT_MAX_GROUP_COUNT,
            max_values_per_field: DEFAULT_MAX_VALUES_PER_FIELD,
        }
    }
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound on group nesting depth, clamped to the compile-time cap
    pub fn with_max_nesting_level(mut self, level: usize) -> Self {
        self.max_nesting_level = level.min(MAX_NESTING_LEVEL_CAP);
        self
    }

    /// Bound on direct sibling sub-groups within one parent group
    pub fn with_max_group_count(mut self, count: usize) -> Self {
        self.max_group_count = count;
        self
    }

    /// Bound on accepted entries per field value list
    pub fn with_max_values_per_field(mut self, count: usize) -> Self {
        self.max_values_per_field = count;
        self
    }

    pub fn max_nesting_level(&self) -> usize {
        self.max_nesting_level
    }

    pub fn max_group_count(&self) -> usize {
        self.max_group_count
    }

    pub fn max_values_per_field(&self) -> usize {
        self.max_values_per_field
    }
}
