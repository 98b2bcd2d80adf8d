//! Field-set definitions and label resolution
//!
//! A [`FieldSet`] is the read-only registry the parser consults for every
//! field mentioned in a query: it resolves an external label to the field's
//! canonical configuration, which carries the value type and an optional
//! per-field override of the value-count limit.

pub mod validator;

pub use validator::{TypeValidator, TypedValue, ValidationError, ValueValidator};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Value types a field can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Configuration of a single registered field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    name: String,
    value_type: FieldType,
    label: Option<String>,
    max_values: Option<usize>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, value_type: FieldType) -> Self {
        Self {
            name: name.into(),
            value_type,
            label: None,
            max_values: None,
        }
    }

    /// External label resolving to this field, in addition to its name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Per-field override of the configured max-values-per-field limit
    pub fn with_max_values(mut self, max_values: usize) -> Self {
        self.max_values = Some(max_values);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> FieldType {
        self.value_type
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn max_values(&self) -> Option<usize> {
        self.max_values
    }
}

/// Read-only set of registered fields with a precomputed label mapping
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    name: String,
    fields: BTreeMap<String, FieldConfig>,
    labels: HashMap<String, String>,
}

impl FieldSet {
    /// Resolve an external label (or canonical name) to its field config
    pub fn resolve(&self, label: &str) -> Option<&FieldConfig> {
        let name = self.labels.get(label)?;
        self.fields.get(name)
    }

    /// Look up a field by canonical name only
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder assembling a [`FieldSet`] and its label mapping
#[derive(Debug, Default)]
pub struct FieldSetBuilder {
    name: String,
    fields: Vec<FieldConfig>,
}

impl FieldSetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Register a field; a later field with the same name replaces it
    pub fn add(mut self, field: FieldConfig) -> Self {
        self.fields.retain(|f| f.name != field.name);
        self.fields.push(field);
        self
    }

    /// Shorthand for registering a plain field
    pub fn field(self, name: impl Into<String>, value_type: FieldType) -> Self {
        self.add(FieldConfig::new(name, value_type))
    }

    pub fn build(self) -> FieldSet {
        let mut fields = BTreeMap::new();
        let mut labels = HashMap::new();

        for field in self.fields {
            labels.insert(field.name.clone(), field.name.clone());
            if let Some(label) = &field.label {
                labels.insert(label.clone(), field.name.clone());
            }
            fields.insert(field.name.clone(), field);
        }

        FieldSet {
            name: self.name,
            fields,
            labels,
        }
    }
}
