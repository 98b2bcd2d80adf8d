//! Typed-value validation
//!
//! The parser never interprets raw value text itself; every accepted token
//! is handed to a [`ValueValidator`], which either returns a normalized
//! [`TypedValue`] or rejects the value with a human-readable reason. The
//! default [`TypeValidator`] parses according to the field's declared
//! [`FieldType`]; storage backends with richer types plug in their own
//! implementation.

use super::{FieldConfig, FieldType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A normalized, typed search value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl TypedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Compare two values of the same variant; `None` when the variants
    /// differ or the type is not orderable (booleans, NaN floats).
    pub fn partial_cmp_same(&self, other: &TypedValue) -> Option<Ordering> {
        match (self, other) {
            (TypedValue::Text(a), TypedValue::Text(b)) => Some(a.cmp(b)),
            (TypedValue::Integer(a), TypedValue::Integer(b)) => Some(a.cmp(b)),
            (TypedValue::Float(a), TypedValue::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(s) => write!(f, "{}", s),
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Float(v) => write!(f, "{}", v),
            TypedValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Rejection of a raw value with a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Pluggable conversion of raw value text into typed values
pub trait ValueValidator {
    fn validate(&self, field: &FieldConfig, raw: &str) -> Result<TypedValue, ValidationError>;
}

/// Default validator parsing raw text according to the field type
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeValidator;

impl ValueValidator for TypeValidator {
    fn validate(&self, field: &FieldConfig, raw: &str) -> Result<TypedValue, ValidationError> {
        match field.value_type() {
            FieldType::Text => Ok(TypedValue::Text(raw.to_string())),
            FieldType::Integer => raw
                .parse::<i64>()
                .map(TypedValue::Integer)
                .map_err(|_| ValidationError::new(format!("'{}' is not a valid integer", raw))),
            FieldType::Float => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(TypedValue::Float)
                .ok_or_else(|| ValidationError::new(format!("'{}' is not a valid number", raw))),
            FieldType::Boolean => match raw {
                "true" | "yes" | "1" => Ok(TypedValue::Boolean(true)),
                "false" | "no" | "0" => Ok(TypedValue::Boolean(false)),
                _ => Err(ValidationError::new(format!(
                    "'{}' is not a valid boolean",
                    raw
                ))),
            },
        }
    }
}
