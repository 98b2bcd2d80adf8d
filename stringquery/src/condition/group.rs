//! Condition tree nodes
//!
//! A [`Group`] is one nesting level of the condition tree: a logical mode,
//! an ordered sequence of child groups, and a mapping from field name to its
//! [`ValueBag`]. The tree is pure data with invariant-preserving mutators;
//! no validation logic lives here.

use super::values::ValueBag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical combination mode of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Logical {
    And,
    Or,
}

/// Attempt to register a field name twice in one group
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{0}' is already present in this group")]
pub struct DuplicateFieldError(pub String);

/// One nesting level of the condition tree.
///
/// The logical mode is fixed at construction. A field name appears at most
/// once per group; [`Group::add_field`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    logical: Logical,
    fields: BTreeMap<String, ValueBag>,
    groups: Vec<Group>,
}

impl Group {
    pub fn new(logical: Logical) -> Self {
        Self {
            logical,
            fields: BTreeMap::new(),
            groups: Vec::new(),
        }
    }

    pub fn logical(&self) -> Logical {
        self.logical
    }

    /// Register a field's value bag; fails if the field already exists
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        bag: ValueBag,
    ) -> Result<(), DuplicateFieldError> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(DuplicateFieldError(name));
        }
        self.fields.insert(name, bag);
        Ok(())
    }

    /// Take a field's bag out of the group, if present
    pub fn remove_field(&mut self, name: &str) -> Option<ValueBag> {
        self.fields.remove(name)
    }

    /// Append a child group in encounter order
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn field(&self, name: &str) -> Option<&ValueBag> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &ValueBag)> {
        self.fields.iter().map(|(name, bag)| (name.as_str(), bag))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Whether this group holds no fields and no sub-groups
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.is_empty()
    }
}

/// Top-level parse result: the root group plus the field set it was
/// resolved against. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCondition {
    field_set: String,
    root: Group,
}

impl SearchCondition {
    pub fn new(field_set: impl Into<String>, root: Group) -> Self {
        Self {
            field_set: field_set.into(),
            root,
        }
    }

    /// Name of the field set this condition was parsed against
    pub fn field_set(&self) -> &str {
        &self.field_set
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::TypedValue;
    use assert_matches::assert_matches;

    #[test]
    fn test_duplicate_field_rejected() {
        let mut group = Group::new(Logical::And);
        assert!(group.add_field("name", ValueBag::new()).is_ok());
        assert_matches!(
            group.add_field("name", ValueBag::new()),
            Err(DuplicateFieldError(name)) if name == "name"
        );
    }

    #[test]
    fn test_remove_then_add() {
        let mut group = Group::new(Logical::And);
        let mut bag = ValueBag::new();
        bag.add_simple_value(TypedValue::Integer(1));
        group.add_field("id", bag).unwrap();

        let mut bag = group.remove_field("id").unwrap();
        bag.add_simple_value(TypedValue::Integer(2));
        group.add_field("id", bag).unwrap();

        assert_eq!(group.field("id").unwrap().len(), 2);
    }

    #[test]
    fn test_groups_keep_encounter_order() {
        let mut root = Group::new(Logical::And);
        root.add_group(Group::new(Logical::Or));
        root.add_group(Group::new(Logical::And));

        assert_eq!(root.groups().len(), 2);
        assert_eq!(root.groups()[0].logical(), Logical::Or);
        assert_eq!(root.groups()[1].logical(), Logical::And);
    }

    #[test]
    fn test_empty_condition() {
        let condition = SearchCondition::new("users", Group::new(Logical::And));
        assert!(condition.is_empty());
        assert_eq!(condition.field_set(), "users");
    }
}
