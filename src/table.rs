//! Lookup table over a decoded container

use std::collections::HashMap;

use crate::error::{Result, StarfieldError};
use crate::types::{Container, Field};

/// Read-only lookup view over a container's fields, by ordinal index or
/// by name.
///
/// Owns nothing beyond a name-to-position map; value tensors are neither
/// converted nor copied. Names need not be unique — lookup by name
/// returns the field appearing first in stream order.
pub struct FieldTable<'a> {
    fields: &'a [Field],
    by_name: HashMap<&'a str, usize>,
}

impl<'a> FieldTable<'a> {
    pub fn new(container: &'a Container) -> Self {
        let fields = container.fields();
        let mut by_name = HashMap::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            by_name.entry(field.name()).or_insert(position);
        }
        FieldTable { fields, by_name }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at an ordinal position; fails for `index >= len()`.
    pub fn by_index(&self, index: usize) -> Result<&'a Field> {
        self.fields
            .get(index)
            .ok_or(StarfieldError::IndexOutOfRange {
                index,
                count: self.fields.len(),
            })
    }

    /// First field with this name, or `None`. Absence is an ordinary
    /// outcome, not an error.
    pub fn by_name(&self, name: &str) -> Option<&'a Field> {
        self.by_name.get(name).map(|&position| &self.fields[position])
    }
}
