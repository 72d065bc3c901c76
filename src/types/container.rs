//! The decoded container: header version plus ordered field sequence

use super::{Field, FormatVersion};
use crate::table::FieldTable;

/// A full decoded or to-be-encoded unit: header version and fields in
/// insertion order. Order is semantically meaningful for positional
/// consumers and is preserved exactly.
///
/// A container is constructed once (by a decoder, or field-by-field by a
/// caller about to encode) and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    version: FormatVersion,
    fields: Vec<Field>,
}

impl Container {
    /// Build a container for encoding. The writer only emits the "01"
    /// layout, so built containers are versioned.
    pub fn new(fields: Vec<Field>) -> Self {
        Container {
            version: FormatVersion::V01,
            fields,
        }
    }

    pub(crate) fn from_parts(version: FormatVersion, fields: Vec<Field>) -> Self {
        Container { version, fields }
    }

    /// The wire convention this container was decoded from (or will be
    /// encoded as).
    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Fields in stream order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the lookup view over this container.
    pub fn table(&self) -> FieldTable<'_> {
        FieldTable::new(self)
    }
}
