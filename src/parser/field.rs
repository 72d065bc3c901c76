//! Per-field binary decoding

use log::trace;

use super::cursor::ByteCursor;
use crate::error::{Result, Section, StarfieldError};
use crate::shape;
use crate::types::{Field, FormatVersion, TypeMarker};

/// Decode one field at the cursor, in declared wire order.
///
/// Layout (little-endian, all size cells u64):
/// type marker ("01" only), name length + name bytes, dim,
/// shape length ("01" reuses dim) + shape extents, element size,
/// then `element_count` f64 values.
pub fn parse_field(cursor: &mut ByteCursor<'_>, version: FormatVersion, index: u64) -> Result<Field> {
    cursor.enter(Section::Field(index));

    let marker = if version.has_type_marker() {
        let raw = cursor.read_u64()?;
        let marker =
            TypeMarker::from_u64(raw).ok_or(StarfieldError::InvalidTypeMarker(raw))?;
        Some(marker)
    } else {
        None
    };

    let name_len = cursor.read_u64()?;
    let name_offset = cursor.position();
    let name_bytes = cursor.take(name_len)?;
    let name = std::str::from_utf8(name_bytes)
        .map_err(|_| StarfieldError::InvalidUtf8 {
            offset: name_offset,
        })?
        .to_string();

    let dim = cursor.read_u64()?;
    let shape_len = if version.has_explicit_shape_len() {
        cursor.read_u64()?
    } else {
        dim
    };
    let shape = cursor.read_u64_vec(shape_len)?;
    let element_size = cursor.read_u64()?;

    let element_count = shape::element_count(&shape);
    let values = cursor.read_f64_vec(element_count)?;

    trace!("field {}: {:?} shape {:?}", index, name, shape);

    Field::from_wire(name, marker, dim, shape, element_size, values)
}
