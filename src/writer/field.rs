//! Per-field binary encoding

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::types::{Field, TypeMarker};

/// Write one field in the versioned layout.
///
/// `dim` is emitted as the shape's length (the versioned layout cannot
/// express a legacy stream's disagreeing `dim`), and `element_size` comes
/// from the record so versioned streams re-encode byte-identically. A
/// record without a marker (legacy-decoded) is written as `array`.
pub fn write_field<W: Write>(writer: &mut W, field: &Field) -> io::Result<()> {
    let marker = field.type_marker().unwrap_or(TypeMarker::Array);
    writer.write_u64::<LittleEndian>(marker as u64)?;

    writer.write_u64::<LittleEndian>(field.name().len() as u64)?;
    writer.write_all(field.name().as_bytes())?;

    writer.write_u64::<LittleEndian>(field.shape().len() as u64)?;
    for &extent in field.shape() {
        writer.write_u64::<LittleEndian>(extent)?;
    }

    writer.write_u64::<LittleEndian>(field.element_size())?;
    for &value in field.values() {
        writer.write_f64::<LittleEndian>(value)?;
    }

    Ok(())
}
