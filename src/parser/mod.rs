//! Binary decoder for the DATA.* container format
//!
//! Strictly sequential: each field's framing depends on every prior field
//! having been consumed, so decode is a single pass over the byte slice.

mod cursor;
mod field;

pub use cursor::ByteCursor;
pub use field::parse_field;

use log::debug;

use crate::error::{Result, Section, StarfieldError};
use crate::types::{Container, FormatVersion};

/// Decode a container from a packed binary stream.
///
/// Recognizes both magic variants, reads the u64 field count, then decodes
/// `field_count` fields back-to-back. Fails at the first offending field;
/// trailing bytes after the declared count are ignored.
pub fn parse(bytes: &[u8]) -> Result<Container> {
    let (version, magic_len) =
        FormatVersion::detect(bytes).ok_or(StarfieldError::InvalidMagic)?;

    let mut cursor = ByteCursor::new(bytes);
    cursor.skip(magic_len)?;

    cursor.enter(Section::FieldCount);
    let field_count = cursor.read_u64()?;
    debug!("decoding {:?} container with {} fields", version, field_count);

    let mut fields = Vec::new();
    for index in 0..field_count {
        fields.push(parse_field(&mut cursor, version, index)?);
    }

    Ok(Container::from_parts(version, fields))
}
