//! Binary encoder for the DATA.* container format
//!
//! Emits the versioned ("01") layout only; the legacy convention is
//! accepted on read for compatibility but never written.

mod field;

pub use field::write_field;

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use crate::types::{Container, MAGIC_V01};

/// Write a container to a writer: versioned magic, u64 field count, then
/// each field back-to-back with no padding or trailing checksum.
pub fn write<W: Write>(writer: &mut W, container: &Container) -> io::Result<()> {
    writer.write_all(MAGIC_V01)?;
    writer.write_u64::<LittleEndian>(container.len() as u64)?;

    for field in container.fields() {
        write_field(writer, field)?;
    }

    Ok(())
}

/// Write a container to bytes.
pub fn to_bytes(container: &Container) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write(&mut buf, container)?;
    Ok(buf)
}
