//! Text decoder for the DATA.* container format
//!
//! The same logical model as the binary layout, one value per line. The
//! decoder is handed an already-tokenized sequence; [`tokenize`] covers
//! the common case of a raw text dump.

mod cursor;
mod field;

pub use cursor::TokenCursor;
pub use field::parse_field;

use log::debug;

use crate::error::{Result, Section, StarfieldError};
use crate::types::{Container, FormatVersion};

/// Split a raw text dump into trimmed line tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.lines().map(str::trim).collect()
}

/// Decode a container from a sequence of trimmed tokens.
///
/// The first token must be one of the magic lines; the second is the
/// decimal field count. Trailing tokens after the declared count are
/// ignored.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Container> {
    let tokens: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    let mut cursor = TokenCursor::new(&tokens);

    let magic = cursor.next().map_err(|_| StarfieldError::InvalidMagic)?;
    let version = FormatVersion::from_line(magic).ok_or(StarfieldError::InvalidMagic)?;

    cursor.enter(Section::FieldCount);
    let field_count = cursor.next_u64()?;
    debug!("decoding {:?} container with {} fields", version, field_count);

    let mut fields = Vec::new();
    for index in 0..field_count {
        fields.push(parse_field(&mut cursor, version, index)?);
    }

    Ok(Container::from_parts(version, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeMarker;

    #[test]
    fn decodes_versioned_container() {
        let lines = ["DATA.*01", "1", "3", "1", "x", "1", "3", "8", "1.0", "2.0", "3.0"];
        let container = parse(&lines).unwrap();

        assert_eq!(container.version(), FormatVersion::V01);
        assert_eq!(container.len(), 1);
        let field = &container.fields()[0];
        assert_eq!(field.name(), "x");
        assert_eq!(field.type_marker(), Some(TypeMarker::Array));
        assert_eq!(field.shape(), &[3]);
        assert_eq!(field.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn decodes_legacy_container() {
        let lines = ["DATA.*", "1", "2", "xy", "1", "1", "2", "8", "0.5", "1.5"];
        let container = parse(&lines).unwrap();

        assert_eq!(container.version(), FormatVersion::Legacy);
        let field = &container.fields()[0];
        assert_eq!(field.name(), "xy");
        assert_eq!(field.type_marker(), None);
        assert_eq!(field.values(), &[0.5, 1.5]);
    }

    #[test]
    fn rejects_unknown_magic_line() {
        let err = parse(&["DATA.*02", "0"]).unwrap_err();
        assert!(matches!(err, StarfieldError::InvalidMagic));
    }

    #[test]
    fn empty_input_is_invalid_magic() {
        let lines: [&str; 0] = [];
        let err = parse(&lines).unwrap_err();
        assert!(matches!(err, StarfieldError::InvalidMagic));
    }

    #[test]
    fn non_numeric_field_count() {
        let err = parse(&["DATA.*01", "many"]).unwrap_err();
        assert!(matches!(
            err,
            StarfieldError::InvalidToken {
                expected: "unsigned integer",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn missing_second_field_names_its_index() {
        let lines = ["DATA.*01", "2", "3", "1", "x", "0", "8", "1.0"];
        let err = parse(&lines).unwrap_err();
        assert!(matches!(
            err,
            StarfieldError::UnexpectedEof {
                section: Section::Field(1),
                ..
            }
        ));
    }

    #[test]
    fn tokenize_trims_each_line() {
        let text = "DATA.*01\n  1\n3\t\n";
        assert_eq!(tokenize(text), vec!["DATA.*01", "1", "3"]);
    }

    #[test]
    fn tokenized_dump_decodes() {
        let text = "DATA.*01\n1\n3\n1\nx\n1\n3\n8\n1.0\n2.0\n3.0\n";
        let container = parse(&tokenize(text)).unwrap();
        assert_eq!(container.fields()[0].values(), &[1.0, 2.0, 3.0]);
    }
}
