//! Per-field text decoding

use log::trace;

use super::cursor::TokenCursor;
use crate::error::{Result, Section, StarfieldError};
use crate::shape;
use crate::types::{Field, FormatVersion, TypeMarker};

/// Decode one field from tokens, in the same logical order as the binary
/// layout: marker ("01" only), name length, name, dim, shape length
/// (legacy only), shape extents, element size, values.
///
/// The name is the literal next line. The preceding length token is parsed
/// and validated as a number, but the line framing governs the name's
/// extent.
pub fn parse_field(
    cursor: &mut TokenCursor<'_>,
    version: FormatVersion,
    index: u64,
) -> Result<Field> {
    cursor.enter(Section::Field(index));

    let marker = if version.has_type_marker() {
        let raw = cursor.next_u64()?;
        let marker =
            TypeMarker::from_u64(raw).ok_or(StarfieldError::InvalidTypeMarker(raw))?;
        Some(marker)
    } else {
        None
    };

    let _name_len = cursor.next_u64()?;
    let name = cursor.next()?.to_string();

    let dim = cursor.next_u64()?;
    let shape_len = if version.has_explicit_shape_len() {
        cursor.next_u64()?
    } else {
        dim
    };

    cursor.require(shape_len)?;
    let mut field_shape = Vec::with_capacity(shape_len as usize);
    for _ in 0..shape_len {
        field_shape.push(cursor.next_u64()?);
    }

    let element_size = cursor.next_u64()?;

    let element_count = shape::element_count(&field_shape);
    cursor.require(element_count)?;
    let mut values = Vec::with_capacity(element_count as usize);
    for _ in 0..element_count {
        values.push(cursor.next_f64()?);
    }

    trace!("field {}: {:?} shape {:?}", index, name, field_shape);

    Field::from_wire(name, marker, dim, field_shape, element_size, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_versioned_field() {
        let tokens = ["3", "1", "x", "1", "3", "8", "1.0", "2.0", "3.0"];
        let mut cursor = TokenCursor::new(&tokens);

        let field = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap();
        assert_eq!(field.name(), "x");
        assert_eq!(field.type_marker(), Some(TypeMarker::Array));
        assert_eq!(field.dim(), 1);
        assert_eq!(field.shape(), &[3]);
        assert_eq!(field.element_size(), 8);
        assert_eq!(field.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn parses_legacy_field() {
        // No marker token, explicit shape length after dim.
        let tokens = ["4", "grid", "2", "2", "2", "2", "8", "1", "2", "3", "4"];
        let mut cursor = TokenCursor::new(&tokens);

        let field = parse_field(&mut cursor, FormatVersion::Legacy, 0).unwrap();
        assert_eq!(field.name(), "grid");
        assert_eq!(field.type_marker(), None);
        assert_eq!(field.shape(), &[2, 2]);
        assert_eq!(field.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn name_line_governs_over_length_token() {
        // name_len says 1 but the line holds a longer name; the line wins.
        let tokens = ["3", "1", "velocity", "1", "2", "8", "0.5", "0.25"];
        let mut cursor = TokenCursor::new(&tokens);

        let field = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap();
        assert_eq!(field.name(), "velocity");
    }

    #[test]
    fn scalar_field() {
        let tokens = ["2", "1", "t", "0", "8", "42.0"];
        let mut cursor = TokenCursor::new(&tokens);

        let field = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap();
        assert_eq!(field.shape(), &[] as &[u64]);
        assert_eq!(field.values(), &[42.0]);
    }

    #[test]
    fn rejects_unknown_marker() {
        let tokens = ["7", "1", "x", "0", "8", "0.0"];
        let mut cursor = TokenCursor::new(&tokens);

        let err = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap_err();
        assert!(matches!(err, StarfieldError::InvalidTypeMarker(7)));
    }

    #[test]
    fn non_numeric_value_is_invalid_token() {
        let tokens = ["3", "1", "x", "1", "2", "8", "1.0", "oops"];
        let mut cursor = TokenCursor::new(&tokens);

        let err = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap_err();
        assert!(matches!(
            err,
            StarfieldError::InvalidToken {
                expected: "float",
                index: 7,
                ..
            }
        ));
    }

    #[test]
    fn missing_values_report_token_counts() {
        let tokens = ["3", "1", "x", "1", "5", "8", "1.0"];
        let mut cursor = TokenCursor::new(&tokens);

        let err = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap_err();
        assert!(matches!(
            err,
            StarfieldError::UnexpectedEof {
                section: Section::Field(0),
                needed: 5,
                available: 1,
                ..
            }
        ));
    }

    #[test]
    fn huge_shape_fails_before_allocation() {
        let tokens = ["3", "1", "x", "1", "18446744073709551615", "8"];
        let mut cursor = TokenCursor::new(&tokens);

        let err = parse_field(&mut cursor, FormatVersion::V01, 0).unwrap_err();
        assert!(matches!(err, StarfieldError::UnexpectedEof { .. }));
    }
}
