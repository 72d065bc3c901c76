//! Error types for starfield

use std::fmt;
use thiserror::Error;

/// Part of the stream being decoded when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The magic header.
    Header,
    /// The container-level field count.
    FieldCount,
    /// The field at this ordinal position.
    Field(u64),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::FieldCount => write!(f, "field count"),
            Section::Field(index) => write!(f, "field {}", index),
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum StarfieldError {
    /// The header bytes/line do not match any recognized magic.
    #[error("invalid magic, not a DATA.* container")]
    InvalidMagic,

    /// Fewer bytes (or tokens) remain than the current cell requires.
    ///
    /// `offset` is a byte offset for the binary decoder and a token index
    /// for the text decoder; `needed`/`available` are in the same unit.
    #[error(
        "unexpected end of input in {section} at offset {offset}: {needed} required, {available} available"
    )]
    UnexpectedEof {
        section: Section,
        offset: usize,
        needed: u64,
        available: u64,
    },

    /// A text token could not be parsed as the expected numeric type.
    #[error("invalid token {token:?} at index {index}: expected {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
        index: usize,
    },

    /// A type-marker cell holds a value outside the known tags.
    #[error("invalid type marker: {0}")]
    InvalidTypeMarker(u64),

    /// Field-name bytes are not valid UTF-8.
    #[error("invalid UTF-8 in field name at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// A flat value sequence disagrees with the declared shape.
    #[error("shape mismatch: shape implies {expected} values, got {actual}")]
    ShapeMismatch { expected: u64, actual: u64 },

    /// Ordinal lookup beyond the container's field count.
    #[error("field index {index} out of range for {count} fields")]
    IndexOutOfRange { index: usize, count: usize },
}

/// A convenience `Result` type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StarfieldError>;
