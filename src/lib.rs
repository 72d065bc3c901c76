//! starfield - self-describing containers of named numeric fields
//!
//! A reader and writer for the `DATA.*` container format: an ordered
//! sequence of named, multi-dimensional 64-bit float tensors behind a
//! magic header, decodable from a packed little-endian byte stream or an
//! equivalent line-tokenized text stream.
//!
//! # Features
//!
//! - Two header variants: legacy `DATA.*` (read-only compatibility) and
//!   versioned `DATA.*01` (read and write)
//! - Every wire length validated against the remaining stream before any
//!   allocation, so truncated or corrupted input fails cleanly
//! - Precise failure context: byte offset (or token index) plus the field
//!   being decoded
//! - Name/index lookup table over a decoded container
//! - Optional `ndarray` feature for shaped-array conversions
//!
//! # Example
//!
//! ```rust
//! use starfield::{Container, Field, TypeMarker, parse, writer};
//!
//! let container = Container::new(vec![
//!     Field::new("x", TypeMarker::Array, vec![3], vec![1.0, 2.0, 3.0]).unwrap(),
//!     Field::new("y", TypeMarker::Array, vec![3], vec![2.0, 4.0, 6.0]).unwrap(),
//! ]);
//!
//! let bytes = writer::to_bytes(&container).unwrap();
//! let decoded = parse(&bytes).unwrap();
//!
//! let table = decoded.table();
//! assert_eq!(table.by_name("y").unwrap().values(), &[2.0, 4.0, 6.0]);
//! ```

pub mod error;
pub mod parser;
pub mod shape;
pub mod table;
pub mod text;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{Result, Section, StarfieldError};
pub use parser::parse;
pub use table::FieldTable;
pub use types::{Container, Field, FormatVersion, MAGIC_LEGACY, MAGIC_V01, TypeMarker};
