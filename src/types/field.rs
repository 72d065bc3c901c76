//! One named numeric tensor

use super::TypeMarker;
use crate::error::Result;
use crate::shape;
use std::fmt;

/// Byte width written for every field built in memory: values are stored
/// as 64-bit floats on the wire.
pub(crate) const ELEMENT_SIZE_F64: u64 = 8;

/// One named, shaped field of 64-bit floats.
///
/// The flat `values` buffer always holds exactly the number of elements
/// the shape implies (row-major order); the constructors enforce this, so
/// a `Field` in hand is never out of sync with its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    marker: Option<TypeMarker>,
    dim: u64,
    shape: Vec<u64>,
    element_size: u64,
    values: Vec<f64>,
}

impl Field {
    /// Build a field from a shape and its row-major values.
    ///
    /// `dim` is the shape's length and `element_size` is 8; fails with
    /// `ShapeMismatch` if the value count disagrees with the shape.
    pub fn new(
        name: impl Into<String>,
        marker: TypeMarker,
        shape: Vec<u64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        shape::check_element_count(&shape, values.len())?;
        Ok(Field {
            name: name.into(),
            marker: Some(marker),
            dim: shape.len() as u64,
            shape,
            element_size: ELEMENT_SIZE_F64,
            values,
        })
    }

    /// Build a field from decoded wire cells, preserving the declared
    /// `dim` and `element_size` verbatim.
    ///
    /// The count check can only fail on a decoder framing bug; a correct
    /// decoder reads exactly `element_count` values.
    pub(crate) fn from_wire(
        name: String,
        marker: Option<TypeMarker>,
        dim: u64,
        shape: Vec<u64>,
        element_size: u64,
        values: Vec<f64>,
    ) -> Result<Self> {
        shape::check_element_count(&shape, values.len())?;
        Ok(Field {
            name,
            marker,
            dim,
            shape,
            element_size,
            values,
        })
    }

    /// Field name. Not required to be unique within a container.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type marker; `None` for fields decoded from legacy streams.
    pub fn type_marker(&self) -> Option<TypeMarker> {
        self.marker
    }

    /// Declared rank. For legacy streams this may differ from
    /// `shape().len()`, which is governed by the stream's `shape_len`.
    pub fn dim(&self) -> u64 {
        self.dim
    }

    /// Per-dimension extents, row-major.
    pub fn shape(&self) -> &[u64] {
        &self.shape
    }

    /// Declared element byte width. Informational only: the payload is
    /// always decoded as 8-byte doubles regardless of this value.
    pub fn element_size(&self) -> u64 {
        self.element_size
    }

    /// Flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total number of elements.
    pub fn num_elements(&self) -> u64 {
        shape::element_count(&self.shape)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            Some(marker) => write!(f, "{} ({}) shape {:?}", self.name, marker, self.shape),
            None => write!(f, "{} shape {:?}", self.name, self.shape),
        }
    }
}
