//! ndarray integration for starfield fields
//!
//! Conversions between a field's flat row-major values and
//! `ndarray::ArrayD<f64>`. Enable with the `ndarray` feature flag.

use ndarray::{ArrayD, IxDyn};

use crate::error::{Result, StarfieldError};
use crate::types::{Field, TypeMarker};

impl Field {
    /// Reshape the flat values into a dynamically-dimensioned array.
    ///
    /// The field invariant guarantees the value count matches the shape,
    /// so this only fails if an extent does not fit the platform's usize.
    pub fn to_ndarray(&self) -> Result<ArrayD<f64>> {
        let dims: Vec<usize> = self
            .shape()
            .iter()
            .map(|&extent| {
                usize::try_from(extent).map_err(|_| StarfieldError::ShapeMismatch {
                    expected: self.num_elements(),
                    actual: self.values().len() as u64,
                })
            })
            .collect::<Result<_>>()?;

        ArrayD::from_shape_vec(IxDyn(&dims), self.values().to_vec()).map_err(|_| {
            StarfieldError::ShapeMismatch {
                expected: self.num_elements(),
                actual: self.values().len() as u64,
            }
        })
    }

    /// Build a field from an ndarray, flattening in row-major order.
    pub fn from_ndarray(
        name: impl Into<String>,
        marker: TypeMarker,
        array: &ArrayD<f64>,
    ) -> Result<Self> {
        let shape: Vec<u64> = array.shape().iter().map(|&extent| extent as u64).collect();
        // iter() traverses in logical row-major order for any layout.
        let values: Vec<f64> = array.iter().copied().collect();
        Field::new(name, marker, shape, values)
    }
}
