//! Shared shape arithmetic for both decoders and the field constructor.

use crate::error::{Result, StarfieldError};

/// Number of elements implied by a shape: the product of its extents.
///
/// An empty shape is a scalar (count 1); any zero extent gives count 0.
/// The product saturates at `u64::MAX` — a saturated count always exceeds
/// any in-memory stream, so callers fail their bounds check before
/// allocating rather than wrapping around.
pub fn element_count(shape: &[u64]) -> u64 {
    shape.iter().fold(1u64, |acc, &extent| acc.saturating_mul(extent))
}

/// Check that a flat value sequence has exactly the length the shape implies.
///
/// A correct decoder reads exactly `element_count` values, so this failing
/// indicates a framing bug rather than a malformed stream.
pub fn check_element_count(shape: &[u64], actual: usize) -> Result<()> {
    let expected = element_count(shape);
    if expected != actual as u64 {
        return Err(StarfieldError::ShapeMismatch {
            expected,
            actual: actual as u64,
        });
    }
    Ok(())
}
