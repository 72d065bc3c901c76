//! Field type markers

use std::fmt;

/// Semantic classification of a field, present in the "01" variant only.
///
/// Purely informational: nothing in decoding branches on it, it exists as
/// a display/debug hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum TypeMarker {
    Struct = 1,
    Slice = 2,
    Array = 3,
}

impl TypeMarker {
    /// Try to convert from the wire tag.
    pub fn from_u64(tag: u64) -> Option<Self> {
        match tag {
            1 => Some(TypeMarker::Struct),
            2 => Some(TypeMarker::Slice),
            3 => Some(TypeMarker::Array),
            _ => None,
        }
    }
}

impl fmt::Display for TypeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeMarker::Struct => "struct",
            TypeMarker::Slice => "slice",
            TypeMarker::Array => "array",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags() {
        assert_eq!(TypeMarker::from_u64(1), Some(TypeMarker::Struct));
        assert_eq!(TypeMarker::from_u64(2), Some(TypeMarker::Slice));
        assert_eq!(TypeMarker::from_u64(3), Some(TypeMarker::Array));
        assert_eq!(TypeMarker::from_u64(0), None);
        assert_eq!(TypeMarker::from_u64(4), None);
    }

    #[test]
    fn labels() {
        assert_eq!(TypeMarker::Struct.to_string(), "struct");
        assert_eq!(TypeMarker::Slice.to_string(), "slice");
        assert_eq!(TypeMarker::Array.to_string(), "array");
    }

    #[test]
    fn tag_values_roundtrip() {
        for marker in [TypeMarker::Struct, TypeMarker::Slice, TypeMarker::Array] {
            assert_eq!(TypeMarker::from_u64(marker as u64), Some(marker));
        }
    }
}
