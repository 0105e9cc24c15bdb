use serde::{Deserialize, Serialize};

use crate::bounding_box::BoundingBox;

/// A leaf record: a bounding box plus an opaque payload value.
///
/// Entries are value-typed and immutable. The payload is whatever the caller
/// wants to attach to the rectangle; the index never inspects it except for
/// equality during [diff](crate::RTree::diff) and
/// [update](crate::RTree::update).
///
/// Equality is structural: bitwise equality of the four coordinates plus
/// payload equality. This makes two entries built from identical inputs
/// interchangeable in multiset operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entry<T> {
    /// The minimum bounding rectangle of the entry.
    pub bbox: BoundingBox,
    /// The caller-supplied payload.
    pub value: T,
}

impl<T> Entry<T> {
    /// Creates a new entry from a bounding box and payload.
    pub fn new(bbox: BoundingBox, value: T) -> Self {
        Self { bbox, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "a");
        let b = Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "a");
        let c = Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "c");
        let d = Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 2.0), "a");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_coordinates_compare_bitwise() {
        let pos = Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 7u32);
        let neg = Entry::new(BoundingBox::new(-0.0, 0.0, 1.0, 1.0), 7u32);
        assert_ne!(pos, neg);
    }
}
