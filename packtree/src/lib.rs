//! # Packtree - Immutable Bulk-Loaded Spatial Index
//!
//! Packtree is an in-memory two-dimensional spatial index over axis-aligned
//! rectangles carrying user payloads. Trees are packed once with a
//! sort-tile-recursive (STR) bulk loader and never mutated; structural
//! updates produce a new tree from the old entry set.
//!
//! ## Features
//!
//! - **Bulk Loading**: STR packing builds a shallow, high-fanout, balanced
//!   tree in O(n log n)
//! - **Point and Rectangle Queries**: containment, overlap, and within
//!   searches with branch pruning
//! - **Visitor Traversal**: allocation-free callback search that stops on
//!   the first match the caller accepts
//! - **Nearest Neighbor**: branch-and-bound search under a pluggable
//!   distance metric, with an optional distance cutoff
//! - **Planar and Geographic Metrics**: a Euclidean calculator and a
//!   spherical-earth calculator that wraps across the antimeridian
//! - **Immutable Sharing**: trees are `Send + Sync` whenever the payload is,
//!   with no internal locking
//!
//! ## Quick Start
//!
//! ```rust
//! use packtree::{BoundingBox, Entry, EuclideanPlane, RTree};
//!
//! let entries = vec![
//!     Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "home"),
//!     Entry::new(BoundingBox::new(2.0, 2.0, 3.0, 3.0), "office"),
//! ];
//! let tree = RTree::bulk_load(entries)?;
//!
//! // Point containment.
//! let hits = tree.find_containing(0.5, 0.5);
//! assert_eq!(hits[0].value, "home");
//!
//! // Nearest neighbor with a distance bound.
//! let nearest = tree.find_nearest(1.9, 1.9, Some(10.0), &EuclideanPlane);
//! assert_eq!(nearest.unwrap().1.value, "office");
//!
//! // Structural update: a fresh tree, the old one is untouched.
//! let bigger = tree.merge(
//!     &[Entry::new(BoundingBox::new(5.0, 5.0, 6.0, 6.0), "gym")],
//!     16,
//! )?;
//! assert_eq!(bigger.len(), 3);
//! assert_eq!(tree.len(), 2);
//! # Ok::<(), packtree::IndexError>(())
//! ```

pub mod bounding_box;
pub mod constants;
pub mod distance;
pub mod entry;
pub mod errors;
pub mod rtree;

mod bulk_loader;
mod node;

pub use bounding_box::BoundingBox;
pub use constants::{DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY};
pub use distance::{great_circle_km, DistanceCalculator, EuclideanPlane, SphericalEarth};
pub use entry::Entry;
pub use errors::{IndexError, IndexResult};
pub use rtree::RTree;
