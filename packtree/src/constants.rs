//! Construction-time constants for the packed tree.

/// Smallest node capacity a tree can be built with.
pub const MIN_NODE_CAPACITY: usize = 2;

/// Node capacity used by the default bulk-load factory.
pub const DEFAULT_NODE_CAPACITY: usize = 64;
