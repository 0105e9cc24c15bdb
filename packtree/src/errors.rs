//! Error and result types for index construction.

use thiserror::Error;

use crate::constants::MIN_NODE_CAPACITY;

/// Errors that can occur while building an index.
///
/// Searches, nearest-neighbor queries, and structural updates are total over
/// valid inputs; the only failure the library signals is an invalid node
/// capacity at construction time.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid node capacity {0}, minimum is {min}", min = MIN_NODE_CAPACITY)]
    InvalidCapacity(usize),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
