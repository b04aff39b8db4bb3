//! Error types for the traversal core.

use thiserror::Error;

/// Errors that can occur at the traversal core's one fallible boundary.
///
/// Every pass described in the traversal algorithm itself is total; the only
/// precondition a caller can violate is passing a frame counter that goes
/// backwards relative to the previous call (the lazy per-frame reset depends
/// on strict inequality between consecutive frame counters).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    #[error("frame_count went backwards: previous={previous}, requested={requested}")]
    NonMonotonicFrame { previous: u64, requested: u64 },
}

/// Result type alias for traversal operations.
pub type TraversalResult<T> = Result<T, TraversalError>;
