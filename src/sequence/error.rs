//! Sequence error types.

use thiserror::Error;

/// Errors that can occur during sequence operations.
///
/// These are boundary conditions, not faults: an empty sequence has no
/// front element, and an index past the end addresses nothing. They are
/// always surfaced to the caller, never clamped or defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Operation requires a non-empty sequence
    #[error("Operation requires a non-empty sequence")]
    EmptyCollection,

    /// Index is past the end of the sequence
    #[error("Index {index} is out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
