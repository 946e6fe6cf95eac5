//! Automaton construction error types.

use thiserror::Error;

/// Errors that can occur when constructing an automaton.
///
/// A malformed transition table is a contract violation by the caller,
/// caught eagerly at construction time rather than deferred to run
/// time. Note that a run getting stuck mid-input is *not* an error: it
/// is a normal recognition outcome, reported through
/// [`RunResult::Stuck`](super::RunResult::Stuck).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// Two table entries share the same `(from, input)` pair
    #[error("Duplicate transition from state '{from}' on input {input}")]
    DuplicateTransition {
        /// Name of the offending source state
        from: String,
        /// Debug rendering of the offending input symbol
        input: String,
    },
}
