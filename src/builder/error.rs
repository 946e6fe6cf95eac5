//! Build errors for the automaton builder.

use crate::automaton::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The declared transition table failed validation
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
