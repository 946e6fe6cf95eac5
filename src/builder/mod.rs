//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder for declaring automata with
//! minimal boilerplate while keeping the eager transition-table
//! validation of [`Dfa::new`](crate::automaton::Dfa::new).

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::DfaBuilder;
