//! Immutable ordered sequence and its operation algebra.
//!
//! This module contains the pure functional collection the automaton
//! engine is built on:
//! - `Sequence<T>`: an immutable ordered container
//! - Positional queries (`front`, `back`, `nth`)
//! - Value-based queries (`index_of`, `contains`, `count`, `search`)
//! - Structural operations that return a *new* sequence
//!   (`push_front`, `push_back`, `pop_front`, `pop_back`, `concat`,
//!   `remove`, `remove_all`)
//!
//! All logic in this module is pure (no side effects). No operation
//! mutates an existing sequence; sharing a sequence between readers
//! requires no synchronization.

mod error;
mod list;

pub use error::SequenceError;
pub use list::Sequence;
