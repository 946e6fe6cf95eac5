//! Deterministic finite automaton engine.
//!
//! This module contains the recognition core built on top of
//! [`Sequence`](crate::sequence::Sequence):
//! - State and input symbol traits ([`State`], [`Symbol`])
//! - The transition table edge type ([`Transition`])
//! - The automaton itself ([`Dfa`]) and its `run` operation
//! - Three-valued run outcomes ([`RunResult`])
//! - Immutable step logs ([`RunTrace`])
//!
//! The engine is pure: a run performs no I/O, holds no state of its own
//! beyond the transition table reference, and repeated runs over the
//! same automaton and input yield identical results.

mod dfa;
mod error;
mod run;
mod state;
mod trace;
mod transition;

pub use dfa::Dfa;
pub use error::AutomatonError;
pub use run::RunResult;
pub use state::{State, Symbol};
pub use trace::{RunTrace, TraceStep};
pub use transition::Transition;
