//! Lockstep: a pure functional DFA recognition library
//!
//! Lockstep pairs an immutable ordered-collection algebra with a
//! deterministic finite automaton engine built on top of it. The core
//! is composed of pure functions with no side effects: every sequence
//! operation returns a new value, and a run over an automaton is a
//! deterministic function of the automaton and the input.
//!
//! # Core Concepts
//!
//! - **Sequence**: immutable ordered container supplying the search and
//!   membership primitives the engine composes
//! - **Dfa**: initial state, transition table, accepting set -
//!   constructed once, read many, never mutated
//! - **RunResult**: three-valued outcome - `Accepted`, `Rejected`, or
//!   `Stuck` when no transition matches mid-input
//!
//! # Example
//!
//! ```rust
//! use lockstep::automaton::{Dfa, RunResult, Transition};
//! use lockstep::{sequence, state_enum, symbol_enum};
//!
//! state_enum! {
//!     enum Parity {
//!         Even,
//!         Odd,
//!     }
//! }
//!
//! symbol_enum! {
//!     enum Bit {
//!         Zero,
//!         One,
//!     }
//! }
//!
//! // Accepts iff the input contains an even number of Zero symbols.
//! let dfa = Dfa::new(
//!     Parity::Even,
//!     sequence![
//!         Transition::new(Parity::Even, Bit::Zero, Parity::Odd),
//!         Transition::new(Parity::Even, Bit::One, Parity::Even),
//!         Transition::new(Parity::Odd, Bit::Zero, Parity::Even),
//!         Transition::new(Parity::Odd, Bit::One, Parity::Odd),
//!     ],
//!     vec![Parity::Even],
//! )
//! .unwrap();
//!
//! let input = sequence![Bit::Zero, Bit::One, Bit::Zero];
//! assert_eq!(dfa.run(&input), RunResult::Accepted(Parity::Even));
//! ```

pub mod automaton;
pub mod builder;
pub mod macros;
pub mod sequence;

// Re-export commonly used types
pub use automaton::{Dfa, RunResult, RunTrace, State, Symbol, TraceStep, Transition};
pub use builder::DfaBuilder;
pub use sequence::Sequence;
