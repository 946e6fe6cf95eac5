//! State and input symbol traits for automata.
//!
//! Both traits describe immutable values: a state is a position in the
//! automaton, a symbol is one unit of input consumed per transition
//! step. All methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for automaton states.
///
/// States are immutable values that describe a position in a
/// deterministic finite automaton. Whether a state is accepting is a
/// property of the automaton (its accepting set), not of the state
/// itself, so this trait carries only identity and naming.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for run tracking
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable as values
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// impl State for Parity {
///     fn name(&self) -> &str {
///         match self {
///             Self::Even => "Even",
///             Self::Odd => "Odd",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for input symbols.
///
/// Blanket-implemented for every qualifying type, so plain enums,
/// `char`, and integer types all work as symbols without ceremony.
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::Symbol;
///
/// fn assert_symbol<A: Symbol>() {}
///
/// assert_symbol::<char>();
/// assert_symbol::<u8>();
/// ```
pub trait Symbol:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
