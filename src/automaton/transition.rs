//! Transition table edge type.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};

/// One edge of an automaton's transition table.
///
/// A transition is an immutable value: consuming `input` in state
/// `from` moves the automaton to state `to`. Within one automaton the
/// pair `(from, input)` must be unique across all entries - this is the
/// determinism invariant, validated eagerly by
/// [`Dfa::new`](super::Dfa::new).
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::{State, Transition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// let transition = Transition {
///     from: Door::Open,
///     input: 'c',
///     to: Door::Closed,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, A: Symbol> {
    /// The state being transitioned from
    pub from: S,
    /// The input symbol consumed by this transition
    pub input: A,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State, A: Symbol> Transition<S, A> {
    /// Create a transition from `from` to `to` on `input`.
    pub fn new(from: S, input: A, to: S) -> Self {
        Self { from, input, to }
    }

    /// Check whether this transition fires for `(state, symbol)`.
    ///
    /// Pure predicate used by the engine's transition lookup.
    pub fn matches(&self, state: &S, symbol: &A) -> bool {
        self.from == *state && self.input == *symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        A,
        B,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
            }
        }
    }

    #[test]
    fn matches_requires_both_state_and_symbol() {
        let transition = Transition::new(TestState::A, '0', TestState::B);

        assert!(transition.matches(&TestState::A, &'0'));
        assert!(!transition.matches(&TestState::A, &'1'));
        assert!(!transition.matches(&TestState::B, &'0'));
    }

    #[test]
    fn matches_ignores_target_state() {
        let self_loop = Transition::new(TestState::A, '1', TestState::A);
        let outgoing = Transition::new(TestState::A, '1', TestState::B);

        assert!(self_loop.matches(&TestState::A, &'1'));
        assert!(outgoing.matches(&TestState::A, &'1'));
    }

    #[test]
    fn transition_serializes_correctly() {
        let transition = Transition::new(TestState::A, '0', TestState::B);
        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition<TestState, char> = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, deserialized);
    }
}
