//! Run outcomes for automaton recognition.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Result of running an automaton over an input sequence.
///
/// The outcome is three-valued on purpose. `Rejected` means the
/// automaton consumed the whole input and finished in a non-accepting
/// state; `Stuck` means it could not finish consuming the input at all
/// because no transition matched some `(state, symbol)` pair. Collapsing
/// the two into a single boolean would lose the distinction between "the
/// input is recognized as bad" and "the input is outside the automaton's
/// domain entirely".
///
/// `Stuck` is a normal recognition outcome, not a fault - it is a
/// variant here rather than an `Err` so callers handle it alongside the
/// other two outcomes.
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::{Dfa, RunResult, State, Transition};
/// use lockstep::sequence::Sequence;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lock {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for Lock {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// let dfa = Dfa::new(
///     Lock::Locked,
///     Sequence::from(vec![Transition::new(Lock::Locked, 'u', Lock::Unlocked)]),
///     vec![Lock::Unlocked],
/// )
/// .unwrap();
///
/// match dfa.run(&Sequence::from(vec!['u'])) {
///     RunResult::Accepted(state) => assert_eq!(state, Lock::Unlocked),
///     other => panic!("expected acceptance, got {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum RunResult<S: State> {
    /// All input consumed; the final state is in the accepting set
    Accepted(S),

    /// All input consumed; the final state is not in the accepting set
    Rejected(S),

    /// No transition matched mid-run; the input could not be consumed
    Stuck {
        /// State the automaton was in when it got stuck
        state: S,
        /// Number of symbols consumed before getting stuck
        consumed: usize,
    },
}

impl<S: State> RunResult<S> {
    /// Check whether the input was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Check whether the whole input was consumed.
    ///
    /// `true` for both `Accepted` and `Rejected`; `false` only for
    /// `Stuck`.
    pub fn completed(&self) -> bool {
        !matches!(self, Self::Stuck { .. })
    }

    /// The terminal state, or the state at the stuck point.
    pub fn state(&self) -> &S {
        match self {
            Self::Accepted(state) | Self::Rejected(state) => state,
            Self::Stuck { state, .. } => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Good,
        Bad,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Good => "Good",
                Self::Bad => "Bad",
            }
        }
    }

    #[test]
    fn accepted_is_the_only_accepting_outcome() {
        assert!(RunResult::Accepted(TestState::Good).is_accepted());
        assert!(!RunResult::Rejected(TestState::Bad).is_accepted());
        assert!(!RunResult::Stuck {
            state: TestState::Bad,
            consumed: 0,
        }
        .is_accepted());
    }

    #[test]
    fn only_stuck_is_incomplete() {
        assert!(RunResult::Accepted(TestState::Good).completed());
        assert!(RunResult::Rejected(TestState::Bad).completed());
        assert!(!RunResult::Stuck {
            state: TestState::Good,
            consumed: 3,
        }
        .completed());
    }

    #[test]
    fn state_exposes_terminal_or_stuck_state() {
        assert_eq!(
            RunResult::Accepted(TestState::Good).state(),
            &TestState::Good
        );
        assert_eq!(RunResult::Rejected(TestState::Bad).state(), &TestState::Bad);
        assert_eq!(
            RunResult::Stuck {
                state: TestState::Bad,
                consumed: 1,
            }
            .state(),
            &TestState::Bad
        );
    }

    #[test]
    fn run_result_serializes_correctly() {
        let result = RunResult::Stuck {
            state: TestState::Bad,
            consumed: 2,
        };
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: RunResult<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
