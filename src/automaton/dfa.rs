//! Deterministic finite automaton and its run loop.

use super::error::AutomatonError;
use super::run::RunResult;
use super::state::{State, Symbol};
use super::trace::{RunTrace, TraceStep};
use super::transition::Transition;
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// A deterministic finite automaton.
///
/// An automaton is an immutable value: an initial state, a transition
/// table expressed as a [`Sequence`] of edges, and a set of accepting
/// states (membership-only, order irrelevant). Once constructed it is
/// read-only for its whole lifetime - concurrent runs against the same
/// automaton require no locking.
///
/// [`Dfa::new`] validates the determinism invariant eagerly: no two
/// table entries may share a `(from, input)` pair. Transition lookup
/// during a run resolves to the *first* matching entry in table order,
/// so even a table built through [`Dfa::new_unchecked`] behaves
/// deterministically.
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::{Dfa, RunResult, State, Transition};
/// use lockstep::sequence::Sequence;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turnstile {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// let dfa = Dfa::new(
///     Turnstile::Locked,
///     Sequence::from(vec![
///         Transition::new(Turnstile::Locked, 'c', Turnstile::Unlocked),
///         Transition::new(Turnstile::Unlocked, 'p', Turnstile::Locked),
///     ]),
///     vec![Turnstile::Locked],
/// )
/// .unwrap();
///
/// let result = dfa.run(&Sequence::from(vec!['c', 'p']));
/// assert_eq!(result, RunResult::Accepted(Turnstile::Locked));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Dfa<S: State, A: Symbol> {
    initial: S,
    transitions: Sequence<Transition<S, A>>,
    accepting: Vec<S>,
}

impl<S: State, A: Symbol> Dfa<S, A> {
    /// Create an automaton, validating the determinism invariant.
    ///
    /// Fails with [`AutomatonError::DuplicateTransition`] if two table
    /// entries share a `(from, input)` pair. An empty transition table
    /// is legal: such an automaton gets stuck on any non-empty input.
    pub fn new(
        initial: S,
        transitions: Sequence<Transition<S, A>>,
        accepting: Vec<S>,
    ) -> Result<Self, AutomatonError> {
        for (index, transition) in transitions.iter().enumerate() {
            let duplicate = transitions
                .iter()
                .skip(index + 1)
                .any(|other| other.matches(&transition.from, &transition.input));
            if duplicate {
                return Err(AutomatonError::DuplicateTransition {
                    from: transition.from.name().to_string(),
                    input: format!("{:?}", transition.input),
                });
            }
        }

        Ok(Self {
            initial,
            transitions,
            accepting,
        })
    }

    /// Create an automaton without validating the transition table.
    ///
    /// For callers that guarantee well-formedness themselves. On a
    /// table with duplicate `(from, input)` pairs, runs still resolve
    /// to the first matching entry in table order.
    pub fn new_unchecked(
        initial: S,
        transitions: Sequence<Transition<S, A>>,
        accepting: Vec<S>,
    ) -> Self {
        Self {
            initial,
            transitions,
            accepting,
        }
    }

    /// Get the initial state (pure).
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Get the transition table (pure).
    pub fn transitions(&self) -> &Sequence<Transition<S, A>> {
        &self.transitions
    }

    /// Get the accepting states (pure).
    pub fn accepting(&self) -> &[S] {
        &self.accepting
    }

    /// Check whether `state` is in the accepting set (pure).
    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    /// Run the automaton over an input sequence.
    ///
    /// Starting from the initial state, each symbol is consumed in
    /// order by looking up the first table entry matching the current
    /// `(state, symbol)` pair. If no entry matches, the run terminates
    /// immediately with [`RunResult::Stuck`] - remaining symbols are
    /// not consumed. Once all symbols are consumed (including the
    /// zero-symbol case) the final state decides between
    /// [`RunResult::Accepted`] and [`RunResult::Rejected`].
    ///
    /// This is a pure function: repeated calls with identical arguments
    /// yield identical results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::automaton::{Dfa, RunResult, State, Transition};
    /// use lockstep::sequence::Sequence;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Only {
    ///     Start,
    /// }
    ///
    /// impl State for Only {
    ///     fn name(&self) -> &str {
    ///         "Start"
    ///     }
    /// }
    ///
    /// // No outgoing edges: accepts the empty input, gets stuck on
    /// // anything else.
    /// let dfa = Dfa::new(Only::Start, Sequence::new(), vec![Only::Start]).unwrap();
    ///
    /// assert_eq!(dfa.run(&Sequence::new()), RunResult::Accepted(Only::Start));
    /// assert_eq!(
    ///     dfa.run(&Sequence::from(vec!['x'])),
    ///     RunResult::Stuck {
    ///         state: Only::Start,
    ///         consumed: 0,
    ///     }
    /// );
    /// ```
    pub fn run(&self, input: &Sequence<A>) -> RunResult<S> {
        let mut current = self.initial.clone();

        for (consumed, symbol) in input.iter().enumerate() {
            match self.transitions.search(|t| t.matches(&current, symbol)) {
                Some(transition) => current = transition.to.clone(),
                None => {
                    return RunResult::Stuck {
                        state: current,
                        consumed,
                    }
                }
            }
        }

        if self.is_accepting(&current) {
            RunResult::Accepted(current)
        } else {
            RunResult::Rejected(current)
        }
    }

    /// Run the automaton and also return the executed step log.
    ///
    /// Same semantics as [`Dfa::run`]. On a `Stuck` outcome the trace
    /// covers the steps executed before the stuck point.
    pub fn run_traced(&self, input: &Sequence<A>) -> (RunResult<S>, RunTrace<S, A>) {
        let mut current = self.initial.clone();
        let mut trace = RunTrace::new();

        for (consumed, symbol) in input.iter().enumerate() {
            match self.transitions.search(|t| t.matches(&current, symbol)) {
                Some(transition) => {
                    trace = trace.record(TraceStep::from(transition));
                    current = transition.to.clone();
                }
                None => {
                    return (
                        RunResult::Stuck {
                            state: current,
                            consumed,
                        },
                        trace,
                    )
                }
            }
        }

        let result = if self.is_accepting(&current) {
            RunResult::Accepted(current)
        } else {
            RunResult::Rejected(current)
        };
        (result, trace)
    }
}
