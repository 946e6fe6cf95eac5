//! Run trace tracking.
//!
//! Provides immutable tracking of the steps an automaton executed while
//! consuming an input, following functional programming principles.

use super::state::{State, Symbol};
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// Record of a single executed step.
///
/// Steps are immutable values: the automaton was in `from`, consumed
/// `input`, and moved to `to`. A step is a pure function of its inputs,
/// so there is nothing time-dependent to record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraceStep<S: State, A: Symbol> {
    /// The state being transitioned from
    pub from: S,
    /// The symbol consumed by this step
    pub input: A,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State, A: Symbol> From<&Transition<S, A>> for TraceStep<S, A> {
    fn from(transition: &Transition<S, A>) -> Self {
        Self {
            from: transition.from.clone(),
            input: transition.input.clone(),
            to: transition.to.clone(),
        }
    }
}

/// Ordered log of the steps executed during one run.
///
/// The trace is immutable - `record` returns a new trace with the step
/// added, leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use lockstep::automaton::{RunTrace, State, TraceStep};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     One,
///     Two,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///         }
///     }
/// }
///
/// let trace = RunTrace::new();
/// let trace = trace.record(TraceStep {
///     from: Phase::One,
///     input: 'x',
///     to: Phase::Two,
/// });
///
/// assert_eq!(trace.steps().len(), 1);
/// assert_eq!(trace.path(), vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunTrace<S: State, A: Symbol> {
    steps: Vec<TraceStep<S, A>>,
}

impl<S: State, A: Symbol> Default for RunTrace<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> RunTrace<S, A> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the step added.
    pub fn record(&self, step: TraceStep<S, A>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Get all executed steps in order.
    pub fn steps(&self) -> &[TraceStep<S, A>] {
        &self.steps
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state of the
    /// first step, then the `to` state of each step. Empty if no steps
    /// were executed.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }
}
