//! Builder for constructing automata.

use crate::automaton::{Dfa, State, Symbol, Transition};
use crate::builder::error::BuildError;
use crate::sequence::Sequence;

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::DfaBuilder;
/// use lockstep::state_enum;
/// use lockstep::automaton::RunResult;
/// use lockstep::sequence::Sequence;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let dfa = DfaBuilder::new()
///     .initial(Light::Red)
///     .transition(Light::Red, 'g', Light::Green)
///     .transition(Light::Green, 'r', Light::Red)
///     .accepting(Light::Green)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     dfa.run(&Sequence::from(vec!['g'])),
///     RunResult::Accepted(Light::Green)
/// );
/// ```
pub struct DfaBuilder<S: State, A: Symbol> {
    initial: Option<S>,
    transitions: Vec<Transition<S, A>>,
    accepting: Vec<S>,
}

impl<S: State, A: Symbol> DfaBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            accepting: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add one transition edge.
    ///
    /// May be called any number of times, including zero: an automaton
    /// with no edges is legal and gets stuck on any non-empty input.
    pub fn transition(mut self, from: S, input: A, to: S) -> Self {
        self.transitions.push(Transition::new(from, input, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, A>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    /// Mark multiple states as accepting at once.
    pub fn accepting_all<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Build the automaton.
    ///
    /// Returns an error if the initial state is missing or the
    /// transition table violates the determinism invariant.
    pub fn build(self) -> Result<Dfa<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let transitions = Sequence::from(self.transitions);

        Ok(Dfa::new(initial, transitions, self.accepting)?)
    }
}

impl<S: State, A: Symbol> Default for DfaBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonError, RunResult};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = DfaBuilder::<TestState, char>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_edgeless_automaton() {
        let dfa = DfaBuilder::<TestState, char>::new()
            .initial(TestState::Start)
            .accepting(TestState::Start)
            .build()
            .unwrap();

        assert_eq!(dfa.run(&Sequence::new()), RunResult::Accepted(TestState::Start));
    }

    #[test]
    fn builder_surfaces_duplicate_transitions() {
        let result = DfaBuilder::new()
            .initial(TestState::Start)
            .transition(TestState::Start, 'a', TestState::End)
            .transition(TestState::Start, 'a', TestState::Start)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Automaton(AutomatonError::DuplicateTransition { .. }))
        ));
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let dfa = DfaBuilder::new()
            .initial(TestState::Start)
            .transition(TestState::Start, 'x', TestState::End)
            .accepting_all([TestState::End])
            .build()
            .unwrap();

        assert_eq!(dfa.initial(), &TestState::Start);
        assert_eq!(dfa.transitions().len(), 1);
        assert_eq!(
            dfa.run(&Sequence::from(vec!['x'])),
            RunResult::Accepted(TestState::End)
        );
    }

    #[test]
    fn prebuilt_transitions_are_appended_in_order() {
        let dfa = DfaBuilder::new()
            .initial(TestState::Start)
            .add_transition(Transition::new(TestState::Start, 'a', TestState::End))
            .transitions(vec![Transition::new(TestState::End, 'b', TestState::Start)])
            .accepting(TestState::End)
            .build()
            .unwrap();

        assert_eq!(dfa.transitions().nth(0).unwrap().input, 'a');
        assert_eq!(dfa.transitions().nth(1).unwrap().input, 'b');
    }
}
