//! Integration tests for the reference automaton: a 2-state machine
//! over the alphabet {Zero, One} that accepts iff the input contains
//! an even number of Zero symbols.
//!
//! States N1 (initial, accepting) and N2; transitions
//! {(N1, 0) -> N2, (N1, 1) -> N1, (N2, 0) -> N1, (N2, 1) -> N2}.

use lockstep::automaton::{Dfa, RunResult, Transition};
use lockstep::sequence::Sequence;
use lockstep::{sequence, state_enum, symbol_enum};

state_enum! {
    enum Node {
        N1,
        N2,
    }
}

symbol_enum! {
    enum Bit {
        Zero,
        One,
    }
}

fn even_zeroes() -> Dfa<Node, Bit> {
    Dfa::new(
        Node::N1,
        sequence![
            Transition::new(Node::N1, Bit::Zero, Node::N2),
            Transition::new(Node::N1, Bit::One, Node::N1),
            Transition::new(Node::N2, Bit::Zero, Node::N1),
            Transition::new(Node::N2, Bit::One, Node::N2),
        ],
        vec![Node::N1],
    )
    .unwrap()
}

#[test]
fn empty_input_is_accepted() {
    let dfa = even_zeroes();
    assert_eq!(dfa.run(&Sequence::new()), RunResult::Accepted(Node::N1));
}

#[test]
fn two_zeroes_are_accepted() {
    let dfa = even_zeroes();
    assert_eq!(
        dfa.run(&sequence![Bit::Zero, Bit::Zero]),
        RunResult::Accepted(Node::N1)
    );
}

#[test]
fn single_zero_is_rejected() {
    let dfa = even_zeroes();
    assert_eq!(
        dfa.run(&sequence![Bit::Zero]),
        RunResult::Rejected(Node::N2)
    );
}

#[test]
fn single_one_is_accepted() {
    let dfa = even_zeroes();
    assert_eq!(dfa.run(&sequence![Bit::One]), RunResult::Accepted(Node::N1));
}

#[test]
fn zero_then_one_is_rejected() {
    let dfa = even_zeroes();
    assert_eq!(
        dfa.run(&sequence![Bit::Zero, Bit::One]),
        RunResult::Rejected(Node::N2)
    );
}

#[test]
fn fifty_symbol_input_with_24_zeroes_is_accepted() {
    let dfa = even_zeroes();

    let bits = [
        0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0,
        1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1,
    ];
    let input: Sequence<Bit> = bits
        .iter()
        .map(|b| if *b == 0 { Bit::Zero } else { Bit::One })
        .collect();

    assert_eq!(input.len(), 50);
    assert_eq!(input.count(&Bit::Zero), 24);
    assert_eq!(dfa.run(&input), RunResult::Accepted(Node::N1));
}

#[test]
fn traced_run_reports_the_visited_states() {
    let dfa = even_zeroes();

    let (result, trace) = dfa.run_traced(&sequence![Bit::Zero, Bit::Zero]);

    assert_eq!(result, RunResult::Accepted(Node::N1));
    assert_eq!(trace.path(), vec![&Node::N1, &Node::N2, &Node::N1]);
}
