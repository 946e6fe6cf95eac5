//! Macros for ergonomic state, symbol, and sequence declaration.

/// Generate a `State` trait implementation for simple enums.
///
/// The variant name doubles as the state's `name()`.
///
/// # Example
///
/// ```
/// use lockstep::state_enum;
/// use lockstep::automaton::State;
///
/// state_enum! {
///     pub enum Phase {
///         Start,
///         Done,
///     }
/// }
///
/// assert_eq!(Phase::Start.name(), "Start");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::automaton::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare an input symbol enum with the derive set `Symbol` requires.
///
/// # Example
///
/// ```
/// use lockstep::symbol_enum;
///
/// symbol_enum! {
///     pub enum Bit {
///         Zero,
///         One,
///     }
/// }
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }
    };
}

/// Construct a [`Sequence`](crate::sequence::Sequence) from a literal
/// list of elements.
///
/// # Example
///
/// ```
/// use lockstep::sequence;
/// use lockstep::sequence::Sequence;
///
/// let seq = sequence![1, 2, 3];
/// assert_eq!(seq, Sequence::from(vec![1, 2, 3]));
///
/// let empty: Sequence<u8> = sequence![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from(vec![$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::automaton::State;
    use crate::sequence::Sequence;

    state_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    symbol_enum! {
        enum TestSymbol {
            Tick,
            Tock,
        }
    }

    #[test]
    fn state_enum_implements_state() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn state_enum_derives_value_traits() {
        let state = TestState::Idle;
        assert_eq!(state.clone(), state);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn symbol_enum_works_as_input() {
        let seq = sequence![TestSymbol::Tick, TestSymbol::Tock];
        assert_eq!(seq.count(&TestSymbol::Tick), 1);
    }

    #[test]
    fn sequence_macro_builds_literals() {
        let seq = sequence!['a', 'b'];
        assert_eq!(seq, Sequence::from(vec!['a', 'b']));

        let empty: Sequence<char> = sequence![];
        assert!(empty.is_empty());
    }
}
