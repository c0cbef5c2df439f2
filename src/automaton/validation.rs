use thiserror::Error;
use tracing::trace;

use crate::{
    alphabet::{Alphabet, Symbol},
    state::{State, StateSet},
    transition::{Edge, Target, TransitionTable},
};

/// Reasons for which the construction of an automaton can fail. Construction is all or
/// nothing, the first violation aborts it and no automaton is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A builder was asked to build without a start state.
    #[error("no start state was given")]
    MissingStartState,
    /// The start state is not among the declared states.
    #[error("start state \"{0}\" not found in states")]
    UnknownStartState(State),
    /// A final state is not among the declared states.
    #[error("final state \"{0}\" not found in states")]
    UnknownFinalState(State),
    /// A transition leaves a state that was not declared.
    #[error("start state \"{state}\" of transition on \"{symbol}\" not found in states")]
    UnknownSourceState {
        /// The undeclared state.
        state: State,
        /// The symbol of the offending transition.
        symbol: Symbol,
    },
    /// A transition leads to a state that was not declared.
    #[error("end state \"{state}\" of transition ({origin}, {symbol}) not found in states")]
    UnknownTargetState {
        /// The undeclared state.
        state: State,
        /// The state in which the offending transition starts.
        origin: State,
        /// The symbol of the offending transition.
        symbol: Symbol,
    },
    /// A transition is labelled with a symbol that is not in the alphabet.
    #[error("symbol \"{symbol}\" of transition from \"{origin}\" not found in alphabet")]
    UnknownSymbol {
        /// The undeclared symbol.
        symbol: Symbol,
        /// The state in which the offending transition starts.
        origin: State,
    },
    /// A deterministic automaton was given an epsilon transition.
    #[error("epsilon transition from \"{origin}\" in a deterministic automaton")]
    EpsilonInDfa {
        /// The state in which the offending transition starts.
        origin: State,
    },
    /// Two transitions share the same `(state, symbol)` key.
    #[error("duplicate transition on ({state}, {symbol})")]
    DuplicateTransition {
        /// The state of the key.
        state: State,
        /// The symbol of the key.
        symbol: Symbol,
    },
}

/// The part that deterministic and non-deterministic automata have in common: the declared
/// states and alphabet, a start state and the set of final states. An instance can only be
/// obtained through [`AutomatonBase::new`], which guarantees that start and final states are
/// declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomatonBase {
    states: StateSet,
    alphabet: Alphabet,
    start: State,
    finals: StateSet,
}

impl AutomatonBase {
    /// Validates and assembles the parts.
    pub fn new(
        states: StateSet,
        alphabet: Alphabet,
        start: State,
        finals: StateSet,
    ) -> Result<Self, ValidationError> {
        if !states.contains(&start) {
            return Err(ValidationError::UnknownStartState(start));
        }
        if let Some(q) = finals.iter().find(|q| !states.contains(*q)) {
            return Err(ValidationError::UnknownFinalState(q.clone()));
        }
        Ok(Self {
            states,
            alphabet,
            start,
            finals,
        })
    }

    /// Checks a single edge against the declared states and alphabet.
    fn validate_edge<T: Target>(
        &self,
        origin: &State,
        symbol: &Symbol,
        target: &T,
        epsilon_allowed: bool,
    ) -> Result<(), ValidationError> {
        if !self.states.contains(origin) {
            return Err(ValidationError::UnknownSourceState {
                state: origin.clone(),
                symbol: symbol.clone(),
            });
        }
        if let Some(q) = target.states().find(|q| !self.states.contains(*q)) {
            return Err(ValidationError::UnknownTargetState {
                state: q.clone(),
                origin: origin.clone(),
                symbol: symbol.clone(),
            });
        }
        if *symbol == Symbol::Epsilon && !epsilon_allowed {
            return Err(ValidationError::EpsilonInDfa {
                origin: origin.clone(),
            });
        }
        if !self.alphabet.admits(symbol, epsilon_allowed) {
            return Err(ValidationError::UnknownSymbol {
                symbol: symbol.clone(),
                origin: origin.clone(),
            });
        }
        Ok(())
    }

    /// Validates every edge and collects them into a [`TransitionTable`]. Epsilon edges are
    /// only admitted if `epsilon_allowed` is set.
    pub fn build_table<E, I>(
        &self,
        edges: I,
        epsilon_allowed: bool,
    ) -> Result<TransitionTable<E::Target>, ValidationError>
    where
        E: Edge,
        I: IntoIterator<Item = E>,
    {
        let mut table = TransitionTable::new();
        for edge in edges {
            let (origin, symbol, target) = edge.into_parts();
            self.validate_edge(&origin, &symbol, &target, epsilon_allowed)?;
            trace!("adding transition ({origin}, {symbol}) => {target:?}");
            table.insert(origin, symbol, target)?;
        }
        Ok(table)
    }

    /// The declared states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The start state.
    pub fn start(&self) -> &State {
        &self.start
    }

    /// The final (accepting) states.
    pub fn finals(&self) -> &StateSet {
        &self.finals
    }
}

/// Collects the constituents of an automaton, this is what the builders accumulate before
/// they hand everything to [`AutomatonBase::new`].
#[derive(Clone, Debug)]
pub(crate) struct Parts<E> {
    pub(crate) states: StateSet,
    pub(crate) alphabet: Vec<String>,
    pub(crate) start: Option<State>,
    pub(crate) finals: StateSet,
    pub(crate) edges: Vec<E>,
}

impl<E> Default for Parts<E> {
    fn default() -> Self {
        Self {
            states: StateSet::new(),
            alphabet: vec![],
            start: None,
            finals: StateSet::new(),
            edges: vec![],
        }
    }
}

impl<E: Edge> Parts<E> {
    pub(crate) fn assemble(
        self,
        epsilon_allowed: bool,
    ) -> Result<(AutomatonBase, TransitionTable<E::Target>), ValidationError> {
        let start = self.start.ok_or(ValidationError::MissingStartState)?;
        let base = AutomatonBase::new(
            self.states,
            self.alphabet.into_iter().collect(),
            start,
            self.finals,
        )?;
        let table = base.build_table(self.edges, epsilon_allowed)?;
        Ok((base, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{NTransition, Transition};

    fn base() -> AutomatonBase {
        AutomatonBase::new(
            ["q0", "q1"].into_iter().collect(),
            ["a"].into_iter().collect(),
            State::new(0),
            StateSet::singleton("q1"),
        )
        .unwrap()
    }

    #[test]
    fn start_and_finals_must_be_declared() {
        let states: StateSet = ["q0"].into_iter().collect();
        assert_eq!(
            AutomatonBase::new(
                states.clone(),
                Alphabet::empty(),
                State::new(1),
                StateSet::new()
            ),
            Err(ValidationError::UnknownStartState(State::new(1)))
        );
        assert_eq!(
            AutomatonBase::new(
                states,
                Alphabet::empty(),
                State::new(0),
                StateSet::singleton("q7")
            ),
            Err(ValidationError::UnknownFinalState(State::new(7)))
        );
    }

    #[test]
    fn edges_are_checked_in_order() {
        let base = base();
        let err = base
            .build_table([Transition::new("q5", "a", "q0")], false)
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSourceState { .. }));

        let err = base
            .build_table([NTransition::new("q0", "a", ["q1", "q9"])], true)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTargetState {
                state: State::new(9),
                origin: State::new(0),
                symbol: Symbol::from("a")
            }
        );

        let err = base
            .build_table([Transition::new("q0", "b", "q1")], false)
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSymbol { .. }));

        let err = base
            .build_table([Transition::new("q0", Symbol::Epsilon, "q1")], false)
            .unwrap_err();
        assert!(matches!(err, ValidationError::EpsilonInDfa { .. }));
    }

    #[test]
    fn error_messages_name_the_culprit() {
        let err = base()
            .build_table(
                [
                    Transition::new("q0", "a", "q1"),
                    Transition::new("q0", "a", "q0"),
                ],
                false,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate transition on (q0, a)");
        assert_eq!(
            ValidationError::UnknownFinalState(State::new(3)).to_string(),
            "final state \"q3\" not found in states"
        );
    }

    #[test]
    fn parts_require_a_start_state() {
        let parts: Parts<Transition> = Parts::default();
        assert_eq!(
            parts.assemble(false).unwrap_err(),
            ValidationError::MissingStartState
        );
    }
}
