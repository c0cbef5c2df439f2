use std::fmt::Display;

use tracing::debug;

use super::{AutomatonBase, Parts, Simulate, ValidationError};
use crate::prelude::*;

/// A deterministic finite automaton. From every state there is at most one transition per
/// symbol, so a running DFA is always in a single state. A word is accepted if the state that
/// is reached after reading it is final.
///
/// A transition may be labelled with [`Symbol::Wildcard`], in which case it is taken for every
/// input symbol that has no transition of its own. [`Symbol::Epsilon`] is not allowed.
///
/// # Example
/// A DFA over `{0, 1}` that accepts the empty word and every word ending in `0`.
/// ```
/// use fsa::prelude::*;
///
/// let dfa = Dfa::new(
///     [State::new(1), State::new(2)],
///     ["0", "1"],
///     State::new(1),
///     [
///         ("q1", "0", "q1"),
///         ("q1", "1", "q2"),
///         ("q2", "1", "q2"),
///         ("q2", "0", "q1"),
///     ],
///     [State::new(1)],
/// )
/// .unwrap();
/// assert!(dfa.accepts(""));
/// assert!(dfa.accepts("0110"));
/// assert!(!dfa.accepts("01"));
/// assert!(!dfa.accepts("0a0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    base: AutomatonBase,
    table: TransitionTable<State>,
}

impl Dfa {
    /// Builds a DFA from its declared `states` and `alphabet`, the `start` state, the list of
    /// `transitions` and the `finals`. Fails if any final state or transition refers to an
    /// undeclared state or symbol, or if two transitions share the same state and symbol.
    pub fn new<S, T, F>(
        states: S,
        alphabet: impl Into<Alphabet>,
        start: impl Into<State>,
        transitions: T,
        finals: F,
    ) -> Result<Self, ValidationError>
    where
        S: IntoIterator,
        S::Item: Into<State>,
        T: IntoIterator,
        T::Item: Into<Transition>,
        F: IntoIterator,
        F::Item: Into<State>,
    {
        let base = AutomatonBase::new(
            states.into_iter().collect(),
            alphabet.into(),
            start.into(),
            finals.into_iter().collect(),
        )?;
        let table = base.build_table(transitions.into_iter().map(Into::into), false)?;
        Ok(Self::from_parts(base, table))
    }

    fn from_parts(base: AutomatonBase, table: TransitionTable<State>) -> Self {
        debug!(
            "built DFA with {} states, {} symbols and {} transitions",
            base.states().len(),
            base.alphabet().size(),
            table.len()
        );
        Self { base, table }
    }

    /// Returns a [`DfaBuilder`] to assemble a DFA step by step.
    pub fn builder() -> DfaBuilder {
        DfaBuilder::default()
    }

    /// The declared states.
    pub fn states(&self) -> &StateSet {
        self.base.states()
    }

    /// The declared alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        self.base.alphabet()
    }

    /// The start state.
    pub fn start(&self) -> &State {
        self.base.start()
    }

    /// The final states.
    pub fn finals(&self) -> &StateSet {
        self.base.finals()
    }

    /// The transition table.
    pub fn transitions(&self) -> &TransitionTable<State> {
        &self.table
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states().len()
    }

    /// Returns the state reached from `state` on `symbol`, if there is a transition for exactly
    /// this symbol. The wildcard is not consulted.
    pub fn successor(&self, state: &State, symbol: &Symbol) -> Option<&State> {
        self.table.get(state, symbol)
    }
}

impl Simulate for Dfa {
    type Cursor = State;

    fn start_cursor(&self) -> State {
        self.start().clone()
    }

    fn step(&self, cursor: &mut State, symbol: &Symbol) -> bool {
        match self.table.get(cursor, symbol) {
            Some(next) => {
                *cursor = next.clone();
                true
            }
            None => false,
        }
    }

    fn is_accepting(&self, cursor: &State) -> bool {
        self.finals().contains(cursor)
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DFA over {}", self.alphabet())?;
        writeln!(f, "states: {}", self.states())?;
        writeln!(f, "start: {}", self.start())?;
        writeln!(f, "finals: {}", self.finals())?;
        write!(f, "{}", self.table)
    }
}

/// Assembles a [`Dfa`] piece by piece. Nothing is validated before [`DfaBuilder::build`].
///
/// # Example
/// ```
/// use fsa::prelude::*;
///
/// let dfa = Dfa::builder()
///     .with_states(["q0", "q1"])
///     .with_start("q0")
///     .with_transitions([("q0", Symbol::Wildcard, "q1")])
///     .with_finals(["q0"])
///     .build()
///     .unwrap();
/// assert!(dfa.accepts(""));
/// assert!(!dfa.accepts("x"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    parts: Parts<Transition>,
}

impl DfaBuilder {
    /// Declares the given states.
    pub fn with_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        self.parts.states.extend(states);
        self
    }

    /// Declares the given alphabet symbols.
    pub fn with_alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.parts.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Sets the start state, replacing a previously set one.
    pub fn with_start<S: Into<State>>(mut self, start: S) -> Self {
        self.parts.start = Some(start.into());
        self
    }

    /// Marks the given states as final.
    pub fn with_finals<I>(mut self, finals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        self.parts.finals.extend(finals);
        self
    }

    /// Adds the given transitions, in order.
    pub fn with_transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Transition>,
    {
        self.parts
            .edges
            .extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Validates everything and builds the [`Dfa`].
    pub fn build(self) -> Result<Dfa, ValidationError> {
        let (base, table) = self.parts.assemble(false)?;
        Ok(Dfa::from_parts(base, table))
    }
}
