use std::{collections::VecDeque, fmt::Display};

use tracing::{debug, trace};

use super::{AutomatonBase, Parts, Simulate, ValidationError};
use crate::prelude::*;

/// Determines how far epsilon transitions are followed after a symbol has been read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpsilonClosure {
    /// Every state that is reached by reading a symbol contributes the targets of its epsilon
    /// transition once. States that are only reached through an epsilon transition do not
    /// contribute further, so chains of two or more epsilon transitions are not followed to the
    /// end. The start state is not extended either.
    #[default]
    SinglePass,
    /// Epsilon transitions are followed until no new state is found, this also applies to the
    /// start state.
    Transitive,
}

/// Determines when an [`Nfa`] accepts, given the set of states it is in once the input is
/// exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Acceptance {
    /// Every final state has to be among the current states. An automaton without final
    /// states accepts nothing.
    #[default]
    AllFinals,
    /// At least one final state has to be among the current states.
    AnyFinal,
}

/// A non-deterministic finite automaton. A transition leads from a state on a symbol to a set of
/// states, and a running NFA is in a set of states at once.
///
/// Besides concrete symbols and [`Symbol::Wildcard`], a transition may be labelled with
/// [`Symbol::Epsilon`]. Epsilon transitions are never taken on their own, they are followed
/// after every step according to the [`EpsilonClosure`] of the automaton.
///
/// # Example
/// ```
/// use fsa::prelude::*;
///
/// let nfa = Nfa::new(
///     ["q1", "q2", "q3", "q4"],
///     ["0", "1"],
///     "q1",
///     ["q4"],
///     [
///         NTransition::new("q1", "0", ["q1"]),
///         NTransition::new("q1", "1", ["q1", "q2"]),
///         NTransition::new("q2", "0", ["q3"]),
///         NTransition::new("q2", Symbol::Epsilon, ["q3"]),
///         NTransition::new("q3", "1", ["q4"]),
///         NTransition::new("q4", "0", ["q4"]),
///         NTransition::new("q4", "1", ["q4"]),
///     ],
/// )
/// .unwrap();
/// assert!(nfa.accepts("101"));
/// assert!(nfa.accepts("0011"));
/// assert!(!nfa.accepts("0000"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    base: AutomatonBase,
    table: TransitionTable<StateSet>,
    closure: EpsilonClosure,
    acceptance: Acceptance,
}

impl Nfa {
    /// Builds an NFA with the default [`EpsilonClosure`] and [`Acceptance`]. Fails if a final
    /// state, a transition source or any state in a transition target refers to an undeclared
    /// state, if a symbol is neither declared nor a sentinel, or if two transitions share the
    /// same state and symbol.
    pub fn new<S, F, T>(
        states: S,
        alphabet: impl Into<Alphabet>,
        start: impl Into<State>,
        finals: F,
        transitions: T,
    ) -> Result<Self, ValidationError>
    where
        S: IntoIterator,
        S::Item: Into<State>,
        F: IntoIterator,
        F::Item: Into<State>,
        T: IntoIterator,
        T::Item: Into<NTransition>,
    {
        let base = AutomatonBase::new(
            states.into_iter().collect(),
            alphabet.into(),
            start.into(),
            finals.into_iter().collect(),
        )?;
        let table = base.build_table(transitions.into_iter().map(Into::into), true)?;
        Ok(Self::from_parts(
            base,
            table,
            EpsilonClosure::default(),
            Acceptance::default(),
        ))
    }

    fn from_parts(
        base: AutomatonBase,
        table: TransitionTable<StateSet>,
        closure: EpsilonClosure,
        acceptance: Acceptance,
    ) -> Self {
        debug!(
            "built NFA with {} states, {} symbols and {} transitions ({closure:?}, {acceptance:?})",
            base.states().len(),
            base.alphabet().size(),
            table.len()
        );
        Self {
            base,
            table,
            closure,
            acceptance,
        }
    }

    /// Returns an [`NfaBuilder`] to assemble an NFA step by step.
    pub fn builder() -> NfaBuilder {
        NfaBuilder::default()
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
    pub fn transitions(&self) -> &TransitionTable<StateSet> {
        &self.table
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states().len()
    }

    /// How epsilon transitions are followed.
    pub fn epsilon_closure(&self) -> EpsilonClosure {
        self.closure
    }

    /// When the automaton accepts.
    pub fn acceptance(&self) -> Acceptance {
        self.acceptance
    }

    /// Computes the states reached from `current` on `symbol`: the union of the targets of all
    /// transitions `(q, symbol)` for `q` in `current`, extended by epsilon transitions. States
    /// without a transition on `symbol` contribute nothing, so the result may be empty.
    pub fn next_states(&self, current: &StateSet, symbol: &Symbol) -> StateSet {
        let mut result = StateSet::new();
        for q in current {
            if let Some(targets) = self.table.get(q, symbol) {
                result.merge(targets);
            }
        }
        self.extend_by_epsilon(&mut result);
        result
    }

    fn extend_by_epsilon(&self, states: &mut StateSet) {
        match self.closure {
            EpsilonClosure::SinglePass => {
                let reached: Vec<State> = states.iter().cloned().collect();
                for q in &reached {
                    if let Some(targets) = self.table.get(q, &Symbol::Epsilon) {
                        trace!("following epsilon transition ({q}, ε) => {targets}");
                        states.merge(targets);
                    }
                }
            }
            EpsilonClosure::Transitive => {
                let mut queue: VecDeque<State> = states.iter().cloned().collect();
                while let Some(q) = queue.pop_front() {
                    let Some(targets) = self.table.get(&q, &Symbol::Epsilon) else {
                        continue;
                    };
                    for p in targets {
                        if states.add(p) {
                            queue.push_back(p.clone());
                        }
                    }
                }
            }
        }
    }
}

impl Simulate for Nfa {
    type Cursor = StateSet;

    fn start_cursor(&self) -> StateSet {
        let mut cursor = StateSet::singleton(self.start());
        if self.closure == EpsilonClosure::Transitive {
            self.extend_by_epsilon(&mut cursor);
        }
        cursor
    }

    fn step(&self, cursor: &mut StateSet, symbol: &Symbol) -> bool {
        let next = self.next_states(cursor, symbol);
        if next.is_empty() {
            return false;
        }
        *cursor = next;
        true
    }

    fn is_accepting(&self, cursor: &StateSet) -> bool {
        match self.acceptance {
            Acceptance::AllFinals => !self.finals().is_empty() && self.finals().is_subset(cursor),
            Acceptance::AnyFinal => self.finals().intersects(cursor),
        }
    }
}

impl Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "NFA over {}", self.alphabet())?;
        writeln!(f, "states: {}", self.states())?;
        writeln!(f, "start: {}", self.start())?;
        writeln!(f, "finals: {}", self.finals())?;
        write!(f, "{}", self.table)
    }
}

/// Assembles an [`Nfa`] piece by piece, this is also where the [`EpsilonClosure`] and the
/// [`Acceptance`] can be configured.
///
/// # Example
/// ```
/// use fsa::prelude::*;
///
/// let nfa = Nfa::builder()
///     .with_states(["q0", "q1", "q2"])
///     .with_alphabet(["a"])
///     .with_start("q0")
///     .with_finals(["q2"])
///     .with_transitions([
///         NTransition::new("q0", Symbol::Epsilon, ["q1"]),
///         NTransition::new("q1", Symbol::Epsilon, ["q2"]),
///     ])
///     .with_epsilon_closure(EpsilonClosure::Transitive)
///     .build()
///     .unwrap();
/// assert!(nfa.accepts(""));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NfaBuilder {
    parts: Parts<NTransition>,
    closure: EpsilonClosure,
    acceptance: Acceptance,
}

impl NfaBuilder {
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
        I::Item: Into<NTransition>,
    {
        self.parts
            .edges
            .extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Sets how epsilon transitions are followed, [`EpsilonClosure::SinglePass`] by default.
    pub fn with_epsilon_closure(mut self, closure: EpsilonClosure) -> Self {
        self.closure = closure;
        self
    }

    /// Sets when the automaton accepts, [`Acceptance::AllFinals`] by default.
    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Validates everything and builds the [`Nfa`].
    pub fn build(self) -> Result<Nfa, ValidationError> {
        let (base, table) = self.parts.assemble(true)?;
        Ok(Nfa::from_parts(base, table, self.closure, self.acceptance))
    }
}
