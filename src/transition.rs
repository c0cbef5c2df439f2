use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::{
    alphabet::Symbol,
    automaton::ValidationError,
    math,
    state::{State, StateSet},
};

/// The value stored for a `(state, symbol)` key in a [`TransitionTable`]. This is a single
/// [`State`] for deterministic automata and a [`StateSet`] for non-deterministic ones.
pub trait Target: Clone + Debug {
    /// Returns all states that this target refers to.
    fn states(&self) -> impl Iterator<Item = &State> + '_;
}

impl Target for State {
    fn states(&self) -> impl Iterator<Item = &State> + '_ {
        std::iter::once(self)
    }
}

impl Target for StateSet {
    fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.iter()
    }
}

/// An edge as supplied by the caller when constructing an automaton. It is decomposed into
/// the key `(source, symbol)` and the target that is stored in the [`TransitionTable`].
pub trait Edge {
    /// The type of target this edge leads to.
    type Target: Target;
    /// Destructures the edge into its source, symbol and target.
    fn into_parts(self) -> (State, Symbol, Self::Target);
}

/// A deterministic edge, leading from `source` to the single state `target` on `symbol`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// The state in which the edge starts.
    pub source: State,
    /// The symbol that labels the edge.
    pub symbol: Symbol,
    /// The state that is reached.
    pub target: State,
}

impl Transition {
    /// Creates a new deterministic edge.
    pub fn new<S, Y, T>(source: S, symbol: Y, target: T) -> Self
    where
        S: Into<State>,
        Y: Into<Symbol>,
        T: Into<State>,
    {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }
}

impl<S, Y, T> From<(S, Y, T)> for Transition
where
    S: Into<State>,
    Y: Into<Symbol>,
    T: Into<State>,
{
    fn from((source, symbol, target): (S, Y, T)) -> Self {
        Self::new(source, symbol, target)
    }
}

impl Edge for Transition {
    type Target = State;
    fn into_parts(self) -> (State, Symbol, State) {
        (self.source, self.symbol, self.target)
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) => {}", self.source, self.symbol, self.target)
    }
}

/// A non-deterministic edge, leading from `source` to every state in `targets` on `symbol`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NTransition {
    /// The state in which the edge starts.
    pub source: State,
    /// The symbol that labels the edge, may be [`Symbol::Epsilon`].
    pub symbol: Symbol,
    /// All states that are reached.
    pub targets: StateSet,
}

impl NTransition {
    /// Creates a new non-deterministic edge.
    pub fn new<S, Y, I>(source: S, symbol: Y, targets: I) -> Self
    where
        S: Into<State>,
        Y: Into<Symbol>,
        I: IntoIterator,
        I::Item: Into<State>,
    {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            targets: targets.into_iter().collect(),
        }
    }
}

impl<S, Y, I> From<(S, Y, I)> for NTransition
where
    S: Into<State>,
    Y: Into<Symbol>,
    I: IntoIterator,
    I::Item: Into<State>,
{
    fn from((source, symbol, targets): (S, Y, I)) -> Self {
        Self::new(source, symbol, targets)
    }
}

impl Edge for NTransition {
    type Target = StateSet;
    fn into_parts(self) -> (State, Symbol, StateSet) {
        (self.source, self.symbol, self.targets)
    }
}

impl Display for NTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) => {}", self.source, self.symbol, self.targets)
    }
}

/// Maps a `(state, symbol)` pair to a target. Every key occurs at most once, inserting a key
/// a second time is rejected with [`ValidationError::DuplicateTransition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<T> {
    edges: math::Map<State, math::Map<Symbol, T>>,
    size: usize,
}

impl<T> Default for TransitionTable<T> {
    fn default() -> Self {
        Self {
            edges: math::Map::default(),
            size: 0,
        }
    }
}

impl<T> TransitionTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the target for the given key.
    pub fn get(&self, state: &State, symbol: &Symbol) -> Option<&T> {
        self.edges.get(state)?.get(symbol)
    }

    /// Returns `true` if an edge for the key exists.
    pub fn contains_key(&self, state: &State, symbol: &Symbol) -> bool {
        self.get(state, symbol).is_some()
    }

    /// Inserts a new edge, unless the key is already occupied.
    pub fn insert(&mut self, state: State, symbol: Symbol, target: T) -> Result<(), ValidationError> {
        if self.contains_key(&state, &symbol) {
            return Err(ValidationError::DuplicateTransition { state, symbol });
        }
        self.edges.entry(state).or_default().insert(symbol, target);
        self.size += 1;
        Ok(())
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over the edges leaving `state`.
    pub fn edges_from<'a>(&'a self, state: &State) -> impl Iterator<Item = (&'a Symbol, &'a T)> + 'a {
        self.edges.get(state).into_iter().flat_map(|m| m.iter())
    }

    /// Iterates over all edges in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &Symbol, &T)> + '_ {
        self.edges
            .iter()
            .flat_map(|(q, m)| m.iter().map(move |(a, p)| (q, a, p)))
    }
}

impl<T: Display> Display for TransitionTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .sorted_by(|(q, a, _), (p, b, _)| (q, a).cmp(&(p, b)))
                .map(|(q, a, t)| format!("({q}, {a}) => {t}"))
                .join("\n")
        )
    }
}
