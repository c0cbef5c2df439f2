use std::fmt::Debug;

use tracing::trace;

use crate::prelude::*;

mod validation;
pub use validation::{AutomatonBase, ValidationError};
pub(crate) use validation::Parts;

mod dfa;
pub use dfa::{Dfa, DfaBuilder};

mod nfa;
pub use nfa::{Acceptance, EpsilonClosure, Nfa, NfaBuilder};

/// Simulation of an automaton on finite inputs.
///
/// The automaton itself is never modified by a simulation. Instead, the position of a running
/// automaton is kept in a separate [`Simulate::Cursor`] that is created by
/// [`Simulate::start_cursor`] and advanced by [`Simulate::step`]. For a [`Dfa`] the cursor is a
/// single [`State`], for an [`Nfa`] it is a [`StateSet`]. As the transition tables are immutable,
/// one automaton can be shared between many simulations (also across threads), each of which
/// owns its cursor.
///
/// The methods [`Simulate::accepts`] and [`Simulate::accepts_language`] start every query from
/// a fresh cursor. If the position should persist between calls, use a [`Runner`].
pub trait Simulate {
    /// The position of a running automaton.
    type Cursor: Clone + Debug + PartialEq;

    /// Returns the cursor that every simulation starts from.
    fn start_cursor(&self) -> Self::Cursor;

    /// Attempts to move `cursor` along the transitions labelled with `symbol`. Returns `false`
    /// and leaves the cursor unchanged if no such transition exists. This is a normal outcome
    /// of a simulation and not an error.
    fn step(&self, cursor: &mut Self::Cursor, symbol: &Symbol) -> bool;

    /// Returns `true` if the automaton accepts when the input is exhausted in `cursor`.
    fn is_accepting(&self, cursor: &Self::Cursor) -> bool;

    /// Feeds `word` symbol by symbol, starting from the given `cursor`. For each symbol the
    /// exact transition is tried first and the wildcard transition second, if neither exists
    /// the word is rejected right away. Once the input is exhausted, the result is decided by
    /// [`Simulate::is_accepting`].
    ///
    /// On rejection the cursor stays where the simulation got stuck.
    fn accepts_from<W: FiniteWord>(&self, cursor: &mut Self::Cursor, word: W) -> bool {
        for symbol in word.symbols() {
            if self.step(cursor, &symbol) || self.step(cursor, &Symbol::Wildcard) {
                continue;
            }
            trace!("no transition on {symbol} from {cursor:?}, rejecting");
            return false;
        }
        self.is_accepting(cursor)
    }

    /// Returns `true` if the automaton accepts `word` when starting from the start cursor.
    ///
    /// # Example
    /// ```
    /// use fsa::prelude::*;
    ///
    /// let dfa = Dfa::new(
    ///     ["q0", "q1"],
    ///     ["a"],
    ///     "q0",
    ///     [("q0", "a", "q1"), ("q1", "a", "q0")],
    ///     ["q0"],
    /// )
    /// .unwrap();
    /// assert!(dfa.accepts("aa"));
    /// assert!(!dfa.accepts("a"));
    /// ```
    fn accepts<W: FiniteWord>(&self, word: W) -> bool {
        let mut cursor = self.start_cursor();
        self.accepts_from(&mut cursor, word)
    }

    /// Returns `true` if every word of `language` is accepted. Each word is checked from a
    /// fresh start cursor, so the iteration order does not matter. Stops at the first
    /// rejected word.
    fn accepts_language(&self, language: &Language) -> bool {
        language.iter().all(|word| self.accepts(word))
    }

    /// Parallel version of [`Simulate::accepts_language`], the words are checked on the
    /// rayon thread pool. The result is always the same as for the sequential version.
    #[cfg(feature = "parallel")]
    fn accepts_language_par(&self, language: &Language) -> bool
    where
        Self: Sync,
    {
        use rayon::prelude::*;

        language
            .expressions()
            .as_set()
            .par_iter()
            .all(|word| self.accepts(word.as_str()))
    }

    /// Creates a [`Runner`] that keeps its cursor between calls.
    fn runner(&self) -> Runner<'_, Self> {
        Runner::new(self)
    }
}

/// Couples an automaton with a cursor that persists between calls. This is useful if a word
/// should be fed in several pieces, or if the position after a call is of interest.
///
/// ```
/// use fsa::prelude::*;
///
/// let dfa = Dfa::new(["q0", "q1"], ["a"], "q0", [("q0", "a", "q1")], ["q1"]).unwrap();
/// let mut runner = dfa.runner();
/// assert!(runner.accepts("a"));
/// assert_eq!(runner.cursor(), &State::new(1));
/// // the cursor is not reset implicitly
/// assert!(!runner.accepts("a"));
/// runner.reset();
/// assert_eq!(runner.cursor(), dfa.start());
/// ```
#[derive(Debug)]
pub struct Runner<'a, A: Simulate + ?Sized> {
    automaton: &'a A,
    cursor: A::Cursor,
}

impl<'a, A: Simulate + ?Sized> Clone for Runner<'a, A> {
    fn clone(&self) -> Self {
        Self {
            automaton: self.automaton,
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, A: Simulate + ?Sized> Runner<'a, A> {
    /// Creates a runner whose cursor is at the start of `automaton`.
    pub fn new(automaton: &'a A) -> Self {
        Self {
            cursor: automaton.start_cursor(),
            automaton,
        }
    }

    /// Moves the cursor back to the start. Resetting twice is the same as resetting once.
    pub fn reset(&mut self) {
        self.cursor = self.automaton.start_cursor();
    }

    /// The current position.
    pub fn cursor(&self) -> &A::Cursor {
        &self.cursor
    }

    /// The automaton that is run.
    pub fn automaton(&self) -> &'a A {
        self.automaton
    }

    /// Performs a single step on `symbol`, see [`Simulate::step`].
    pub fn transition(&mut self, symbol: &Symbol) -> bool {
        self.automaton.step(&mut self.cursor, symbol)
    }

    /// Returns `true` if the automaton accepts in the current position.
    pub fn is_accepting(&self) -> bool {
        self.automaton.is_accepting(&self.cursor)
    }

    /// Feeds `word` starting from the current position, see [`Simulate::accepts_from`].
    /// Call [`Runner::reset`] between independent queries.
    pub fn accepts<W: FiniteWord>(&mut self, word: W) -> bool {
        self.automaton.accepts_from(&mut self.cursor, word)
    }

    /// Checks every word of `language`, resetting before each of them. The runner is reset
    /// when this returns.
    pub fn accepts_language(&mut self, language: &Language) -> bool {
        let mut accepted = true;
        for word in language.iter() {
            self.reset();
            if !self.accepts(word) {
                accepted = false;
                break;
            }
        }
        self.reset();
        accepted
    }
}
