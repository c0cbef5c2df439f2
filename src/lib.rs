//! Library for constructing and simulating finite automata over string symbols.
//!
//! An automaton consists of a finite set of states (the set of all states is denoted $Q$), an
//! alphabet of symbols, a designated start state, a set of final states and a transition table.
//! States and symbols are plain strings, so `q0` or `idle` are valid states and `0`, `a` or
//! even `→` are valid symbols. Besides the declared symbols, transitions may be labelled with
//! one of two sentinels: [`Symbol::Wildcard`] (matching every symbol that has no transition of
//! its own) and [`Symbol::Epsilon`] (a transition that consumes no input, only allowed in an
//! [`Nfa`]).
//!
//! The two kinds of automata are
//! - [`Dfa`], a deterministic automaton that is always in a single state, and
//! - [`Nfa`], a non-deterministic automaton that is in a set of states at once.
//!
//! Both are validated on construction, see [`ValidationError`] for the reasons this can fail.
//! Once built, an automaton is immutable. Simulating it is done through the [`Simulate`] trait,
//! which keeps the position of a run in a separate cursor. This means a single automaton can be
//! queried from many threads at the same time, and [`Simulate::accepts_language_par`] does
//! exactly that for the words of a [`Language`].
//!
//! If the position of a run should persist between calls (for instance to feed a word in
//! pieces), use a [`Runner`].
//!
//! # Features
//! - `random` (default) enables the [`random`] module for sampling strings and languages.
//! - `parallel` (default) enables [`Simulate::accepts_language_par`] which uses rayon.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use fsa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{
            Acceptance, AutomatonBase, Dfa, DfaBuilder, EpsilonClosure, Nfa, NfaBuilder, Runner,
            Simulate, ValidationError,
        },
        language::{ExpressionSet, Language},
        math,
        state::{State, StateSet},
        transition::{Edge, NTransition, Target, Transition, TransitionTable},
        word::FiniteWord,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// States and sets of states.
pub mod state;
pub use state::{State, StateSet};

/// Module that contains definitions for dealing with alphabets and symbols.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol};

/// Defines what can be fed to an automaton.
pub mod word;
pub use word::FiniteWord;

/// Sets of strings, used to check many words at once.
pub mod language;
pub use language::{ExpressionSet, Language};

/// Edges and the table in which automata store them.
pub mod transition;
pub use transition::{NTransition, Transition, TransitionTable};

/// Deterministic and non-deterministic automata as well as their simulation.
pub mod automaton;
pub use automaton::{Dfa, Nfa, Runner, Simulate, ValidationError};

/// Random generation of strings and languages, mostly useful for testing.
#[cfg(feature = "random")]
pub mod random;
