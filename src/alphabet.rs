use std::fmt::Display;

use itertools::Itertools;

use crate::math;

/// A symbol that can label a transition. Besides the concrete symbols that an [`Alphabet`]
/// declares, there are two sentinels which never collide with a concrete symbol:
/// - [`Symbol::Wildcard`] matches any concrete input symbol for which no exact transition exists.
/// - [`Symbol::Epsilon`] labels spontaneous transitions of a non-deterministic automaton, it
///   never consumes input.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A symbol declared by the caller.
    Concrete(String),
    /// Matches every concrete symbol, but only if no exact transition exists.
    Wildcard,
    /// The empty word, only legal in non-deterministic automata.
    Epsilon,
}

impl Symbol {
    /// Creates a concrete symbol.
    pub fn concrete<S: Into<String>>(symbol: S) -> Self {
        Self::Concrete(symbol.into())
    }

    /// Returns the underlying string if `self` is a concrete symbol.
    pub fn as_concrete(&self) -> Option<&str> {
        match self {
            Symbol::Concrete(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for the two sentinel symbols.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Symbol::Concrete(_))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Concrete(s) => write!(f, "{s}"),
            Symbol::Wildcard => write!(f, "*"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::Concrete(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::Concrete(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self::Concrete(value.to_string())
    }
}

impl From<&Symbol> for Symbol {
    fn from(value: &Symbol) -> Self {
        value.clone()
    }
}

/// The collection of concrete symbols that an automaton declares. Membership is checked in
/// constant time and the declaration order is kept for display purposes.
///
/// # Example
/// ```
/// use fsa::prelude::*;
///
/// let alphabet = Alphabet::from_iter(["0", "1", "0"]);
/// assert_eq!(alphabet.size(), 2);
/// assert!(alphabet.contains("1"));
/// assert!(!alphabet.contains("2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: math::OrderedSet<String>,
}

impl Alphabet {
    /// Creates an alphabet without any symbols.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if `symbol` was declared.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Checks whether `symbol` may label a transition. Concrete symbols have to be declared,
    /// the wildcard is always admitted and epsilon only if `epsilon_allowed` is set.
    pub fn admits(&self, symbol: &Symbol, epsilon_allowed: bool) -> bool {
        match symbol {
            Symbol::Concrete(s) => self.contains(s),
            Symbol::Wildcard => true,
            Symbol::Epsilon => epsilon_allowed,
        }
    }

    /// Returns the number of declared symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if no symbol was declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.symbols.iter().map(String::as_str)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbols.iter().join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for Alphabet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Alphabet {
    fn from(value: [S; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for Alphabet {
    fn from(value: Vec<S>) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_never_declared() {
        let alphabet = Alphabet::from_iter(["*", "ε", "EPSILON"]);
        assert!(alphabet.admits(&Symbol::from("*"), false));
        assert!(alphabet.admits(&Symbol::Wildcard, false));
        assert!(!alphabet.admits(&Symbol::Epsilon, false));
        assert!(alphabet.admits(&Symbol::Epsilon, true));
        assert_ne!(Symbol::from("*"), Symbol::Wildcard);
    }

    #[test]
    fn unknown_symbols_are_not_admitted() {
        let alphabet = Alphabet::from_iter(["a", "b"]);
        assert!(alphabet.admits(&Symbol::concrete("a"), true));
        assert!(!alphabet.admits(&Symbol::concrete("c"), true));
    }

    #[test]
    fn alphabet_keeps_declaration_order() {
        let alphabet: Alphabet = ["b", "a", "b"].into_iter().collect();
        assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(alphabet.to_string(), "{b, a}");
        assert!(Alphabet::empty().is_empty());
    }
}
