use crate::alphabet::Symbol;

/// A finite input to an automaton, viewed as a sequence of concrete [`Symbol`]s.
///
/// Strings are read one `char` at a time, so `"01"` is the word consisting of the symbols
/// `0` and `1`. Symbols that span several characters can be fed by using a slice (or an array,
/// or a vector) of strings, where each element is one symbol.
///
/// # Example
/// ```
/// use fsa::prelude::*;
///
/// assert_eq!("ab".symbols().count(), 2);
/// assert_eq!(["ab", "c"].symbols().collect::<Vec<_>>(), vec![Symbol::from("ab"), Symbol::from("c")]);
/// ```
pub trait FiniteWord {
    /// Returns an iterator over the symbols of the word, from left to right.
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_;

    /// Returns the number of symbols in the word.
    fn symbol_count(&self) -> usize {
        self.symbols().count()
    }
}

impl FiniteWord for str {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.chars().map(Symbol::from)
    }
}

impl FiniteWord for String {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.as_str().symbols()
    }
}

impl<S: AsRef<str>> FiniteWord for [S] {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.iter().map(|s| Symbol::concrete(s.as_ref()))
    }
}

impl<S: AsRef<str>, const N: usize> FiniteWord for [S; N] {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.as_slice().symbols()
    }
}

impl<S: AsRef<str>> FiniteWord for Vec<S> {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.as_slice().symbols()
    }
}

impl<W: FiniteWord + ?Sized> FiniteWord for &W {
    fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        W::symbols(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_split_into_chars() {
        let symbols: Vec<_> = "0ä1".symbols().collect();
        assert_eq!(
            symbols,
            vec![Symbol::from("0"), Symbol::from("ä"), Symbol::from("1")]
        );
        assert_eq!("".symbol_count(), 0);
        assert_eq!("0ä1".symbol_count(), 3);
        assert_eq!(String::from("abc").symbol_count(), 3);
    }

    #[test]
    fn slices_keep_multi_character_symbols() {
        let word = vec!["open", "close"];
        assert_eq!(word.symbol_count(), 2);
        assert_eq!(word.symbols().next(), Some(Symbol::from("open")));
        let empty: [&str; 0] = [];
        assert_eq!(empty.symbol_count(), 0);
    }
}
