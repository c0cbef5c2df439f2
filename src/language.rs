use crate::math;

/// A set of expressions (strings). Duplicates collapse and the iteration order is unspecified.
///
/// Other than [`crate::state::StateSet::merge`], the [`ExpressionSet::union`] of two sets is a
/// new set and leaves both operands as they were.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionSet {
    expressions: math::Set<String>,
}

impl ExpressionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `expression`, returns `true` if it was not present before.
    pub fn add<S: Into<String>>(&mut self, expression: S) -> bool {
        self.expressions.insert(expression.into())
    }

    /// Removes `expression`, returns `true` if it was present.
    pub fn remove(&mut self, expression: &str) -> bool {
        self.expressions.remove(expression)
    }

    /// Membership test.
    pub fn contains(&self, expression: &str) -> bool {
        self.expressions.contains(expression)
    }

    /// Returns a new set containing the expressions of `self` and of `other`.
    pub fn union(&self, other: &ExpressionSet) -> ExpressionSet {
        let mut out = self.clone();
        out.expressions.extend(other.expressions.iter().cloned());
        out
    }

    /// Returns the number of expressions.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Returns `true` if there are no expressions.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Iterates over the expressions in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.expressions.iter().map(String::as_str)
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn as_set(&self) -> &math::Set<String> {
        &self.expressions
    }
}

impl<S: Into<String>> FromIterator<S> for ExpressionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            expressions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ExpressionSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.expressions.extend(iter.into_iter().map(Into::into))
    }
}

/// A language is a batch of inputs that an automaton can be asked about in one go, see
/// [`crate::automaton::Simulate::accepts_language`]. It carries no automaton specific semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Language {
    expressions: ExpressionSet,
}

impl Language {
    /// Builds a language from the given strings, duplicates are permitted and collapse.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expressions: words.into_iter().collect(),
        }
    }

    /// Gives access to the underlying set of expressions.
    pub fn expressions(&self) -> &ExpressionSet {
        &self.expressions
    }

    /// Mutable access to the underlying set of expressions.
    pub fn expressions_mut(&mut self) -> &mut ExpressionSet {
        &mut self.expressions
    }

    /// Iterates over the words of the language.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.expressions.iter()
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Returns `true` if the language contains no word.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl From<ExpressionSet> for Language {
    fn from(expressions: ExpressionSet) -> Self {
        Self { expressions }
    }
}

impl<S: Into<String>> FromIterator<S> for Language {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let language = Language::new(["a", "b", "a", ""]);
        assert_eq!(language.len(), 3);
        assert!(language.expressions().contains(""));
    }

    #[test]
    fn union_does_not_mutate_operands() {
        let left: ExpressionSet = ["a", "b"].into_iter().collect();
        let right: ExpressionSet = ["b", "c"].into_iter().collect();
        let both = left.union(&right);

        assert_eq!(both.len(), 3);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert!(both.contains("a") && both.contains("c"));
    }

    #[test]
    fn add_remove_and_copy() {
        let mut set = ExpressionSet::new();
        assert!(set.add("01"));
        assert!(!set.add(String::from("01")));
        let copy = set.clone();
        assert!(set.remove("01"));
        assert!(set.is_empty());
        assert!(copy.contains("01"));
    }
}
