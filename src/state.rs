use std::{borrow::Borrow, fmt::Display};

use itertools::Itertools;

use crate::math;

/// A state of an automaton. States are opaque labels, they carry no behaviour and are only
/// compared and hashed. Any string can be turned into a state, and [`State::new`] produces
/// the conventional labels `q0`, `q1`, ... from an index.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(String);

impl State {
    /// Builds the state labelled `q{idx}`.
    pub fn new(idx: usize) -> Self {
        Self(format!("q{idx}"))
    }

    /// Returns the label of the state.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for State {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&State> for State {
    fn from(value: &State) -> Self {
        value.clone()
    }
}

/// A set of [`State`]s. There are no duplicates and the order in which states were added is
/// not observable.
///
/// Note that [`StateSet::merge`] modifies the receiver in place, which differs from
/// [`crate::language::ExpressionSet::union`] that produces a fresh set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSet {
    states: math::Set<State>,
}

impl StateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set containing only `state`.
    pub fn singleton<S: Into<State>>(state: S) -> Self {
        let mut set = Self::new();
        set.add(state);
        set
    }

    /// Adds `state` to the set, returns `true` if it was not present before.
    pub fn add<S: Into<State>>(&mut self, state: S) -> bool {
        self.states.insert(state.into())
    }

    /// Removes `state` from the set, returns `true` if it was present.
    pub fn remove<Q: Borrow<str> + ?Sized>(&mut self, state: &Q) -> bool {
        let state: &str = state.borrow();
        self.states.remove(state)
    }

    /// Membership test.
    pub fn contains<Q: Borrow<str> + ?Sized>(&self, state: &Q) -> bool {
        let state: &str = state.borrow();
        self.states.contains(state)
    }

    /// Returns `true` if every element of `self` is also an element of `other`. The empty set
    /// is a subset of every set.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.states.iter().all(|q| other.contains(q))
    }

    /// Returns `true` if `other` is a subset of `self`.
    pub fn is_superset(&self, other: &StateSet) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|q| large.contains(q))
    }

    /// Adds every state of `other` to `self`. `other` is left untouched.
    pub fn merge(&mut self, other: &StateSet) {
        self.states.extend(other.states.iter().cloned());
    }

    /// Returns the number of states in the set.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the set contains no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over the states in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }
}

impl Display for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.states.iter().sorted().join(", "))
    }
}

impl<S: Into<State>> FromIterator<S> for StateSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<State>> Extend<S> for StateSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.states.extend(iter.into_iter().map(Into::into))
    }
}

impl IntoIterator for StateSet {
    type Item = State;
    type IntoIter = std::collections::hash_set::IntoIter<State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a State;
    type IntoIter = std::collections::hash_set::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels_from_indices() {
        assert_eq!(State::new(3).label(), "q3");
        assert_eq!(State::new(0), State::from("q0"));
    }

    #[test]
    fn add_and_remove() {
        let mut set = StateSet::new();
        assert!(set.add("q0"));
        assert!(!set.add("q0"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("q0"));
        assert!(set.contains(&State::new(0)));
        assert!(set.remove("q0"));
        assert!(!set.remove("q0"));
        assert!(set.is_empty());
    }

    #[test]
    fn subset_and_superset() {
        let small: StateSet = ["q1"].into_iter().collect();
        let large: StateSet = ["q1", "q2"].into_iter().collect();
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(large.is_superset(&small));
        assert!(!small.is_superset(&large));
        assert!(StateSet::new().is_subset(&small));
        assert!(small.is_subset(&small));
    }

    #[test]
    fn merge_leaves_argument_untouched() {
        let mut left: StateSet = ["q1", "q2"].into_iter().collect();
        let right: StateSet = ["q2", "q3"].into_iter().collect();
        left.merge(&right);
        assert_eq!(left, ["q1", "q2", "q3"].into_iter().collect::<StateSet>());
        assert_eq!(right, ["q2", "q3"].into_iter().collect::<StateSet>());
    }

    #[test]
    fn clones_are_independent() {
        let original = StateSet::singleton("q0");
        let mut copy = original.clone();
        copy.add("q1");
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn intersection_test() {
        let a: StateSet = ["q1", "q2"].into_iter().collect();
        let b: StateSet = ["q2", "q3"].into_iter().collect();
        let c: StateSet = ["q4"].into_iter().collect();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn display_is_sorted() {
        let set: StateSet = ["q2", "q0", "q1"].into_iter().collect();
        assert_eq!(set.to_string(), "{q0, q1, q2}");
        assert_eq!(StateSet::new().to_string(), "{}");
    }
}
