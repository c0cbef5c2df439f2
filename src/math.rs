/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Type alias for a set that remembers the order in which elements were inserted. This is
/// used wherever the order is observable, for example when printing an alphabet.
pub type OrderedSet<S> = indexmap::IndexSet<S, fxhash::FxBuildHasher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_set_keeps_insertion_order() {
        let set: OrderedSet<&str> = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }
}
