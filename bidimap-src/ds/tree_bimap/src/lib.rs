use std::fmt;

use linked_bst::LinkedBst;

/// An associative container over (key, value) pairs, both individually
/// unique, with O(log n) average lookup in either direction. Two mirrored
/// BSTs are kept in sync: one ordered by key carrying the value as its
/// link, one ordered by value carrying the key.
///
/// The trees are unbalanced, so adversarial insertion order degrades
/// operations to O(n).
pub struct TreeBimap<K, V> {
    key_tree: LinkedBst<K, V>,
    value_tree: LinkedBst<V, K>,
    len: usize,
}

impl<K, V> TreeBimap<K, V> {
    pub fn new() -> Self {
        Self {
            key_tree: LinkedBst::new(),
            value_tree: LinkedBst::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl<K: Ord, V: Ord> TreeBimap<K, V> {
    /// Adds the pair to both trees. Rejects the pair, leaving the map
    /// unchanged, if the key or the value is already present; neither
    /// tree is touched before both checks pass, so one tree can never
    /// hold an entry the other lacks.
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Clone,
        V: Clone,
    {
        if self.key_tree.contains(&key) || self.value_tree.contains(&value) {
            return false;
        }
        let value_inserted =
            self.value_tree.insert(value.clone(), key.clone());
        let key_inserted = self.key_tree.insert(key, value);
        debug_assert!(value_inserted && key_inserted);
        self.len += 1;
        true
    }

    pub fn get_value(&self, key: &K) -> Option<&V> {
        self.key_tree.link(key)
    }
    pub fn get_key(&self, value: &V) -> Option<&K> {
        self.value_tree.link(value)
    }
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_value(key).is_some()
    }
    pub fn contains_value(&self, value: &V) -> bool {
        self.get_key(value).is_some()
    }

    /// Removes the pair with this key from both trees and returns the
    /// value. An absent key returns `None` and changes nothing.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (_, value) = self.key_tree.remove(key)?;
        let (value, _) = self.value_tree.remove(&value)?;
        self.len -= 1;
        Some(value)
    }
}

impl<K: fmt::Display, V: fmt::Display> TreeBimap<K, V> {
    /// Pairs in ascending key order, as `"(key, value), ..."`.
    pub fn inorder_by_keys(&self) -> String { self.key_tree.inorder(false) }

    /// Pairs in ascending value order, still as `"(key, value), ..."`.
    /// The value tree stores the value as its ordering key and the key
    /// as its link, so the link-first rendering restores the key-first
    /// groups.
    pub fn inorder_by_values(&self) -> String {
        self.value_tree.inorder(true)
    }
}

impl<K, V> Default for TreeBimap<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeBimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key_tree)
    }
}

#[test]
fn worked_example() {
    let mut map = TreeBimap::new();
    assert!(map.insert("banana", 5));
    assert!(map.insert("apple", 3));
    assert!(map.insert("carrot", 4));
    assert!(map.insert("date", 6));
    assert!(map.insert("eggplant", 1));
    assert!(map.insert("fig", 2));
    assert_eq!(map.len(), 6);

    assert_eq!(
        map.inorder_by_keys(),
        "(apple, 3), (banana, 5), (carrot, 4), (date, 6), (eggplant, 1), \
         (fig, 2)"
    );
    assert_eq!(
        map.inorder_by_values(),
        "(eggplant, 1), (fig, 2), (apple, 3), (carrot, 4), (banana, 5), \
         (date, 6)"
    );

    assert_eq!(map.get_key(&4), Some(&"carrot"));
    assert_eq!(map.remove(&"banana"), Some(5));
    assert_eq!(map.len(), 5);

    assert!(!map.insert("apple", 99));
    assert_eq!(map.get_value(&"apple"), Some(&3));
    assert_eq!(map.len(), 5);
}

#[test]
fn uniqueness() {
    let mut map = TreeBimap::new();
    assert!(map.insert("a", 1));

    // Duplicate key, duplicate value, and both at once all reject.
    assert!(!map.insert("a", 2));
    assert!(!map.insert("b", 1));
    assert!(!map.insert("a", 1));
    assert_eq!(map.len(), 1);
    assert_eq!(map.inorder_by_keys(), "(a, 1)");
    assert_eq!(map.inorder_by_values(), "(a, 1)");
    assert!(!map.contains_value(&2));
    assert!(!map.contains_key(&"b"));
}

#[test]
fn bijection_round_trip() {
    let mut map = TreeBimap::new();
    for (key, value) in [("d", 4), ("b", 2), ("f", 6), ("a", 1)] {
        assert!(map.insert(key, value));
        assert_eq!(map.get_value(&key), Some(&value));
        assert_eq!(map.get_key(&value), Some(&key));
    }
}

#[test]
fn remove_correctness() {
    let mut map = TreeBimap::new();
    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(map.remove(&"a"), Some(1));
    assert_eq!(map.len(), 1);
    assert!(!map.contains_key(&"a"));
    assert!(!map.contains_value(&1));
    assert!(map.contains_key(&"b"));

    // Idempotent absence.
    assert_eq!(map.remove(&"a"), None);
    assert_eq!(map.len(), 1);

    // A removed pair can be reinserted, possibly recombined.
    assert!(map.insert("a", 3));
    assert_eq!(map.get_key(&3), Some(&"a"));
}

#[test]
fn traversal_ordering() {
    let mut map = TreeBimap::new();
    for (key, value) in [(20, 'c'), (10, 'd'), (30, 'a'), (25, 'b')] {
        assert!(map.insert(key, value));
    }
    assert_eq!(
        map.inorder_by_keys(),
        "(10, d), (20, c), (25, b), (30, a)"
    );
    assert_eq!(
        map.inorder_by_values(),
        "(30, a), (25, b), (20, c), (10, d)"
    );
    assert_eq!(map.to_string(), map.inorder_by_keys());
}

#[test]
fn empty_map() {
    let mut map = TreeBimap::<u32, u32>::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get_value(&0), None);
    assert_eq!(map.get_key(&0), None);
    assert_eq!(map.remove(&0), None);
    assert_eq!(map.inorder_by_keys(), "");
    assert_eq!(map.inorder_by_values(), "");
}

#[test]
fn random_ops_match_naive() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use vec_bimap::VecBimap;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let mut actual = TreeBimap::new();
    let mut expected = VecBimap::new();

    for _ in 0..10_000 {
        let key = rng.gen_range(0..60_u32);
        let value = rng.gen_range(0..60_u32);
        match rng.gen_range(0..6) {
            0 | 1 | 2 => assert_eq!(
                actual.insert(key, value),
                expected.insert(key, value)
            ),
            3 => assert_eq!(actual.remove(&key), expected.remove(&key)),
            4 => assert_eq!(
                actual.get_value(&key),
                expected.get_value(&key)
            ),
            _ => assert_eq!(actual.get_key(&value), expected.get_key(&value)),
        }
        assert_eq!(actual.len(), expected.len());
        assert_eq!(actual.is_empty(), expected.is_empty());
    }

    assert_eq!(actual.inorder_by_keys(), expected.inorder_by_keys());
    assert_eq!(actual.inorder_by_values(), expected.inorder_by_values());
}
