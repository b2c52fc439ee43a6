use std::fmt;

use pair_fmt::{Pair, StrJoin};

// O(n) everything; exists to cross-check tree-backed implementations.
pub struct VecBimap<K, V>(Vec<(K, V)>);

impl<K: Eq, V: Eq> VecBimap<K, V> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) || self.contains_value(&value) {
            return false;
        }
        self.0.push((key, value));
        true
    }

    pub fn get_value(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
    pub fn get_key(&self, value: &V) -> Option<&K> {
        self.0.iter().find(|(_, v)| v == value).map(|(k, _)| k)
    }
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_value(key).is_some()
    }
    pub fn contains_value(&self, value: &V) -> bool {
        self.get_key(value).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.swap_remove(i).1)
    }
}

impl<K: Ord + fmt::Display, V: Ord + fmt::Display> VecBimap<K, V> {
    pub fn inorder_by_keys(&self) -> String {
        let mut entries: Vec<_> =
            self.0.iter().map(|(k, v)| (k, v)).collect();
        entries.sort_by(|x, y| x.0.cmp(y.0));
        StrJoin(entries.iter().map(|&(k, v)| Pair(k, v)), ", ").to_string()
    }
    // Still (key, value) groups, just sorted by value.
    pub fn inorder_by_values(&self) -> String {
        let mut entries: Vec<_> =
            self.0.iter().map(|(k, v)| (k, v)).collect();
        entries.sort_by(|x, y| x.1.cmp(y.1));
        StrJoin(entries.iter().map(|&(k, v)| Pair(k, v)), ", ").to_string()
    }
}

impl<K: Eq, V: Eq> Default for VecBimap<K, V> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut map = VecBimap::new();
    assert!(map.insert("banana", 5));
    assert!(map.insert("apple", 3));
    assert!(!map.insert("apple", 4));
    assert!(!map.insert("cherry", 5));
    assert!(map.insert("cherry", 1));
    assert_eq!(map.len(), 3);

    assert_eq!(map.get_value(&"apple"), Some(&3));
    assert_eq!(map.get_key(&5), Some(&"banana"));
    assert!(map.contains_key(&"banana"));
    assert!(!map.contains_value(&4));

    assert_eq!(
        map.inorder_by_keys(),
        "(apple, 3), (banana, 5), (cherry, 1)"
    );
    assert_eq!(
        map.inorder_by_values(),
        "(cherry, 1), (apple, 3), (banana, 5)"
    );

    assert_eq!(map.remove(&"banana"), Some(5));
    assert_eq!(map.remove(&"banana"), None);
    assert_eq!(map.len(), 2);
}
