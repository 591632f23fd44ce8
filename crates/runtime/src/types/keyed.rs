use crate::{Error, ErrorKind, Result, prelude::*};
use std::{collections::BTreeMap, fmt};

/// A container that supports bulk operations derived from three primitives
///
/// Implementors provide key enumeration, lookup by key, and deletion by key. The remaining
/// operations are derived from those primitives, so any container with the same three operations
/// gets them for free.
///
/// If the container can report its size cheaply then [KeyedCollection::size] should be overridden,
/// [KeyedCollection::is_empty] will then use it instead of enumerating the keys.
///
/// The container mustn't be modified by another handle while a derived operation is running.
pub trait KeyedCollection {
    /// The container's key type
    type Key: Clone + fmt::Display;
    /// The container's value type
    type Value;

    /// Returns a snapshot of the container's keys
    ///
    /// The order is up to the container, but must stay the same while the container is unmodified.
    fn keys(&self) -> Vec<Self::Key>;

    /// Returns the value corresponding to the key
    ///
    /// A [KeyNotFound](ErrorKind::KeyNotFound) error is returned if the key isn't present.
    fn get(&self, key: &Self::Key) -> Result<Self::Value>;

    /// Removes the entry with the given key, returning the removed value
    ///
    /// Deleting a key that isn't present is a no-op that returns `None`.
    fn delete(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Returns the number of entries, if the container can provide it without enumeration
    fn size(&self) -> Option<usize> {
        None
    }

    /// Returns the container's values, in the order of [KeyedCollection::keys]
    fn values(&self) -> Result<Vec<Self::Value>> {
        self.keys().iter().map(|key| self.get(key)).collect()
    }

    /// Returns true if the container has no entries
    fn is_empty(&self) -> bool {
        match self.size() {
            Some(size) => size == 0,
            None => self.keys().is_empty(),
        }
    }

    /// Removes all of the container's entries
    fn clear(&mut self) {
        // Deleting while enumerating the live keys isn't safe, so work from a snapshot
        for key in self.keys() {
            self.delete(&key);
        }
    }
}

/// Returns the error used when a key is missing from a [KeyedCollection]
pub fn key_not_found(key: &impl fmt::Display) -> Error {
    ErrorKind::KeyNotFound(key.to_string()).into()
}

impl KeyedCollection for RMap {
    type Key = ValueKey;
    type Value = RValue;

    fn keys(&self) -> Vec<ValueKey> {
        self.data().keys().cloned().collect()
    }

    fn get(&self, key: &ValueKey) -> Result<RValue> {
        RMap::get(self, key).ok_or_else(|| key_not_found(key))
    }

    fn delete(&mut self, key: &ValueKey) -> Option<RValue> {
        self.remove(key)
    }

    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> KeyedCollection for BTreeMap<K, V>
where
    K: Ord + Clone + fmt::Display,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn keys(&self) -> Vec<K> {
        BTreeMap::keys(self).cloned().collect()
    }

    fn get(&self, key: &K) -> Result<V> {
        BTreeMap::get(self, key)
            .cloned()
            .ok_or_else(|| key_not_found(key))
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn make_map() -> RMap {
        let map = RMap::new();
        map.insert("k1", "v1");
        map.insert("k2", "v2");
        map
    }

    #[test]
    fn values_follow_key_order() {
        let map = make_map();

        assert_eq!(
            KeyedCollection::keys(&map),
            vec![ValueKey::from("k1"), ValueKey::from("k2")]
        );
        assert_eq!(
            map.values().unwrap(),
            vec![RValue::from("v1"), RValue::from("v2")]
        );
    }

    #[test]
    fn clear_removes_every_entry() {
        let mut map = make_map();

        assert!(!KeyedCollection::is_empty(&map));
        map.clear();
        assert!(KeyedCollection::is_empty(&map));
        assert!(KeyedCollection::keys(&map).is_empty());
    }

    #[test]
    fn missing_keys() {
        let mut map = make_map();
        let missing = ValueKey::from("nope");

        let error = KeyedCollection::get(&map, &missing).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::KeyNotFound(_)));
        assert_eq!(error.to_string(), r#"key not found: "nope""#);
        assert!(map.delete(&missing).is_none());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn btree_maps_get_the_derived_operations() {
        let mut map = BTreeMap::from([(2, "b"), (1, "a")]);

        assert_eq!(KeyedCollection::values(&map).unwrap(), vec!["a", "b"]);
        assert!(!KeyedCollection::is_empty(&map));
        KeyedCollection::clear(&mut map);
        assert!(KeyedCollection::is_empty(&map));
        assert!(KeyedCollection::get(&map, &1).is_err());
    }

    // A container without a size primitive that counts key enumerations
    struct CountingKeys {
        entries: Vec<(String, i64)>,
        key_calls: Cell<usize>,
    }

    impl KeyedCollection for CountingKeys {
        type Key = String;
        type Value = i64;

        fn keys(&self) -> Vec<String> {
            self.key_calls.set(self.key_calls.get() + 1);
            self.entries.iter().map(|(key, _)| key.clone()).collect()
        }

        fn get(&self, key: &String) -> Result<i64> {
            self.entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, value)| *value)
                .ok_or_else(|| key_not_found(key))
        }

        fn delete(&mut self, key: &String) -> Option<i64> {
            let index = self.entries.iter().position(|(k, _)| k == key)?;
            Some(self.entries.remove(index).1)
        }
    }

    #[test]
    fn is_empty_falls_back_to_keys_without_a_size() {
        let mut container = CountingKeys {
            entries: vec![("a".into(), 1), ("b".into(), 2)],
            key_calls: Cell::new(0),
        };

        assert!(!container.is_empty());
        assert_eq!(container.key_calls.get(), 1);

        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.values().unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn is_empty_prefers_the_size_primitive() {
        struct WithSize(CountingKeys);

        impl KeyedCollection for WithSize {
            type Key = String;
            type Value = i64;

            fn keys(&self) -> Vec<String> {
                self.0.keys()
            }

            fn get(&self, key: &String) -> Result<i64> {
                self.0.get(key)
            }

            fn delete(&mut self, key: &String) -> Option<i64> {
                self.0.delete(key)
            }

            fn size(&self) -> Option<usize> {
                Some(self.0.entries.len())
            }
        }

        let container = WithSize(CountingKeys {
            entries: vec![("a".into(), 1)],
            key_calls: Cell::new(0),
        });

        assert!(!container.is_empty());
        assert_eq!(container.0.key_calls.get(), 0);
    }
}
