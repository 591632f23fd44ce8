use crate::{Borrow, BorrowMut, PtrMut, prelude::*};
use indexmap::{Equivalent, IndexMap};
use rook_memory::Address;
use rustc_hash::FxHasher;
use std::{
    hash::{BuildHasherDefault, Hash},
    ops::{Deref, DerefMut},
};

/// The hasher used throughout the Rook runtime
pub type RookHasher = FxHasher;

/// An insertion-ordered hash map using [RookHasher]
pub type RookIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<RookHasher>>;

type ValueMapType = RookIndexMap<ValueKey, RValue>;

/// The (ValueKey -> RValue) 'data' hashmap used by the Rook runtime
///
/// See also: [RMap]
#[derive(Clone, Default)]
pub struct ValueMap(ValueMapType);

impl ValueMap {
    /// Creates a new ValueMap with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ValueMapType::with_capacity_and_hasher(
            capacity,
            Default::default(),
        ))
    }
}

impl Deref for ValueMap {
    type Target = ValueMapType;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ValueMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(ValueKey, RValue)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (ValueKey, RValue)>>(iter: T) -> ValueMap {
        Self(ValueMapType::from_iter(iter))
    }
}

/// The associative container type used in Rook
///
/// Entries are kept in insertion order, so enumeration is stable. Clones of an RMap share the same
/// contents, reading from a map never copies it.
#[derive(Clone, Default)]
pub struct RMap(PtrMut<ValueMap>);

impl RMap {
    /// Creates an empty RMap
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty RMap with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_data(ValueMap::with_capacity(capacity))
    }

    /// Creates an RMap initialized with the provided data
    pub fn with_data(data: ValueMap) -> Self {
        Self(data.into())
    }

    /// Provides a reference to the data map
    pub fn data(&self) -> Borrow<'_, ValueMap> {
        self.0.borrow()
    }

    /// Provides a mutable reference to the data map
    pub fn data_mut(&self) -> BorrowMut<'_, ValueMap> {
        self.0.borrow_mut()
    }

    /// Returns a clone of the value corresponding to the given key
    pub fn get<K>(&self, key: &K) -> Option<RValue>
    where
        K: Hash + Equivalent<ValueKey> + ?Sized,
    {
        self.data().get(key).cloned()
    }

    /// Returns true if the map contains an entry with the given key
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: Hash + Equivalent<ValueKey> + ?Sized,
    {
        self.data().contains_key(key)
    }

    /// Inserts an entry into the map, replacing any existing value with the same key
    pub fn insert(&self, key: impl Into<ValueKey>, value: impl Into<RValue>) {
        self.data_mut().insert(key.into(), value.into());
    }

    /// Removes the entry with the given key, returning its value
    ///
    /// The order of the remaining entries is preserved. Removing a missing key is a no-op.
    pub fn remove<K>(&self, key: &K) -> Option<RValue>
    where
        K: Hash + Equivalent<ValueKey> + ?Sized,
    {
        self.data_mut().shift_remove(key)
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if the provided RMap occupies the same memory address
    pub fn is_same_instance(&self, other: &Self) -> bool {
        PtrMut::ptr_eq(&self.0, &other.0)
    }

    /// Returns the address of the map's shared contents
    pub(crate) fn address(&self) -> Address {
        PtrMut::address(&self.0)
    }

    /// Renders the map to the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        ctx.push('{');
        ctx.container(self.address(), |ctx| {
            for (i, (key, value)) in self.data().iter().enumerate() {
                if i > 0 {
                    ctx.append(", ");
                }
                key.value().display(ctx);
                ctx.append(": ");
                value.display(ctx);
            }
        });
        ctx.push('}');
    }
}

impl From<ValueMap> for RMap {
    fn from(value: ValueMap) -> Self {
        RMap::with_data(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_remove_with_string() {
        let m = RMap::default();

        assert!(m.get("test").is_none());
        m.insert("test", RValue::Nil);
        assert!(m.get("test").is_some());
        assert!(matches!(m.remove("test"), Some(RValue::Nil)));
        assert!(m.get("test").is_none());
        assert!(m.remove("test").is_none());
    }

    #[test]
    fn clones_share_contents() {
        let a = RMap::new();
        let b = a.clone();

        a.insert("smell", "smell");

        assert!(a.is_same_instance(&b));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn display() {
        let m = RMap::new();
        m.insert("answer", "yes");
        m.insert(1, true);

        assert_eq!(RValue::from(m).to_display(), r#"{"answer": "yes", 1: true}"#);
    }
}
