use std::{
    borrow::Borrow,
    collections::{
        hash_map::{self, RandomState},
        HashMap,
    },
    fmt::{self, Debug, Formatter},
    hash::{BuildHasher, Hash},
};

/// Map data structure backed by the standard hash map.
///
/// Iteration order is unspecified and may differ between two calls on the
/// same map.
#[derive(Clone)]
pub struct Map<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
}

impl<K, V> Map<K, V> {
    /// Creates a new map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a new map with space for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Creates a new map which hashes keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns a hasher of a map.
    pub fn hasher(&self) -> &S {
        self.entries.hasher()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns a number of distinct keys in a map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if a map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns key-value pairs in a map.
    pub fn iter(&self) -> MapIterator<'_, K, V> {
        self.into_iter()
    }

    /// Returns keys in a map.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Returns values in a map.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Visits key-value pairs until `visit` returns false.
    pub fn range(&self, mut visit: impl FnMut(&K, &V) -> bool) {
        for (key, value) in &self.entries {
            if !visit(key, value) {
                return;
            }
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Map<K, V, S> {
    /// Sets a value of a key, overwriting an old one if any.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Returns a value of a key.
    pub fn get<Q: Hash + Eq + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q: Hash + Eq + ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
    {
        self.entries.get_mut(key)
    }

    /// Returns a value of a key or `default` if the key is absent.
    ///
    /// The default value is never inserted into a map.
    pub fn get_or_default<Q: Hash + Eq + ?Sized>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Checks if a key is contained in a map.
    pub fn has<Q: Hash + Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.entries.contains_key(key)
    }

    /// Deletes a key and returns its value if any.
    pub fn delete<Q: Hash + Eq + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        self.entries.remove(key)
    }

    /// Copies all entries of another map into a map.
    ///
    /// Values of `other` win over the existing ones on the same keys.
    pub fn merge<T: BuildHasher>(&mut self, other: &Map<K, V, T>)
    where
        K: Clone,
        V: Clone,
    {
        self.entries.reserve(other.len());

        for (key, value) in other {
            self.set(key.clone(), value.clone());
        }
    }
}

impl<K, V, S: Default> Default for Map<K, V, S> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for Map<K, V, S> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V: PartialEq, S: BuildHasher> PartialEq for Map<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for Map<K, V, S> {}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for Map<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut map = Self::default();

        map.extend(iterator);

        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for Map<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterator: I) {
        for (key, value) in iterator {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

pub struct MapIterator<'a, K: 'a, V: 'a>(hash_map::Iter<'a, K, V>);

impl<'a, K, V> Iterator for MapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V, S> IntoIterator for &'a Map<K, V, S> {
    type IntoIter = MapIterator<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        MapIterator(self.entries.iter())
    }
}

pub struct OwnedMapIterator<K, V>(hash_map::IntoIter<K, V>);

impl<K, V> Iterator for OwnedMapIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, S> IntoIterator for Map<K, V, S> {
    type IntoIter = OwnedMapIterator<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        OwnedMapIterator(self.entries.into_iter())
    }
}
