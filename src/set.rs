use crate::map::{Map, MapIterator, OwnedMapIterator};
use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    fmt::{self, Debug, Display, Formatter},
    hash::{BuildHasher, Hash},
};

/// Set data structure backed by a map whose values are units.
///
/// Set algebra methods never modify their operands but create new sets.
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    map: Map<T, (), S>,
}

impl<T> Set<T> {
    /// Creates a new set.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Creates a new set with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: Map::with_capacity(capacity),
        }
    }
}

impl<T, S> Set<T, S> {
    /// Creates a new set which hashes elements with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: Map::with_hasher(hasher),
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a size of a set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if a set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns values in a set
    pub fn iter(&self) -> SetIterator<'_, T> {
        self.into_iter()
    }

    /// Visits elements until `visit` returns false.
    pub fn range(&self, mut visit: impl FnMut(&T) -> bool) {
        self.map.range(|element, _| visit(element));
    }

    /// Returns a snapshot of elements in a set.
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Inserts a value into a set.
    pub fn add(&mut self, value: T) {
        self.map.set(value, ());
    }

    /// Inserts values into a set.
    pub fn adds(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.add(value);
        }
    }

    /// Checks if a value is contained in a set.
    pub fn has<Q: Hash + Eq + ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.map.has(value)
    }

    /// Same as [`Set::has`].
    pub fn contains<Q: Hash + Eq + ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.has(value)
    }

    /// Removes a value from a set if any and returns true if it was there.
    pub fn delete<Q: Hash + Eq + ?Sized>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.map.delete(value).is_some()
    }

    /// Removes an arbitrary element from a set and returns it.
    ///
    /// The element is whichever the backing map iterates first, so callers
    /// should not rely on any order.
    pub fn pop(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let mut first = None;

        self.map.range(|element, _| {
            first = Some(element.clone());
            false
        });

        let element = first?;
        self.map.delete(&element);

        Some(element)
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> Set<T, S> {
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.map.hasher().clone())
    }

    /// Returns true if two sets have the same elements.
    pub fn equal(&self, other: &Self) -> bool {
        self.is_subset(other) && self.len() == other.len()
    }

    /// Calculate difference of two sets.
    pub fn difference(&self, other: &Self) -> Self {
        let mut set = self.empty_like();

        for element in self {
            if !other.has(element) {
                set.add(element.clone());
            }
        }

        set
    }

    /// Calculate difference of two sets by deleting elements of `other` from
    /// a clone of `self`.
    ///
    /// The result is the same as [`Set::difference`]. It is cheaper when
    /// `other` is much smaller than `self`.
    pub fn difference_with_delete(&self, other: &Self) -> Self {
        let mut set = self.clone();

        for element in other {
            set.delete(element);
        }

        set
    }

    /// Calculate intersection of two sets.
    pub fn intersection(&self, other: &Self) -> Self {
        // Ties iterate `other`.
        let (small, large) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut set = self.empty_like();

        for element in small {
            if large.has(element) {
                set.add(element.clone());
            }
        }

        set
    }

    /// Calculate union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut set = self.clone();

        set.adds(other.iter().cloned());

        set
    }

    /// Checks if every element of a set is contained in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.difference(other).is_empty()
    }

    /// Checks if every element of a set is contained in `other`.
    ///
    /// Note that this is identical to [`Set::is_subset`] and so it is true
    /// for two equal sets as well. Use [`Set::is_strict_subset`] to exclude
    /// them.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.difference(other).is_empty()
    }

    /// Checks if a set is a subset of `other` and smaller than it.
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Checks if every element of `other` is contained in a set.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Checks if every element of `other` is contained in a set.
    ///
    /// Like [`Set::is_proper_subset`], this is true for two equal sets.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Checks if a set is a superset of `other` and larger than it.
    pub fn is_strict_superset(&self, other: &Self) -> bool {
        other.is_strict_subset(self)
    }
}

impl<T, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Self {
            map: Map::default(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.has(element))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Debug, S> Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Display, S> Display for Set<T, S> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "[")?;

        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }

            write!(formatter, "{element}")?;
        }

        write!(formatter, "]")
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut set = Self::default();

        set.adds(iterator);

        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.adds(iterator);
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

pub struct SetIterator<'a, T: 'a>(MapIterator<'a, T, ()>);

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(element, _)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type IntoIter = SetIterator<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        SetIterator(self.map.iter())
    }
}

pub struct OwnedSetIterator<T>(OwnedMapIterator<T, ()>);

impl<T> Iterator for OwnedSetIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(element, _)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type IntoIter = OwnedSetIterator<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        OwnedSetIterator(self.map.into_iter())
    }
}
