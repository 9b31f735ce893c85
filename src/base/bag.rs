use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::base;

/// Unordered collection that keeps a count of how many copies of each distinct
/// value it holds.
///
/// Every stored value has a count of at least one. A value whose count drops
/// to zero is removed entirely. The total number of copies never exceeds
/// `usize::MAX`.
#[derive(Clone, serde::Deserialize)]
#[serde(
    try_from = "HashMap<V, NonZeroUsize>",
    bound(deserialize = "V: serde::Deserialize<'de> + Eq + Hash")
)]
pub struct Bag<V> {
    counts: HashMap<V, NonZeroUsize>,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("item not found")]
pub struct ItemNotFound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("total count exceeds {}", usize::MAX)]
pub struct LenOverflow;

impl<V: Eq + Hash> Bag<V> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            len: 0,
        }
    }

    /// Total number of values, counting every copy.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values.
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(item)
    }

    /// Returns the number of copies of `item`, which is 0 if absent.
    pub fn count_of<Q>(&self, item: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(item).map_or(0, |n| n.get())
    }

    /// # Panics
    ///
    /// Panics if the bag already holds `usize::MAX` copies.
    pub fn add(&mut self, item: V) {
        self.len = self.len.checked_add(1).expect("bag length overflows usize");
        // No count exceeds `len`, so incrementing one cannot overflow.
        self.counts
            .entry(item)
            .and_modify(|n| *n = n.saturating_add(1))
            .or_insert(NonZeroUsize::MIN);
    }

    /// Removes one copy of `item` and returns the number of copies left. If
    /// `item` is absent, returns an error and leaves the bag unmodified.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<usize, ItemNotFound>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(n) = self.counts.get_mut(item) else {
            log::trace!("remove of absent item rejected");
            return Err(ItemNotFound);
        };
        self.len -= 1;
        match NonZeroUsize::new(n.get() - 1) {
            Some(left) => {
                *n = left;
                Ok(left.get())
            }
            None => {
                self.counts.remove(item);
                Ok(0)
            }
        }
    }

    /// Returns a new bag holding the copies of both operands.
    ///
    /// # Panics
    ///
    /// Panics if the operands together hold more than `usize::MAX` copies.
    /// See [`Bag::checked_union`].
    pub fn union(&self, other: &Self) -> Self
    where
        V: Clone,
    {
        self.checked_union(other).expect("bag length overflows usize")
    }

    /// Returns a new bag holding the copies of both operands, or an error if
    /// they hold more than `usize::MAX` copies together.
    pub fn checked_union(&self, other: &Self) -> Result<Self, LenOverflow>
    where
        V: Clone,
    {
        let mut out = self.clone();
        out.len = self.len.checked_add(other.len).ok_or(LenOverflow)?;
        for (item, n) in &other.counts {
            out.add_copies(item.clone(), *n);
        }
        Ok(out)
    }

    /// Moves the copies of `other` into this bag. On error, neither bag is
    /// modified.
    pub fn checked_merge(&mut self, other: Self) -> Result<(), LenOverflow> {
        self.len = self.len.checked_add(other.len).ok_or(LenOverflow)?;
        for (item, n) in other.counts {
            self.add_copies(item, n);
        }
        Ok(())
    }

    /// Updates counts only; callers account for `len`, which bounds every
    /// resulting count.
    fn add_copies(&mut self, item: V, copies: NonZeroUsize) {
        self.counts
            .entry(item)
            .and_modify(|n| *n = n.saturating_add(copies.get()))
            .or_insert(copies);
    }

    /// Distinct values paired with their counts, in unspecified order.
    pub fn counts(&self) -> impl Iterator<Item = (&V, usize)> {
        self.counts.iter().map(|(k, n)| (k, n.get()))
    }

    /// Distinct values paired with their counts, in ascending order of value.
    pub fn sorted_counts(&self) -> Vec<(&V, usize)>
    where
        V: Ord,
    {
        let mut counts = self.counts().collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        counts
    }

    /// Yields every copy of every value. The bag stays borrowed, and so
    /// unmodifiable, until the iterator is dropped.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            counts: self.counts.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<V: Eq + Hash> Default for Bag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> PartialEq for Bag<V> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<V: Eq + Hash> Eq for Bag<V> {}

impl<V: Eq + Hash> FromIterator<V> for Bag<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<V: Eq + Hash> Extend<V> for Bag<V> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<V: Eq + Hash, const N: usize> From<[V; N]> for Bag<V> {
    fn from(items: [V; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<V: Eq + Hash + Clone> std::ops::Add for &Bag<V> {
    type Output = Bag<V>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<V: Eq + Hash> std::ops::Add for Bag<V> {
    type Output = Bag<V>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<V: Eq + Hash> std::ops::AddAssign for Bag<V> {
    /// # Panics
    ///
    /// Panics if the operands together hold more than `usize::MAX` copies.
    fn add_assign(&mut self, rhs: Self) {
        self.checked_merge(rhs).expect("bag length overflows usize")
    }
}

impl<V: Eq + Hash> TryFrom<HashMap<V, NonZeroUsize>> for Bag<V> {
    type Error = LenOverflow;

    fn try_from(counts: HashMap<V, NonZeroUsize>) -> Result<Self, Self::Error> {
        let len = counts
            .values()
            .try_fold(0usize, |acc, n| acc.checked_add(n.get()))
            .ok_or(LenOverflow)?;
        Ok(Self { counts, len })
    }
}

impl<V: serde::Serialize> serde::Serialize for Bag<V> {
    /// Writes a map from value to count.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.counts.iter())
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Bag<V> {
    /// Compact form, each distinct value once: `Bag(a[1], b[2])`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        base::printer::write_compact(f, self.counts.iter().map(|(k, n)| (k, n.get())))
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Bag<V> {
    /// Verbose form, every copy listed: `Bag(["a", "b", "b"])`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        base::printer::write_verbose(f, self.counts.iter().map(|(k, n)| (k, n.get())))
    }
}

pub struct Iter<'a, V> {
    counts: hash_map::Iter<'a, V, NonZeroUsize>,
    current: Option<(&'a V, usize)>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((item, left)) = &mut self.current {
                if *left > 0 {
                    *left -= 1;
                    self.remaining -= 1;
                    return Some(*item);
                }
            }
            let (item, n) = self.counts.next()?;
            self.current = Some((item, n.get()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V: Eq + Hash> IntoIterator for &'a Bag<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<V> {
    counts: hash_map::IntoIter<V, NonZeroUsize>,
    current: Option<(V, usize)>,
    remaining: usize,
}

impl<V: Clone> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.current.take() {
                Some((item, 1)) => {
                    self.remaining -= 1;
                    return Some(item);
                }
                Some((item, left)) => {
                    self.current = Some((item.clone(), left - 1));
                    self.remaining -= 1;
                    return Some(item);
                }
                None => {
                    let (item, n) = self.counts.next()?;
                    self.current = Some((item, n.get()));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Clone> ExactSizeIterator for IntoIter<V> {}

impl<V: Eq + Hash + Clone> IntoIterator for Bag<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            counts: self.counts.into_iter(),
            current: None,
            remaining: self.len,
        }
    }
}
