//! Ordered sequences of IDs.

use std::ops::Deref;

use crate::{Backing, Id};

/// An ordered sequence of IDs with index-based `less` and `swap`.
///
/// Indices passed to [`Ids::less`] and [`Ids::swap`] must be in bounds; like
/// slice indexing, they panic otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent, bound = "")]
pub struct Ids<B: Backing = u64>(Vec<Id<B>>);

impl<B: Backing> Ids<B> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of IDs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence holds no IDs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the ID at `i` orders before the ID at `j`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].less_than(&self.0[j])
    }

    /// Exchanges the IDs at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Sorts the IDs in ascending order.
    pub fn sort(&mut self) {
        self.0.sort_unstable_by(|a, b| a.compare(b));
    }

    /// Returns true if no ID orders before its predecessor.
    pub fn is_sorted(&self) -> bool {
        (1..self.len()).all(|i| !self.less(i, i - 1))
    }

    /// Appends an ID to the end.
    pub fn push(&mut self, id: Id<B>) {
        self.0.push(id);
    }

    /// Borrows the IDs as a slice.
    pub fn as_slice(&self) -> &[Id<B>] {
        &self.0
    }

    /// Unwraps the underlying vector.
    pub fn into_inner(self) -> Vec<Id<B>> {
        self.0
    }
}

impl<B: Backing> Deref for Ids<B> {
    type Target = [Id<B>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<B: Backing> From<Vec<Id<B>>> for Ids<B> {
    fn from(ids: Vec<Id<B>>) -> Self {
        Self(ids)
    }
}

impl<B: Backing> From<Ids<B>> for Vec<Id<B>> {
    fn from(ids: Ids<B>) -> Self {
        ids.0
    }
}

impl<B: Backing> FromIterator<Id<B>> for Ids<B> {
    fn from_iter<I: IntoIterator<Item = Id<B>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<B: Backing> IntoIterator for Ids<B> {
    type Item = Id<B>;
    type IntoIter = std::vec::IntoIter<Id<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, B: Backing> IntoIterator for &'a Ids<B> {
    type Item = &'a Id<B>;
    type IntoIter = std::slice::Iter<'a, Id<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
