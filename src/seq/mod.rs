///
/// Growable sequences with positional insert and removal
///
mod sort_list;

use std::fmt::{Debug, Display};
use std::ops::{Deref, DerefMut};

use itertools::Itertools;
use num_traits::Zero;

pub use sort_list::*;

pub type FloatSeq = OrderedSeq<f64>;
pub type IntSeq = OrderedSeq<i64>;

/// Index-addressable sequence which keeps insertion order unless it is sorted
/// through a [`SortList`]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedSeq<T> {
    items: Vec<T>,
}

impl<T> OrderedSeq<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the element at `index`, the tail moves left by one
    pub fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        if index >= self.items.len() {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Removes `from..to`. Elements before `from` and from `to` onward become adjacent.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<(), SeqError> {
        self.check_range(from, to)?;
        self.items.drain(from..to);
        Ok(())
    }

    /// Drops all elements but keeps the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// # Panics
    /// If `i` or `j` is out of bounds, like slice indexing
    pub fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    /// Borrows the sequence together with a `less` comparator to sort and search it
    pub fn sort_list<F>(&mut self, less: F) -> SortList<'_, T, F>
    where
        F: Fn(&T, &T) -> bool,
    {
        SortList::new(self, less)
    }

    fn check_range(&self, from: usize, to: usize) -> Result<(), SeqError> {
        if from > to || to > self.items.len() {
            return Err(SeqError::RangeOutOfBounds {
                from,
                to,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<T: Copy> OrderedSeq<T> {
    /// Appends all `values`, amortized O(1) per element
    pub fn add(&mut self, values: &[T]) -> &mut Self {
        self.items.extend_from_slice(values);
        self
    }

    /// Inserts `values` so the first one ends up at `index`.
    ///
    /// The length is extended first (reallocating only if the spare capacity is
    /// too small), then the tail is moved right once with an overlap-safe copy
    /// and `values` are written into the gap. Costs O(values + shifted elements).
    pub fn insert(&mut self, index: usize, values: &[T]) -> Result<(), SeqError> {
        let len = self.items.len();
        if index > len {
            return Err(SeqError::IndexOutOfRange { index, len });
        }
        let count = values.len();
        if self.items.capacity() < len + count {
            log::trace!(
                "Grow sequence for insert: capacity {}, required {}",
                self.items.capacity(),
                len + count
            );
        }
        // Content of the extension is overwritten by the shift below
        self.items.extend_from_slice(values);
        self.items.copy_within(index..len, index + count);
        self.items[index..index + count].copy_from_slice(values);
        Ok(())
    }
}

impl<T: Clone> OrderedSeq<T> {
    /// Sets every element in `from..to` to `value`
    pub fn fill(&mut self, from: usize, to: usize, value: T) -> Result<(), SeqError> {
        self.check_range(from, to)?;
        self.items[from..to].fill(value);
        Ok(())
    }
}

impl<T: Zero + Clone> OrderedSeq<T> {
    /// `len` zeros, with capacity for exactly these
    pub fn zeroed(len: usize) -> Self {
        Self {
            items: vec![T::zero(); len],
        }
    }
}

impl<T> Default for OrderedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for OrderedSeq<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for OrderedSeq<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for OrderedSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<OrderedSeq<T>> for Vec<T> {
    fn from(value: OrderedSeq<T>) -> Self {
        value.items
    }
}

impl<T> FromIterator<T> for OrderedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for OrderedSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug> Debug for OrderedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// `[1 2 3]`
impl<T: Display> Display for OrderedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Range {from}..{to} is out of bounds for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
}
