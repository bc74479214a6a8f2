///
/// Priority queue on top of a binary heap with an injected `less` comparator
///
mod drain;

use std::fmt::Debug;

use crate::heap;

pub use drain::*;

/// Queue of `i64` ordered by a plain function pointer
pub type IntPriorityQueue = PriorityQueue<i64, fn(&i64, &i64) -> bool>;

/// Binary heap where the element which is `less` than all others comes out first.
///
/// `less` has to be a strict weak ordering. Equivalent elements are popped in
/// unspecified order.
pub struct PriorityQueue<T, F> {
    heap: Vec<T>,
    less: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(less: F) -> Self {
        Self {
            heap: Vec::new(),
            less,
        }
    }

    pub fn with_capacity(less: F, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Takes ownership of unordered `items` and heapifies them in O(n)
    pub fn from_vec(less: F, mut items: Vec<T>) -> Self {
        if items.len() > 1 {
            log::trace!("Heapify {} seeded elements", items.len());
            heap::heapify(&mut items, &less);
        }
        Self { heap: items, less }
    }

    pub fn from_iter_with(less: F, iter: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(less, iter.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// O(log n)
    pub fn push(&mut self, value: T) {
        heap::push(&mut self.heap, value, &self.less);
    }

    /// The element the next [`PriorityQueue::pop`] returns
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        self.heap.first().ok_or(EmptyQueueError)
    }

    /// O(log n)
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        heap::pop(&mut self.heap, &self.less).ok_or(EmptyQueueError)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Elements in heap order, the first one is the next to be popped
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, F> {
        DrainSorted::new(&mut self.heap, &self.less)
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone, F: Clone> Clone for PriorityQueue<T, F> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            less: self.less.clone(),
        }
    }
}

impl<T: Debug, F> Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Priority queue is empty")]
pub struct EmptyQueueError;
