use super::OrderedSeq;
use crate::heap;

///
/// Borrowed view of an [`OrderedSeq`] ordered by a `less` comparator
///
/// `less` has to be a strict weak ordering. This is not checked, a comparator
/// violating it leaves the order after [`SortList::sort`] unspecified.
///
pub struct SortList<'a, T, F> {
    seq: &'a mut OrderedSeq<T>,
    less: F,
}

impl<'a, T, F> SortList<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(seq: &'a mut OrderedSeq<T>, less: F) -> Self {
        Self { seq, less }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Whether the element at `i` has to be placed before the one at `j`
    pub fn less(&self, i: usize, j: usize) -> bool {
        let items = self.seq.as_slice();
        (self.less)(&items[i], &items[j])
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.seq.swap(i, j);
    }

    /// Sorts ascending in place, afterwards no element is `less` than its predecessor
    pub fn sort(&mut self) {
        heap::sort(self.seq.as_mut_slice(), &self.less);
    }

    /// Leftmost position `target` can be inserted at without breaking the order.
    ///
    /// `Ok` if the element at this position is equivalent to `target` (neither is `less`),
    /// `Err` otherwise. Uses O(log n) comparisons.
    /// Requires the sequence to be sorted by the same comparator. Unsorted input
    /// is not detected and yields an arbitrary, but deterministic position.
    pub fn binary_search(&self, target: &T) -> Result<usize, usize> {
        let items = self.seq.as_slice();
        let pos = items.partition_point(|item| (self.less)(item, target));
        match items.get(pos) {
            Some(item) if !(self.less)(target, item) => Ok(pos),
            _ => Err(pos),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self.seq.as_slice()
    }

    pub fn into_inner(self) -> &'a mut OrderedSeq<T> {
        self.seq
    }
}
