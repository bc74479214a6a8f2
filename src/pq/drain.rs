use crate::heap;

/// Pops a [`PriorityQueue`](super::PriorityQueue) until it is empty.
///
/// Debug builds assert that no yielded element is `less` than its predecessor,
/// which only fails for comparators that are no strict weak ordering.
pub struct DrainSorted<'a, T, F> {
    heap: &'a mut Vec<T>,
    less: &'a F,
}

impl<'a, T, F> DrainSorted<'a, T, F> {
    pub(super) fn new(heap: &'a mut Vec<T>, less: &'a F) -> Self {
        Self { heap, less }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Iterator for DrainSorted<'_, T, F> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = heap::pop(self.heap, self.less)?;
        #[cfg(debug_assertions)]
        {
            if let Some(next) = self.heap.first() {
                assert!(
                    !(self.less)(next, &value),
                    "Heap yielded an element which is less than its predecessor"
                );
            }
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, F: Fn(&T, &T) -> bool> ExactSizeIterator for DrainSorted<'_, T, F> {}
