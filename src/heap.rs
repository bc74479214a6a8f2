//!
//! Binary heap primitives over plain slices
//!
//! A slice is a heap under `less` if no element is `less` than its parent,
//! so the element which has to come out first is always at index 0.
//! The element at `i` has its parent at `(i - 1) / 2` and its children at
//! `2i + 1` and `2i + 2`.
//!

#[inline]
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

#[inline]
fn left(parent: usize) -> usize {
    parent * 2 + 1
}

/// Moves the element at `idx` towards the root while it is `less` than its parent
pub fn sift_up<T>(heap: &mut [T], mut idx: usize, less: &impl Fn(&T, &T) -> bool) {
    while idx > 0 {
        let parent = parent(idx);
        if !less(&heap[idx], &heap[parent]) {
            break;
        }
        heap.swap(idx, parent);
        idx = parent;
    }
}

/// Moves the element at `idx` towards the leaves, always swapping with the child
/// which belongs higher, until none of its children is `less` than itself.
/// Equal children may be picked in any order.
pub fn sift_down<T>(heap: &mut [T], mut idx: usize, less: &impl Fn(&T, &T) -> bool) {
    let len = heap.len();
    loop {
        let left = left(idx);
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && less(&heap[right], &heap[left]) {
            right
        } else {
            left
        };
        if !less(&heap[child], &heap[idx]) {
            break;
        }
        heap.swap(idx, child);
        idx = child;
    }
}

/// Bottom-up heap construction in O(n): sifts down every internal node,
/// starting at the last one
pub fn heapify<T>(heap: &mut [T], less: &impl Fn(&T, &T) -> bool) {
    for idx in (0..heap.len() / 2).rev() {
        sift_down(heap, idx, less);
    }
}

/// Appends `value` and restores the heap property
pub fn push<T>(heap: &mut Vec<T>, value: T, less: &impl Fn(&T, &T) -> bool) {
    heap.push(value);
    let last = heap.len() - 1;
    sift_up(heap, last, less);
}

/// Removes the root. The last element takes its place and is sifted down.
pub fn pop<T>(heap: &mut Vec<T>, less: &impl Fn(&T, &T) -> bool) -> Option<T> {
    if heap.is_empty() {
        return None;
    }
    let root = heap.swap_remove(0);
    sift_down(heap, 0, less);
    Some(root)
}

pub fn is_heap<T>(heap: &[T], less: impl Fn(&T, &T) -> bool) -> bool {
    (1..heap.len()).all(|idx| !less(&heap[idx], &heap[parent(idx)]))
}

/// In-place heap sort, ascending under `less`. Not stable.
///
/// Builds a heap with the greatest element on top and repeatedly moves
/// the top behind the shrinking heap.
pub fn sort<T>(data: &mut [T], less: &impl Fn(&T, &T) -> bool) {
    let greater = |a: &T, b: &T| less(b, a);
    heapify(data, &greater);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, &greater);
    }
}
