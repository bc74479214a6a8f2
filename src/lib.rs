//!
//! Ordered collections driven by injected `less` comparators
//!
//! * [`OrderedSeq`]: growable sequence with positional insert and removal
//! * [`SortList`]: borrowed view of an [`OrderedSeq`] to sort and binary-search it
//! * [`PriorityQueue`]: binary heap popping the element which is `less` than all others
//!
//! Everything is single threaded and in memory.
//!
pub mod compare;
pub mod heap;
pub mod pq;
pub mod seq;

pub use pq::{DrainSorted, EmptyQueueError, IntPriorityQueue, PriorityQueue};
pub use seq::{FloatSeq, IntSeq, OrderedSeq, SeqError, SortList};
