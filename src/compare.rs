//!
//! Ready-made `less` comparators for anything `PartialOrd`
//!
//! Floating point input must not contain NaN, otherwise the comparison is not
//! a strict weak ordering and sorting, searching and heap order are unspecified.
//!

/// `a < b`, sorts ascending and makes a min-heap
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// `b < a`, sorts descending and makes a max-heap
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    b < a
}
