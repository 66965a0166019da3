//! A persistent rope for fast editing and composition of long character
//! sequences.
//!
//! A [`Rope`] is an immutable sequence of `char` code units stored as a
//! tree of reference-counted nodes. Concatenation, insertion, deletion,
//! slicing, reversal and search all run in time sub-linear in the length
//! of the sequence, and every edit returns a new rope sharing untouched
//! subtrees with its inputs. Trees that drift out of shape are rebalanced
//! lazily by the Fibonacci criterion of Boehm, Atkinson and Plass.
//!
//! # Example
//!
//! ```
//! use strand::Rope;
//!
//! let opening = Rope::from("it was the worst of times");
//!
//! let fixed = opening.delete(11..16).insert(11, "best");
//! assert_eq!("it was the best of times", fixed);
//!
//! // `opening` still holds the original text, and the two ropes share
//! // everything but the edited middle.
//! assert_eq!(Some(11), opening.find("worst"));
//! ```

mod rope;
mod tree;

pub mod iter {
    //! Iterators over [`Rope`](crate::Rope)s.

    pub use crate::rope::iterators::*;
}

pub use rope::{Cursor, Rope};

use std::ops::{Bound, RangeBounds};

#[inline]
pub(crate) fn range_bounds_to_start_end<R>(
    range: R,
    lo: usize,
    hi: usize,
) -> (usize, usize)
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n + 1,
        Bound::Unbounded => lo,
    };

    let end = match range.end_bound() {
        Bound::Included(&n) => n + 1,
        Bound::Excluded(&n) => n,
        Bound::Unbounded => hi,
    };

    (start, end)
}
