//! Panic helpers shared between the rope façade and its cursors, kept out
//! of line so the happy paths stay small.

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "Trying to index past the end of the Rope: the length is {} but the \
         index is {}",
        len, index,
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn slice_end_out_of_bounds(end: usize, len: usize) -> ! {
    panic!(
        "Trying to slice past the end of the Rope: the length is {} but the \
         end of the range is {}",
        len, end,
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn slice_start_after_end(start: usize, end: usize) -> ! {
    panic!(
        "The start of the range can't be greater than its end: {} > {}",
        start, end,
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn start_out_of_bounds(start: usize, len: usize) -> ! {
    panic!(
        "Trying to start past the end of the Rope: the length is {} but the \
         start is {}",
        len, start,
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn edit_out_of_bounds(at: usize, len: usize) -> ! {
    panic!(
        "Trying to edit past the end of the Rope: the length is {} but the \
         edit index is {}",
        len, at,
    );
}

#[cold]
#[inline(never)]
#[track_caller]
pub(super) fn advance_out_of_bounds(n: usize, remaining: usize) -> ! {
    panic!(
        "Trying to advance past the end of the iterator: {} characters are \
         left but the advance is {}",
        remaining, n,
    );
}
