use super::iterators::Chars;
use super::utils::*;
use super::Rope;

/// A cursor servicing quasi-random access over a [`Rope`] at
/// near-sequential cost.
///
/// Hosts that mostly walk forward with occasional short backtracking (a
/// regex engine matching over the rope, a skip search re-examining a
/// window) call [`char_at`](Self::char_at) instead of [`Rope::char`]:
/// reads at or past the current position advance the underlying iterator,
/// reads shortly behind it rewind within the current leaf, and only reads
/// behind a discarded leaf boundary pay the full tree descent.
pub struct Cursor<'a> {
    rope: &'a Rope,
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(super) fn new(rope: &'a Rope) -> Self {
        Self { rope, chars: rope.chars() }
    }

    /// The rope this cursor reads from; slicing and anything else beyond
    /// char access goes through it directly.
    #[inline]
    pub fn rope(&self) -> &'a Rope {
        self.rope
    }

    /// The length of the underlying rope.
    #[inline]
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Returns the char at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds (i.e. greater than or equal to
    /// [`len()`](Self::len())).
    #[inline]
    pub fn char_at(&mut self, index: usize) -> char {
        if index >= self.rope.len() {
            index_out_of_bounds(index, self.rope.len());
        }

        let pos = self.chars.pos();

        if index >= pos {
            self.chars.advance(index - pos);
        } else if self.chars.can_move_back(pos - index) {
            self.chars.move_back(pos - index);
        } else {
            // The history behind the current leaf is gone; random access
            // costs one descent and leaves the iterator where it was.
            return self.rope.char(index);
        }

        let ch = self.chars.next();

        debug_assert!(ch.is_some());

        // Safety: `index` was bounds-checked above and the iterator sits
        // exactly on it, so there is at least one more char to yield.
        unsafe { ch.unwrap_unchecked() }
    }
}
