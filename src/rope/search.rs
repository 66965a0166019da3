//! Char and subsequence search over ropes.
//!
//! Single-char searches are a sequential scan. Subsequence searches use
//! Boyer-Moore-Horspool bad-character shifts, reading the rope through a
//! [`Cursor`](super::Cursor) so the alignment jumps become iterator
//! advances and the right-to-left re-examinations become in-leaf rewinds,
//! with plain random access as the fallback.

use std::collections::HashMap;

use super::Rope;

pub(super) fn find_char(
    rope: &Rope,
    ch: char,
    from: usize,
) -> Option<usize> {
    rope.chars_from(from).position(|c| c == ch).map(|i| from + i)
}

pub(super) fn find(rope: &Rope, pattern: &str, from: usize) -> Option<usize> {
    let pat: Vec<char> = pattern.chars().collect();

    let n = rope.len();
    let m = pat.len();

    if m == 0 {
        return Some(from);
    }
    if m > n - from {
        return None;
    }

    // Bad-character table: how far the window slides when its last char is
    // `ch`. Chars absent from the pattern slide a full window.
    let mut shifts: HashMap<char, usize> = HashMap::with_capacity(m);
    for (i, &ch) in pat[..m - 1].iter().enumerate() {
        shifts.insert(ch, m - 1 - i);
    }

    let mut cursor = rope.cursor();
    let mut at = from;

    while at + m <= n {
        let last = cursor.char_at(at + m - 1);

        if last == pat[m - 1] {
            let mut i = m - 1;
            while i > 0 && cursor.char_at(at + i - 1) == pat[i - 1] {
                i -= 1;
            }
            if i == 0 {
                return Some(at);
            }
        }

        at += shifts.get(&last).copied().unwrap_or(m);
    }

    None
}

pub(super) fn starts_with(rope: &Rope, prefix: &str, offset: usize) -> bool {
    let mut chars = rope.chars_from(offset);
    prefix.chars().all(|ch| chars.next() == Some(ch))
}

pub(super) fn ends_with(rope: &Rope, suffix: &str, offset: usize) -> bool {
    let m = suffix.chars().count();

    let Some(end) = rope.len().checked_sub(offset) else { return false };
    let Some(start) = end.checked_sub(m) else { return false };

    let mut chars = rope.chars_from(start);
    suffix.chars().all(|ch| chars.next() == Some(ch))
}
