//! Circular index arithmetic.
//!
//! One function shared by the two places the UI cycles through a
//! list: picking the next item inside a category, and browsing saved
//! outfits. Pure and deterministic, no side effects.

/// Compute the next position in a circularly-indexed list.
///
/// - `length == 0` returns `0`; there is nothing to index and callers
///   must treat the list as "nothing to show".
/// - A stale `current` (out of range after a deletion elsewhere) is
///   normalized modulo `length` before the step is applied.
/// - Otherwise the result is `(current + delta) mod length` with
///   wraparound in either direction. `delta` is usually `+1` or `-1`
///   but any integer works; it is reduced modulo `length` before the
///   add so even `isize::MAX`/`isize::MIN` steps cannot overflow.
pub fn next_index(length: usize, current: usize, delta: isize) -> usize {
    if length == 0 {
        return 0;
    }
    let len = length as isize;
    let cur = (current % length) as isize;
    let step = delta.rem_euclid(len);
    ((cur + step) % len) as usize
}
