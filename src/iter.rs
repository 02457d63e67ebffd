//! Overlap-preserving match iterators.
//!
//! Same cursor shape for both directions: an advancing position for the
//! forward iterator, an optional shrinking bound for the reverse one, and
//! the same rule — advance the cursor by exactly one byte past the start
//! of each hit, never past the whole needle — so that self-overlapping
//! matches (e.g. `"aaaa"` against `"aaaaaaaa"`) are all reported. Built on
//! this crate's own `find` rather than a dedicated reverse searcher.
//!
//! Empty needles are handled as a special case in both iterators: the
//! engine's `haystack.len()` miss sentinel and "empty needle matches at
//! this position" are the same value exactly when the remaining haystack
//! is itself empty, so folding the empty-needle walk through the general
//! `rel == remaining.len()` miss check would silently drop the final
//! position (`haystack.len()` itself, which an empty needle always
//! matches).

use crate::dispatch;
use crate::needle::Needle;

/// A lazy iterator over the starting positions of every occurrence of a
/// needle, scanning left to right. Self-overlapping matches are all
/// yielded; the cursor advances by exactly one byte past each hit.
#[derive(Clone, Debug)]
pub struct MatchIndices<'h, 'n> {
    haystack: &'h [u8],
    needle: Needle<'n>,
    pos: usize,
}

impl<'h, 'n> MatchIndices<'h, 'n> {
    #[inline]
    pub(crate) fn new(haystack: &'h [u8], needle: Needle<'n>) -> MatchIndices<'h, 'n> {
        MatchIndices { haystack, needle, pos: 0 }
    }
}

impl<'h, 'n> Iterator for MatchIndices<'h, 'n> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pos > self.haystack.len() {
            return None;
        }
        if self.needle.is_empty() {
            let found = self.pos;
            self.pos += 1;
            return Some(found);
        }
        let rel = dispatch::find(&self.haystack[self.pos..], &self.needle);
        if rel == self.haystack.len() - self.pos {
            self.pos = self.haystack.len() + 1;
            return None;
        }
        let found = self.pos + rel;
        self.pos = found + 1;
        Some(found)
    }
}

/// A lazy iterator over the starting positions of every occurrence of a
/// needle, scanning right to left. Self-overlapping matches are all
/// yielded, mirroring [`MatchIndices`].
#[derive(Clone, Debug)]
pub struct RMatchIndices<'h, 'n> {
    haystack: &'h [u8],
    needle: Needle<'n>,
    /// The exclusive upper bound of the remaining search window, or `None`
    /// once the iterator is exhausted.
    end: Option<usize>,
}

impl<'h, 'n> RMatchIndices<'h, 'n> {
    #[inline]
    pub(crate) fn new(haystack: &'h [u8], needle: Needle<'n>) -> RMatchIndices<'h, 'n> {
        RMatchIndices { haystack, needle, end: Some(haystack.len()) }
    }
}

impl<'h, 'n> Iterator for RMatchIndices<'h, 'n> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let end = self.end?;
        if self.needle.is_empty() {
            self.end = if end == 0 { None } else { Some(end - 1) };
            return Some(end);
        }
        // No back-end here exposes a "last occurrence" primitive, so the
        // reverse iterator is built by repeatedly re-finding the last match
        // that starts before `end`: scan forward over the *whole* haystack
        // (never a slice truncated to `end`), remembering the last hit
        // whose start is `< end` instead of stopping at the first.
        //
        // The scan must stay over the full, untruncated haystack: a
        // candidate match starting just before `end` still needs the bytes
        // at or past `end` to verify its suffix, and truncating the slice
        // to `haystack[..end]` would cut those bytes away. Once `find`
        // reports the earliest remaining match at or past `end`, there is
        // nothing left strictly before `end`, so the scan stops there. The
        // probe advances by exactly one byte per hit, not by `needle.len()`,
        // or a self-overlapping match (e.g. `"aa"` inside `"aaaaa"`) would
        // be missed.
        let mut last = None;
        let mut probe = 0usize;
        while probe < end {
            let rel = dispatch::find(&self.haystack[probe..], &self.needle);
            if rel == self.haystack.len() - probe {
                break;
            }
            let found = probe + rel;
            if found >= end {
                break;
            }
            last = Some(found);
            probe = found + 1;
        }
        match last {
            None => {
                self.end = None;
                None
            }
            Some(found) => {
                self.end = if found == 0 { None } else { Some(found) };
                Some(found)
            }
        }
    }
}
