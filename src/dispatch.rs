//! Architecture and length dispatch.
//!
//! Needles shorter than 4 bytes always go straight to the SWAR kernels,
//! since no vector back-end here operates on a prefix shorter than a
//! 32-bit lane. Needles of 4 bytes or more try the best available vector
//! back-end for the current CPU first, falling back to the portable
//! scalar scanner (which itself still routes lengths 1-4 to SWAR) when no
//! vector back-end is compiled in or the runtime feature check fails.
//!
//! A straight-line `match` rather than a grid of feature-pair dispatch
//! tables, since this crate has exactly two vector back-ends to choose
//! between instead of a grid of SSE2/SSE4.2/AVX2 variants.

use crate::needle::Needle;
use crate::scalar;
use crate::swar;
use crate::{arm, x86};

/// Find the first occurrence of `needle` in `haystack`, or `haystack.len()`
/// on a miss.
pub(crate) fn find(haystack: &[u8], needle: &Needle<'_>) -> usize {
    if needle.len() < 4 {
        return scalar::find(haystack, needle);
    }
    if let Some(pos) = x86::find(haystack, needle) {
        return pos;
    }
    if let Some(pos) = arm::find(haystack, needle) {
        return pos;
    }
    scalar::find(haystack, needle)
}

/// Count the occurrences of `byte` in `haystack`.
pub(crate) fn count_byte(haystack: &[u8], byte: u8) -> usize {
    if let Some(n) = x86::count(haystack, byte) {
        return n;
    }
    if let Some(n) = arm::count(haystack, byte) {
        return n;
    }
    swar::count1(haystack, byte)
}
