//! The general scalar scanner: needles of length 5 and up.

use crate::needle::Needle;
use crate::swar;
use crate::util::memeq;

/// Find the first occurrence of `needle` in `haystack` using the portable
/// scalar algorithm, dispatching needles shorter than 5 bytes to the SWAR
/// kernels in [`crate::swar`].
///
/// Returns `haystack.len()` on a miss.
pub(crate) fn find(haystack: &[u8], needle: &Needle<'_>) -> usize {
    let n = needle.bytes();
    if n.is_empty() {
        return 0;
    }
    if n.len() > haystack.len() {
        return haystack.len();
    }
    match n.len() {
        1 => swar::find1(haystack, n[0]),
        2 | 3 | 4 => swar::find_small(haystack, n),
        _ => find_long(haystack, needle),
    }
}

/// The anomaly-prefilter scanner for needles of length 5 or more.
///
/// Slides a cursor across the haystack, comparing a 4-byte window (read as
/// a single `u32`) against the needle's own 4-byte window at its anomaly
/// offset. On equality, verifies the needle's suffix (the bytes after the
/// window) before its prefix (the bytes before the window) — the suffix is
/// usually longer, so a mismatch there is statistically cheaper to find
/// first; the prefix check is often trivially short or empty.
fn find_long(haystack: &[u8], needle: &Needle<'_>) -> usize {
    let n = needle.bytes();
    debug_assert!(n.len() >= 5);
    let anomaly = needle.anomaly_offset();
    debug_assert!(anomaly + 4 <= n.len());

    let key = u32::from_ne_bytes(n[anomaly..anomaly + 4].try_into().unwrap());
    let prefix = &n[..anomaly];
    let suffix = &n[anomaly + 4..];

    let len = haystack.len();
    // `start` (the candidate needle position) must satisfy
    // `start + n.len() <= len`. The cursor walks the anomaly window itself,
    // i.e. `cursor == start + anomaly`, so the loop bound is
    // `cursor <= len - (n.len() - anomaly)`.
    let max_cursor = len - (n.len() - anomaly);
    let mut cursor = anomaly;
    let hptr = haystack.as_ptr();
    while cursor <= max_cursor {
        // SAFETY: cursor + 4 <= max_cursor + 4 <= len, since
        // max_cursor + (n.len() - anomaly) == len and n.len() - anomaly >= 4.
        let window = unsafe { (hptr.add(cursor) as *const u32).read_unaligned() };
        if window == key {
            let start = cursor - anomaly;
            let suffix_start = cursor + 4;
            if memeq(&haystack[suffix_start..suffix_start + suffix.len()], suffix)
                && memeq(&haystack[start..start + prefix.len()], prefix)
            {
                return start;
            }
        }
        cursor += 1;
    }
    len
}
