//! AVX2 back-end.
//!
//! Searching is a thin wrapper around the shared stride scan in
//! [`crate::vector::stride_find`], monomorphized over `__m256i`. The byte
//! counter is AVX2-specific, following the same aligned-prologue-then-block
//! shape as the NEON counter in [`crate::arm::neon::count`], but widened to
//! 32-byte blocks and using `_mm256_movemask_epi8` (one mask bit per byte
//! lane already) instead of a popcount-of-a-reinterpreted-u64 trick.

use core::arch::x86_64::*;

use crate::needle::Needle;
use crate::swar;
use crate::vector::stride_find;

/// Find the first occurrence of `needle` in `haystack` using AVX2.
///
/// # Safety
///
/// Callers must ensure AVX2 is available on the current CPU (e.g. via
/// `is_x86_feature_detected!("avx2")`) before calling this function.
///
/// # Panics (debug only)
///
/// `needle.bytes().len()` must be at least 4.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn find(haystack: &[u8], needle: &Needle<'_>) -> usize {
    stride_find::<__m256i>(haystack, needle)
}

/// Count the occurrences of `byte` in `haystack` using AVX2.
///
/// Aligns the cursor to a 32-byte boundary with the scalar counter, then
/// for each full 32-byte block compares every lane against a broadcast
/// `byte` and extracts a 32-bit mask with one bit set per matching lane;
/// `count_ones()` of that mask is exactly the number of matches in the
/// block, no further folding needed. The tail is handled by the scalar
/// counter too.
///
/// # Safety
///
/// Callers must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn count(haystack: &[u8], byte: u8) -> usize {
    let len = haystack.len();
    let ptr = haystack.as_ptr();

    // Scalar prologue up to a 32-byte aligned address.
    let mut i = 0usize;
    while i < len && (ptr as usize).wrapping_add(i) % 32 != 0 {
        i += 1;
    }
    let prologue_end = i.min(len);
    let mut count = swar::count1(&haystack[..prologue_end], byte);
    i = prologue_end;

    let target = _mm256_set1_epi8(byte as i8);
    while i + 32 <= len {
        let block = _mm256_loadu_si256(ptr.add(i) as *const __m256i);
        let eq = _mm256_cmpeq_epi8(block, target);
        let mask = _mm256_movemask_epi8(eq) as u32;
        count += mask.count_ones() as usize;
        i += 32;
    }

    count += swar::count1(&haystack[i..], byte);
    count
}
