//! NEON back-end.
//!
//! Searching reuses the shared stride scan in [`crate::vector::stride_find`];
//! the byte counter is written directly against the intrinsics, following
//! an overlapping-load idiom. [`crate::x86::avx2`] provides the analogous
//! AVX2-widened counter for x86_64.

use core::arch::aarch64::*;

use crate::needle::Needle;
use crate::swar;
use crate::vector::stride_find;

/// Find the first occurrence of `needle` in `haystack` using NEON.
///
/// # Safety
///
/// Callers must ensure NEON is available (on `aarch64` it always is, per
/// the platform baseline, but we still gate on the `bytefind_runtime_neon`
/// cfg so this back-end is only compiled where `build.rs` detected it).
///
/// # Panics (debug only)
///
/// `needle.bytes().len()` must be at least 4.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn find(haystack: &[u8], needle: &Needle<'_>) -> usize {
    stride_find::<uint8x16_t>(haystack, needle)
}

/// Count the occurrences of `byte` in `haystack` using NEON.
///
/// Aligns to a 16-byte boundary with the scalar counter, then for each
/// full 16-byte block compares every lane against a broadcast `byte`,
/// reinterprets the all-ones/all-zero comparison mask as two `u64` halves,
/// and accumulates `count_ones() / 8` per half (each matching lane
/// contributes a full byte of set bits, so dividing the popcount by 8
/// recovers the number of matching lanes). The tail is handled by the
/// scalar counter too.
///
/// # Safety
///
/// Callers must ensure NEON is available.
#[target_feature(enable = "neon")]
pub(crate) unsafe fn count(haystack: &[u8], byte: u8) -> usize {
    let len = haystack.len();
    let ptr = haystack.as_ptr();

    // Scalar prologue up to a 16-byte aligned address.
    let mut i = 0usize;
    while i < len && (ptr as usize).wrapping_add(i) % 16 != 0 {
        i += 1;
    }
    let prologue_end = i.min(len);
    let mut count = swar::count1(&haystack[..prologue_end], byte);
    i = prologue_end;

    let target = vdupq_n_u8(byte);
    while i + 16 <= len {
        let block = vld1q_u8(ptr.add(i));
        let eq = vceqq_u8(block, target);
        let halves: (u64, u64) = core::mem::transmute(eq);
        count += (halves.0.count_ones() / 8) as usize;
        count += (halves.1.count_ones() / 8) as usize;
        i += 16;
    }

    count += swar::count1(&haystack[i..], byte);
    count
}
