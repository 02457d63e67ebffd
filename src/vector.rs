//! The `Vector` abstraction shared by the AVX2 and NEON scanners.
//!
//! Both back-ends follow the same shape: broadcast the needle's first 4
//! bytes into every 32-bit lane of a vector (the "prefix vector"), perform
//! four unaligned loads per stride at byte offsets `0, 1, 2, 3`, compare
//! each as 32-bit lanes against the prefix vector, OR the four results
//! together, and if anything matched, fall back to a scalar verification
//! over every candidate position in the block. This trait captures exactly
//! the handful of vector operations that shape needs, so the stride loop
//! itself (in `x86/avx2.rs` and `arm/neon.rs`) can be written once per
//! back-end without duplicating the control flow.

/// A fixed-width vector register usable for the four-shifted-loads prefix
/// scan shared by the AVX2 and NEON back-ends.
pub(crate) trait Vector: Copy {
    /// The width of the vector, in bytes.
    const WIDTH: usize;

    /// Broadcast a 4-byte prefix into every 32-bit lane.
    ///
    /// # Safety
    ///
    /// The caller must ensure the relevant target feature is enabled.
    unsafe fn splat_u32(prefix: u32) -> Self;

    /// Load `Self::WIDTH` bytes from `ptr`, unaligned.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for an unaligned read of `Self::WIDTH` bytes.
    unsafe fn load_unaligned(ptr: *const u8) -> Self;

    /// Compare `self` and `other` as 32-bit lanes for equality. Lanes that
    /// matched are all-ones; lanes that didn't are all-zero.
    ///
    /// # Safety
    ///
    /// The caller must ensure the relevant target feature is enabled.
    unsafe fn cmpeq_u32_lanes(self, other: Self) -> Self;

    /// Bitwise OR of `self` and `other`.
    ///
    /// # Safety
    ///
    /// The caller must ensure the relevant target feature is enabled.
    unsafe fn or(self, other: Self) -> Self;

    /// Returns true if any byte of `self` is non-zero.
    ///
    /// # Safety
    ///
    /// The caller must ensure the relevant target feature is enabled.
    unsafe fn any_nonzero(self) -> bool;
}

#[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2))]
mod x86avx2 {
    use super::Vector;
    use core::arch::x86_64::*;

    impl Vector for __m256i {
        const WIDTH: usize = 32;

        #[inline(always)]
        unsafe fn splat_u32(prefix: u32) -> __m256i {
            _mm256_set1_epi32(prefix as i32)
        }

        #[inline(always)]
        unsafe fn load_unaligned(ptr: *const u8) -> __m256i {
            _mm256_loadu_si256(ptr as *const __m256i)
        }

        #[inline(always)]
        unsafe fn cmpeq_u32_lanes(self, other: __m256i) -> __m256i {
            _mm256_cmpeq_epi32(self, other)
        }

        #[inline(always)]
        unsafe fn or(self, other: __m256i) -> __m256i {
            _mm256_or_si256(self, other)
        }

        #[inline(always)]
        unsafe fn any_nonzero(self) -> bool {
            _mm256_movemask_epi8(self) != 0
        }
    }
}

use crate::needle::Needle;
use crate::util::memeq;

/// The shared four-shifted-loads stride scan, generic over the vector
/// width.
///
/// Requires `needle.bytes().len() >= 4`. Returns `haystack.len()` on a
/// miss. The tail (anything past the last full `V::WIDTH`-byte block this
/// function can safely scan) is handed off to the general scalar scanner,
/// which also handles needles that are too short to reach this function at
/// all and thus provides the "first-match" guarantee across the seam
/// between the vector-scanned prefix of the haystack and its tail.
///
/// # Safety
///
/// The caller must ensure that the vector operations of `V` are safe to
/// call, i.e. that the CPU feature `V`'s impl requires is available.
#[inline(always)]
pub(crate) unsafe fn stride_find<V: Vector>(
    haystack: &[u8],
    needle: &Needle<'_>,
) -> usize {
    let n = needle.bytes();
    let len = haystack.len();
    debug_assert!(n.len() >= 4, "vector scanner requires needle.len() >= 4");
    if n.len() > len {
        return len;
    }

    let ptr = haystack.as_ptr();
    let mut cursor = 0usize;

    if len >= V::WIDTH + 3 {
        let prefix = u32::from_ne_bytes([n[0], n[1], n[2], n[3]]);
        let pv = V::splat_u32(prefix);
        let max_cursor = len - (V::WIDTH + 3);
        while cursor <= max_cursor {
            let l0 = V::load_unaligned(ptr.add(cursor));
            let l1 = V::load_unaligned(ptr.add(cursor + 1));
            let l2 = V::load_unaligned(ptr.add(cursor + 2));
            let l3 = V::load_unaligned(ptr.add(cursor + 3));
            let e0 = l0.cmpeq_u32_lanes(pv);
            let e1 = l1.cmpeq_u32_lanes(pv);
            let e2 = l2.cmpeq_u32_lanes(pv);
            let e3 = l3.cmpeq_u32_lanes(pv);
            if e0.or(e1).or(e2.or(e3)).any_nonzero() {
                let verify_end = cursor + V::WIDTH;
                for cand in cursor..verify_end {
                    if cand + n.len() <= len && memeq(&haystack[cand..cand + n.len()], n) {
                        return cand;
                    }
                }
            }
            cursor += V::WIDTH;
        }
    }

    let tail = crate::scalar::find(&haystack[cursor..], needle);
    if tail == haystack[cursor..].len() {
        len
    } else {
        cursor + tail
    }
}

#[cfg(all(target_arch = "aarch64", bytefind_runtime_neon))]
mod armneon {
    use super::Vector;
    use core::arch::aarch64::*;

    impl Vector for uint8x16_t {
        const WIDTH: usize = 16;

        #[inline(always)]
        unsafe fn splat_u32(prefix: u32) -> uint8x16_t {
            vreinterpretq_u8_u32(vdupq_n_u32(prefix))
        }

        #[inline(always)]
        unsafe fn load_unaligned(ptr: *const u8) -> uint8x16_t {
            vld1q_u8(ptr)
        }

        #[inline(always)]
        unsafe fn cmpeq_u32_lanes(self, other: uint8x16_t) -> uint8x16_t {
            let a = vreinterpretq_u32_u8(self);
            let b = vreinterpretq_u32_u8(other);
            vreinterpretq_u8_u32(vceqq_u32(a, b))
        }

        #[inline(always)]
        unsafe fn or(self, other: uint8x16_t) -> uint8x16_t {
            vorrq_u8(self, other)
        }

        #[inline(always)]
        unsafe fn any_nonzero(self) -> bool {
            vmaxvq_u8(self) != 0
        }
    }
}
