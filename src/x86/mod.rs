//! x86/x86_64 back-end selection.

#[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2))]
pub(crate) mod avx2;

use crate::needle::Needle;

/// Find the first occurrence of `needle` (length >= 4) using the best
/// available x86/x86_64 vector back-end, or `None` if none is usable at
/// runtime.
///
/// AVX2 dispatch is only compiled in for `x86_64`: the 32-bit `x86` target
/// has no guaranteed access to the `core::arch::x86_64` intrinsics this
/// back-end's `Vector` impl is built on, so it always falls through to the
/// scalar scanner.
#[inline]
pub(crate) fn find(haystack: &[u8], needle: &Needle<'_>) -> Option<usize> {
    #[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2))]
    {
        #[cfg(feature = "std")]
        {
            if is_x86_feature_detected!("avx2") {
                // SAFETY: just checked the feature is available.
                return Some(unsafe { avx2::find(haystack, needle) });
            }
        }
        #[cfg(all(not(feature = "std"), target_feature = "avx2"))]
        {
            // SAFETY: avx2 is enabled at compile time for this whole crate.
            return Some(unsafe { avx2::find(haystack, needle) });
        }
    }
    #[allow(unreachable_code)]
    {
        let _ = (haystack, needle);
        None
    }
}

/// Count the occurrences of `byte` in `haystack` using AVX2, or `None` if
/// this target doesn't have an AVX2 back-end compiled in or it isn't
/// available at runtime.
#[inline]
pub(crate) fn count(haystack: &[u8], byte: u8) -> Option<usize> {
    #[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2))]
    {
        #[cfg(feature = "std")]
        {
            if is_x86_feature_detected!("avx2") {
                // SAFETY: just checked the feature is available.
                return Some(unsafe { avx2::count(haystack, byte) });
            }
        }
        #[cfg(all(not(feature = "std"), target_feature = "avx2"))]
        {
            // SAFETY: avx2 is enabled at compile time for this whole crate.
            return Some(unsafe { avx2::count(haystack, byte) });
        }
    }
    #[allow(unreachable_code)]
    {
        let _ = (haystack, byte);
        None
    }
}
