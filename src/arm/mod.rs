//! aarch64/NEON back-end selection.

#[cfg(all(target_arch = "aarch64", bytefind_runtime_neon))]
pub(crate) mod neon;

use crate::needle::Needle;

/// Find the first occurrence of `needle` (length >= 4) using NEON, or
/// `None` if this target doesn't have a NEON back-end compiled in.
#[inline]
pub(crate) fn find(haystack: &[u8], needle: &Needle<'_>) -> Option<usize> {
    #[cfg(all(target_arch = "aarch64", bytefind_runtime_neon))]
    {
        #[cfg(feature = "std")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                // SAFETY: just checked the feature is available.
                return Some(unsafe { neon::find(haystack, needle) });
            }
        }
        #[cfg(not(feature = "std"))]
        {
            // aarch64 guarantees NEON in the baseline ABI.
            return Some(unsafe { neon::find(haystack, needle) });
        }
    }
    #[allow(unreachable_code)]
    {
        let _ = (haystack, needle);
        None
    }
}

/// Count the occurrences of `byte` in `haystack` using NEON, or `None` if
/// this target doesn't have a NEON back-end compiled in.
#[inline]
pub(crate) fn count(haystack: &[u8], byte: u8) -> Option<usize> {
    #[cfg(all(target_arch = "aarch64", bytefind_runtime_neon))]
    {
        #[cfg(feature = "std")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                // SAFETY: just checked the feature is available.
                return Some(unsafe { neon::count(haystack, byte) });
            }
        }
        #[cfg(not(feature = "std"))]
        {
            return Some(unsafe { neon::count(haystack, byte) });
        }
    }
    #[allow(unreachable_code)]
    {
        let _ = (haystack, byte);
        None
    }
}
