/*!
This crate provides a heavily optimized, byte-oriented substring search
engine: given a haystack and a needle, find the first occurrence of the
needle, or count how many times a single byte occurs.

The engine is layered by needle length. Needles of 1 to 4 bytes are
handled by hand-tuned SWAR ("SIMD within a register") kernels that never
touch a vector instruction at all (`swar`). Needles of 5 bytes or more
are handled first by a scalar anomaly-window scanner (`scalar`) and, when
a wider vector back-end is available at runtime, by an AVX2 or NEON
stride scanner built on a single shared abstraction (`vector`, `x86`,
`arm`). `dispatch` ties length and architecture together and is the
engine every public entry point in this crate ultimately calls through.

This crate has no dependency on libc or any C compiler; everything here
is pure Rust, and works under `no_std` when the `std` feature (on by
default) is disabled.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// Supporting 8-bit (or others) would be fine. If you need it, please file
// an issue.
#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("bytefind currently not supported on non-{16,32,64}");

mod bytestr;
mod dispatch;
mod iter;
mod needle;
mod scalar;
mod swar;
mod util;
mod vector;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
mod x86 {
    use crate::needle::Needle;
    #[inline]
    pub(crate) fn find(_: &[u8], _: &Needle<'_>) -> Option<usize> {
        None
    }
    #[inline]
    pub(crate) fn count(_: &[u8], _: u8) -> Option<usize> {
        None
    }
}

#[cfg(target_arch = "aarch64")]
mod arm;
#[cfg(not(target_arch = "aarch64"))]
mod arm {
    use crate::needle::Needle;
    #[inline]
    pub(crate) fn find(_: &[u8], _: &Needle<'_>) -> Option<usize> {
        None
    }
    #[inline]
    pub(crate) fn count(_: &[u8], _: u8) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests;

pub use crate::bytestr::ByteStr;
pub use crate::iter::{MatchIndices, RMatchIndices};
pub use crate::needle::{InvalidNeedle, Needle};

/// Find the first occurrence of `needle` in `haystack`.
///
/// Returns the byte offset of the start of the match, or `None` if
/// `needle` does not occur in `haystack`. An empty needle always matches
/// at offset `0`, including against an empty haystack.
///
/// # Examples
///
/// ```
/// use bytefind::{find, Needle};
///
/// assert_eq!(Some(4), find(b"abracadabra", &Needle::new(b"cad")));
/// assert_eq!(None, find(b"abracadabra", &Needle::new(b"xyz")));
/// ```
#[inline]
pub fn find(haystack: &[u8], needle: &Needle<'_>) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let pos = dispatch::find(haystack, needle);
    if pos == haystack.len() {
        None
    } else {
        Some(pos)
    }
}

/// Count the number of occurrences of `byte` in `haystack`.
///
/// # Examples
///
/// ```
/// use bytefind::count_byte;
///
/// assert_eq!(3, count_byte(b"banana", b'a'));
/// ```
#[inline]
pub fn count_byte(haystack: &[u8], byte: u8) -> usize {
    dispatch::count_byte(haystack, byte)
}
