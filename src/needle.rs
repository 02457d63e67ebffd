use core::fmt;

/// A needle together with the offset of its 4-byte "anomaly" prefilter
/// window.
///
/// The anomaly offset names the byte index within the needle at which the
/// general scalar scanner (and the vector scanners, which build their own
/// prefix-based prefilter on top of it) extract a 4-byte window used to
/// cheaply rule out most haystack positions before paying for a full needle
/// comparison. Callers who know a statistically rare 4-byte window of their
/// needle can place the offset there; callers who don't care can leave it at
/// the default of `0`, which anchors the window to the needle's own prefix.
///
/// For needles shorter than 4 bytes the offset is unused: those needles are
/// always handled by the dedicated SWAR kernels in [`crate::swar`].
#[derive(Clone, Copy, Debug)]
pub struct Needle<'n> {
    bytes: &'n [u8],
    anomaly_offset: usize,
}

impl<'n> Needle<'n> {
    /// Create a needle with the default anomaly offset of `0`.
    #[inline]
    pub fn new(bytes: &'n [u8]) -> Needle<'n> {
        Needle { bytes, anomaly_offset: 0 }
    }

    /// Create a needle with an explicit anomaly offset.
    ///
    /// Returns [`InvalidNeedle`] if `bytes.len() >= 4` and
    /// `offset + 4 > bytes.len()`, i.e. if the 4-byte window named by
    /// `offset` would run past the end of the needle. For needles shorter
    /// than 4 bytes, any offset is accepted (and ignored, since such needles
    /// never reach the general scanner).
    #[inline]
    pub fn with_anomaly_offset(
        bytes: &'n [u8],
        offset: usize,
    ) -> Result<Needle<'n>, InvalidNeedle> {
        if bytes.len() >= 4 && offset + 4 > bytes.len() {
            return Err(InvalidNeedle::AnomalyOffsetOutOfRange {
                offset,
                needle_len: bytes.len(),
            });
        }
        Ok(Needle { bytes, anomaly_offset: offset })
    }

    /// The needle's bytes.
    #[inline]
    pub fn bytes(&self) -> &'n [u8] {
        self.bytes
    }

    /// The needle's length, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the needle is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The configured anomaly offset.
    ///
    /// Meaningless (and unused) for needles shorter than 4 bytes.
    #[inline]
    pub fn anomaly_offset(&self) -> usize {
        self.anomaly_offset
    }
}

impl<'n> From<&'n [u8]> for Needle<'n> {
    #[inline]
    fn from(bytes: &'n [u8]) -> Needle<'n> {
        Needle::new(bytes)
    }
}

/// An error indicating that a [`Needle`] was constructed with an invalid
/// anomaly offset.
///
/// This is the only fallible construction in this crate's public API:
/// misuse is a caller-side bug that gets rejected at the API boundary
/// rather than left as undefined behavior. A *miss* (no occurrence found)
/// is not an error; it is reported in-band as described in
/// [`crate::find`]'s documentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InvalidNeedle {
    /// The requested anomaly offset, plus the 4-byte prefilter window it
    /// anchors, would run past the end of the needle.
    AnomalyOffsetOutOfRange {
        /// The offset that was requested.
        offset: usize,
        /// The length of the needle it was requested against.
        needle_len: usize,
    },
}

impl fmt::Display for InvalidNeedle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidNeedle::AnomalyOffsetOutOfRange { offset, needle_len } => {
                write!(
                    f,
                    "anomaly offset {} plus its 4-byte window exceeds \
                     needle length {}",
                    offset, needle_len,
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidNeedle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_is_zero() {
        let n = Needle::new(b"abcde");
        assert_eq!(0, n.anomaly_offset());
    }

    #[test]
    fn accepts_valid_offset() {
        let n = Needle::with_anomaly_offset(b"abcde", 1).unwrap();
        assert_eq!(1, n.anomaly_offset());
    }

    #[test]
    fn rejects_out_of_range_offset() {
        let err = Needle::with_anomaly_offset(b"abcde", 2).unwrap_err();
        assert_eq!(
            err,
            InvalidNeedle::AnomalyOffsetOutOfRange {
                offset: 2,
                needle_len: 5
            }
        );
    }

    #[test]
    fn short_needles_accept_any_offset() {
        assert!(Needle::with_anomaly_offset(b"ab", 50).is_ok());
        assert!(Needle::with_anomaly_offset(b"", 50).is_ok());
    }

    #[test]
    fn boundary_offset_is_valid() {
        // offset + 4 == needle_len is allowed (window ends exactly at the
        // needle's end).
        assert!(Needle::with_anomaly_offset(b"abcd", 0).is_ok());
        assert!(Needle::with_anomaly_offset(b"abcde", 1).is_ok());
    }
}
