//! Table-driven "golden example" tests.

use crate::{count_byte, find, ByteStr, MatchIndices, Needle, RMatchIndices};

struct SearchTest {
    haystack: &'static str,
    needle: &'static str,
    expected: Option<usize>,
}

const SEARCH_TESTS: &[SearchTest] = &[
    SearchTest { haystack: "", needle: "", expected: Some(0) },
    SearchTest { haystack: "", needle: "a", expected: None },
    SearchTest { haystack: "a", needle: "", expected: Some(0) },
    SearchTest { haystack: "abracadabra", needle: "cad", expected: Some(4) },
    SearchTest { haystack: "abracadabra", needle: "xyz", expected: None },
    SearchTest { haystack: "aaaaaaaa", needle: "aaaa", expected: Some(0) },
    SearchTest {
        haystack: "the quick brown fox jumps over the lazy dog",
        needle: "fox",
        expected: Some(16),
    },
    SearchTest { haystack: "abc", needle: "abcd", expected: None },
    SearchTest { haystack: "mississippi", needle: "issi", expected: Some(1) },
    SearchTest { haystack: "mississippi", needle: "ppi", expected: Some(8) },
    SearchTest { haystack: "x", needle: "x", expected: Some(0) },
    SearchTest { haystack: "xy", needle: "y", expected: Some(1) },
];

#[test]
fn search_table() {
    for t in SEARCH_TESTS {
        let got = find(t.haystack.as_bytes(), &Needle::new(t.needle.as_bytes()));
        assert_eq!(
            t.expected, got,
            "haystack={:?} needle={:?}",
            t.haystack, t.needle
        );
    }
}

#[test]
fn needle_longer_than_every_vector_width() {
    // Exercise the anomaly-window scanner and the vector back-ends (when
    // compiled in) against needles long enough to outgrow a single stride.
    let mut haystack = vec![b'q'; 5_000];
    haystack.extend_from_slice(b"the-anomaly-marker-right-here");
    haystack.extend(std::iter::repeat(b'z').take(5_000));
    let needle = Needle::new(b"the-anomaly-marker-right-here");
    assert_eq!(Some(5_000), find(&haystack, &needle));
}

#[test]
fn counting_table() {
    assert_eq!(3, count_byte(b"banana", b'a'));
    assert_eq!(0, count_byte(b"", b'x'));
    assert_eq!(4, count_byte(b"mississippi", b'i'));
    let hay = vec![b'a'; 70_000];
    assert_eq!(70_000, count_byte(&hay, b'a'));
}

#[test]
fn bytestr_wraps_the_same_engine() {
    let s = ByteStr::new(b"abracadabra");
    assert_eq!(Some(4), s.find(&Needle::new(b"cad")));
    assert_eq!(find(b"abracadabra", &Needle::new(b"cad")), s.find(&Needle::new(b"cad")));
}

#[test]
fn match_indices_end_to_end() {
    let hits: Vec<usize> =
        MatchIndices::new(b"one two one two one", Needle::new(b"one")).collect();
    assert_eq!(vec![0, 8, 16], hits);
}

#[test]
fn rmatch_indices_end_to_end() {
    let hits: Vec<usize> =
        RMatchIndices::new(b"one two one two one", Needle::new(b"one")).collect();
    assert_eq!(vec![16, 8, 0], hits);
}

#[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2, feature = "std"))]
#[test]
fn avx2_backend_agrees_with_scalar() {
    if !is_x86_feature_detected!("avx2") {
        return;
    }
    let haystack = b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again";
    for needle in [&b"fox"[..], b"jumps", b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again", b"zzz"] {
        let n = Needle::new(needle);
        let want = crate::scalar::find(haystack, &n);
        let got = unsafe { crate::x86::avx2::find(haystack, &n) };
        assert_eq!(want, got, "needle={:?}", needle);
    }
}

#[cfg(all(target_arch = "aarch64", bytefind_runtime_neon, feature = "std"))]
#[test]
fn neon_backend_agrees_with_scalar() {
    if !std::arch::is_aarch64_feature_detected!("neon") {
        return;
    }
    let haystack = b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again";
    for needle in [&b"fox"[..], b"jumps", b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again", b"zzz"] {
        let n = Needle::new(needle);
        let want = crate::scalar::find(haystack, &n);
        let got = unsafe { crate::arm::neon::find(haystack, &n) };
        assert_eq!(want, got, "needle={:?}", needle);
    }
}

#[cfg(all(target_arch = "x86_64", bytefind_runtime_avx2, feature = "std"))]
#[test]
fn avx2_count_agrees_with_scalar() {
    if !is_x86_feature_detected!("avx2") {
        return;
    }
    let haystack = b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again";
    for byte in [b'o', b'x', b' ', b'q', b'\0'] {
        let want = crate::swar::count1(haystack, byte);
        let got = unsafe { crate::x86::avx2::count(haystack, byte) };
        assert_eq!(want, got, "byte={:?}", byte);
    }
    let big = vec![b'q'; 10_000];
    assert_eq!(10_000, unsafe { crate::x86::avx2::count(&big, b'q') });
}

#[cfg(all(target_arch = "aarch64", bytefind_runtime_neon, feature = "std"))]
#[test]
fn neon_count_agrees_with_scalar() {
    if !std::arch::is_aarch64_feature_detected!("neon") {
        return;
    }
    let haystack = b"the quick brown fox jumps over the lazy dog, the quick brown fox jumps again";
    for byte in [b'o', b'x', b' ', b'q', b'\0'] {
        let want = crate::swar::count1(haystack, byte);
        let got = unsafe { crate::arm::neon::count(haystack, byte) };
        assert_eq!(want, got, "byte={:?}", byte);
    }
    let big = vec![b'q'; 10_000];
    assert_eq!(10_000, unsafe { crate::arm::neon::count(&big, b'q') });
}

#[test]
fn count_equals_match_indices_length() {
    // For a single-byte needle, overlap is moot (a one-byte match can't
    // overlap another), so enumerating matches and counting that byte
    // must agree exactly.
    let haystack = b"mississippi";
    let enumerated = MatchIndices::new(haystack, Needle::new(b"i")).count();
    assert_eq!(count_byte(haystack, b'i'), enumerated);

    let haystack2 = b"one fish two fish red fish blue fish";
    let enumerated2 = MatchIndices::new(haystack2, Needle::new(b"fish")).count();
    assert_eq!(4, enumerated2);
}

#[test]
fn anomaly_offset_changes_nothing_observable() {
    // The anomaly offset is a performance hint only, never part of the
    // observable contract. Any valid offset must find the same match.
    let haystack = b"xxxxxabcdefxxxx";
    let needle = b"abcdef";
    for offset in 0..=(needle.len() - 4) {
        let n = Needle::with_anomaly_offset(needle, offset).unwrap();
        assert_eq!(Some(5), find(haystack, &n), "offset={}", offset);
    }
}
