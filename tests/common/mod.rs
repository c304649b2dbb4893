//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fuzzscan::{sellers, ukkonen, wu_manber, Occurrence};

// Re-export canonical test utilities from fuzzscan::testing
pub use fuzzscan::testing::{brute_force, exact_ends, ByteGen};

// ============================================================================
// FIXTURES
// ============================================================================

/// Sample inputs: `(text, pattern, k)`.
pub const SAMPLES: &[(&[u8], &[u8], isize)] = &[
    (b"if you would like", b"love", 2),
    (b"cagtcatgcatacgtctatatcggctgc", b"ctata", 1),
    (b"abracadabra", b"abra", 1),
    (b"mississippi", b"issip", 2),
    (b"aaaaaaaa", b"aaa", 0),
];

/// Benchmark-style shapes: `(text_len, pattern_len, k)`.
pub const SHAPES: &[(usize, usize, isize)] = &[
    (1000, 5, 2),
    (1000, 5, 5),
    (1000, 10, 2),
    (1000, 10, 5),
    (1000, 10, 10),
];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Run all three matchers, assert they agree, return the shared answer.
pub fn assert_all_agree(text: &[u8], pattern: &[u8], k: isize) -> Vec<Occurrence> {
    let reference = sellers(text, pattern, k).expect("non-empty pattern");
    assert_eq!(
        ukkonen(text, pattern, k).expect("non-empty pattern"),
        reference,
        "ukkonen disagrees with sellers (p = {}, k = {})",
        pattern.len(),
        k
    );
    assert_eq!(
        wu_manber(text, pattern, k).expect("non-empty pattern"),
        reference,
        "wu-manber disagrees with sellers (p = {}, k = {})",
        pattern.len(),
        k
    );
    reference
}

/// Output shape every matcher promises.
pub fn assert_well_formed(occurrences: &[Occurrence], text_len: usize, clamp: usize) {
    for pair in occurrences.windows(2) {
        assert!(pair[0].end < pair[1].end, "ends not strictly ascending: {:?}", pair);
    }
    for occurrence in occurrences {
        assert!(occurrence.end < text_len, "end out of bounds: {}", occurrence);
        assert!(occurrence.distance <= clamp, "distance over bound: {}", occurrence);
    }
}

/// `(end, distance)` pairs, for comparing against literal expectations.
pub fn pairs(occurrences: &[Occurrence]) -> Vec<(usize, usize)> {
    occurrences.iter().map(|o| (o.end, o.distance)).collect()
}
