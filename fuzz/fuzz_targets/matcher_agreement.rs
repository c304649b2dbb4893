// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-matcher agreement.
//!
//! Sellers, Ukkonen and Wu-Manber are three independent implementations of
//! the same search. Any input on which they disagree is a bug in at least
//! one of them.

#![no_main]

use arbitrary::Arbitrary;
use fuzzscan::{clamp_distance, sellers, ukkonen, wu_manber, MatchError};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for approximate matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
    /// Requested bound, including negative values
    max_distance: i8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts (the automaton grows with p and k)
    let text = &input.text[..input.text.len().min(512)];
    let pattern = &input.pattern[..input.pattern.len().min(12)];
    let k = input.max_distance as isize;

    if pattern.is_empty() {
        // INVARIANT 1: empty patterns are rejected by every matcher
        assert_eq!(sellers(text, pattern, k), Err(MatchError::EmptyPattern));
        assert_eq!(ukkonen(text, pattern, k), Err(MatchError::EmptyPattern));
        assert_eq!(wu_manber(text, pattern, k), Err(MatchError::EmptyPattern));
        return;
    }

    let reference = sellers(text, pattern, k).expect("non-empty pattern");
    let clamp = clamp_distance(k, pattern.len());

    // INVARIANT 2: all three matchers agree exactly
    assert_eq!(
        ukkonen(text, pattern, k).expect("non-empty pattern"),
        reference,
        "ukkonen disagrees: pattern={:?} k={}",
        pattern,
        k
    );
    assert_eq!(
        wu_manber(text, pattern, k).expect("non-empty pattern"),
        reference,
        "wu-manber disagrees: pattern={:?} k={}",
        pattern,
        k
    );

    // INVARIANT 3: ascending ends, in bounds, distance within the clamp
    for pair in reference.windows(2) {
        assert!(pair[0].end < pair[1].end);
    }
    for occurrence in &reference {
        assert!(occurrence.end < text.len());
        assert!(occurrence.distance <= clamp);
    }

    // INVARIANT 4: at k = p every position is reported
    if clamp == pattern.len() {
        assert_eq!(reference.len(), text.len());
    }
});
