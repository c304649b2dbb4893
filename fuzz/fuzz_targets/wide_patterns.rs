// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for multi-word Wu-Manber lanes.
//!
//! Patterns here are long enough to cross one or more word boundaries. The
//! automaton is left out (its state count explodes at these lengths), so the
//! DP is the only reference.

#![no_main]

use arbitrary::Arbitrary;
use fuzzscan::{sellers, Bitap};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WideInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
    max_distance: u8,
}

fuzz_target!(|input: WideInput| {
    let text = &input.text[..input.text.len().min(1024)];
    let pattern = &input.pattern[..input.pattern.len().min(300)];
    let k = (input.max_distance % 8) as isize;

    let Ok(bitap) = Bitap::build(pattern, k) else {
        return;
    };

    // INVARIANT: single- and multi-word lanes both reproduce the DP
    assert_eq!(
        bitap.scan(text),
        sellers(text, pattern, k).expect("non-empty pattern"),
        "p={} wide={} k={}",
        pattern.len(),
        bitap.is_wide(),
        k
    );
});
