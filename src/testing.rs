//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::fuzzy::{clamp_distance, edit_distance};
use crate::types::Occurrence;

/// Deterministic byte generator (SplitMix64).
///
/// Benches and fuzz-style tests need reproducible random-looking inputs
/// without pulling a RNG crate into the library.
#[derive(Debug, Clone)]
pub struct ByteGen {
    state: u64,
}

impl ByteGen {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// `size` bytes drawn from the first `alphabet_size` byte values.
    pub fn bytes(&mut self, size: usize, alphabet_size: usize) -> Vec<u8> {
        let alphabet = alphabet_size.clamp(1, 256) as u64;
        (0..size).map(|_| (self.next_u64() % alphabet) as u8).collect()
    }
}

/// Brute-force occurrence list straight from the definition.
///
/// For every end index, the distance is the minimum whole-string edit
/// distance between the pattern and any substring ending there (including the
/// empty one). Cubic-ish; only for small inputs.
pub fn brute_force(text: &[u8], pattern: &[u8], max_distance: isize) -> Vec<Occurrence> {
    let clamp = clamp_distance(max_distance, pattern.len());
    (0..text.len())
        .filter_map(|end| {
            let best = (0..=end + 1)
                .map(|start| edit_distance(&text[start..end + 1], pattern))
                .min()
                .unwrap_or(pattern.len());
            (best <= clamp).then(|| Occurrence::new(end, best))
        })
        .collect()
}

/// Every end index where `pattern` occurs exactly.
pub fn exact_ends(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(start, _)| start + pattern.len() - 1)
        .collect()
}
