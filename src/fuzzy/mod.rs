// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate search: three matchers, one contract.
//!
//! Sellers is the reference. Ukkonen compiles Sellers' columns into an
//! automaton. Wu-Manber packs the same information into bit vectors. All three
//! return identical occurrence lists for identical inputs, and the tests hold
//! them to that.

pub mod bits;
pub mod column;
mod levenshtein;
pub mod sellers;
pub mod ukkonen;
pub mod wu_manber;

pub use column::{clamp_distance, edit_cost};
pub use levenshtein::*;
pub use sellers::{sellers, Sellers};
pub use ukkonen::{ukkonen, Automaton, Ukkonen};
pub use wu_manber::{wu_manber, Bitap, WuManber};

use crate::types::{Algorithm, MatchError, Occurrence};

/// The call shape every matcher implements.
///
/// `max_distance` is clamped to `0..=pattern.len()`. The result is ascending
/// by `end`, with at most one occurrence per end index.
pub trait Matcher {
    fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError>;
}

impl Matcher for Algorithm {
    fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError> {
        match self {
            Algorithm::Sellers => Sellers.find(text, pattern, max_distance),
            Algorithm::Ukkonen => Ukkonen.find(text, pattern, max_distance),
            Algorithm::WuManber => WuManber.find(text, pattern, max_distance),
        }
    }
}

/// Run `algorithm` over `text`.
pub fn find(
    algorithm: Algorithm,
    text: &[u8],
    pattern: &[u8],
    max_distance: isize,
) -> Result<Vec<Occurrence>, MatchError> {
    algorithm.find(text, pattern, max_distance)
}
