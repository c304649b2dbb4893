// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wu-Manber: bitap extended to edit distance.
//!
//! One bit vector per error level `0..=k`, each `p` bits wide. Bit `i` of
//! level `j` is **clear** when `pattern[..=i]` matches a suffix of the scanned
//! text with at most `j` errors. That is the inverse of textbook bitap, so the
//! per-byte masks clear the bits where the pattern holds that byte, and the
//! combine step is AND rather than OR.
//!
//! Per byte, with `old` holding the lower level's value before this byte:
//!
//! ```text
//! level[0] = (level[0] << 1) | mask[byte]
//! level[j] = ((level[j] << 1) | mask[byte])   match
//!          & (level[j-1] << 1)                deletion (lower level, already updated)
//!          & (old << 1)                       substitution
//!          & old                              insertion
//! ```
//!
//! The scan costs `O(k)` word operations per byte regardless of `p` (as long
//! as `p` fits in a word). The distance falls out of the levels: if level `d`
//! is the lowest level with a match, then levels `d..=k` all match, so
//! `k + 1 - matching_levels == d`.

use super::bits::{BitLanes, WideBits, WORD_BITS};
use super::column::clamp_distance;
use super::Matcher;
use crate::contracts::{check_clamp, check_occurrences_well_formed};
use crate::types::{MatchError, Occurrence};

/// Masks and levels for one `(pattern, clamp)` pair, generic over the word
/// representation.
#[derive(Debug, Clone)]
struct Lanes<B: BitLanes> {
    /// `char_masks[byte]` has bit `i` clear iff `pattern[i] == byte`.
    char_masks: Vec<B>,
    /// Starting value of every level: `!0 << j` for level `j`.
    initial_levels: Vec<B>,
    /// Bit `p - 1`: clear means the whole pattern is matched.
    match_bit: usize,
}

impl<B: BitLanes> Lanes<B> {
    fn build(pattern: &[u8], clamp: usize) -> Self {
        let width = pattern.len();
        let mut char_masks = vec![B::ones(width); 256];
        for (i, &byte) in pattern.iter().enumerate() {
            char_masks[byte as usize].clear_bit(i);
        }
        let initial_levels = (0..=clamp).map(|j| B::ones_shifted(width, j)).collect();

        Self {
            char_masks,
            initial_levels,
            match_bit: width - 1,
        }
    }

    fn scan(&self, text: &[u8]) -> Vec<Occurrence> {
        let clamp = self.initial_levels.len() - 1;
        let mut levels = self.initial_levels.clone();
        let mut old = levels[0].clone();
        let mut saved = levels[0].clone();
        let mut scratch = levels[0].clone();
        let mut occurrences = Vec::new();

        for (i, &byte) in text.iter().enumerate() {
            let mask = &self.char_masks[byte as usize];

            old.copy_from(&levels[0]);
            levels[0].shl1_assign();
            levels[0].or_assign(mask);

            for j in 1..=clamp {
                let (lower, upper) = levels.split_at_mut(j);
                let below = &lower[j - 1];
                let level = &mut upper[0];

                saved.copy_from(level);

                level.shl1_assign();
                level.or_assign(mask);

                scratch.copy_from(below);
                scratch.shl1_assign();
                level.and_assign(&scratch);

                scratch.copy_from(&old);
                scratch.shl1_assign();
                scratch.and_assign(&old);
                level.and_assign(&scratch);

                std::mem::swap(&mut old, &mut saved);
            }

            if levels[clamp].is_clear(self.match_bit) {
                let matching = levels
                    .iter()
                    .filter(|level| level.is_clear(self.match_bit))
                    .count();
                occurrences.push(Occurrence::new(i, clamp + 1 - matching));
            }
        }

        occurrences
    }
}

#[derive(Debug, Clone)]
enum Width {
    /// Pattern fits in one `u64`.
    Narrow(Lanes<u64>),
    /// Pattern longer than a word.
    Wide(Lanes<WideBits>),
}

/// Compiled Wu-Manber masks for one pattern and distance bound.
///
/// Immutable once built; share it across threads and scan as many texts as
/// you like.
#[derive(Debug, Clone)]
pub struct Bitap {
    lanes: Width,
    pattern_len: usize,
    clamp: usize,
}

impl Bitap {
    /// Longest pattern handled by the single-word path.
    pub const NARROW_LIMIT: usize = WORD_BITS;

    pub fn build(pattern: &[u8], max_distance: isize) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        let clamp = clamp_distance(max_distance, pattern.len());
        check_clamp(clamp, pattern.len());

        let lanes = if pattern.len() <= Self::NARROW_LIMIT {
            Width::Narrow(Lanes::build(pattern, clamp))
        } else {
            tracing::trace!(
                pattern_len = pattern.len(),
                words = WideBits::words_for(pattern.len()),
                "bitap using multi-word lanes"
            );
            Width::Wide(Lanes::build(pattern, clamp))
        };

        Ok(Self {
            lanes,
            pattern_len: pattern.len(),
            clamp,
        })
    }

    pub fn scan(&self, text: &[u8]) -> Vec<Occurrence> {
        let occurrences = match &self.lanes {
            Width::Narrow(lanes) => lanes.scan(text),
            Width::Wide(lanes) => lanes.scan(text),
        };
        check_occurrences_well_formed(&occurrences, text.len(), self.clamp);
        occurrences
    }

    /// True when the pattern needs more than one machine word.
    pub fn is_wide(&self) -> bool {
        matches!(self.lanes, Width::Wide(_))
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// The clamped distance bound this was built for.
    pub fn max_distance(&self) -> usize {
        self.clamp
    }
}

/// Wu-Manber bit-parallel matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct WuManber;

impl Matcher for WuManber {
    fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError> {
        Ok(Bitap::build(pattern, max_distance)?.scan(text))
    }
}

/// Find every approximate occurrence with the Wu-Manber matcher.
pub fn wu_manber(
    text: &[u8],
    pattern: &[u8],
    max_distance: isize,
) -> Result<Vec<Occurrence>, MatchError> {
    WuManber.find(text, pattern, max_distance)
}
