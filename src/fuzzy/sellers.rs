// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sellers: Wagner-Fischer with a free start.
//!
//! Plain edit-distance DP, except that row 0 is all zeros: any text position
//! may start an alignment at no cost. After reading text byte `i`, the last
//! column entry is the best distance of any substring ending at `i`.
//!
//! This is the reference the other matchers are tested against. It's the
//! slowest (`O(n·p)`, independent of `k`) but has nothing clever in it.

use super::column::{clamp_distance, initial_column, next_column, UNCAPPED};
use super::Matcher;
use crate::contracts::{check_clamp, check_occurrences_well_formed};
use crate::types::{MatchError, Occurrence};

/// Sellers dynamic-programming matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sellers;

impl Matcher for Sellers {
    fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        let clamp = clamp_distance(max_distance, pattern.len());
        check_clamp(clamp, pattern.len());

        let p = pattern.len();
        let mut prev = initial_column(p);
        let mut next = vec![0; p + 1];
        let mut occurrences = Vec::new();

        for (i, &byte) in text.iter().enumerate() {
            next_column(&prev, &mut next, byte, pattern, UNCAPPED);
            if next[p] <= clamp {
                occurrences.push(Occurrence::new(i, next[p]));
            }
            std::mem::swap(&mut prev, &mut next);
        }

        check_occurrences_well_formed(&occurrences, text.len(), clamp);
        Ok(occurrences)
    }
}

/// Find every approximate occurrence with the Sellers matcher.
pub fn sellers(
    text: &[u8],
    pattern: &[u8],
    max_distance: isize,
) -> Result<Vec<Occurrence>, MatchError> {
    Sellers.find(text, pattern, max_distance)
}
