// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-string edit distance.
//!
//! The search matchers answer "where does the pattern end, approximately".
//! Sometimes you just want the distance between two byte strings, or a cheap
//! yes/no against a bound. Both live here, and the test oracle is built on
//! them.

use super::column::edit_cost;

/// Levenshtein distance between `a` and `b`.
///
/// Two-row Wagner-Fischer. The rows are sized by the shorter input, so space
/// is `O(min(n, m))`.
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + edit_cost(lc, sc));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Are these byte strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a row exceeds `max`, abandon the DP early
///
/// Both are sound: the length difference is a lower bound on the distance,
/// and row minima never decrease.
pub fn edit_distance_within(a: &[u8], b: &[u8], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + edit_cost(ac, bc));
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b.len()] <= max
}
