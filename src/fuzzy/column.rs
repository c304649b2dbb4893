// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance columns: the shared recurrence under Sellers and Ukkonen.
//!
//! A column has `p + 1` entries. Entry `j` is the smallest edit distance
//! between `pattern[..j]` and any suffix of the text scanned so far. Entry 0 is
//! reset to 0 at every text position, which is what turns whole-string edit
//! distance into "ends here" search.

use crate::contracts::check_column_well_formed;

/// Cap that never bites: Sellers keeps exact values.
pub const UNCAPPED: usize = usize::MAX;

/// Substitution cost between two bytes.
#[inline]
pub fn edit_cost(a: u8, b: u8) -> usize {
    usize::from(a != b)
}

/// Effective distance bound for a pattern of `pattern_len` bytes.
///
/// Negative requests clamp to 0. Nothing can exceed the pattern length,
/// because deleting the whole pattern is always an alignment.
#[inline]
pub fn clamp_distance(max_distance: isize, pattern_len: usize) -> usize {
    let requested = usize::try_from(max_distance).unwrap_or(0);
    requested.min(pattern_len)
}

/// The column before any text byte: `[0, 1, ..., p]`.
pub fn initial_column(pattern_len: usize) -> Vec<usize> {
    (0..=pattern_len).collect()
}

/// Fill `next` from `prev` after reading `byte`.
///
/// Every entry is capped at `cap`; the automaton passes `clamp + 1` so that
/// all too-far values collapse together and the state space stays finite.
#[inline]
pub fn next_column(prev: &[usize], next: &mut [usize], byte: u8, pattern: &[u8], cap: usize) {
    debug_assert_eq!(prev.len(), pattern.len() + 1);
    debug_assert_eq!(next.len(), pattern.len() + 1);

    next[0] = 0;
    for j in 1..=pattern.len() {
        let deletion = prev[j] + 1;
        let insertion = next[j - 1] + 1;
        let substitution = prev[j - 1] + edit_cost(byte, pattern[j - 1]);
        next[j] = deletion.min(insertion).min(substitution).min(cap);
    }

    if cap == UNCAPPED {
        check_column_well_formed(next, pattern.len());
    }
}
