// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matchers.
//!
//! These are debug-mode assertions over intermediate structures and results:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure** when a recurrence or a table goes wrong, at the point
//!    it goes wrong rather than three algorithms later in a cross-check
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                | Property                                   |
//! |----------------------------------|--------------------------------------------|
//! | `check_clamp`                    | `k <= p`                                   |
//! | `check_column_well_formed`       | `len = p + 1`, `col[0] = 0`, steps of <= 1 |
//! | `check_occurrences_well_formed`  | ascending, in bounds, `distance <= k`      |
//! | `check_automaton_well_formed`    | `states * 256` table, targets in range     |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_occurrences_well_formed(&occurrences, text.len(), clamp);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::Occurrence;

/// Check that the effective bound never exceeds the pattern length.
#[inline]
pub fn check_clamp(clamp: usize, pattern_len: usize) {
    // INVARIANT: clamp <= p (any alignment may delete the whole pattern)
    debug_assert!(
        clamp <= pattern_len,
        "Contract violation: clamp {} > pattern length {}",
        clamp,
        pattern_len
    );
}

/// Check the shape of an uncapped distance column.
///
/// # Panics (debug builds only)
/// Panics if the length is not `p + 1`, if entry 0 is not 0, or if two
/// adjacent entries differ by more than one.
#[inline]
pub fn check_column_well_formed(column: &[usize], pattern_len: usize) {
    // INVARIANT: one entry per pattern prefix, including the empty prefix
    debug_assert_eq!(
        column.len(),
        pattern_len + 1,
        "Contract violation: column length {} != pattern length + 1",
        column.len()
    );

    // INVARIANT: the empty pattern prefix matches every position for free
    debug_assert!(
        column.first() == Some(&0),
        "Contract violation: column[0] = {:?}, expected 0",
        column.first()
    );

    // INVARIANT: adjacent prefixes differ by at most one edit
    if !cfg!(debug_assertions) {
        return;
    }
    for (j, pair) in column.windows(2).enumerate() {
        debug_assert!(
            pair[0].abs_diff(pair[1]) <= 1,
            "Contract violation: column[{}] = {} and column[{}] = {} differ by more than 1",
            j,
            pair[0],
            j + 1,
            pair[1]
        );
    }
}

/// Check a matcher's output.
///
/// # Panics (debug builds only)
/// Panics if ends are not strictly ascending, if an end is outside the text,
/// or if a distance exceeds the bound.
#[inline]
pub fn check_occurrences_well_formed(occurrences: &[Occurrence], text_len: usize, clamp: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, occurrence) in occurrences.iter().enumerate() {
        // INVARIANT: end indices point into the text
        debug_assert!(
            occurrence.end < text_len,
            "Contract violation: occurrences[{}].end {} >= text length {}",
            i,
            occurrence.end,
            text_len
        );
        // INVARIANT: reported distances never exceed the clamped bound
        debug_assert!(
            occurrence.distance <= clamp,
            "Contract violation: occurrences[{}].distance {} > clamp {}",
            i,
            occurrence.distance,
            clamp
        );
        // INVARIANT: left-to-right scan, one occurrence per end
        if i > 0 {
            debug_assert!(
                occurrences[i - 1].end < occurrence.end,
                "Contract violation: occurrences not ascending at {}: {} >= {}",
                i,
                occurrences[i - 1].end,
                occurrence.end
            );
        }
    }
}

/// Check the flat transition table of a compiled automaton.
#[inline]
pub fn check_automaton_well_formed(transitions: &[u32], accept: &[u32]) {
    // INVARIANT: one 256-wide row per state
    debug_assert_eq!(
        transitions.len(),
        accept.len() * 256,
        "Contract violation: {} transitions for {} states",
        transitions.len(),
        accept.len()
    );

    // INVARIANT: every transition lands on a real state
    debug_assert!(
        transitions.iter().all(|&t| (t as usize) < accept.len()),
        "Contract violation: transition target out of range"
    );
}
