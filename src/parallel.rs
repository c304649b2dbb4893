// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch search over many texts on the rayon pool.
//!
//! Each text is independent, so this is a plain `par_iter()`. The only
//! interesting part is compiling once: the automaton or the bit masks are
//! built up front and shared read-only by every worker. Sellers has nothing
//! to compile and just runs per text.

use rayon::prelude::*;

use crate::fuzzy::{Automaton, Bitap, Matcher, Sellers};
use crate::types::{Algorithm, MatchError, Occurrence};

/// Search every text for `pattern`, in parallel.
///
/// Results come back in input order: `result[i]` belongs to `texts[i]`.
/// The pattern is validated before any work is scheduled.
pub fn find_in_all<T>(
    algorithm: Algorithm,
    texts: &[T],
    pattern: &[u8],
    max_distance: isize,
) -> Result<Vec<Vec<Occurrence>>, MatchError>
where
    T: AsRef<[u8]> + Sync,
{
    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }
    tracing::debug!(
        %algorithm,
        texts = texts.len(),
        pattern_len = pattern.len(),
        "parallel batch search"
    );

    match algorithm {
        Algorithm::Sellers => texts
            .par_iter()
            .map(|text| Sellers.find(text.as_ref(), pattern, max_distance))
            .collect(),
        Algorithm::Ukkonen => {
            let automaton = Automaton::build(pattern, max_distance)?;
            Ok(texts
                .par_iter()
                .map(|text| automaton.scan(text.as_ref()))
                .collect())
        }
        Algorithm::WuManber => {
            let bitap = Bitap::build(pattern, max_distance)?;
            Ok(texts
                .par_iter()
                .map(|text| bitap.scan(text.as_ref()))
                .collect())
        }
    }
}
