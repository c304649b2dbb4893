// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared cache of compiled automata.
//!
//! Building a Ukkonen automaton costs far more than scanning a typical text
//! with it, and the result depends only on `(pattern, clamp)`. Searching the
//! same pattern over many texts, possibly from many threads, should pay that
//! cost once.
//!
//! Entries are `Arc<Automaton>` and never change after insertion, so readers
//! only contend on the map lookup. Misses build outside the lock and then
//! re-check under the write lock; two threads racing on the same key both
//! build, and the first insert wins.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::fuzzy::{clamp_distance, Automaton};
use crate::types::{MatchError, Occurrence};

type CacheKey = (Box<[u8]>, usize);

/// Thread-safe `(pattern, clamp) -> Automaton` cache.
///
/// There is no eviction: one entry per distinct `(pattern, clamp)` ever
/// requested. A long-lived cache fed caller-supplied patterns grows without
/// bound; check [`len`](Self::len) and [`clear`](Self::clear) it periodically.
#[derive(Debug, Default)]
pub struct AutomatonCache {
    entries: RwLock<HashMap<CacheKey, Arc<Automaton>>>,
}

impl AutomatonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the automaton for `(pattern, max_distance)`, building it on a miss.
    ///
    /// `max_distance` is clamped first, so `k = 50` and `k = p` share an entry.
    pub fn get_or_build(
        &self,
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Arc<Automaton>, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        let clamp = clamp_distance(max_distance, pattern.len());
        let key: CacheKey = (pattern.into(), clamp);

        if let Some(automaton) = self.entries.read().get(&key) {
            tracing::trace!(pattern_len = pattern.len(), clamp, "automaton cache hit");
            return Ok(Arc::clone(automaton));
        }

        tracing::debug!(pattern_len = pattern.len(), clamp, "automaton cache miss");
        // clamp <= p <= isize::MAX
        let built = Arc::new(Automaton::build(pattern, clamp as isize)?);

        let mut entries = self.entries.write();
        let automaton = entries.entry(key).or_insert(built);
        Ok(Arc::clone(automaton))
    }

    /// Scan `text` with the cached automaton for `(pattern, max_distance)`.
    pub fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError> {
        Ok(self.get_or_build(pattern, max_distance)?.scan(text))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry. Automata already handed out stay valid.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
