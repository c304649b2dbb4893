// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ukkonen: compile the Sellers columns into a DFA.
//!
//! Sellers recomputes a whole column per text byte. But once every entry is
//! capped at `k + 1`, there are only finitely many columns, and the next one
//! depends only on the current one and the byte. So we enumerate them up front
//! (BFS from the initial column) and scanning becomes one table lookup per
//! byte.
//!
//! # Layout
//!
//! ```text
//! state_of:    column -> state id, in discovery order (build only)
//! transitions: [state * 256 + byte] = next state       (flat, no hashing)
//! accept:      [state] = column[p] if <= k, else NOT_ACCEPTING
//! ```
//!
//! # Byte classes
//!
//! Every byte that doesn't occur in the pattern yields the same next column,
//! so the build evaluates one representative per class (each distinct pattern
//! byte, plus "everything else") and fans the result out to the 256-wide row.
//! For a short pattern that's a handful of column computations per state
//! instead of 256.
//!
//! The state count still grows quickly with `p` and `k`. This is the right
//! tool for many texts against one small pattern, not for one text against a
//! long pattern with a large `k`.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use super::column::{clamp_distance, initial_column, next_column};
use super::Matcher;
use crate::contracts::{check_automaton_well_formed, check_clamp, check_occurrences_well_formed};
use crate::types::{MatchError, Occurrence};

/// Alphabet size: all byte values.
pub const ALPHABET: usize = 256;

/// Accept marker for states whose last entry exceeds the bound.
pub const NOT_ACCEPTING: u32 = u32::MAX;

/// Maps each byte to a class index; class 0 is "not in the pattern".
fn byte_classes(pattern: &[u8]) -> ([u16; ALPHABET], Vec<u8>) {
    let mut class_of = [0u16; ALPHABET];
    // Representative byte per class. Class 0 needs any byte absent from the
    // pattern; if the pattern uses all 256 values class 0 is never looked up.
    let mut representatives = vec![0u8];
    for &byte in pattern {
        if class_of[byte as usize] == 0 {
            class_of[byte as usize] = representatives.len() as u16;
            representatives.push(byte);
        }
    }
    if let Some(absent) = (0..=u8::MAX).find(|&b| class_of[b as usize] == 0) {
        representatives[0] = absent;
    }
    (class_of, representatives)
}

/// Compiled Ukkonen automaton for one pattern and distance bound.
///
/// Immutable after `build`. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// `transitions[state * ALPHABET + byte]` is the next state.
    transitions: Vec<u32>,
    /// Per-state distance when accepting, `NOT_ACCEPTING` otherwise.
    accept: Vec<u32>,
    pattern_len: usize,
    clamp: usize,
}

impl Automaton {
    /// Enumerate every reachable capped column and its transitions.
    pub fn build(pattern: &[u8], max_distance: isize) -> Result<Self, MatchError> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }
        let started = Instant::now();
        let p = pattern.len();
        let clamp = clamp_distance(max_distance, p);
        check_clamp(clamp, p);
        let cap = clamp + 1;

        let (class_of, representatives) = byte_classes(pattern);

        // State 0 is the uncapped initial column. Later columns are all capped,
        // so it may never be revisited; that's fine, it's just the entry point.
        let initial: Box<[usize]> = initial_column(p).into_boxed_slice();
        let mut state_of: HashMap<Box<[usize]>, u32> = HashMap::new();
        state_of.insert(initial.clone(), 0);
        let mut queue: VecDeque<Box<[usize]>> = VecDeque::from([initial]);

        let mut transitions: Vec<u32> = Vec::new();
        let mut accept: Vec<u32> = Vec::new();
        let mut class_targets = vec![0u32; representatives.len()];
        let mut next = vec![0usize; p + 1];

        // FIFO order: the i-th column popped is state i. A column lives in the
        // queue only until it is expanded; afterwards the map key is its only copy.
        while let Some(column) = queue.pop_front() {
            let last = column[p];
            accept.push(if last <= clamp { last as u32 } else { NOT_ACCEPTING });

            for (class, &byte) in representatives.iter().enumerate() {
                next_column(&column, &mut next, byte, pattern, cap);
                let target = match state_of.get(next.as_slice()) {
                    Some(&id) => id,
                    None => {
                        let id = state_of.len() as u32;
                        let discovered: Box<[usize]> = next.as_slice().into();
                        state_of.insert(discovered.clone(), id);
                        queue.push_back(discovered);
                        id
                    }
                };
                class_targets[class] = target;
            }

            transitions.extend(class_of.iter().map(|&class| class_targets[class as usize]));
        }

        check_automaton_well_formed(&transitions, &accept);
        tracing::debug!(
            pattern_len = p,
            max_distance = clamp,
            states = accept.len(),
            byte_classes = representatives.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "built ukkonen automaton"
        );

        Ok(Self {
            transitions,
            accept,
            pattern_len: p,
            clamp,
        })
    }

    /// Walk the automaton over `text`, emitting every accepting position.
    pub fn scan(&self, text: &[u8]) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        let mut state = 0usize;
        for (i, &byte) in text.iter().enumerate() {
            state = self.transitions[state * ALPHABET + byte as usize] as usize;
            let distance = self.accept[state];
            if distance != NOT_ACCEPTING {
                occurrences.push(Occurrence::new(i, distance as usize));
            }
        }
        check_occurrences_well_formed(&occurrences, text.len(), self.clamp);
        occurrences
    }

    /// Number of distinct columns reached during the build.
    pub fn state_count(&self) -> usize {
        self.accept.len()
    }

    /// Accept distance of `state`, if it is a goal.
    pub fn goal_distance(&self, state: usize) -> Option<usize> {
        match self.accept.get(state) {
            Some(&d) if d != NOT_ACCEPTING => Some(d as usize),
            _ => None,
        }
    }

    /// Next state from `state` on `byte`.
    pub fn next_state(&self, state: usize, byte: u8) -> usize {
        self.transitions[state * ALPHABET + byte as usize] as usize
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// The clamped distance bound this was built for.
    pub fn max_distance(&self) -> usize {
        self.clamp
    }
}

/// Ukkonen automaton matcher. Builds a fresh automaton per call; use
/// [`Automaton`] directly or [`crate::AutomatonCache`] to amortize the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ukkonen;

impl Matcher for Ukkonen {
    fn find(
        &self,
        text: &[u8],
        pattern: &[u8],
        max_distance: isize,
    ) -> Result<Vec<Occurrence>, MatchError> {
        Ok(Automaton::build(pattern, max_distance)?.scan(text))
    }
}

/// Find every approximate occurrence with the Ukkonen matcher.
pub fn ukkonen(
    text: &[u8],
    pattern: &[u8],
    max_distance: isize,
) -> Result<Vec<Occurrence>, MatchError> {
    Ukkonen.find(text, pattern, max_distance)
}
