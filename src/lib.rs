// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate byte-string search with three interchangeable matchers.
//!
//! Given a text, a pattern and a maximum edit distance `k`, find every index
//! where some substring of the text ending there is within `k` edits of the
//! pattern, and report the exact distance. Three algorithms, one answer:
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │        column.rs         │
//!                 │ (edit_cost, clamp, next  │
//!                 │  column recurrence)      │
//!                 └──────────────────────────┘
//!                    │                    │
//!                    ▼                    ▼
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │  sellers.rs  │  │  ukkonen.rs  │  │ wu_manber.rs │
//! │  DP columns  │  │ column DFA   │  │ bit levels   │
//! │  O(n·p)      │  │ O(n) scan    │  │ O(n·k)       │
//! └──────────────┘  └──────────────┘  └──────────────┘
//!                          │                 │
//!                          ▼                 ▼
//!                   ┌────────────┐    ┌────────────┐
//!                   │  cache.rs  │    │  bits.rs   │
//!                   │ Arc<DFA>   │    │ u64 / wide │
//!                   └────────────┘    └────────────┘
//! ```
//!
//! Sellers is the reference: the other two are tested against it on every
//! input shape we can think of, and on many we couldn't (proptest).
//!
//! # Usage
//!
//! ```
//! use fuzzscan::{find, Algorithm, Occurrence};
//!
//! let hits = find(Algorithm::WuManber, b"cagtcatgcatacgtctatatcggctgc", b"ctata", 1).unwrap();
//! assert!(hits.contains(&Occurrence::new(19, 0)));
//! ```
//!
//! `max_distance` is an `isize`: negative values clamp to 0, and anything
//! above the pattern length clamps to the pattern length.

pub mod cache;
pub mod contracts;
pub mod fuzzy;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod testing;
mod types;

// Re-exports for public API
pub use cache::AutomatonCache;
pub use fuzzy::{
    clamp_distance, edit_distance, edit_distance_within, find, sellers, ukkonen, wu_manber,
    Automaton, Bitap, Matcher, Sellers, Ukkonen, WuManber,
};
#[cfg(feature = "parallel")]
pub use parallel::find_in_all;
pub use types::{Algorithm, MatchError, Occurrence};
