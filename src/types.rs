// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by every matcher.
//!
//! An `Occurrence` is end-anchored: edit-distance alignments can start at
//! several offsets for the same end, so the end index is the only stable
//! identity a match has.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One approximate match of the pattern in the text.
///
/// Ordered by `end` first, which is the order every matcher emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Occurrence {
    /// Index of the last text byte that belongs to the match.
    pub end: usize,
    /// Exact edit distance of the best alignment ending at `end`.
    pub distance: usize,
}

impl Occurrence {
    pub fn new(end: usize, distance: usize) -> Self {
        Self { end, distance }
    }
}

impl From<(usize, usize)> for Occurrence {
    fn from((end, distance): (usize, usize)) -> Self {
        Self { end, distance }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.end, self.distance)
    }
}

/// Which matcher to run.
///
/// Parses from and displays as its kebab-case name, so it can come straight
/// out of a config file or a command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Row-by-row dynamic programming. Always correct, `O(n·p)`.
    #[default]
    Sellers,
    /// Deterministic automaton over distance columns. `O(n)` scan after build.
    Ukkonen,
    /// Bit-parallel levels. `O(n·k)` scan.
    WuManber,
}

impl Algorithm {
    /// All algorithms, in a stable order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sellers, Algorithm::Ukkonen, Algorithm::WuManber];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sellers => "sellers",
            Algorithm::Ukkonen => "ukkonen",
            Algorithm::WuManber => "wu-manber",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sellers" | "dp" => Ok(Algorithm::Sellers),
            "ukkonen" | "automaton" => Ok(Algorithm::Ukkonen),
            "wu-manber" | "wu_manber" | "bitap" => Ok(Algorithm::WuManber),
            _ => Err(MatchError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Errors returned by the matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern has no bytes. Every text position would match trivially,
    /// so the call is rejected before any work is done.
    EmptyPattern,
    /// An algorithm name did not parse.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::EmptyPattern => write!(f, "empty pattern"),
            MatchError::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "unknown algorithm '{}' (expected sellers, ukkonen or wu-manber)",
                    name
                )
            }
        }
    }
}

impl std::error::Error for MatchError {}
