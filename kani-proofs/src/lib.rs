// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for fuzzscan primitives.
//!
//! This standalone crate extracts the distance clamping and bit-lane
//! operations and proves properties of them using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Clamp bounds**: `0 <= clamp_distance(k, p) <= p` for every `k`
//! 2. **Clamp identity**: in-range requests pass through unchanged
//! 3. **Initial levels**: `ones_shifted(j)` has exactly bits `0..j` clear
//! 4. **Carry**: a two-word left shift equals a `u128` left shift

/// Width of one machine word in bits.
pub const WORD_BITS: usize = u64::BITS as usize;

// ============================================================================
// CLAMPING (copied from src/fuzzy/column.rs)
// ============================================================================

/// Effective distance bound for a pattern of `pattern_len` bytes.
pub fn clamp_distance(max_distance: isize, pattern_len: usize) -> usize {
    let requested = usize::try_from(max_distance).unwrap_or(0);
    requested.min(pattern_len)
}

// ============================================================================
// BIT LANES (copied from src/fuzzy/bits.rs)
// ============================================================================

/// All ones shifted left by `shift`, truncated to 64 bits.
pub fn ones_shifted(shift: usize) -> u64 {
    (!0u64).checked_shl(shift as u32).unwrap_or(0)
}

/// In-place left shift by one across little-endian words.
pub fn shl1_words(words: &mut [u64]) {
    let mut carry = 0u64;
    for word in words.iter_mut() {
        let next_carry = *word >> (WORD_BITS - 1);
        *word = (*word << 1) | carry;
        carry = next_carry;
    }
}

/// Bit `i` clear iff `pattern[i] == byte`.
pub fn char_mask(pattern: &[u8], byte: u8) -> u64 {
    let mut mask = !0u64;
    for (i, &b) in pattern.iter().enumerate() {
        if b == byte {
            mask &= !(1u64 << i);
        }
    }
    mask
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the clamp never exceeds the pattern length and never panics.
    #[kani::proof]
    fn verify_clamp_bounded() {
        let k: isize = kani::any();
        let p: usize = kani::any();

        let clamp = clamp_distance(k, p);

        kani::assert(clamp <= p, "clamp must not exceed the pattern length");
        if k <= 0 {
            kani::assert(clamp == 0, "non-positive requests clamp to 0");
        }
    }

    /// Verify in-range requests are returned unchanged.
    #[kani::proof]
    fn verify_clamp_identity_in_range() {
        let p: usize = kani::any_where(|&p: &usize| p <= isize::MAX as usize);
        let k: isize = kani::any_where(|&k: &isize| k >= 0 && (k as usize) <= p);

        kani::assert(clamp_distance(k, p) == k as usize, "in-range k passes through");
    }

    /// Verify the initial level for error count `j` has exactly `j` low bits clear.
    #[kani::proof]
    fn verify_ones_shifted_low_bits() {
        let shift: usize = kani::any_where(|&s: &usize| s <= 64);
        let bit: usize = kani::any_where(|&b: &usize| b < 64);

        let level = ones_shifted(shift);
        let clear = level & (1u64 << bit) == 0;

        kani::assert(clear == (bit < shift), "bit clear iff below the shift");
    }

    /// Verify the two-word shift carries exactly like a 128-bit integer.
    #[kani::proof]
    fn verify_two_word_shift_matches_u128() {
        let value: u128 = kani::any();
        let mut words = [value as u64, (value >> 64) as u64];

        shl1_words(&mut words);

        let expected = value << 1;
        kani::assert(words[0] == expected as u64, "low word");
        kani::assert(words[1] == (expected >> 64) as u64, "high word");
    }

    /// Verify character masks clear exactly the matching positions.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_char_mask_positions() {
        let pattern: [u8; 4] = kani::any();
        let byte: u8 = kani::any();
        let i: usize = kani::any_where(|&i: &usize| i < 4);

        let mask = char_mask(&pattern, byte);

        kani::assert(
            (mask & (1u64 << i) == 0) == (pattern[i] == byte),
            "bit i clear iff pattern[i] == byte",
        );
        kani::assert(mask >> 4 == !0u64 >> 4, "bits beyond the pattern stay set");
    }
}
