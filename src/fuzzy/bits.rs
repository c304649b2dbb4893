// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width bit vectors for the Wu-Manber levels.
//!
//! Two representations behind one trait:
//!
//! - `u64` for patterns up to 64 bytes. Every operation is one instruction.
//! - `WideBits` for anything longer: little-endian words with carry-aware
//!   shifts. Same semantics, one loop per operation.
//!
//! Only left shifts happen, so bits above the pattern width never leak back
//! into the low bits. We don't bother masking them off.
//!
//! All operations are in place. The scan loop runs them once per byte per
//! level, and the wide case must not allocate there.

/// Width of one machine word in bits.
pub const WORD_BITS: usize = u64::BITS as usize;

/// In-place bit vector operations used by the bitap update rule.
pub trait BitLanes: Clone + Send + Sync {
    /// All ones, wide enough to hold `width` bits.
    fn ones(width: usize) -> Self;

    /// `self <<= 1`, shifting a zero into bit 0.
    fn shl1_assign(&mut self);

    fn or_assign(&mut self, rhs: &Self);

    fn and_assign(&mut self, rhs: &Self);

    /// Overwrite with `src` without reallocating.
    fn copy_from(&mut self, src: &Self);

    fn clear_bit(&mut self, bit: usize);

    fn is_clear(&self, bit: usize) -> bool;

    /// All ones shifted left by `shift`, i.e. `!0 << shift` on an unbounded
    /// integer truncated to the vector width.
    fn ones_shifted(width: usize, shift: usize) -> Self {
        let mut lanes = Self::ones(width);
        for bit in 0..shift.min(width) {
            lanes.clear_bit(bit);
        }
        lanes
    }
}

impl BitLanes for u64 {
    #[inline]
    fn ones(_width: usize) -> Self {
        !0
    }

    #[inline]
    fn shl1_assign(&mut self) {
        *self <<= 1;
    }

    #[inline]
    fn or_assign(&mut self, rhs: &Self) {
        *self |= *rhs;
    }

    #[inline]
    fn and_assign(&mut self, rhs: &Self) {
        *self &= *rhs;
    }

    #[inline]
    fn copy_from(&mut self, src: &Self) {
        *self = *src;
    }

    #[inline]
    fn clear_bit(&mut self, bit: usize) {
        *self &= !(1u64 << bit);
    }

    #[inline]
    fn is_clear(&self, bit: usize) -> bool {
        *self & (1u64 << bit) == 0
    }

    #[inline]
    fn ones_shifted(_width: usize, shift: usize) -> Self {
        // A shift of 64 would overflow; the unbounded result truncates to 0.
        (!0u64).checked_shl(shift as u32).unwrap_or(0)
    }
}

/// Arbitrary-width bit vector stored as little-endian `u64` words.
///
/// Bit `i` lives in `words[i / 64]` at position `i % 64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideBits {
    words: Box<[u64]>,
}

impl WideBits {
    /// Number of words needed for `width` bits (at least one).
    pub fn words_for(width: usize) -> usize {
        width.div_ceil(WORD_BITS).max(1)
    }
}

impl BitLanes for WideBits {
    fn ones(width: usize) -> Self {
        Self {
            words: vec![!0u64; Self::words_for(width)].into_boxed_slice(),
        }
    }

    #[inline]
    fn shl1_assign(&mut self) {
        let mut carry = 0u64;
        for word in self.words.iter_mut() {
            let next_carry = *word >> (WORD_BITS - 1);
            *word = (*word << 1) | carry;
            carry = next_carry;
        }
    }

    #[inline]
    fn or_assign(&mut self, rhs: &Self) {
        for (word, other) in self.words.iter_mut().zip(rhs.words.iter()) {
            *word |= *other;
        }
    }

    #[inline]
    fn and_assign(&mut self, rhs: &Self) {
        for (word, other) in self.words.iter_mut().zip(rhs.words.iter()) {
            *word &= *other;
        }
    }

    #[inline]
    fn copy_from(&mut self, src: &Self) {
        self.words.copy_from_slice(&src.words);
    }

    #[inline]
    fn clear_bit(&mut self, bit: usize) {
        self.words[bit / WORD_BITS] &= !(1u64 << (bit % WORD_BITS));
    }

    #[inline]
    fn is_clear(&self, bit: usize) -> bool {
        self.words[bit / WORD_BITS] & (1u64 << (bit % WORD_BITS)) == 0
    }

    fn ones_shifted(width: usize, shift: usize) -> Self {
        let mut lanes = Self::ones(width);
        let whole = (shift / WORD_BITS).min(lanes.words.len());
        for word in lanes.words[..whole].iter_mut() {
            *word = 0;
        }
        if whole < lanes.words.len() {
            lanes.words[whole] = !0u64 << (shift % WORD_BITS);
        }
        lanes
    }
}
