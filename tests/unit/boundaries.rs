//! Pattern lengths around the machine word.
//!
//! Wu-Manber switches from one `u64` to multi-word lanes above 64 bytes.
//! Everything here runs at 63, 64, 65, 128 and 129 so that the match bit sits
//! at the top of a word, at the bottom of the next one, and everywhere the
//! carry has to cross.

use super::common::{assert_all_agree, assert_well_formed, exact_ends, pairs, ByteGen};
use fuzzscan::{sellers, wu_manber, Bitap};

const WIDTHS: &[usize] = &[63, 64, 65, 128, 129];

/// `prefix ++ pattern ++ suffix`, with the pattern copy ending at the returned index.
fn embed(pattern: &[u8], seed: u64) -> (Vec<u8>, usize) {
    let mut rng = ByteGen::new(seed);
    let mut text = rng.bytes(20, 4);
    text.extend_from_slice(pattern);
    let end = text.len() - 1;
    text.extend(rng.bytes(10, 4));
    (text, end)
}

#[test]
fn test_width_selection() {
    for &p in WIDTHS {
        let bitap = Bitap::build(&vec![b'a'; p], 1).unwrap();
        assert_eq!(bitap.is_wide(), p > Bitap::NARROW_LIMIT, "p = {}", p);
        assert_eq!(bitap.pattern_len(), p);
    }
}

#[test]
fn test_exact_occurrence_at_every_width() {
    for &p in WIDTHS {
        let pattern = ByteGen::new(p as u64).bytes(p, 4);
        let (text, end) = embed(&pattern, 1000 + p as u64);

        let result = assert_all_agree(&text, &pattern, 0);
        assert!(result.iter().any(|o| o.end == end && o.distance == 0), "p = {}", p);

        let ends: Vec<usize> = result.iter().map(|o| o.end).collect();
        assert_eq!(ends, exact_ends(&text, &pattern), "p = {}", p);
    }
}

#[test]
fn test_small_bounds_agree_at_every_width() {
    for &p in WIDTHS {
        let pattern = ByteGen::new(p as u64).bytes(p, 4);
        let (mut text, _) = embed(&pattern, 2000 + p as u64);
        text[30] = b'z';
        text.remove(25);
        for k in 0..=2 {
            let result = assert_all_agree(&text, &pattern, k);
            assert_well_formed(&result, text.len(), k as usize);
        }
    }
}

#[test]
fn test_mismatch_straddling_word_edge() {
    // Two foreign bytes at pattern positions 63 and 64, the last bit of word
    // zero and the first bit of word one.
    for &p in &[65usize, 128, 129] {
        let pattern = ByteGen::new(p as u64).bytes(p, 4);
        let mut copy = pattern.clone();
        copy[63] = b'z';
        copy[64] = b'z';
        let (text, end) = embed(&copy, 3000 + p as u64);

        let result = assert_all_agree(&text, &pattern, 2);
        assert!(pairs(&result).contains(&(end, 2)), "p = {}", p);
        assert!(result.iter().all(|o| o.distance > 0), "p = {}", p);
    }
}

#[test]
fn test_mismatch_at_last_pattern_byte() {
    // The match bit itself: position p - 1.
    for &p in WIDTHS {
        let pattern = ByteGen::new(p as u64).bytes(p, 4);
        let mut copy = pattern.clone();
        copy[p - 1] = b'z';
        let (text, end) = embed(&copy, 4000 + p as u64);

        let result = assert_all_agree(&text, &pattern, 1);
        assert!(pairs(&result).contains(&(end, 1)), "p = {}", p);
    }
}

#[test]
fn test_full_bound_at_every_width() {
    // k = p: every level is needed and the top level starts at all zeros.
    // The automaton is left out, its state space at k = p is not small.
    for &p in WIDTHS {
        let pattern = ByteGen::new(p as u64).bytes(p, 4);
        let text = ByteGen::new(5000 + p as u64).bytes(p + 40, 4);
        let k = p as isize;
        let expected = sellers(&text, &pattern, k).unwrap();
        assert_eq!(wu_manber(&text, &pattern, k).unwrap(), expected, "p = {}", p);
        assert_eq!(expected.len(), text.len());
        assert_eq!(wu_manber(&text, &pattern, k + 7).unwrap(), expected);
    }
}
