//! Literal expectations for small inputs.

use super::common::{assert_all_agree, assert_well_formed, pairs, SAMPLES};
use fuzzscan::{clamp_distance, find, Algorithm, MatchError};

#[test]
fn test_love_in_sentence() {
    let result = assert_all_agree(b"if you would like", b"love", 2);
    assert_eq!(pairs(&result), vec![(16, 2)]);
}

#[test]
fn test_dna_one_error() {
    let result = assert_all_agree(b"cagtcatgcatacgtctatatcggctgc", b"ctata", 1);
    assert_eq!(pairs(&result), vec![(11, 1), (18, 1), (19, 0), (20, 1)]);
}

#[test]
fn test_abracadabra() {
    let result = assert_all_agree(b"abracadabra", b"abra", 1);
    assert_eq!(pairs(&result), vec![(2, 1), (3, 0), (4, 1), (9, 1), (10, 0)]);
}

#[test]
fn test_mississippi() {
    let result = assert_all_agree(b"mississippi", b"issip", 2);
    assert_eq!(
        pairs(&result),
        vec![(3, 2), (4, 1), (5, 1), (6, 2), (7, 1), (8, 0), (9, 1), (10, 2)]
    );
}

#[test]
fn test_single_byte_pattern() {
    assert_eq!(pairs(&assert_all_agree(b"aaa", b"a", 0)), vec![(0, 0), (1, 0), (2, 0)]);
    assert!(assert_all_agree(b"abc", b"x", 0).is_empty());
    assert_eq!(pairs(&assert_all_agree(b"abc", b"b", 0)), vec![(1, 0)]);
}

#[test]
fn test_samples_are_well_formed() {
    for &(text, pattern, k) in SAMPLES {
        let result = assert_all_agree(text, pattern, k);
        assert_well_formed(&result, text.len(), clamp_distance(k, pattern.len()));
    }
}

#[test]
fn test_empty_text() {
    for k in [-1, 0, 1, 3, 100] {
        assert!(assert_all_agree(b"", b"abc", k).is_empty());
    }
}

#[test]
fn test_empty_pattern_rejected_by_every_algorithm() {
    for algorithm in Algorithm::ALL {
        assert_eq!(find(algorithm, b"abc", b"", 0), Err(MatchError::EmptyPattern));
        assert_eq!(find(algorithm, b"", b"", 3), Err(MatchError::EmptyPattern));
        assert_eq!(find(algorithm, b"abc", b"", -1), Err(MatchError::EmptyPattern));
    }
}

#[test]
fn test_negative_bound_is_exact_search() {
    assert_eq!(
        pairs(&assert_all_agree(b"abcabc", b"abc", -1)),
        vec![(2, 0), (5, 0)]
    );
    assert_eq!(
        assert_all_agree(b"abcabc", b"abc", isize::MIN),
        assert_all_agree(b"abcabc", b"abc", 0)
    );
}

#[test]
fn test_bound_at_pattern_length_matches_everywhere() {
    // With k = p, deleting the whole pattern is always an alignment.
    let result = assert_all_agree(b"xyz", b"ab", 2);
    assert_eq!(pairs(&result), vec![(0, 2), (1, 2), (2, 2)]);
    assert_eq!(assert_all_agree(b"xyz", b"ab", 50), result);
}

#[test]
fn test_pattern_longer_than_text() {
    // "abcdef" vs "abc": three deletions from the pattern.
    let result = assert_all_agree(b"abc", b"abcdef", 3);
    assert_eq!(result.last().map(|o| (o.end, o.distance)), Some((2, 3)));
    assert!(assert_all_agree(b"abc", b"abcdef", 2).is_empty());
}

#[test]
fn test_all_byte_values() {
    let text: Vec<u8> = (0..=255u8).collect();
    let pattern = [254u8, 255, 0];
    let result = assert_all_agree(&text, &pattern, 1);
    assert!(result.iter().any(|o| o.end == 255 && o.distance == 1));
}
