//! Whole-string edit distance and its relation to search.

use super::common::{brute_force, ByteGen};
use fuzzscan::{edit_distance, edit_distance_within, sellers};

#[test]
fn test_classic_pairs() {
    assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
    assert_eq!(edit_distance(b"saturday", b"sunday"), 3);
    assert_eq!(edit_distance(b"saturday", b"monday"), 5);
    assert_eq!(edit_distance(b"", b""), 0);
}

#[test]
fn test_bounded_agrees_with_exact() {
    let mut rng = ByteGen::new(42);
    for _ in 0..300 {
        let a_len = (rng.next_u64() % 12) as usize;
        let b_len = (rng.next_u64() % 12) as usize;
        let a = rng.bytes(a_len, 3);
        let b = rng.bytes(b_len, 3);
        let distance = edit_distance(&a, &b);
        for max in 0..8 {
            assert_eq!(
                edit_distance_within(&a, &b, max),
                distance <= max,
                "{:?} vs {:?} max {}",
                a,
                b,
                max
            );
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let mut rng = ByteGen::new(7);
    for _ in 0..100 {
        let a = rng.bytes(8, 3);
        let b = rng.bytes(6, 3);
        let c = rng.bytes(7, 3);
        assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }
}

#[test]
fn test_search_at_whole_text_end_bounded_by_distance() {
    // The best alignment ending at the last byte is never worse than
    // aligning the whole text.
    let mut rng = ByteGen::new(99);
    for _ in 0..100 {
        let text = rng.bytes(10, 3);
        let pattern = rng.bytes(4, 3);
        let whole = edit_distance(&text, &pattern);
        let result = sellers(&text, &pattern, 4).unwrap();
        if let Some(last) = result.last().filter(|o| o.end == text.len() - 1) {
            assert!(last.distance <= whole);
        }
    }
}

#[test]
fn test_sellers_matches_definition() {
    let mut rng = ByteGen::new(0xfeed);
    for _ in 0..150 {
        let text_len = (rng.next_u64() % 30) as usize;
        let pattern_len = 1 + (rng.next_u64() % 5) as usize;
        let k = (rng.next_u64() % 6) as isize;
        let text = rng.bytes(text_len, 3);
        let pattern = rng.bytes(pattern_len, 3);
        assert_eq!(sellers(&text, &pattern, k).unwrap(), brute_force(&text, &pattern, k));
    }
}
