//! Compiled matchers shared across texts and threads.

use std::sync::Arc;

use super::common::{ByteGen, SHAPES};
use fuzzscan::{
    sellers, Algorithm, Automaton, AutomatonCache, Bitap, MatchError, Matcher, Sellers, Ukkonen,
    WuManber,
};

#[test]
fn test_compiled_matchers_reused_across_texts() {
    let mut rng = ByteGen::new(11);
    let pattern = rng.bytes(6, 4);
    let automaton = Automaton::build(&pattern, 2).unwrap();
    let bitap = Bitap::build(&pattern, 2).unwrap();
    assert_eq!(automaton.max_distance(), 2);
    assert_eq!(bitap.max_distance(), 2);

    for _ in 0..20 {
        let text_len = (rng.next_u64() % 200) as usize;
        let text = rng.bytes(text_len, 4);
        let expected = sellers(&text, &pattern, 2).unwrap();
        assert_eq!(automaton.scan(&text), expected);
        assert_eq!(bitap.scan(&text), expected);
    }
}

#[test]
fn test_bench_shapes_agree() {
    for &(n, p, k) in SHAPES {
        let mut rng = ByteGen::new((n * 31 + p * 7) as u64 + k as u64);
        let text = rng.bytes(n, 4);
        let pattern = rng.bytes(p, 4);
        let expected = Sellers.find(&text, &pattern, k).unwrap();
        assert_eq!(Ukkonen.find(&text, &pattern, k).unwrap(), expected, "{:?}", (n, p, k));
        assert_eq!(WuManber.find(&text, &pattern, k).unwrap(), expected, "{:?}", (n, p, k));
    }
}

#[test]
fn test_algorithm_is_a_matcher() {
    for name in ["sellers", "ukkonen", "wu-manber"] {
        let algorithm: Algorithm = name.parse().unwrap();
        assert_eq!(algorithm.to_string(), name);
        assert_eq!(
            algorithm.find(b"xxabcxx", b"abc", 0).unwrap(),
            sellers(b"xxabcxx", b"abc", 0).unwrap()
        );
    }
    assert!(matches!(
        "levenshtein".parse::<Algorithm>(),
        Err(MatchError::UnknownAlgorithm { .. })
    ));
}

#[test]
fn test_cache_shared_between_threads() {
    let cache = Arc::new(AutomatonCache::new());
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                let text = ByteGen::new(seed).bytes(300, 4);
                let pattern = [0u8, 1, 2, 3, 0];
                let found = cache.find(&text, &pattern, 1).unwrap();
                assert_eq!(found, sellers(&text, &pattern, 1).unwrap());
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(cache.len(), 1);
}

#[cfg(feature = "parallel")]
#[test]
fn test_batch_search_matches_per_text() {
    let mut rng = ByteGen::new(5);
    let texts: Vec<Vec<u8>> = (0..32).map(|i| rng.bytes(i * 10, 4)).collect();
    let pattern = rng.bytes(5, 4);
    for algorithm in Algorithm::ALL {
        let results = fuzzscan::find_in_all(algorithm, &texts, &pattern, 2).unwrap();
        for (text, result) in texts.iter().zip(&results) {
            assert_eq!(result, &sellers(text, &pattern, 2).unwrap(), "{}", algorithm);
        }
    }
}
