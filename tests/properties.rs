use std::collections::HashSet;

use itertools::Itertools;
use proptest::prelude::*;

use pangram::normalize::word_mask;
use pangram::{
    normalize, search, AnagramIndex, CandidateOrder, Cancel, FanOut, LetterSet, SearchConfig,
    SearchStats,
};

fn word_lists() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-j]{1,4}", 1..14)
}

fn candidates(words: &[String], order: CandidateOrder) -> (AnagramIndex, Vec<LetterSet>) {
    let index = AnagramIndex::build(normalize(words.iter()));
    let candidates = index.candidates(order);
    (index, candidates)
}

fn sequential(candidates: &[LetterSet], threshold: u32) -> (Vec<Vec<LetterSet>>, SearchStats) {
    let mut found = Vec::new();
    let stats = search(
        candidates,
        &SearchConfig::new(threshold),
        &Cancel::new(),
        |c| found.push(c.keys().to_vec()),
    );
    (found, stats)
}

fn as_sets(found: &[Vec<LetterSet>]) -> HashSet<Vec<LetterSet>> {
    found
        .iter()
        .map(|keys| keys.iter().copied().sorted().collect_vec())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalize_is_idempotent(words in word_lists()) {
        let once = normalize(words.clone());
        let twice = normalize(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_word_lands_in_its_own_group(words in word_lists()) {
        let singles = normalize(words.iter());
        let index = AnagramIndex::build(&singles);
        let distinct: HashSet<&String> = singles.iter().copied().collect();
        prop_assert_eq!(index.word_count(), distinct.len());
        for word in distinct {
            let group = index.words(word_mask(word).0).unwrap();
            prop_assert_eq!(group.iter().filter(|w| *w == word).count(), 1);
        }
    }

    #[test]
    fn combinations_are_disjoint_and_unique(words in word_lists(), threshold in 0u32..12) {
        let (_, candidates) = candidates(&words, CandidateOrder::FirstSeen);
        let (found, stats) = sequential(&candidates, threshold);
        prop_assert_eq!(stats.emitted as usize, found.len());
        for keys in &found {
            for (a, b) in keys.iter().tuple_combinations() {
                prop_assert!(a.is_disjoint(*b));
            }
            let letters = keys.iter().fold(LetterSet::EMPTY, |acc, &k| acc | k);
            prop_assert!(letters.len() >= threshold);
        }
        prop_assert_eq!(as_sets(&found).len(), found.len());
    }

    #[test]
    fn raising_the_threshold_only_removes(words in word_lists(), low in 0u32..10, step in 1u32..5) {
        let (_, candidates) = candidates(&words, CandidateOrder::FirstSeen);
        let (low_found, _) = sequential(&candidates, low);
        let (high_found, _) = sequential(&candidates, low + step);
        prop_assert!(as_sets(&high_found).is_subset(&as_sets(&low_found)));
    }

    #[test]
    fn parallel_matches_sequential(words in word_lists(), threshold in 0u32..12, rare in any::<bool>()) {
        let order = if rare { CandidateOrder::RareFirst } else { CandidateOrder::Ascending };
        let (_, candidates) = candidates(&words, order);
        let (expected, expected_stats) = sequential(&candidates, threshold);

        let fan_out = FanOut::new(3).unwrap();
        let mut found = Vec::new();
        let stats = fan_out
            .run(&candidates, &SearchConfig::new(threshold), &Cancel::new(), |c| {
                found.push(c.keys().to_vec())
            })
            .unwrap();

        prop_assert_eq!(found.len(), expected.len());
        prop_assert_eq!(as_sets(&found), as_sets(&expected));
        prop_assert_eq!(stats, expected_stats);
    }
}
