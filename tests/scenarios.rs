//! End-to-end runs over small word lists: load, normalize, index, search,
//! report.

use std::io::Write;

use pangram::normalize::word_mask;
use pangram::{
    normalize, search, AnagramIndex, CandidateOrder, Cancel, FanOut, Report, SearchConfig,
    WordList, WordListError,
};

/// Normalizes and searches `words`, returning the grouped result lines.
fn run(words: &[&str], threshold: u32) -> Vec<String> {
    let index = AnagramIndex::build(normalize(words.iter().copied()));
    let candidates = index.candidates(CandidateOrder::FirstSeen);
    let report = Report::new(&index);
    let mut lines = Vec::new();
    search(
        &candidates,
        &SearchConfig::new(threshold),
        &Cancel::new(),
        |c| lines.push(report.line(&c)),
    );
    lines
}

#[test]
fn full_alphabet_cover() {
    let words = ["abc", "def", "ghijklmnopqrstuvwxyz", "abd"];
    assert_eq!(
        run(&words, 26),
        vec!["26 [abc] [def] [ghijklmnopqrstuvwxyz]".to_string()]
    );

    // The conflicting word stays indexed even though it is never reported.
    let index = AnagramIndex::build(words);
    assert_eq!(index.words(word_mask("abd").0).unwrap(), ["abd"]);
}

#[test]
fn repeated_letter_word_is_dropped() {
    assert_eq!(normalize(["book", "cat"]), vec!["cat"]);
    assert_eq!(run(&["book", "cat"], 3), vec!["3 [cat]".to_string()]);
}

#[test]
fn anagrams_reported_together() {
    let index = AnagramIndex::build(["cat", "act"]);
    assert_eq!(index.len(), 1);
    assert_eq!(run(&["cat", "act"], 3), vec!["3 [cat act]".to_string()]);
}

#[test]
fn threshold_past_alphabet_is_silent() {
    assert!(run(&["abc", "def", "ghijklmnopqrstuvwxyz"], 27).is_empty());
}

#[test]
fn load_search_and_report_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in [
        "quiz", "jumpy", "fjord", "vex", "blank", "gawks", "chewy", "nth", "glyph", "waltz",
        "vow", "dwarf", "pick", "fox",
    ] {
        writeln!(file, "{word}").unwrap();
    }

    let list = WordList::load_from_path(file.path()).unwrap();
    assert_eq!(list.len(), 14);

    let singles = normalize(list.words.iter());
    let index = AnagramIndex::build(&singles);
    let candidates = index.candidates(CandidateOrder::RareFirst);
    let report = Report::new(&index);

    let fan_out = FanOut::new(2).unwrap();
    let mut lines = Vec::new();
    fan_out
        .run(&candidates, &SearchConfig::new(20), &Cancel::new(), |c| {
            assert!(c.letter_count() >= 20);
            lines.push(report.line(&c));
        })
        .unwrap();

    let mut sequential = Vec::new();
    search(&candidates, &SearchConfig::new(20), &Cancel::new(), |c| {
        sequential.push(report.line(&c))
    });
    lines.sort();
    sequential.sort();
    assert_eq!(lines, sequential);
}

#[test]
fn rejects_bad_word_lists() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "only\nthree\nwords").unwrap();
    assert!(matches!(
        WordList::load_from_path(file.path()),
        Err(WordListError::TooFewWords { found: 3 })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "J"] {
        writeln!(file, "{word}").unwrap();
    }
    assert!(matches!(
        WordList::load_from_path(file.path()),
        Err(WordListError::InvalidCharacter { line: 10, ch: 'J', .. })
    ));
}
