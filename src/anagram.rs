//! Groups words by letter set so every spelling of the same letters is
//! searched once.

use std::collections::HashMap;

use itertools::Itertools;

use crate::letters::LetterSet;
use crate::normalize::word_mask;

/// Letters rare enough that putting their words first prunes early.
pub const RARE_LETTERS: [u8; 2] = [b'q', b'z'];

/// Order in which distinct keys are handed to the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Order of first appearance in the word list.
    #[default]
    FirstSeen,
    /// Ascending bitmask value.
    Ascending,
    /// Keys holding a rare letter first, then the rest; first-seen order
    /// inside each part.
    RareFirst,
}

/// All words sharing one letter set, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup {
    pub key: LetterSet,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    groups: Vec<AnagramGroup>,
    positions: HashMap<LetterSet, usize>,
}

impl AnagramIndex {
    /// Builds the index from normalized words.
    ///
    /// A word spelled identically to one already in its group is not added
    /// twice, so a line repeated in the word list is reported once rather
    /// than as `[cat cat act]`. Panics if a word repeats a letter.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = AnagramIndex::default();
        for word in words {
            let word = word.as_ref();
            let (key, duplicate_letter) = word_mask(word);
            assert!(!duplicate_letter, "word {word:?} was not normalized");

            let groups = &mut index.groups;
            let pos = *index.positions.entry(key).or_insert_with(|| {
                groups.push(AnagramGroup {
                    key,
                    words: Vec::new(),
                });
                groups.len() - 1
            });
            let group = &mut index.groups[pos];
            if !group.words.iter().any(|w| w == word) {
                group.words.push(word.to_string());
            }
        }
        index
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|g| g.words.len()).sum()
    }

    pub fn groups(&self) -> &[AnagramGroup] {
        &self.groups
    }

    pub fn get(&self, key: LetterSet) -> Option<&AnagramGroup> {
        self.positions.get(&key).map(|&pos| &self.groups[pos])
    }

    pub fn words(&self, key: LetterSet) -> Option<&[String]> {
        self.get(key).map(|g| g.words.as_slice())
    }

    /// The candidate list: every key exactly once, in the requested order.
    pub fn candidates(&self, order: CandidateOrder) -> Vec<LetterSet> {
        let keys = self.groups.iter().map(|g| g.key);
        match order {
            CandidateOrder::FirstSeen => keys.collect_vec(),
            CandidateOrder::Ascending => keys.sorted().collect_vec(),
            CandidateOrder::RareFirst => {
                let rare = RARE_LETTERS
                    .iter()
                    .fold(LetterSet::EMPTY, |acc, &c| acc | LetterSet::letter(c));
                keys.sorted_by_key(|k| !k.contains_any(rare)).collect_vec()
            }
        }
    }
}
