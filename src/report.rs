use itertools::Itertools;

use crate::anagram::AnagramIndex;
use crate::search::Combination;

/// Turns found combinations back into words.
pub struct Report<'a> {
    index: &'a AnagramIndex,
}

impl<'a> Report<'a> {
    pub fn new(index: &'a AnagramIndex) -> Self {
        Report { index }
    }

    /// The word group of every key, in the order the keys were chosen.
    ///
    /// Panics if a key is not in the index: combinations only ever hold
    /// keys taken from it.
    pub fn groups(&self, combination: &Combination) -> Vec<&'a [String]> {
        combination
            .keys()
            .iter()
            .map(|&key| {
                self.index
                    .words(key)
                    .unwrap_or_else(|| panic!("key {key} is missing from the anagram index"))
            })
            .collect_vec()
    }

    /// `<letters> [w1 w2] [w3] ...`
    pub fn line(&self, combination: &Combination) -> String {
        let mut line = combination.letter_count().to_string();
        for group in self.groups(combination) {
            line.push_str(&format!(" [{}]", group.iter().join(" ")));
        }
        line
    }

    /// Every concrete word tuple of the combination, words sorted within a
    /// tuple and tuples sorted.
    pub fn expand(&self, combination: &Combination) -> Vec<Vec<&'a str>> {
        let groups = self.groups(combination);
        if groups.is_empty() {
            return vec![Vec::new()];
        }
        groups
            .into_iter()
            .map(|group| group.iter().map(String::as_str))
            .multi_cartesian_product()
            .map(|sol| sol.into_iter().sorted().collect_vec())
            .sorted()
            .collect_vec()
    }

    /// One `<letters> w1 w2 ...` line per concrete word tuple.
    pub fn expanded_lines(&self, combination: &Combination) -> Vec<String> {
        let count = combination.letter_count();
        self.expand(combination)
            .into_iter()
            .map(|words| {
                std::iter::once(count.to_string())
                    .chain(words.into_iter().map(str::to_string))
                    .join(" ")
            })
            .collect_vec()
    }
}
