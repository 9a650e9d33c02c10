//! Depth-first branch-and-bound enumeration of letter-disjoint key
//! combinations.
//!
//! Every node owns a [`SearchState`] and the list of keys that may still
//! extend it. A child only sees keys that come after its own key in the
//! parent's list, so each set of keys is reached along exactly one path and
//! never once per permutation.

use std::ops::AddAssign;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::letters::{LetterSet, ALPHABET_LEN};

/// How the search picks its first two keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Every conflict-free combination is explored.
    #[default]
    Exhaustive,
    /// The first key must hold `first`; the first two keys together must
    /// hold `second`.
    ///
    /// This cuts the search space drastically but is not complete:
    /// combinations that do not follow the pattern are never reported.
    ForcedRare { first: u8, second: u8 },
}

impl SearchMode {
    /// Forced mode on `q` then `z`.
    pub const FORCED_QZ: SearchMode = SearchMode::ForcedRare {
        first: b'q',
        second: b'z',
    };

    /// Whether `key` may be chosen as the `depth`-th key on top of `used`.
    fn admits(self, depth: usize, used: LetterSet, key: LetterSet) -> bool {
        match self {
            SearchMode::Exhaustive => true,
            SearchMode::ForcedRare { first, second } => match depth {
                0 => key.contains(first),
                1 => (used | key).contains(second),
                _ => true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum number of distinct letters a combination must cover.
    /// Above 26 nothing is ever reported.
    pub threshold: u32,
    pub mode: SearchMode,
}

impl SearchConfig {
    pub fn new(threshold: u32) -> Self {
        SearchConfig {
            threshold,
            mode: SearchMode::Exhaustive,
        }
    }

    pub fn with_mode(self, mode: SearchMode) -> Self {
        SearchConfig { mode, ..self }
    }
}

/// Shared flag asking every running search to stop.
#[derive(Debug, Clone, Default)]
pub struct Cancel(Arc<AtomicBool>);

impl Cancel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A reported combination: pairwise disjoint keys in the order chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    keys: Vec<LetterSet>,
}

impl Combination {
    pub fn keys(&self) -> &[LetterSet] {
        &self.keys
    }

    pub fn letters(&self) -> LetterSet {
        self.keys.iter().fold(LetterSet::EMPTY, |acc, &k| acc | k)
    }

    /// Distinct letters covered.
    pub fn letter_count(&self) -> u32 {
        self.letters().len()
    }

    /// Keys sorted by bit value, for comparing combinations as sets.
    pub fn sorted_keys(&self) -> Vec<LetterSet> {
        let mut keys = self.keys.clone();
        keys.sort();
        keys
    }
}

/// Counters for one run. Identical between sequential and parallel runs
/// over the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub emitted: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: SearchStats) {
        self.nodes += rhs.nodes;
        self.leaves += rhs.leaves;
        self.emitted += rhs.emitted;
    }
}

/// Letters used so far and the keys that cover them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    used: LetterSet,
    chosen: Vec<LetterSet>,
}

impl SearchState {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn used(&self) -> LetterSet {
        self.used
    }

    pub fn chosen(&self) -> &[LetterSet] {
        &self.chosen
    }

    /// A new state with `key` appended. Panics if `key` overlaps the
    /// letters already used.
    pub fn with(&self, key: LetterSet) -> SearchState {
        assert!(
            self.used.is_disjoint(key),
            "key {key} overlaps used letters {}",
            self.used
        );
        let mut chosen = Vec::with_capacity(self.chosen.len() + 1);
        chosen.extend_from_slice(&self.chosen);
        chosen.push(key);
        SearchState {
            used: self.used | key,
            chosen,
        }
    }
}

/// Whether `key` can join `used` without repeating a letter.
fn fits(used: LetterSet, key: LetterSet) -> bool {
    key.len() + used.len() <= ALPHABET_LEN && key.is_disjoint(used)
}

/// Children of `state`: for each admitted key at position `i`, the child
/// state and the keys after `i` that still fit it.
pub(crate) fn branches<'a>(
    mode: SearchMode,
    state: &'a SearchState,
    potentials: &'a [LetterSet],
) -> impl Iterator<Item = (SearchState, Vec<LetterSet>)> + 'a {
    let depth = state.chosen.len();
    potentials
        .iter()
        .enumerate()
        .filter(move |&(_, &key)| fits(state.used, key))
        .filter(move |&(_, &key)| mode.admits(depth, state.used, key))
        .map(move |(i, &key)| {
            let child = state.with(key);
            let rest = potentials[i + 1..]
                .iter()
                .copied()
                .filter(|&k| fits(child.used, k))
                .collect::<Vec<_>>();
            (child, rest)
        })
}

struct Searcher<'a, F> {
    config: SearchConfig,
    cancel: &'a Cancel,
    emit: F,
    stats: SearchStats,
}

impl<F: FnMut(Combination)> Searcher<'_, F> {
    fn node(&mut self, state: &SearchState, potentials: &[LetterSet]) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.stats.nodes += 1;

        if state.used.is_full() || potentials.is_empty() {
            self.stats.leaves += 1;
            let count = state.used.len();
            debug_assert_eq!(
                count,
                state.chosen.iter().map(|k| k.len()).sum::<u32>(),
                "chosen keys are not disjoint"
            );
            if count >= self.config.threshold {
                self.stats.emitted += 1;
                (self.emit)(Combination {
                    keys: state.chosen.clone(),
                });
            }
            return;
        }

        for (child, rest) in branches(self.config.mode, state, potentials) {
            self.node(&child, &rest);
        }
    }
}

/// Searches every extension of `state` using keys from `potentials`,
/// passing each qualifying combination to `emit` in depth-first order.
pub fn search_from<F>(
    state: &SearchState,
    potentials: &[LetterSet],
    config: &SearchConfig,
    cancel: &Cancel,
    emit: F,
) -> SearchStats
where
    F: FnMut(Combination),
{
    let mut searcher = Searcher {
        config: *config,
        cancel,
        emit,
        stats: SearchStats::default(),
    };
    searcher.node(state, potentials);
    searcher.stats
}

/// Runs the whole search over `candidates` on the current thread.
pub fn search<F>(
    candidates: &[LetterSet],
    config: &SearchConfig,
    cancel: &Cancel,
    emit: F,
) -> SearchStats
where
    F: FnMut(Combination),
{
    search_from(&SearchState::root(), candidates, config, cancel, emit)
}
