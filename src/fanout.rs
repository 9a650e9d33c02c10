//! Parallel search: one task per top-level key on a sized worker pool.
//!
//! Tasks report through a single channel read by the calling thread. Each
//! task sends exactly one completion event, and the reader only considers
//! the run done once it has seen one per launched task.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::letters::LetterSet;
use crate::search::{
    branches, search, search_from, Cancel, Combination, SearchConfig, SearchState, SearchStats,
};

#[derive(Debug, Error)]
pub enum FanOutError {
    #[error("could not build the worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("search task for key {key} failed: {message}")]
    TaskFailed { key: LetterSet, message: String },
}

enum Event {
    Found(Combination),
    Finished(SearchStats),
    Failed { key: LetterSet, message: String },
}

/// Runs the search with the first level fanned out over a thread pool.
pub struct FanOut {
    pool: rayon::ThreadPool,
    /// Top-level key whose task panics on start.
    #[cfg(test)]
    fail_on: Option<LetterSet>,
}

impl FanOut {
    /// A pool of `threads` workers; 0 sizes it to the available
    /// parallelism.
    pub fn new(threads: usize) -> Result<Self, FanOutError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("pangram-search-{i}"))
            .build()?;
        Ok(FanOut {
            pool,
            #[cfg(test)]
            fail_on: None,
        })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[cfg(test)]
    fn fails_on(&self, key: LetterSet) -> bool {
        self.fail_on == Some(key)
    }

    #[cfg(not(test))]
    fn fails_on(&self, _key: LetterSet) -> bool {
        false
    }

    /// Searches `candidates` and passes every qualifying combination to
    /// `emit` on the calling thread, in no particular order.
    ///
    /// Returns the same stats a sequential [`search`] over the same input
    /// would. A panicking task cancels the run and is reported as
    /// [`FanOutError::TaskFailed`].
    pub fn run<F>(
        &self,
        candidates: &[LetterSet],
        config: &SearchConfig,
        cancel: &Cancel,
        mut emit: F,
    ) -> Result<SearchStats, FanOutError>
    where
        F: FnMut(Combination),
    {
        if candidates.is_empty() || cancel.is_cancelled() {
            return Ok(search(candidates, config, cancel, emit));
        }

        let root = SearchState::root();
        // The root itself is a node that is not a leaf.
        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut failure = None;
        let (tx, rx) = crossbeam_channel::unbounded();

        let (launched, finished) = self.pool.in_place_scope(|scope| {
            let mut launched = 0;
            for (state, potentials) in branches(config.mode, &root, candidates) {
                let key = state.chosen()[0];
                let fail = self.fails_on(key);
                let tx = tx.clone();
                launched += 1;
                scope.spawn(move |_| {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                        if fail {
                            panic!("injected failure for key {key}");
                        }
                        search_from(&state, &potentials, config, cancel, |c| {
                            let _ = tx.send(Event::Found(c));
                        })
                    }));
                    let event = match outcome {
                        Ok(stats) => Event::Finished(stats),
                        Err(payload) => Event::Failed {
                            key,
                            message: panic_message(payload.as_ref()),
                        },
                    };
                    let _ = tx.send(event);
                });
            }
            drop(tx);
            log::debug!("launched {launched} search tasks on {} threads", self.threads());

            let mut finished = 0;
            for event in rx.iter() {
                match event {
                    Event::Found(combination) => emit(combination),
                    Event::Finished(task_stats) => {
                        finished += 1;
                        stats += task_stats;
                        log::trace!("{finished}/{launched} search tasks done");
                    }
                    Event::Failed { key, message } => {
                        finished += 1;
                        log::error!("search task for key {key} failed: {message}");
                        cancel.cancel();
                        failure.get_or_insert(FanOutError::TaskFailed { key, message });
                    }
                }
            }
            (launched, finished)
        });

        // Every sender is gone, so every task has reported.
        debug_assert_eq!(finished, launched);
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(stats)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
