//! Finds sets of words that share no letter and together cover at least a
//! given number of distinct letters.
//!
//! Words with a repeated letter are dropped, the rest are grouped by letter
//! set, and the distinct sets are searched depth-first, optionally with the
//! first level spread over a thread pool.

pub mod anagram;
pub mod fanout;
pub mod letters;
pub mod log;
pub mod normalize;
pub mod report;
pub mod search;
pub mod word_list;

pub use anagram::{AnagramGroup, AnagramIndex, CandidateOrder};
pub use fanout::{FanOut, FanOutError};
pub use letters::LetterSet;
pub use normalize::normalize;
pub use report::Report;
pub use search::{search, Cancel, Combination, SearchConfig, SearchMode, SearchStats};
pub use word_list::{WordList, WordListError};
