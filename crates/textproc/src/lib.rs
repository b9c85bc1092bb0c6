//! Word-frequency counting.
//!
//! Reads a document once, tallies whitespace-delimited tokens and reports the
//! K most frequent ones. Errors are returned to the caller; only the `topwords`
//! binary turns them into a process exit.

pub mod cli;
pub mod count;
pub mod error;

pub use count::{WordCount, count_words, rank, top_words, top_words_from_reader};
pub use error::{TextprocError, TextprocResult};
