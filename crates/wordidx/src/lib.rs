//! Case-insensitive word index backing a spell checker.
//!
//! A [`WordIndex`] is a hash table with a fixed number of buckets. It is
//! filled once from a word list, answers membership queries, and can be
//! emptied and refilled.
//!
//! # Architecture
//!
//! - [`hash`] -- djb2 string hash and bucket reduction
//! - [`config`] -- bucket count and word length limit
//! - [`source`] -- streaming whitespace-separated word reader
//! - [`index`] -- bucket storage and the load/check/size/unload lifecycle
//! - [`tokenizer`] -- splits document text into candidate words

pub mod config;
pub mod hash;
pub mod index;
pub mod source;
pub mod tokenizer;

pub use config::{ConfigError, IndexConfig};
pub use index::{LoadSummary, WordIndex};

/// Error type for loading a word list into a [`WordIndex`].
///
/// Whatever the variant, a failed load leaves the index untouched.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The word list could not be opened or read.
    #[error("cannot read word list {origin}: {source}")]
    SourceUnavailable {
        origin: String,
        source: std::io::Error,
    },

    /// Memory for the staging bucket array or a new entry could not be
    /// reserved. `position` is the 1-based word being stored, or 0 when the
    /// bucket array failed.
    #[error("out of memory while loading word list (at word #{position})")]
    AllocationFailure {
        position: usize,
        source: std::collections::TryReserveError,
    },

    /// A token in the word list is longer than the configured limit.
    #[error("word on line {line} is {len} bytes long (limit {max})")]
    OversizedWord { line: usize, len: usize, max: usize },

    /// The index already holds a dictionary.
    #[error("index already holds {words} words; unload it first")]
    AlreadyLoaded { words: usize },
}
