// WordIndex: fixed-bucket hash table of dictionary words.
//
// Each bucket is a vector of entries in insertion order; lookups walk it
// back to front so the most recently loaded word is examined first. The
// bucket array is allocated once at construction and never resized.
//
// Lifecycle: Empty --load--> Loaded --unload--> Empty. A load is staged
// into a fresh bucket array and only swapped in once the whole source has
// been read, so a failed load never leaves partial state behind.

use std::collections::TryReserveError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info, warn};
use wordidx_core::case::{eq_fold, fold_lower, fold_lower_into};

use crate::LoadError;
use crate::config::{ConfigError, IndexConfig};
use crate::hash::bucket_of;
use crate::source::{WordReadError, WordReader};

/// One stored dictionary word, in the casing it had in the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: Box<[u8]>,
}

impl Entry {
    /// Copy `word` into a new entry, failing instead of aborting if the
    /// allocation cannot be made.
    fn try_new(word: &[u8]) -> Result<Self, TryReserveError> {
        let mut stored = Vec::new();
        stored.try_reserve_exact(word.len())?;
        stored.extend_from_slice(word);
        Ok(Self {
            word: stored.into_boxed_slice(),
        })
    }

    pub fn word(&self) -> &[u8] {
        &self.word
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries inserted (equals [`WordIndex::size`] afterwards).
    pub words: usize,
    /// Entries whose word was already present under some casing.
    ///
    /// Counting costs one scan of the target chain per insert, the same
    /// work as a [`WordIndex::check`] miss: roughly words x average chain
    /// length comparisons per load. Most comparisons stop at the length
    /// check.
    pub duplicates: usize,
}

type Buckets = Box<[Vec<Entry>]>;

/// Allocate `count` empty buckets, failing instead of aborting when the
/// array cannot be reserved.
fn empty_buckets(count: usize) -> Result<Buckets, TryReserveError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(count)?;
    buckets.resize_with(count, Vec::new);
    Ok(buckets.into_boxed_slice())
}

/// Case-insensitive dictionary with a fixed number of buckets.
pub struct WordIndex {
    config: IndexConfig,
    buckets: Buckets,
    count: usize,
    loaded: bool,
}

impl WordIndex {
    /// Create an empty index with the default configuration
    /// (676 buckets, 45-byte words).
    pub fn new() -> Self {
        let config = IndexConfig::default();
        Self::build(config, (0..config.buckets).map(|_| Vec::new()).collect())
    }

    /// Create an empty index with a custom configuration.
    ///
    /// Fails with [`ConfigError::TooManyBuckets`] rather than aborting when
    /// the bucket array cannot be allocated.
    pub fn with_config(config: IndexConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buckets = empty_buckets(config.buckets).map_err(|source| {
            ConfigError::TooManyBuckets {
                buckets: config.buckets,
                source,
            }
        })?;
        Ok(Self::build(config, buckets))
    }

    fn build(config: IndexConfig, buckets: Buckets) -> Self {
        Self {
            config,
            buckets,
            count: 0,
            loaded: false,
        }
    }

    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Whether a load has succeeded since construction or the last unload.
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Load a word list from a file.
    ///
    /// Fails with [`LoadError::SourceUnavailable`] if the file cannot be
    /// opened or read, leaving the index unchanged.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let path = path.as_ref();
        self.ensure_empty()?;
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| {
            warn!(origin = %origin, error = %source, "cannot open word list");
            LoadError::SourceUnavailable {
                origin: origin.clone(),
                source,
            }
        })?;
        self.load_buffered(BufReader::new(file), &origin)
    }

    /// Load a word list from any byte stream.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<LoadSummary, LoadError> {
        self.load_buffered(BufReader::new(reader), "<stream>")
    }

    fn load_buffered<R: BufRead>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> Result<LoadSummary, LoadError> {
        self.ensure_empty()?;
        debug!(origin, buckets = self.config.buckets, "loading word list");

        match self.stage(reader, origin) {
            Ok((buckets, summary)) => {
                self.buckets = buckets;
                self.count = summary.words;
                self.loaded = true;
                info!(
                    origin,
                    words = summary.words,
                    duplicates = summary.duplicates,
                    longest_chain = self.longest_chain(),
                    "word list loaded"
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(origin, error = %e, "word list load failed");
                Err(e)
            }
        }
    }

    fn ensure_empty(&self) -> Result<(), LoadError> {
        if self.loaded {
            return Err(LoadError::AlreadyLoaded { words: self.count });
        }
        Ok(())
    }

    /// Read the whole source into a fresh bucket array.
    fn stage<R: BufRead>(
        &self,
        reader: R,
        origin: &str,
    ) -> Result<(Buckets, LoadSummary), LoadError> {
        let mut buckets = empty_buckets(self.config.buckets)
            .map_err(|source| LoadError::AllocationFailure { position: 0, source })?;
        let mut summary = LoadSummary::default();
        let mut folded = Vec::with_capacity(self.config.max_word_len);
        let mut words = WordReader::new(reader, self.config.max_word_len);

        for word in words.by_ref() {
            let word = word.map_err(|e| match e {
                WordReadError::Io(source) => LoadError::SourceUnavailable {
                    origin: origin.to_string(),
                    source,
                },
                WordReadError::Oversized { line, len, max } => {
                    LoadError::OversizedWord { line, len, max }
                }
            })?;
            fold_lower_into(&word, &mut folded);
            let position = summary.words + 1;
            let chain = &mut buckets[bucket_of(&folded, self.config.buckets)];

            // Same scan as a lookup; see `LoadSummary::duplicates`.
            if chain.iter().any(|entry| eq_fold(entry.word(), &folded)) {
                summary.duplicates += 1;
            }

            chain
                .try_reserve(1)
                .map_err(|source| LoadError::AllocationFailure { position, source })?;
            let entry = Entry::try_new(&word)
                .map_err(|source| LoadError::AllocationFailure { position, source })?;
            chain.push(entry);
            summary.words += 1;
        }

        debug!(origin, lines = words.line(), words = summary.words, "word list staged");
        Ok((buckets, summary))
    }

    /// Release every entry and reset the word count.
    ///
    /// Always succeeds; unloading an empty index is a no-op.
    pub fn unload(&mut self) -> bool {
        let released = self.count;
        for chain in self.buckets.iter_mut() {
            *chain = Vec::new();
        }
        self.count = 0;
        self.loaded = false;
        debug!(released, "word index unloaded");
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Case-insensitive membership test.
    ///
    /// Empty words and words longer than the configured limit are never
    /// members.
    pub fn check(&self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();
        if self.count == 0 || word.is_empty() || word.len() > self.config.max_word_len {
            return false;
        }
        let folded = fold_lower(word);
        self.chain(bucket_of(&folded, self.config.buckets))
            .any(|entry| eq_fold(entry.word(), &folded))
    }

    /// Number of words held.
    pub const fn size(&self) -> usize {
        self.count
    }

    /// Bucket that `word` hashes to, after case folding.
    pub fn bucket_for(&self, word: impl AsRef<[u8]>) -> usize {
        bucket_of(&fold_lower(word.as_ref()), self.config.buckets)
    }

    /// Entries of one bucket in lookup order (most recently loaded first).
    ///
    /// Yields nothing for an out-of-range bucket.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &Entry> {
        self.buckets
            .get(bucket)
            .map(|chain| chain.as_slice())
            .unwrap_or_default()
            .iter()
            .rev()
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordIndex")
            .field("config", &self.config)
            .field("count", &self.count)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
