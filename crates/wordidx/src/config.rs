// Index configuration: bucket count and word length limit.

use wordidx_core::limits::{DEFAULT_BUCKETS, MAX_WORD_LEN};

/// Rejected index configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("bucket count must be at least 1")]
    ZeroBuckets,
    #[error("maximum word length must be at least 1")]
    ZeroMaxWordLen,
    /// The bucket array itself could not be allocated.
    #[error("cannot allocate {buckets} buckets")]
    TooManyBuckets {
        buckets: usize,
        source: std::collections::TryReserveError,
    },
}

/// Construction-time settings of a [`WordIndex`](crate::WordIndex).
///
/// Neither value can change once an index has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Number of hash buckets.
    pub buckets: usize,
    /// Longest word, in bytes, the loader accepts.
    pub max_word_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
            max_word_len: MAX_WORD_LEN,
        }
    }
}

impl IndexConfig {
    #[must_use]
    pub const fn with_buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    #[must_use]
    pub const fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Check that the configuration describes a usable index.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.buckets == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        if self.max_word_len == 0 {
            return Err(ConfigError::ZeroMaxWordLen);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = IndexConfig::default();
        assert_eq!(config.buckets, 676);
        assert_eq!(config.max_word_len, 45);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides() {
        let config = IndexConfig::default()
            .with_buckets(1)
            .with_max_word_len(8);
        assert_eq!(config.buckets, 1);
        assert_eq!(config.max_word_len, 8);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_buckets_rejected() {
        let config = IndexConfig::default().with_buckets(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBuckets));
    }

    #[test]
    fn zero_word_len_rejected() {
        let config = IndexConfig::default().with_max_word_len(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxWordLen));
    }
}
