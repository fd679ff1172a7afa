//! Leaf utilities shared by the wordidx crates.
//!
//! - [`case`] -- ASCII case folding and case-insensitive comparison
//! - [`limits`] -- word-length and bucket-count defaults

pub mod case;
pub mod limits;

pub use case::{eq_fold, fold_lower, fold_lower_into};
pub use limits::{DEFAULT_BUCKETS, MAX_WORD_LEN};
