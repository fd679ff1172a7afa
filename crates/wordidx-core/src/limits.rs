// Size limits shared by the loader, the index and the document tokenizer.

/// Maximum number of bytes in a dictionary word.
///
/// 45 is the length of "pneumonoultramicroscopicsilicovolcanoconiosis",
/// the longest entry in the classic large English word list.
pub const MAX_WORD_LEN: usize = 45;

/// Default number of buckets in a word index.
///
/// This is a capacity knob only; the hash covers the whole word.
pub const DEFAULT_BUCKETS: usize = 676;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_english_word_fits() {
        assert_eq!(
            "pneumonoultramicroscopicsilicovolcanoconiosis".len(),
            MAX_WORD_LEN
        );
    }

    #[test]
    fn default_bucket_count_is_nonzero() {
        assert!(DEFAULT_BUCKETS > 0);
    }
}
