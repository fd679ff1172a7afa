// djb2 string hash (Dan Bernstein): h = h * 33 + c, seeded with 5381.
//
// Arithmetic is u64 and wraps on overflow; words longer than about a
// dozen bytes overflow, and the wrapped value is the defined result.
// The hash is case-sensitive: callers fold case before hashing.

/// Initial hash value.
pub const SEED: u64 = 5381;

/// Full 64-bit djb2 hash of `word`.
#[inline]
pub fn djb2(word: &[u8]) -> u64 {
    word.iter()
        .fold(SEED, |h, &c| h.wrapping_mul(33).wrapping_add(u64::from(c)))
}

/// Bucket index of `word` in a table of `buckets` buckets.
///
/// `buckets` must be non-zero; [`IndexConfig::validate`](crate::IndexConfig::validate)
/// guarantees this for every constructed index.
#[inline]
pub fn bucket_of(word: &[u8], buckets: usize) -> usize {
    debug_assert!(buckets > 0, "bucket count must be non-zero");
    (djb2(word) % buckets as u64) as usize
}
