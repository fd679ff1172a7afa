// ASCII case folding and case-insensitive comparison
//
// Only the bytes A-Z are mapped; every other byte (digits, punctuation,
// apostrophes, bytes >= 0x80) passes through untouched. No Unicode
// case mapping is attempted.

/// Returns `true` for the bytes `A`..=`Z`.
#[inline]
pub const fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Lowercase a single byte if it is `A`..=`Z`.
#[inline]
pub const fn lower_byte(b: u8) -> u8 {
    if is_upper(b) { b + (b'a' - b'A') } else { b }
}

/// Return the lowercase form of `word` as a freshly allocated buffer.
///
/// The result has the same length as the input. Every call owns its own
/// buffer, so results from separate calls never alias.
pub fn fold_lower(word: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(word.len());
    fold_lower_into(word, &mut out);
    out
}

/// Write the lowercase form of `word` into `dst`, replacing its contents.
///
/// Lets a lookup loop reuse one allocation across many calls.
pub fn fold_lower_into(word: &[u8], dst: &mut Vec<u8>) {
    dst.clear();
    dst.extend(word.iter().map(|&b| lower_byte(b)));
}

/// Compare two byte strings for equality under ASCII case folding.
#[inline]
pub fn eq_fold(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| lower_byte(x) == lower_byte(y))
}
