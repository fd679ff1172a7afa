// Document tokenizer for spell checking.
//
// A word is a run of ASCII letters and apostrophes that does not start with
// an apostrophe. Runs longer than the word limit, and runs touching a digit,
// are skipped entirely: they cannot be dictionary words. Every other byte
// separates words.

use wordidx_core::limits::MAX_WORD_LEN;

/// A candidate word and its byte offset in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub offset: usize,
    pub word: &'a [u8],
}

#[inline]
const fn is_word_byte(b: u8, in_word: bool) -> bool {
    b.is_ascii_alphabetic() || (b == b'\'' && in_word)
}

/// Iterator over the candidate words of a document.
pub struct Tokenizer<'a> {
    text: &'a [u8],
    pos: usize,
    max_len: usize,
}

impl<'a> Tokenizer<'a> {
    /// Tokenize `text` with the default word limit.
    pub fn new(text: &'a [u8]) -> Self {
        Self::with_max_len(text, MAX_WORD_LEN)
    }

    pub fn with_max_len(text: &'a [u8], max_len: usize) -> Self {
        Self {
            text,
            pos: 0,
            max_len,
        }
    }

    fn skip_while(&mut self, keep: impl Fn(u8) -> bool) {
        while self.pos < self.text.len() && keep(self.text[self.pos]) {
            self.pos += 1;
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let text = self.text;
        let mut start: Option<usize> = None;

        while self.pos < text.len() {
            let i = self.pos;
            let b = text[i];
            self.pos += 1;

            if is_word_byte(b, start.is_some()) {
                let s = *start.get_or_insert(i);
                if self.pos - s > self.max_len {
                    // Too long to be a word; drop the rest of the letters.
                    self.skip_while(|b| b.is_ascii_alphabetic());
                    start = None;
                }
            } else if b.is_ascii_digit() {
                self.skip_while(|b| b.is_ascii_alphanumeric());
                start = None;
            } else if let Some(s) = start {
                return Some(Token {
                    offset: s,
                    word: &text[s..i],
                });
            }
        }

        start.map(|s| Token {
            offset: s,
            word: &text[s..],
        })
    }
}
