// Streaming word-list reader.
//
// A word list is a byte stream of tokens separated by ASCII whitespace
// (space, tab, newline, vertical tab, form feed, carriage return). Tokens
// are yielded one at a time without reading the whole stream up front.

use std::io::{self, BufRead};

/// Error produced while pulling the next word from a stream.
#[derive(Debug, thiserror::Error)]
pub enum WordReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("word on line {line} is {len} bytes long (limit {max})")]
    Oversized { line: usize, len: usize, max: usize },
}

#[inline]
const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Pulls whitespace-separated words out of a buffered reader.
///
/// Tokens longer than `max_len` bytes are consumed in full but never
/// buffered past the limit, then reported as [`WordReadError::Oversized`].
pub struct WordReader<R> {
    inner: R,
    max_len: usize,
    /// 1-based line of the read position.
    line: usize,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self {
            inner,
            max_len,
            line: 1,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next word, or `None` at end of stream.
    pub fn next_word(&mut self) -> Result<Option<Vec<u8>>, WordReadError> {
        let mut word = Vec::new();
        let mut len = 0usize;
        let mut word_line = self.line;

        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut finished = false;
            for &b in buf {
                used += 1;
                if is_separator(b) {
                    if b == b'\n' {
                        self.line += 1;
                    }
                    if len > 0 {
                        finished = true;
                        break;
                    }
                    continue;
                }
                if len == 0 {
                    word_line = self.line;
                }
                len += 1;
                if len <= self.max_len {
                    word.push(b);
                }
            }
            self.inner.consume(used);
            if finished {
                break;
            }
        }

        if len == 0 {
            return Ok(None);
        }
        if len > self.max_len {
            return Err(WordReadError::Oversized {
                line: word_line,
                len,
                max: self.max_len,
            });
        }
        Ok(Some(word))
    }
}

impl<R: BufRead> Iterator for WordReader<R> {
    type Item = Result<Vec<u8>, WordReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn words(input: &str, max_len: usize) -> Vec<String> {
        WordReader::new(Cursor::new(input.as_bytes()), max_len)
            .map(|w| String::from_utf8(w.unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn one_word_per_line() {
        assert_eq!(words("apple\nbanana\ncherry\n", 45), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn mixed_whitespace() {
        assert_eq!(
            words("  Apple\tbanana \r\n\x0BCHERRY\x0C  ", 45),
            ["Apple", "banana", "CHERRY"]
        );
    }

    #[test]
    fn no_trailing_newline() {
        assert_eq!(words("last", 45), ["last"]);
    }

    #[test]
    fn empty_and_blank_streams() {
        assert!(words("", 45).is_empty());
        assert!(words(" \n\n\t", 45).is_empty());
    }

    #[test]
    fn punctuation_stays_in_token() {
        assert_eq!(words("don't x-ray", 45), ["don't", "x-ray"]);
    }

    #[test]
    fn word_at_limit_is_accepted() {
        assert_eq!(words("abcd", 4), ["abcd"]);
    }

    #[test]
    fn oversized_word_reports_line_and_length() {
        let mut reader = WordReader::new(Cursor::new(&b"ok\nfine\ntoolong\n"[..]), 4);
        assert_eq!(reader.next_word().unwrap().unwrap(), b"ok");
        assert_eq!(reader.next_word().unwrap().unwrap(), b"fine");
        match reader.next_word() {
            Err(WordReadError::Oversized { line, len, max }) => {
                assert_eq!((line, len, max), (3, 7, 4));
            }
            other => panic!("expected oversized error, got {other:?}"),
        }
    }

    #[test]
    fn words_span_buffer_boundaries() {
        // A 1-byte buffer forces every token across many fill_buf calls.
        let input = "alpha beta\ngamma";
        let reader = BufReader::with_capacity(1, Cursor::new(input.as_bytes()));
        let got: Vec<Vec<u8>> = WordReader::new(reader, 45).map(Result::unwrap).collect();
        assert_eq!(got, [b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]);
    }

    #[test]
    fn line_counter_tracks_newlines() {
        let mut reader = WordReader::new(Cursor::new(&b"a\n\nb\n"[..]), 45);
        assert_eq!(reader.line(), 1);
        reader.next_word().unwrap();
        assert_eq!(reader.line(), 2);
        reader.next_word().unwrap();
        assert_eq!(reader.line(), 4);
    }

    #[test]
    fn io_errors_propagate() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let mut reader = WordReader::new(BufReader::new(Broken), 45);
        assert!(matches!(reader.next_word(), Err(WordReadError::Io(_))));
    }
}
