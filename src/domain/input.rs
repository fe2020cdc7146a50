use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented reader into ASCII-whitespace-delimited tokens,
/// pulling more lines only when the current one is used up. Tokens are raw
/// bytes; decoding is left to the caller.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the reader is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|b| b.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines_and_blank_lines() {
        let mut tokens = TokenReader::new(Cursor::new("1 2\n\n   \n3\r\n"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some(&b"1"[..]));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some(&b"2"[..]));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some(&b"3"[..]));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut tokens = TokenReader::new(Cursor::new("42"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some(&b"42"[..]));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_non_utf8_bytes_are_passed_through() {
        let mut tokens = TokenReader::new(Cursor::new(&b"\xff\xfe 7\n"[..]));
        assert_eq!(tokens.next_token().unwrap(), Some(vec![0xff, 0xfe]));
        assert_eq!(tokens.next_token().unwrap(), Some(b"7".to_vec()));
    }
}
