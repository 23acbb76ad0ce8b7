//! Whitespace-token input scanner
//!
//! Judge input is whitespace-separated tokens with a fixed, non
//! self-describing shape. The scanner reads tokens one at a time from any
//! `BufRead`; exhausted or malformed input surfaces as a typed error the
//! solver propagates instead of guessing at a value.

use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

/// Scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input ended while a token was still expected
    #[error("unexpected end of input")]
    Eof,
    /// A token could not be parsed as the requested type
    #[error("cannot parse token '{token}' as {expected}")]
    Parse { token: String, expected: &'static str },
    /// Underlying read failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Token scanner over a buffered reader.
pub struct Scanner<R> {
    reader: R,
    buf: Vec<String>,
    // buf holds the current line's tokens in reverse, so next() pops
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next raw token.
    pub fn token(&mut self) -> Result<String, ScanError> {
        loop {
            if let Some(tok) = self.buf.pop() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ScanError::Eof);
            }
            self.buf = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }

    /// Next token parsed as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T, ScanError> {
        let tok = self.token()?;
        tok.parse().map_err(|_| ScanError::Parse {
            token: tok,
            expected: std::any::type_name::<T>(),
        })
    }

    /// Read `n` values of type `T`.
    pub fn take<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>, ScanError> {
        (0..n).map(|_| self.next()).collect()
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Scanner over an in-memory string, used by tests and the case runner.
    pub fn from_str(input: &'a str) -> Self {
        Scanner::new(input.as_bytes())
    }
}
