//! Streaming character input with single-slot pushback.

use std::io::{self, Read};
use std::str;

use crate::tokenizer::ScanError;

/// Per-character UTF-8 decoder over any byte source.
///
/// Decodes exactly one character per read and supports exactly one
/// character of pushback, which is all the scanner ever needs. End of
/// input is reported as `Ok(None)`; I/O faults and invalid UTF-8 are
/// errors.
#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
    pushback: Option<char>,
}

impl<R: Read> CharReader<R> {
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
        }
    }

    /// Reads the next character, draining the pushback slot first.
    pub fn read_char(&mut self) -> Result<Option<char>, ScanError> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let len = sequence_len(first).ok_or(ScanError::InvalidUtf8)?;
        let mut buf = [first, 0, 0, 0];
        for slot in &mut buf[1..len] {
            // End of input mid-sequence is a truncated character.
            *slot = self.read_byte()?.ok_or(ScanError::InvalidUtf8)?;
        }
        match str::from_utf8(&buf[..len]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(ScanError::InvalidUtf8),
        }
    }

    /// Pushes `ch` back so the next `read_char` returns it again.
    ///
    /// Valid immediately after a read; at most one character may be
    /// pending at a time.
    pub fn unread_char(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(ch);
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

/// Expected byte length of a UTF-8 sequence, from its leading byte.
const fn sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
