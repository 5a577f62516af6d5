// Copyright (C) 2024-2026 The Minc Team.
// This file is part of the Minc library.

// The Minc library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Minc library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Minc library. If not, see <https://www.gnu.org/licenses/>.

//! Line-addressed byte sources feeding the lexer.
//!
//! The lexer consumes input one line at a time into a fixed ring of two
//! buffers. A [`LineSource`] delivers at most [`LINE_CAP`] bytes per call;
//! a physical line longer than that is delivered in consecutive chunks.

use std::io::BufRead;

/// Size of one lexer line buffer.
pub const LINE_BUF_LEN: usize = 256;

/// The largest number of bytes a [`LineSource`] delivers per call, leaving
/// one slot of headroom in the buffer.
pub const LINE_CAP: usize = LINE_BUF_LEN - 1;

/// A byte source addressed line by line.
pub trait LineSource {
    /// Reads the next line into `buf`, including its trailing newline when
    /// one is present, and returns the number of bytes written. At most
    /// [`LINE_CAP`] bytes are written; an overlong line continues in the
    /// next call. Returns 0 at end of input, and keeps returning 0.
    fn read_line(&mut self, buf: &mut [u8; LINE_BUF_LEN]) -> usize;
}

/// A [`LineSource`] over an in-memory string.
pub struct StrSource<'a> {
    rest: &'a [u8],
}

impl<'a> StrSource<'a> {
    /// Creates a source over the given text.
    pub fn new(source: &'a str) -> Self {
        Self { rest: source.as_bytes() }
    }
}

impl LineSource for StrSource<'_> {
    fn read_line(&mut self, buf: &mut [u8; LINE_BUF_LEN]) -> usize {
        if self.rest.is_empty() {
            return 0;
        }
        let mut len = match self.rest.iter().position(|&b| b == b'\n') {
            Some(newline) => newline + 1,
            None => self.rest.len(),
        };
        len = len.min(LINE_CAP);
        buf[..len].copy_from_slice(&self.rest[..len]);
        self.rest = &self.rest[len..];
        len
    }
}

/// A [`LineSource`] over any buffered reader. A read failure is treated as
/// end of input.
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Creates a source over the given reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, buf: &mut [u8; LINE_BUF_LEN]) -> usize {
        let mut len = 0;
        while len < LINE_CAP {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(_) => break,
            };
            if available.is_empty() {
                break;
            }
            let take = match available.iter().position(|&b| b == b'\n') {
                Some(newline) => (newline + 1).min(LINE_CAP - len),
                None => available.len().min(LINE_CAP - len),
            };
            let hit_newline = available[take - 1] == b'\n';
            buf[len..len + take].copy_from_slice(&available[..take]);
            self.reader.consume(take);
            len += take;
            if hit_newline {
                break;
            }
        }
        len
    }
}

/// Knobs of the front-end pass.
#[derive(Clone, Copy, Debug)]
pub struct ParserOptions {
    /// Echo each loaded source line to the listing sink, prefixed with its
    /// line number.
    pub echo_source: bool,
    /// Write each produced token to the listing sink.
    pub trace_scan: bool,
    /// The longest lexeme kept for a token; longer identifiers and numbers
    /// are still consumed whole but the stored lexeme is truncated.
    pub max_token_len: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { echo_source: false, trace_scan: false, max_token_len: 40 }
    }
}
