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

use crate::tokenizer::source::{LineSource, ParserOptions, LINE_BUF_LEN};
use crate::tokenizer::token::Token;

use std::io::{self, Write};

/// Reserved word table, searched linearly.
const RESERVED_WORDS: &[(&str, Token)] = &[
    ("if", Token::If),
    ("else", Token::Else),
    ("return", Token::Return),
    ("void", Token::Void),
    ("int", Token::Int),
    ("char", Token::Char),
    ("bool", Token::Bool),
    ("while", Token::While),
];

fn reserved_lookup(lexeme: &str) -> Option<Token> {
    RESERVED_WORDS
        .iter()
        .find(|(word, _)| *word == lexeme)
        .map(|(_, token)| token.clone())
}

/// States of the scanning DFA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InNum,
    InId,
    InComment,
    AfterSlash,
    AfterStarInComment,
    AfterEq,
    AfterLt,
    AfterGt,
    InBang,
    Done,
}

/// A token-boundary checkpoint of the lexer.
///
/// The checkpoint names the buffer-relative start of the current token plus
/// the buffer it sits in, that buffer's length, and the line counter. It
/// stays valid for a rewind of at most one buffered line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    index: usize,
    active: usize,
    len: usize,
    line: u32,
}

impl Position {
    const fn start() -> Self {
        Self { index: 0, active: 1, len: 0, line: 0 }
    }
}

/// The Minc lexer: a DFA over a ring of two line buffers.
///
/// Input is pulled from a [`LineSource`] one line at a time, alternating
/// between the two buffers so that the previous line stays cached. That
/// cache is what makes [`Lexer::restore`] work across a line boundary: a
/// checkpoint taken near the end of one line can be reinstated after the
/// next line was loaded, and the already-loaded line is re-entered from its
/// start instead of being read from the source again.
///
/// The DFA needs one character of pushback, provided by backing the read
/// cursor up within the current buffer.
pub struct Lexer<S: LineSource> {
    source: S,
    /// The two line buffers.
    bufs: [[u8; LINE_BUF_LEN]; 2],
    /// Filled length of each buffer.
    lens: [usize; 2],
    /// Index of the buffer being read.
    active: usize,
    /// Read cursor within the active buffer.
    pos: usize,
    /// Current line number, 1-based once the first line is loaded.
    line: u32,
    /// When false, the next buffer flip re-enters the cached line instead
    /// of loading a fresh one. One-shot; reset after use.
    reload: bool,
    /// Latched once the source is exhausted.
    at_eof: bool,
    /// Start of the token being produced, refreshed while the DFA idles in
    /// the start state.
    token_mark: Position,
    /// Lexeme of the most recently produced token, truncated to the
    /// configured maximum length.
    lexeme: String,
    options: ParserOptions,
    /// Sink for the source echo and the scan trace.
    listing: Option<Box<dyn io::Write>>,
}

impl<S: LineSource> Lexer<S> {
    /// Creates a lexer over the given source.
    pub fn new(source: S, options: ParserOptions) -> Self {
        Self {
            source,
            bufs: [[0; LINE_BUF_LEN]; 2],
            lens: [0, 0],
            active: 1,
            pos: 0,
            line: 0,
            reload: true,
            at_eof: false,
            token_mark: Position::start(),
            lexeme: String::new(),
            options,
            listing: None,
        }
    }

    /// Attaches the listing sink receiving the source echo and scan trace.
    pub fn set_listing(&mut self, sink: Box<dyn io::Write>) {
        self.listing = Some(sink);
    }

    /// The current line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The line the most recently produced token started on.
    pub fn token_line(&self) -> u32 {
        self.token_mark.line
    }

    /// The lexeme of the most recently produced token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the checkpoint of the current token: restoring it makes the
    /// next [`Lexer::next_token`] produce this token again.
    pub fn mark(&self) -> Position {
        self.token_mark
    }

    /// Rewinds the lexer to a checkpoint taken at most one buffered line
    /// ago. If the rewind crosses a buffer flip, the flipped-to line is
    /// still cached in the other buffer and will be re-entered without
    /// touching the source; afterwards normal loading resumes. The caller
    /// must consume one token to re-prime before relying on lookahead.
    pub fn restore(&mut self, mark: Position) {
        if self.at_eof {
            // Nothing was loaded since the flip that hit end of input, so
            // normal loading may resume; the rescan reaches EOF again.
            self.at_eof = false;
        } else if mark.active != self.active {
            self.reload = false;
        }
        self.active = mark.active;
        self.pos = mark.index;
        self.lens[mark.active] = mark.len;
        self.line = mark.line;
        self.token_mark = mark;
    }

    /// Fetches the next character, loading a line whenever the active
    /// buffer is exhausted. Returns `None` at end of input.
    fn next_char(&mut self) -> Option<u8> {
        if self.at_eof {
            return None;
        }
        if self.pos >= self.lens[self.active] {
            self.line += 1;
            self.active = 1 - self.active;
            if self.reload {
                let n = self.source.read_line(&mut self.bufs[self.active]);
                if n == 0 {
                    self.at_eof = true;
                    return None;
                }
                self.lens[self.active] = n;
                self.echo_line(n);
            } else {
                // Re-enter the line cached by a rewind, then resume
                // normal loading.
                self.reload = true;
            }
            self.pos = 0;
        }
        let c = self.bufs[self.active][self.pos];
        self.pos += 1;
        Some(c)
    }

    /// Backs the read cursor up one character. A no-op at end of input.
    fn push_back(&mut self) {
        if !self.at_eof {
            self.pos -= 1;
        }
    }

    fn echo_line(&mut self, len: usize) {
        if !self.options.echo_source {
            return;
        }
        if let Some(listing) = self.listing.as_mut() {
            let text = String::from_utf8_lossy(&self.bufs[self.active][..len]).into_owned();
            let _ = write!(listing, "{:4}: {}", self.line, text);
        }
    }

    fn trace_token(&mut self, token: &Token) {
        if self.options.trace_scan {
            if let Some(listing) = self.listing.as_mut() {
                let _ = writeln!(listing, "\t{}: {}", self.token_mark.line, token.describe());
            }
        }
        tracing::trace!(line = self.token_mark.line, token = %token, "scanned token");
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Token {
        self.lexeme.clear();
        let mut state = State::Start;
        let mut token = Token::Eof;

        while state != State::Done {
            if state == State::Start {
                self.token_mark = Position {
                    index: self.pos,
                    active: self.active,
                    len: self.lens[self.active],
                    line: self.line,
                };
            }
            let c = self.next_char();
            if state == State::Start && c.is_some() && self.pos == 1 {
                // The read crossed into a fresh buffer; re-anchor the
                // token to its real start.
                self.token_mark = Position {
                    index: 0,
                    active: self.active,
                    len: self.lens[self.active],
                    line: self.line,
                };
            }
            let mut save = true;

            match state {
                State::Start => match c {
                    None => {
                        save = false;
                        state = State::Done;
                        token = Token::Eof;
                    }
                    Some(b) if b.is_ascii_digit() => state = State::InNum,
                    Some(b) if b.is_ascii_alphabetic() => state = State::InId,
                    Some(b'!') => state = State::InBang,
                    Some(b'=') => state = State::AfterEq,
                    Some(b'<') => state = State::AfterLt,
                    Some(b'>') => state = State::AfterGt,
                    Some(b' ') | Some(b'\t') | Some(b'\n') => save = false,
                    Some(b'/') => {
                        save = false;
                        state = State::AfterSlash;
                    }
                    Some(b) => {
                        state = State::Done;
                        token = match b {
                            b'+' => Token::Add,
                            b'-' => Token::Minus,
                            b'*' => Token::Mul,
                            b'(' => Token::LeftParen,
                            b')' => Token::RightParen,
                            b'[' => Token::LeftSquare,
                            b']' => Token::RightSquare,
                            b'{' => Token::LeftCurly,
                            b'}' => Token::RightCurly,
                            b';' => Token::Semicolon,
                            b',' => Token::Comma,
                            _ => Token::Error(String::new()),
                        };
                    }
                },
                State::AfterSlash => match c {
                    Some(b'*') => {
                        save = false;
                        state = State::InComment;
                    }
                    _ => {
                        self.push_back();
                        save = false;
                        self.lexeme.push('/');
                        state = State::Done;
                        token = Token::Div;
                    }
                },
                State::InComment => {
                    save = false;
                    match c {
                        None => {
                            state = State::Done;
                            token = Token::Eof;
                        }
                        Some(b'*') => state = State::AfterStarInComment,
                        Some(_) => {}
                    }
                }
                State::AfterStarInComment => {
                    save = false;
                    match c {
                        None => {
                            state = State::Done;
                            token = Token::Eof;
                        }
                        Some(b'/') => state = State::Start,
                        Some(_) => state = State::InComment,
                    }
                }
                State::AfterEq => match c {
                    Some(b'=') => {
                        state = State::Done;
                        token = Token::Eq;
                    }
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Assign;
                    }
                },
                State::AfterLt => match c {
                    Some(b'=') => {
                        state = State::Done;
                        token = Token::LtEq;
                    }
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Lt;
                    }
                },
                State::AfterGt => match c {
                    Some(b'=') => {
                        state = State::Done;
                        token = Token::GtEq;
                    }
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Gt;
                    }
                },
                State::InBang => match c {
                    Some(b'=') => {
                        state = State::Done;
                        token = Token::NotEq;
                    }
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Error(String::new());
                    }
                },
                State::InNum => match c {
                    Some(b) if b.is_ascii_digit() => {}
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Num(String::new());
                    }
                },
                State::InId => match c {
                    Some(b) if b.is_ascii_alphabetic() => {}
                    _ => {
                        self.push_back();
                        save = false;
                        state = State::Done;
                        token = Token::Ident(String::new());
                    }
                },
                State::Done => unreachable!("the scan loop exits before Done"),
            }

            if save {
                if let Some(b) = c {
                    if self.lexeme.len() < self.options.max_token_len {
                        self.lexeme.push(b as char);
                    }
                }
            }
        }

        let token = match token {
            Token::Ident(_) => {
                reserved_lookup(&self.lexeme).unwrap_or_else(|| Token::Ident(self.lexeme.clone()))
            }
            Token::Num(_) => Token::Num(self.lexeme.clone()),
            Token::Error(_) => Token::Error(self.lexeme.clone()),
            other => other,
        };
        self.trace_token(&token);
        token
    }
}
