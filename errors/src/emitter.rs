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

//! The error emitter and handler.
//!
//! The parser side-channels recoverable errors through a [`Handler`] instead
//! of returning them, so a malformed construct does not abort the parse. The
//! handler counts every emission; `had_errors` is the error flag the host
//! reads after the front-end finishes.

use crate::MincError;

use colored::Colorize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A sink for emitted errors.
pub trait Emitter {
    /// Emit one error.
    fn emit_err(&mut self, err: &MincError);
}

/// An emitter that writes formatted errors to standard error.
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: &MincError) {
        eprintln!("{}: {err}", "error".bold().red());
    }
}

/// A shared buffer of emitted errors, for tests and tooling.
#[derive(Clone, Default)]
pub struct ErrorBuffer(Rc<RefCell<Vec<MincError>>>);

impl ErrorBuffer {
    /// Moves the buffered errors out of the buffer.
    pub fn extract_errs(&self) -> Vec<MincError> {
        self.0.borrow_mut().drain(..).collect()
    }

    /// Renders every buffered error on its own line.
    pub fn to_display_string(&self) -> String {
        self.0
            .borrow()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An emitter that appends errors to an [`ErrorBuffer`].
pub struct BufferEmitter(ErrorBuffer);

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: &MincError) {
        self.0 .0.borrow_mut().push(err.clone());
    }
}

/// Counts and forwards errors emitted during a front-end pass.
pub struct Handler {
    /// Number of errors emitted so far.
    count: Cell<usize>,
    /// The emitter receiving the errors.
    emitter: RefCell<Box<dyn Emitter>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Returns a handler that reports to standard error.
    pub fn new() -> Self {
        Self::with_emitter(Box::new(StderrEmitter))
    }

    /// Returns a handler backed by the given emitter.
    pub fn with_emitter(emitter: Box<dyn Emitter>) -> Self {
        Self { count: Cell::new(0), emitter: RefCell::new(emitter) }
    }

    /// Returns a handler that buffers its errors, plus the shared buffer.
    pub fn new_with_buf() -> (Self, ErrorBuffer) {
        let buf = ErrorBuffer::default();
        let handler = Self::with_emitter(Box::new(BufferEmitter(buf.clone())));
        (handler, buf)
    }

    /// Emits the error and raises the error flag.
    pub fn emit_err(&self, err: MincError) {
        self.count.set(self.count.get() + 1);
        self.emitter.borrow_mut().emit_err(&err);
    }

    /// The number of errors emitted so far.
    pub fn err_count(&self) -> usize {
        self.count.get()
    }

    /// Whether any error has been emitted. This is the error flag exported
    /// to the host.
    pub fn had_errors(&self) -> bool {
        self.count.get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;

    #[test]
    fn fresh_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.had_errors());
        assert_eq!(handler.err_count(), 0);
    }

    #[test]
    fn buffered_errors_are_extractable() {
        let (handler, buf) = Handler::new_with_buf();
        handler.emit_err(ParserError::unexpected_token(";", 3).into());
        handler.emit_err(ParserError::code_ends_before_file(7).into());

        assert!(handler.had_errors());
        assert_eq!(handler.err_count(), 2);

        let errs = buf.extract_errs();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].to_string(), "Syntax error at line 3: unexpected token -> ;");
        assert_eq!(errs[1].to_string(), "Syntax error at line 7: Code ends before file");
    }
}
