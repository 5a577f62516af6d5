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

use crate::tokenizer::{Lexer, LineSource, Position, ScannedToken, Token};

use minc_errors::emitter::Handler;
use minc_errors::ParserError;

use std::mem;

/// Holds the lexer plus the token registers the recursive-descent parser
/// works with. May be converted into an AST by parsing all tokens.
pub struct ParserContext<'a, S: LineSource> {
    /// Handler used to side-channel emit errors from the parser.
    pub(crate) handler: &'a Handler,
    /// The token source.
    lexer: Lexer<S>,
    /// The current token the parser dispatches on.
    pub(crate) token: ScannedToken,
    /// The token before `token`.
    pub(crate) prev_token: ScannedToken,
}

impl<'a, S: LineSource> ParserContext<'a, S> {
    /// Returns a new [`ParserContext`] primed with the first token.
    pub fn new(handler: &'a Handler, lexer: Lexer<S>) -> Self {
        let mut p = Self {
            handler,
            lexer,
            token: ScannedToken::dummy(),
            prev_token: ScannedToken::dummy(),
        };
        p.bump();
        p
    }

    fn scan(&mut self) -> ScannedToken {
        let token = self.lexer.next_token();
        ScannedToken { token, line: self.lexer.token_line() }
    }

    /// Advances the parser cursor by one token. At end of input the cursor
    /// stays on ENDFILE.
    pub fn bump(&mut self) {
        let next = self.scan();
        self.prev_token = mem::replace(&mut self.token, next);
    }

    /// Checks whether the current token is `token`.
    pub fn check(&self, token: &Token) -> bool {
        &self.token.token == token
    }

    /// Whether the current token is ENDFILE.
    pub fn at_eof(&self) -> bool {
        matches!(self.token.token, Token::Eof)
    }

    /// Eats the current token if it is `token`, returning whether it was.
    pub fn eat(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.bump();
            return true;
        }
        false
    }

    /// Eats the expected `token`, or reports at the current token and
    /// discards it. Returns whether the expected token was present.
    pub fn expect(&mut self, token: &Token) -> bool {
        if self.eat(token) {
            return true;
        }
        self.emit_unexpected();
        self.bump();
        false
    }

    /// Eats the current token if it is an identifier and returns its name.
    pub fn eat_identifier(&mut self) -> Option<String> {
        if let Token::Ident(name) = &self.token.token {
            let name = name.clone();
            self.bump();
            return Some(name);
        }
        None
    }

    /// Expects an identifier; on anything else reports and discards the
    /// offending token.
    pub fn expect_identifier(&mut self) -> Option<String> {
        let name = self.eat_identifier();
        if name.is_none() {
            self.emit_unexpected();
            self.bump();
        }
        name
    }

    /// Returns the checkpoint of the current token.
    pub(crate) fn mark(&self) -> Position {
        self.lexer.mark()
    }

    /// Rewinds the token source to `mark` and re-primes the current token,
    /// which is the one `next_token` the checkpoint contract requires after
    /// a restore. The previous-token register is left untouched and is only
    /// meaningful again after the next bump.
    pub(crate) fn rewind(&mut self, mark: Position) {
        self.lexer.restore(mark);
        self.token = self.scan();
    }

    /// Emits the error `err`.
    pub(crate) fn emit_err(&self, err: ParserError) {
        tracing::debug!(line = err.line(), "parse error: {err}");
        self.handler.emit_err(err.into());
    }

    /// Reports the current token as unexpected.
    pub(crate) fn emit_unexpected(&self) {
        if self.at_eof() {
            self.emit_err(ParserError::code_ends_before_file(self.token.line));
        } else {
            self.emit_err(ParserError::unexpected_token(
                self.token.token.describe(),
                self.token.line,
            ));
        }
    }
}
