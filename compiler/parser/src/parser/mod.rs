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

//! The parser to convert Minc code text into an [`Ast`].
//!
//! A single left-to-right pass with one token of lookahead. The grammar
//! spots that need a second token of context (declaration tails, calls
//! versus subscripts, assignments versus simple expressions) are resolved
//! by checkpointing the lexer and re-reading the tokens.

use crate::tokenizer::*;

use minc_ast::*;
use minc_errors::emitter::Handler;
use minc_errors::{ParserError, Result};

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;

/// Parses a program out of the given token source.
///
/// Recoverable errors are emitted through the handler; the returned tree is
/// whatever could be built. The handler's error flag tells the two apart.
pub fn parse<S: LineSource>(handler: &Handler, lexer: Lexer<S>) -> Result<Ast> {
    let mut context = ParserContext::new(handler, lexer);

    let root = context.parse_program();

    // The program must be followed by exactly one more token, ENDFILE.
    if !context.at_eof() {
        context.emit_err(ParserError::code_ends_before_file(context.token.line));
    }

    Ok(Ast::new(*root))
}
