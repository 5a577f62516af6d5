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

//! The Minc front-end: a lexer and a recursive-descent parser turning
//! source text into a [`minc_ast::Ast`].
//!
//! Bytes flow from a [`tokenizer::LineSource`] through the DFA of the
//! [`tokenizer::Lexer`] into a token stream with one token of lookahead;
//! the [`parser`] consumes that stream and builds the tree. Recoverable
//! errors go through the handler so one pass reports as many problems as
//! possible.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::KEYWORD_TOKENS;

pub mod parser;
pub use parser::*;

use crate::tokenizer::{Lexer, ParserOptions, StrSource};

use minc_ast::Ast;
use minc_errors::emitter::Handler;
use minc_errors::Result;


/// Parses an in-memory source with default options.
pub fn parse_source(handler: &Handler, source: &str) -> Result<Ast> {
    parse(handler, Lexer::new(StrSource::new(source), ParserOptions::default()))
}
