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

//! Error types for the Minc compiler front-end.
//!
//! The front-end never aborts on a malformed program. Recoverable errors are
//! reported through the [`emitter::Handler`] side channel so that parsing can
//! continue and surface as many problems as possible in one pass. The handler
//! also carries the error flag that hosts consult after parsing.

#![forbid(unsafe_code)]

pub mod ast;
pub use self::ast::*;

pub mod parser;
pub use self::parser::*;

pub mod emitter;

use serde::Serialize;
use thiserror::Error;

/// The umbrella error type for the Minc front-end.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum MincError {
    /// An error produced while building or serializing the AST.
    #[error("{0}")]
    Ast(#[from] AstError),

    /// An error produced while scanning or parsing source text.
    #[error("{0}")]
    Parser(#[from] ParserError),
}

/// A convenience alias for results carrying a [`MincError`].
pub type Result<T> = std::result::Result<T, MincError>;
