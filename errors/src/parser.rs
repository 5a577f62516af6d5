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

use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Errors produced by the scanner and the recursive-descent parser.
///
/// Every variant is annotated with the source line it was detected on.
/// Parser errors are recoverable: they are emitted through the handler,
/// the offending token is discarded, and parsing continues.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum ParserError {
    /// The current token did not fit the construct being parsed.
    #[error("Syntax error at line {line}: unexpected token -> {found}")]
    UnexpectedToken { found: String, line: u32 },

    /// The token stream ended while a construct was still open, or tokens
    /// remained after the program was complete.
    #[error("Syntax error at line {line}: Code ends before file")]
    CodeEndsBeforeFile { line: u32 },

    /// A numeric literal did not fit the integer value range.
    #[error("Syntax error at line {line}: integer literal out of range -> {lexeme}")]
    IntegerOutOfRange { lexeme: String, line: u32 },
}

impl ParserError {
    /// An unexpected token, described the way the token trace prints it.
    pub fn unexpected_token(found: impl Display, line: u32) -> Self {
        Self::UnexpectedToken { found: found.to_string(), line }
    }

    /// Premature end of input, or trailing input after the program.
    pub fn code_ends_before_file(line: u32) -> Self {
        Self::CodeEndsBeforeFile { line }
    }

    /// A NUM lexeme whose value overflows the integer constant range.
    pub fn integer_out_of_range(lexeme: impl Display, line: u32) -> Self {
        Self::IntegerOutOfRange { lexeme: lexeme.to_string(), line }
    }

    /// The line this error was reported at.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::CodeEndsBeforeFile { line }
            | Self::IntegerOutOfRange { line, .. } => *line,
        }
    }
}
