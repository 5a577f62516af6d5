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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents all valid Minc syntax tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    // Lexical Grammar
    // Literals
    Ident(String),
    Num(String),

    // Symbols
    Assign,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Minus,
    Mul,
    Div,
    LeftParen,
    RightParen,
    LeftSquare,
    RightSquare,
    LeftCurly,
    RightCurly,
    Comma,
    Semicolon,

    // Keywords
    If,
    Else,
    While,
    Return,
    Int,
    Char,
    Bool,
    Void,

    // Meta Tokens
    Eof,
    /// An unrecognized character sequence, kept for error recovery.
    Error(String),
}

/// Represents all valid Minc keyword tokens.
pub const KEYWORD_TOKENS: &[Token] = &[
    Token::If,
    Token::Else,
    Token::While,
    Token::Return,
    Token::Int,
    Token::Char,
    Token::Bool,
    Token::Void,
];

impl Token {
    /// Returns `true` if the `self` token equals a Minc keyword.
    pub fn is_keyword(&self) -> bool {
        KEYWORD_TOKENS.contains(self)
    }

    /// Renders the token the way the scan trace prints it: keywords are
    /// labeled reserved words, identifiers and numbers carry their lexeme,
    /// and symbols print themselves.
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("ID, name= {name}"),
            Token::Num(value) => format!("NUM, val= {value}"),
            Token::Error(lexeme) => format!("ERROR: {lexeme}"),
            Token::Eof => "EOF".to_string(),
            token if token.is_keyword() => format!("reserved word: {token}"),
            token => token.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Ident(s) => write!(f, "{s}"),
            Num(s) => write!(f, "{s}"),

            Assign => write!(f, "="),
            Eq => write!(f, "=="),
            NotEq => write!(f, "!="),
            Lt => write!(f, "<"),
            LtEq => write!(f, "<="),
            Gt => write!(f, ">"),
            GtEq => write!(f, ">="),
            Add => write!(f, "+"),
            Minus => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            LeftParen => write!(f, "("),
            RightParen => write!(f, ")"),
            LeftSquare => write!(f, "["),
            RightSquare => write!(f, "]"),
            LeftCurly => write!(f, "{{"),
            RightCurly => write!(f, "}}"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),

            If => write!(f, "if"),
            Else => write!(f, "else"),
            While => write!(f, "while"),
            Return => write!(f, "return"),
            Int => write!(f, "int"),
            Char => write!(f, "char"),
            Bool => write!(f, "bool"),
            Void => write!(f, "void"),

            Eof => write!(f, "<eof>"),
            Error(s) => write!(f, "{s}"),
        }
    }
}

/// A token together with the source line its first character sits on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedToken {
    pub token: Token,
    pub line: u32,
}

impl ScannedToken {
    /// Returns a dummy token at line zero.
    pub const fn dummy() -> Self {
        Self { token: Token::Eof, line: 0 }
    }
}

impl fmt::Display for ScannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ line {}", self.token, self.line)
    }
}
