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

/// The kind of an expression node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpKind {
    /// A binary operator application.
    Op,
    /// A numeric constant.
    Const,
    /// A variable reference, optionally subscripted.
    Id,
    /// An assignment, `var = exp`.
    Assign,
    /// A function call.
    Call,
}

/// A binary operator.
///
/// Precedence is defined in the parser; [`BinaryOperation::precedence`]
/// mirrors it for the printer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Equality relation, i.e. `==`.
    Eq,
    /// In-equality relation, i.e. `!=`.
    Neq,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Le,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Greater-or-equal relation, i.e. `>=`.
    Ge,
    /// Addition, i.e. `+`.
    Add,
    /// Subtraction, i.e. `-`.
    Sub,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Division, i.e. `/`.
    Div,
}

impl BinaryOperation {
    /// Binding strength, higher binds tighter. Relational operators are
    /// non-associative and bind loosest; additive and multiplicative
    /// operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Eq | Self::Neq | Self::Lt | Self::Le | Self::Gt | Self::Ge => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        })
    }
}
