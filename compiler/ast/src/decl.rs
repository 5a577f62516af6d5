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

/// The kind of a top-level or local declaration.
///
/// A declaration starts out as a plain `IdInt`/`IdChar` (or `FunVoid` for a
/// `void` type specifier) and is promoted to an array or function kind once
/// the parser has disambiguated the declaration tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclKind {
    /// `int x;`
    IdInt,
    /// `char x;`
    IdChar,
    /// `int x[N];`
    ArrayInt,
    /// `char x[N];`
    ArrayChar,
    /// `int f(..) { .. }`
    FunInt,
    /// `char f(..) { .. }`
    FunChar,
    /// `void f(..) { .. }`
    FunVoid,
}

impl DeclKind {
    /// The type keyword this declaration was introduced with.
    pub fn type_keyword(self) -> &'static str {
        match self {
            Self::IdInt | Self::ArrayInt | Self::FunInt => "int",
            Self::IdChar | Self::ArrayChar | Self::FunChar => "char",
            Self::FunVoid => "void",
        }
    }

    /// Whether this declaration declares a function.
    pub fn is_function(self) -> bool {
        matches!(self, Self::FunInt | Self::FunChar | Self::FunVoid)
    }

    /// Whether this declaration declares an array variable.
    pub fn is_array(self) -> bool {
        matches!(self, Self::ArrayInt | Self::ArrayChar)
    }
}
