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

/// The kind of a function parameter.
///
/// `Void` stands for an empty parameter list, `f(void)`. Array parameter
/// kinds result from promoting a scalar parameter when the parser sees the
/// trailing `[]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    /// `int a`
    IdInt,
    /// `char a`
    IdChar,
    /// `int a[]`
    ArrayInt,
    /// `char a[]`
    ArrayChar,
    /// `(void)`
    Void,
}

impl ParamKind {
    /// The type keyword this parameter was introduced with.
    pub fn type_keyword(self) -> &'static str {
        match self {
            Self::IdInt | Self::ArrayInt => "int",
            Self::IdChar | Self::ArrayChar => "char",
            Self::Void => "void",
        }
    }

    /// Whether this parameter is an array parameter.
    pub fn is_array(self) -> bool {
        matches!(self, Self::ArrayInt | Self::ArrayChar)
    }
}
