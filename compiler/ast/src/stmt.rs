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

/// The kind of a statement node.
///
/// Expression statements have no kind of their own: an expression node
/// standing in a statement list is the statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StmtKind {
    /// `if (cond) stmt` with an optional `else stmt`.
    If,
    /// `while (cond) stmt`.
    While,
    /// `return;` or `return exp;`.
    Return,
    /// `{ local declarations, then statements }`.
    Compound,
}
