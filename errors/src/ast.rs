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

/// Errors produced while converting the AST to external representations.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum AstError {
    #[error("failed to convert ast to a json string {0}")]
    FailedToConvertAstToJsonString(String),

    #[error("failed to convert ast to a json value {0}")]
    FailedToConvertAstToJsonValue(String),
}

impl AstError {
    pub fn failed_to_convert_ast_to_json_string(error: impl Display) -> Self {
        Self::FailedToConvertAstToJsonString(error.to_string())
    }

    pub fn failed_to_convert_ast_to_json_value(error: impl Display) -> Self {
        Self::FailedToConvertAstToJsonValue(error.to_string())
    }
}
