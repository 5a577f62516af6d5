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

//! The abstract syntax tree (ast) for a Minc program.
//!
//! Every construct is a uniform [`Node`]: a kind tag, a payload, up to three
//! owned children, and an owned right-sibling link forming the ordered lists
//! of the grammar. The [`Ast`] type wraps the program root and provides the
//! JSON and tree-listing renderings consumed by tooling.

#![forbid(unsafe_code)]

pub mod decl;
pub use self::decl::*;

pub mod expression;
pub use self::expression::*;

pub mod node;
pub use self::node::*;

pub mod param;
pub use self::param::*;

pub mod stmt;
pub use self::stmt::*;

pub mod types;
pub use self::types::*;

use minc_errors::{AstError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The abstract syntax tree of a Minc program.
///
/// The root is always a `Prog` node whose first child anchors the chain of
/// top-level declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ast {
    root: Node,
}

impl Ast {
    /// Wraps a program root.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns a reference to the program root.
    pub fn as_repr(&self) -> &Node {
        &self.root
    }

    /// Consumes the wrapper and returns the program root.
    pub fn into_repr(self) -> Node {
        self.root
    }

    /// Serializes the ast into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_string(&e))?)
    }

    /// Serializes the ast into a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.root)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_value(&e))?)
    }

    /// Renders the indented tree listing, one node per line. Children are
    /// indented one step past their parent and siblings stay level, exactly
    /// as the pre-order walker delivers them.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        self.root.walk(&mut |node, depth| {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(&node.tree_label());
            out.push('\n');
        });
        out
    }
}

impl fmt::Display for Ast {
    /// Renders the whole program as source text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ast() -> Ast {
        // int x;
        let mut decl = Node::decl(DeclKind::IdInt, 1);
        decl.attr = Attr::Name("x".into());
        let mut root = Node::prog(1);
        root.children[0] = Some(Box::new(decl));
        Ast::new(root)
    }

    #[test]
    fn json_round_trip() {
        let ast = sample_ast();
        let json = ast.to_json_string().expect("serialization failed");
        let back: Node = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(&back, ast.as_repr());
    }

    #[test]
    fn tree_listing_indents_children() {
        let ast = sample_ast();
        assert_eq!(ast.tree_string(), "Program\n  int x\n");
    }

    #[test]
    fn display_prints_source_form() {
        let ast = sample_ast();
        assert_eq!(ast.to_string(), "int x;\n");
    }
}
