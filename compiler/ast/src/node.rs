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

use crate::{BinaryOperation, DeclKind, ExpKind, ParamKind, StmtKind, Type};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of child slots in a tree node. Slot meaning is fixed per node
/// kind; a function declaration holds its parameters in slot 0 and its body
/// in slot 1, an `if` statement holds condition, then-branch, and optional
/// else-branch in slots 0 through 2.
pub const MAX_CHILDREN: usize = 3;

/// The category tag of a tree node, together with its category-specific kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// The program root.
    Prog,
    /// A top-level or local declaration.
    Decl(DeclKind),
    /// A function parameter.
    Param(ParamKind),
    /// A statement.
    Stmt(StmtKind),
    /// An expression.
    Exp(ExpKind),
}

/// The payload of a tree node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attr {
    /// No payload.
    #[default]
    None,
    /// The operator of an `Op` expression.
    Op(BinaryOperation),
    /// The value of a `Const` expression.
    Value(i32),
    /// The name of a declaration, parameter, variable, or call. The node
    /// owns the string; it is copied out of the scanner lexeme.
    Name(String),
}

/// A node of the syntax tree.
///
/// Every construct is represented by the same record: a kind tag, a payload,
/// up to [`MAX_CHILDREN`] owned children, and an owned right-sibling link.
/// Sibling links chain the ordered lists of the grammar (declarations,
/// parameters, statements, arguments). Unused child slots stay `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The category and kind of this node.
    pub kind: NodeKind,
    /// The kind-specific payload.
    pub attr: Attr,
    /// Owned subtrees; the slot meaning is determined by `kind`.
    pub children: [Option<Box<Node>>; MAX_CHILDREN],
    /// The next node of the list this node belongs to, if any.
    pub sibling: Option<Box<Node>>,
    /// The source line at which this construct began.
    pub line: u32,
    /// The expression type, always `Void` right after parsing.
    pub expr_type: Type,
}

impl Node {
    fn new(kind: NodeKind, line: u32) -> Self {
        Self {
            kind,
            attr: Attr::None,
            children: [None, None, None],
            sibling: None,
            line,
            expr_type: Type::Void,
        }
    }

    /// Creates a program root node.
    pub fn prog(line: u32) -> Self {
        Self::new(NodeKind::Prog, line)
    }

    /// Creates a declaration node of the given kind.
    pub fn decl(kind: DeclKind, line: u32) -> Self {
        Self::new(NodeKind::Decl(kind), line)
    }

    /// Creates a parameter node of the given kind.
    pub fn param(kind: ParamKind, line: u32) -> Self {
        Self::new(NodeKind::Param(kind), line)
    }

    /// Creates a statement node of the given kind.
    pub fn stmt(kind: StmtKind, line: u32) -> Self {
        Self::new(NodeKind::Stmt(kind), line)
    }

    /// Creates an expression node of the given kind.
    pub fn exp(kind: ExpKind, line: u32) -> Self {
        Self::new(NodeKind::Exp(kind), line)
    }

    /// The name payload, if this node carries one.
    pub fn name(&self) -> Option<&str> {
        match &self.attr {
            Attr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The constant value payload, if this node carries one.
    pub fn value(&self) -> Option<i32> {
        match self.attr {
            Attr::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The operator payload, if this node carries one.
    pub fn op(&self) -> Option<BinaryOperation> {
        match self.attr {
            Attr::Op(op) => Some(op),
            _ => None,
        }
    }

    /// Iterates over this node and its right siblings, in list order.
    pub fn iter_siblings(&self) -> impl Iterator<Item = &Node> {
        let mut next = Some(self);
        std::iter::from_fn(move || {
            let node = next?;
            next = node.sibling.as_deref();
            Some(node)
        })
    }

    /// Walks the tree in pre-order: the node itself, then its children in
    /// slot order one level deeper, then its sibling chain at the same
    /// level. The tree listing printer is built on this walker.
    pub fn walk<'a, F: FnMut(&'a Node, usize)>(&'a self, visit: &mut F) {
        self.walk_from(0, visit);
    }

    fn walk_from<'a, F: FnMut(&'a Node, usize)>(&'a self, depth: usize, visit: &mut F) {
        visit(self, depth);
        for child in self.children.iter().flatten() {
            child.walk_from(depth + 1, visit);
        }
        if let Some(sibling) = &self.sibling {
            sibling.walk_from(depth, visit);
        }
    }

    /// The one-line rendering of this node used by the tree listing.
    pub fn tree_label(&self) -> String {
        let name = self.name().unwrap_or("");
        match self.kind {
            NodeKind::Prog => "Program".to_string(),
            NodeKind::Decl(kind) if kind.is_function() => {
                format!("{} {} ()", kind.type_keyword(), name)
            }
            NodeKind::Decl(kind) if kind.is_array() => {
                format!("{} {} []", kind.type_keyword(), name)
            }
            NodeKind::Decl(kind) => format!("{} {}", kind.type_keyword(), name),
            NodeKind::Param(ParamKind::Void) => "void".to_string(),
            NodeKind::Param(kind) if kind.is_array() => {
                format!("{} {} [] (param)", kind.type_keyword(), name)
            }
            NodeKind::Param(kind) => format!("{} {} (param)", kind.type_keyword(), name),
            NodeKind::Stmt(StmtKind::If) => "If".to_string(),
            NodeKind::Stmt(StmtKind::While) => "While".to_string(),
            NodeKind::Stmt(StmtKind::Return) => "Return".to_string(),
            NodeKind::Stmt(StmtKind::Compound) => "Compound".to_string(),
            NodeKind::Exp(ExpKind::Op) => match self.op() {
                Some(op) => format!("Op: {op}"),
                None => "Op:".to_string(),
            },
            NodeKind::Exp(ExpKind::Const) => {
                format!("Const: {}", self.value().unwrap_or_default())
            }
            NodeKind::Exp(ExpKind::Id) => format!("Id: {name}"),
            NodeKind::Exp(ExpKind::Assign) => "Assign:".to_string(),
            NodeKind::Exp(ExpKind::Call) => format!("call : {name}"),
        }
    }
}

/// Appends `node` at the tail of the sibling chain anchored at `list`.
pub fn append_sibling(list: &mut Option<Box<Node>>, node: Box<Node>) {
    let mut slot = list;
    while let Some(tail) = slot {
        slot = &mut tail.sibling;
    }
    *slot = Some(node);
}

/// Iterates a sibling chain from an optional head.
pub fn chain_iter(head: Option<&Node>) -> impl Iterator<Item = &Node> {
    let mut next = head;
    std::iter::from_fn(move || {
        let node = next?;
        next = node.sibling.as_deref();
        Some(node)
    })
}

/// Indentation of one block level in the source printer.
const BLOCK_INDENT: &str = "    ";

/// Writes one statement of a block body, prefixing every line it spans
/// with one level of indentation. A nested block arrives here as already
/// indented text and gains a further level.
fn write_block_stmt(f: &mut fmt::Formatter<'_>, stmt: &Node) -> fmt::Result {
    let text = StmtDisplay(stmt).to_string();
    for line in text.lines() {
        writeln!(f, "{BLOCK_INDENT}{line}")?;
    }
    Ok(())
}

/// Prints a node standing in statement position; a bare expression used as
/// a statement gets its terminating semicolon here.
struct StmtDisplay<'a>(&'a Node);

impl fmt::Display for StmtDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.kind {
            NodeKind::Exp(_) => write!(f, "{};", self.0),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Prints an operand of a binary operator, parenthesizing it whenever the
/// plain rendering would re-parse with a different shape.
struct OperandDisplay<'a> {
    node: &'a Node,
    parent_precedence: u8,
    right: bool,
}

impl fmt::Display for OperandDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parenthesize = match self.node.kind {
            NodeKind::Exp(ExpKind::Assign) => true,
            NodeKind::Exp(ExpKind::Op) => match self.node.op() {
                Some(op) => {
                    op.precedence() < self.parent_precedence
                        || (op.precedence() == self.parent_precedence && self.right)
                }
                None => false,
            },
            _ => false,
        };
        if parenthesize {
            write!(f, "({})", self.node)
        } else {
            write!(f, "{}", self.node)
        }
    }
}

fn fmt_operand(f: &mut fmt::Formatter<'_>, child: &Option<Box<Node>>, parent: u8, right: bool) -> fmt::Result {
    if let Some(node) = child {
        write!(f, "{}", OperandDisplay { node, parent_precedence: parent, right })?;
    }
    Ok(())
}

impl fmt::Display for Node {
    /// Renders the node as source text. For any tree the parser produced
    /// without errors, the rendering parses back to an equal tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or("");
        match self.kind {
            NodeKind::Prog => {
                for decl in chain_iter(self.children[0].as_deref()) {
                    writeln!(f, "{decl}")?;
                }
                Ok(())
            }
            NodeKind::Decl(kind) if kind.is_function() => {
                write!(f, "{} {name}(", kind.type_keyword())?;
                let mut first = true;
                for param in chain_iter(self.children[0].as_deref()) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{param}")?;
                }
                write!(f, ") ")?;
                match &self.children[1] {
                    Some(body) => write!(f, "{body}"),
                    None => write!(f, "{{ }}"),
                }
            }
            NodeKind::Decl(kind) if kind.is_array() => {
                write!(f, "{} {name}[", kind.type_keyword())?;
                if let Some(size) = &self.children[0] {
                    write!(f, "{size}")?;
                }
                write!(f, "];")
            }
            NodeKind::Decl(kind) => write!(f, "{} {name};", kind.type_keyword()),
            NodeKind::Param(ParamKind::Void) => write!(f, "void"),
            NodeKind::Param(kind) if kind.is_array() => {
                write!(f, "{} {name}[]", kind.type_keyword())
            }
            NodeKind::Param(kind) => write!(f, "{} {name}", kind.type_keyword()),
            NodeKind::Stmt(StmtKind::Compound) => {
                writeln!(f, "{{")?;
                for local in chain_iter(self.children[0].as_deref()) {
                    write_block_stmt(f, local)?;
                }
                for stmt in chain_iter(self.children[1].as_deref()) {
                    write_block_stmt(f, stmt)?;
                }
                write!(f, "}}")
            }
            NodeKind::Stmt(StmtKind::If) => {
                write!(f, "if (")?;
                if let Some(cond) = &self.children[0] {
                    write!(f, "{cond}")?;
                }
                write!(f, ")")?;
                if let Some(then) = &self.children[1] {
                    write!(f, " {}", StmtDisplay(then))?;
                }
                if let Some(otherwise) = &self.children[2] {
                    write!(f, " else {}", StmtDisplay(otherwise))?;
                }
                Ok(())
            }
            NodeKind::Stmt(StmtKind::While) => {
                write!(f, "while (")?;
                if let Some(cond) = &self.children[0] {
                    write!(f, "{cond}")?;
                }
                write!(f, ")")?;
                if let Some(body) = &self.children[1] {
                    write!(f, " {}", StmtDisplay(body))?;
                }
                Ok(())
            }
            NodeKind::Stmt(StmtKind::Return) => match &self.children[0] {
                Some(value) => write!(f, "return {value};"),
                None => write!(f, "return;"),
            },
            NodeKind::Exp(ExpKind::Op) => {
                let precedence = self.op().map(BinaryOperation::precedence).unwrap_or_default();
                fmt_operand(f, &self.children[0], precedence, false)?;
                if let Some(op) = self.op() {
                    write!(f, " {op} ")?;
                }
                fmt_operand(f, &self.children[1], precedence, true)
            }
            NodeKind::Exp(ExpKind::Const) => write!(f, "{}", self.value().unwrap_or_default()),
            NodeKind::Exp(ExpKind::Id) => {
                write!(f, "{name}")?;
                if let Some(index) = &self.children[0] {
                    write!(f, "[{index}]")?;
                }
                Ok(())
            }
            NodeKind::Exp(ExpKind::Assign) => {
                if let Some(place) = &self.children[0] {
                    write!(f, "{place}")?;
                }
                write!(f, " = ")?;
                if let Some(value) = &self.children[1] {
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            NodeKind::Exp(ExpKind::Call) => {
                write!(f, "{name}(")?;
                let mut first = true;
                for arg in chain_iter(self.children[0].as_deref()) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(node: Node) -> Option<Box<Node>> {
        Some(Box::new(node))
    }

    #[test]
    fn constructors_leave_slots_unset() {
        let node = Node::exp(ExpKind::Const, 4);
        assert_eq!(node.kind, NodeKind::Exp(ExpKind::Const));
        assert_eq!(node.attr, Attr::None);
        assert!(node.children.iter().all(Option::is_none));
        assert!(node.sibling.is_none());
        assert_eq!(node.line, 4);
        assert_eq!(node.expr_type, Type::Void);
    }

    #[test]
    fn append_sibling_builds_a_chain() {
        let mut list = None;
        for name in ["a", "b", "c"] {
            let mut node = Node::exp(ExpKind::Id, 1);
            node.attr = Attr::Name(name.to_string());
            append_sibling(&mut list, Box::new(node));
        }

        let names: Vec<_> = list
            .as_deref()
            .map(|head| head.iter_siblings().filter_map(Node::name).collect())
            .unwrap_or_default();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn walk_visits_children_before_siblings() {
        // while (x) y; z;  -- the While subtree comes out before the sibling.
        let mut cond = Node::exp(ExpKind::Id, 1);
        cond.attr = Attr::Name("x".into());
        let mut body = Node::exp(ExpKind::Id, 1);
        body.attr = Attr::Name("y".into());
        let mut sibling = Node::exp(ExpKind::Id, 2);
        sibling.attr = Attr::Name("z".into());

        let mut stmt = Node::stmt(StmtKind::While, 1);
        stmt.children[0] = boxed(cond);
        stmt.children[1] = boxed(body);
        stmt.sibling = boxed(sibling);

        let mut labels = Vec::new();
        stmt.walk(&mut |node, depth| labels.push((node.tree_label(), depth)));
        assert_eq!(labels, vec![
            ("While".to_string(), 0),
            ("Id: x".to_string(), 1),
            ("Id: y".to_string(), 1),
            ("Id: z".to_string(), 0),
        ]);
    }

    #[test]
    fn operator_display_restores_shape_with_parens() {
        // Op(-, Op(-, a, b), c) prints without parens, the left fold is
        // the default reading.
        let mut a = Node::exp(ExpKind::Id, 1);
        a.attr = Attr::Name("a".into());
        let mut b = Node::exp(ExpKind::Id, 1);
        b.attr = Attr::Name("b".into());
        let mut c = Node::exp(ExpKind::Id, 1);
        c.attr = Attr::Name("c".into());

        let mut inner = Node::exp(ExpKind::Op, 1);
        inner.attr = Attr::Op(BinaryOperation::Sub);
        inner.children[0] = boxed(a.clone());
        inner.children[1] = boxed(b.clone());

        let mut left_fold = Node::exp(ExpKind::Op, 1);
        left_fold.attr = Attr::Op(BinaryOperation::Sub);
        left_fold.children[0] = boxed(inner.clone());
        left_fold.children[1] = boxed(c.clone());
        assert_eq!(left_fold.to_string(), "a - b - c");

        // Op(-, a, Op(-, b, c)) needs parens on the right.
        let mut inner_right = Node::exp(ExpKind::Op, 1);
        inner_right.attr = Attr::Op(BinaryOperation::Sub);
        inner_right.children[0] = boxed(b);
        inner_right.children[1] = boxed(c);

        let mut right_fold = Node::exp(ExpKind::Op, 1);
        right_fold.attr = Attr::Op(BinaryOperation::Sub);
        right_fold.children[0] = boxed(a);
        right_fold.children[1] = boxed(inner_right);
        assert_eq!(right_fold.to_string(), "a - (b - c)");
    }

    #[test]
    fn declaration_display() {
        let mut decl = Node::decl(DeclKind::ArrayInt, 1);
        decl.attr = Attr::Name("a".into());
        let mut size = Node::exp(ExpKind::Const, 1);
        size.attr = Attr::Value(10);
        decl.children[0] = boxed(size);
        assert_eq!(decl.to_string(), "int a[10];");
    }
}
