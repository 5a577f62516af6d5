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

use super::*;

/// The relational operators of `simple_exp`. At most one may appear; the
/// relational layer is non-associative.
const RELATIONAL_TOKENS: &[Token] = &[
    Token::Lt,
    Token::LtEq,
    Token::Gt,
    Token::GtEq,
    Token::Eq,
    Token::NotEq,
];

impl<S: LineSource> ParserContext<'_, S> {
    /// Returns an expression node for `exp -> var = exp | simple_exp`.
    ///
    /// The two alternatives share an arbitrarily long prefix (a `var` can
    /// carry a subscript), so the parse is speculative: a `var` is tried
    /// first, and unless `=` follows, the partial tree is dropped, the
    /// lexer is rewound, and the simple-expression alternative is parsed
    /// from scratch.
    pub(crate) fn parse_expression(&mut self) -> Option<Box<Node>> {
        let mark = self.mark();
        let var = self.parse_var();
        if var.is_some() && self.check(&Token::Assign) {
            let mut node = Node::exp(ExpKind::Assign, self.token.line);
            self.bump();
            node.children[0] = var;
            node.children[1] = self.parse_expression();
            Some(Box::new(node))
        } else {
            drop(var);
            self.rewind(mark);
            self.parse_simple_expression()
        }
    }

    /// Returns an `Id` expression node for `var -> ID [ '[' exp ']' ]`, or
    /// [`None`] without consuming anything if the current token is not an
    /// identifier.
    pub(crate) fn parse_var(&mut self) -> Option<Box<Node>> {
        let line = self.token.line;
        let name = self.eat_identifier()?;
        let mut node = Node::exp(ExpKind::Id, line);
        node.attr = Attr::Name(name);
        if self.eat(&Token::LeftSquare) {
            node.children[0] = self.parse_expression();
            self.expect(&Token::RightSquare);
        }
        Some(Box::new(node))
    }

    /// Returns an expression node for `simple_exp -> additive [ relop additive ]`.
    fn parse_simple_expression(&mut self) -> Option<Box<Node>> {
        let mut node = self.parse_additive_expression();
        if let Some(op) = self.eat_bin_op(RELATIONAL_TOKENS) {
            let mut parent = Node::exp(ExpKind::Op, self.prev_token.line);
            parent.attr = Attr::Op(op);
            parent.children[0] = node;
            parent.children[1] = self.parse_additive_expression();
            node = Some(Box::new(parent));
        }
        node
    }

    /// Returns an expression node for `additive -> term { ('+'|'-') term }`,
    /// folded left-to-right.
    fn parse_additive_expression(&mut self) -> Option<Box<Node>> {
        self.parse_bin_expr(&[Token::Add, Token::Minus], Self::parse_term)
    }

    /// Returns an expression node for `term -> factor { ('*'|'/') factor }`,
    /// folded left-to-right.
    fn parse_term(&mut self) -> Option<Box<Node>> {
        self.parse_bin_expr(&[Token::Mul, Token::Div], Self::parse_factor)
    }

    /// Parses a left-associative binary layer: `f { op f }`. A missing
    /// operand leaves the corresponding child slot unset rather than
    /// aborting the fold.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Option<Box<Node>>,
    ) -> Option<Box<Node>> {
        let mut node = f(self);
        while let Some(op) = self.eat_bin_op(tokens) {
            let mut parent = Node::exp(ExpKind::Op, self.prev_token.line);
            parent.attr = Attr::Op(op);
            parent.children[0] = node;
            parent.children[1] = f(self);
            node = Some(Box::new(parent));
        }
        node
    }

    /// Eats one of the binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Option<BinaryOperation> {
        if !tokens.iter().any(|t| self.check(t)) {
            return None;
        }
        self.bump();
        Some(match &self.prev_token.token {
            Token::Eq => BinaryOperation::Eq,
            Token::NotEq => BinaryOperation::Neq,
            Token::Lt => BinaryOperation::Lt,
            Token::LtEq => BinaryOperation::Le,
            Token::Gt => BinaryOperation::Gt,
            Token::GtEq => BinaryOperation::Ge,
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    /// Returns a `Const` expression node if the current token is a numeric
    /// literal. A literal that overflows the integer range is reported and
    /// saturated so the tree keeps its shape.
    pub(crate) fn parse_const(&mut self) -> Option<Box<Node>> {
        let Token::Num(lexeme) = &self.token.token else {
            return None;
        };
        let lexeme = lexeme.clone();
        let line = self.token.line;
        let value = match lexeme.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.emit_err(ParserError::integer_out_of_range(&lexeme, line));
                i32::MAX
            }
        };
        let mut node = Node::exp(ExpKind::Const, line);
        node.attr = Attr::Value(value);
        self.bump();
        Some(Box::new(node))
    }

    /// Returns an expression node for
    /// `factor -> '(' exp ')' | NUM | ID ( '(' args ')' | var-tail )`.
    ///
    /// An identifier needs one more token of context to tell a call from a
    /// variable reference, so the identifier is checkpointed, the next
    /// token is inspected, and the chosen alternative re-reads from the
    /// checkpoint.
    pub(crate) fn parse_factor(&mut self) -> Option<Box<Node>> {
        match &self.token.token {
            Token::Num(_) => self.parse_const(),
            Token::Ident(_) => {
                let mark = self.mark();
                self.bump();
                if self.check(&Token::LeftParen) {
                    self.rewind(mark);
                    self.parse_call()
                } else {
                    self.rewind(mark);
                    self.parse_var()
                }
            }
            Token::LeftParen => {
                self.bump();
                let node = self.parse_expression();
                self.expect(&Token::RightParen);
                node
            }
            _ => {
                self.emit_unexpected();
                self.bump();
                None
            }
        }
    }

    /// Returns a `Call` expression node for `call -> ID '(' args ')'`. The
    /// current token is the callee identifier.
    fn parse_call(&mut self) -> Option<Box<Node>> {
        let line = self.token.line;
        let mut node = Node::exp(ExpKind::Call, line);
        if let Some(name) = self.expect_identifier() {
            node.attr = Attr::Name(name);
        }
        self.expect(&Token::LeftParen);
        node.children[0] = self.parse_args();
        self.expect(&Token::RightParen);
        Some(Box::new(node))
    }

    /// Returns the head of the argument chain for `args -> [ exp { ',' exp } ]`.
    fn parse_args(&mut self) -> Option<Box<Node>> {
        if self.check(&Token::RightParen) {
            return None;
        }
        let mut list = self.parse_expression();
        while !self.check(&Token::RightParen) && !self.at_eof() {
            self.expect(&Token::Comma);
            if let Some(arg) = self.parse_expression() {
                append_sibling(&mut list, arg);
            }
        }
        list
    }
}
