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

impl<S: LineSource> ParserContext<'_, S> {
    /// Returns a statement node, dispatching on the current token. An
    /// expression statement has no node kind of its own; the expression
    /// node itself stands in the statement list.
    pub(crate) fn parse_statement(&mut self) -> Option<Box<Node>> {
        match &self.token.token {
            Token::If => self.parse_selection_statement(),
            Token::While => self.parse_iteration_statement(),
            Token::Return => self.parse_return_statement(),
            Token::LeftCurly => Some(self.parse_compound_statement()),
            Token::Ident(_) | Token::Num(_) | Token::LeftParen | Token::Semicolon => {
                self.parse_expression_statement()
            }
            _ => {
                self.emit_unexpected();
                self.bump();
                None
            }
        }
    }

    /// Returns a `Compound` statement node for
    /// `compound_stmt -> '{' local_decls stmt_list '}'`.
    ///
    /// Local declarations form a strict prefix of the block.
    pub(crate) fn parse_compound_statement(&mut self) -> Box<Node> {
        let line = self.token.line;
        self.expect(&Token::LeftCurly);
        let mut node = Node::stmt(StmtKind::Compound, line);
        node.children[0] = self.parse_local_declarations();
        node.children[1] = self.parse_statement_list();
        self.expect(&Token::RightCurly);
        Box::new(node)
    }

    /// Returns the head of the local declaration chain,
    /// `local_decls -> { var_declaration }` with type `int` or `char`.
    fn parse_local_declarations(&mut self) -> Option<Box<Node>> {
        let mut list = None;
        while matches!(self.token.token, Token::Int | Token::Char) {
            if let Some(decl) = self.parse_var_declaration() {
                append_sibling(&mut list, decl);
            }
        }
        list
    }

    /// Returns the head of the statement chain, `stmt_list -> { statement }`,
    /// ending at the closing brace. ENDFILE also ends the list so a source
    /// missing its brace cannot loop.
    fn parse_statement_list(&mut self) -> Option<Box<Node>> {
        let mut list = None;
        while !self.check(&Token::RightCurly) && !self.at_eof() {
            if let Some(stmt) = self.parse_statement() {
                append_sibling(&mut list, stmt);
            }
        }
        list
    }

    /// Returns an expression statement for `expr_stmt -> ';' | exp ';'`.
    fn parse_expression_statement(&mut self) -> Option<Box<Node>> {
        if self.eat(&Token::Semicolon) {
            return None;
        }
        let node = self.parse_expression();
        self.expect(&Token::Semicolon);
        node
    }

    /// Returns an `If` statement node for
    /// `selection -> 'if' '(' exp ')' statement [ 'else' statement ]`.
    fn parse_selection_statement(&mut self) -> Option<Box<Node>> {
        let mut node = Node::stmt(StmtKind::If, self.token.line);
        self.expect(&Token::If);
        self.expect(&Token::LeftParen);
        node.children[0] = self.parse_expression();
        self.expect(&Token::RightParen);
        node.children[1] = self.parse_statement();
        if self.eat(&Token::Else) {
            node.children[2] = self.parse_statement();
        }
        Some(Box::new(node))
    }

    /// Returns a `While` statement node for
    /// `iteration -> 'while' '(' exp ')' statement`.
    fn parse_iteration_statement(&mut self) -> Option<Box<Node>> {
        let mut node = Node::stmt(StmtKind::While, self.token.line);
        self.expect(&Token::While);
        self.expect(&Token::LeftParen);
        node.children[0] = self.parse_expression();
        self.expect(&Token::RightParen);
        node.children[1] = self.parse_statement();
        Some(Box::new(node))
    }

    /// Returns a `Return` statement node for `return -> 'return' [ exp ] ';'`.
    fn parse_return_statement(&mut self) -> Option<Box<Node>> {
        let mut node = Node::stmt(StmtKind::Return, self.token.line);
        self.expect(&Token::Return);
        if !self.check(&Token::Semicolon) {
            node.children[0] = self.parse_expression();
        }
        self.expect(&Token::Semicolon);
        Some(Box::new(node))
    }
}
