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
    /// Returns the program root, `program -> decl_list`.
    pub fn parse_program(&mut self) -> Box<Node> {
        let mut node = Node::prog(self.token.line);
        node.children[0] = self.parse_declaration_list();
        Box::new(node)
    }

    /// Returns the head of the declaration chain, `decl_list -> decl { decl }`.
    fn parse_declaration_list(&mut self) -> Option<Box<Node>> {
        let mut list = self.parse_declaration();
        while matches!(self.token.token, Token::Int | Token::Char | Token::Void) {
            if let Some(decl) = self.parse_declaration() {
                append_sibling(&mut list, decl);
            }
        }
        list
    }

    /// Returns a declaration node for
    /// `decl -> type_spec ID ( var_tail | fun_tail )`.
    ///
    /// With one token of lookahead the two tails are indistinguishable
    /// until after the identifier, so the declaration head is checkpointed,
    /// the type and identifier are read, and the token after them picks the
    /// alternative; the chosen production then re-reads from the
    /// checkpoint.
    fn parse_declaration(&mut self) -> Option<Box<Node>> {
        if !matches!(self.token.token, Token::Int | Token::Char | Token::Void) {
            self.emit_unexpected();
            self.bump();
            return None;
        }

        let mark = self.mark();
        self.bump();
        self.expect_identifier();
        match &self.token.token {
            Token::Semicolon | Token::LeftSquare => {
                self.rewind(mark);
                self.parse_var_declaration()
            }
            Token::LeftParen => {
                self.rewind(mark);
                self.parse_fun_declaration()
            }
            _ => {
                self.emit_unexpected();
                self.bump();
                None
            }
        }
    }

    /// Returns a declaration node for the type specifier of a declaration,
    /// `type_spec -> 'int' | 'char' | 'void'`. A `void` specifier starts
    /// out function-kinded; there is no void variable kind.
    fn parse_decl_type_specifier(&mut self) -> Option<Box<Node>> {
        let kind = match &self.token.token {
            Token::Int => DeclKind::IdInt,
            Token::Char => DeclKind::IdChar,
            Token::Void => DeclKind::FunVoid,
            _ => {
                self.emit_unexpected();
                self.bump();
                return None;
            }
        };
        let node = Node::decl(kind, self.token.line);
        self.bump();
        Some(Box::new(node))
    }

    /// Returns a declaration node for
    /// `var_tail -> ';' | '[' NUM ']' ';'`, starting at the type specifier.
    ///
    /// Seeing `[` promotes the declaration to its array kind; the declared
    /// bound becomes a `Const` child.
    pub(crate) fn parse_var_declaration(&mut self) -> Option<Box<Node>> {
        let mut node = self.parse_decl_type_specifier()?;
        if let Some(name) = self.expect_identifier() {
            node.attr = Attr::Name(name);
        }
        match &self.token.token {
            Token::Semicolon => {
                self.bump();
            }
            Token::LeftSquare => {
                self.bump();
                if let NodeKind::Decl(kind) = &mut node.kind {
                    *kind = match kind {
                        DeclKind::IdInt => DeclKind::ArrayInt,
                        _ => DeclKind::ArrayChar,
                    };
                }
                match self.parse_const() {
                    Some(size) => {
                        node.children[0] = Some(size);
                        self.expect(&Token::RightSquare);
                        self.expect(&Token::Semicolon);
                    }
                    None => {
                        self.emit_unexpected();
                        self.bump();
                    }
                }
            }
            _ => {
                self.expect(&Token::Semicolon);
            }
        }
        Some(node)
    }

    /// Returns a declaration node for
    /// `fun_tail -> '(' params ')' compound_stmt`, starting at the type
    /// specifier. The declaration is promoted to its function kind, the
    /// parameter chain goes into slot 0 and the body into slot 1.
    fn parse_fun_declaration(&mut self) -> Option<Box<Node>> {
        let mut node = self.parse_decl_type_specifier()?;
        if let NodeKind::Decl(kind) = &mut node.kind {
            *kind = match *kind {
                DeclKind::IdInt => DeclKind::FunInt,
                DeclKind::IdChar => DeclKind::FunChar,
                other => other,
            };
        }
        if let Some(name) = self.expect_identifier() {
            node.attr = Attr::Name(name);
        }
        self.expect(&Token::LeftParen);
        node.children[0] = self.parse_params();
        self.expect(&Token::RightParen);
        node.children[1] = Some(self.parse_compound_statement());
        Some(node)
    }

    /// Returns the head of the parameter chain,
    /// `params -> 'void' | param_list`.
    fn parse_params(&mut self) -> Option<Box<Node>> {
        if self.check(&Token::Void) {
            let node = Node::param(ParamKind::Void, self.token.line);
            self.bump();
            return Some(Box::new(node));
        }
        self.parse_param_list()
    }

    /// Returns the head of the parameter chain,
    /// `param_list -> param { ',' param }`.
    fn parse_param_list(&mut self) -> Option<Box<Node>> {
        let mut list = self.parse_param();
        while self.eat(&Token::Comma) {
            if let Some(param) = self.parse_param() {
                append_sibling(&mut list, param);
            }
        }
        list
    }

    /// Returns a parameter node for `param -> type_spec ID [ '[' ']' ]`.
    /// A trailing `[]` promotes the parameter to its array kind.
    fn parse_param(&mut self) -> Option<Box<Node>> {
        let kind = match &self.token.token {
            Token::Int => ParamKind::IdInt,
            Token::Char => ParamKind::IdChar,
            _ => {
                self.emit_unexpected();
                self.bump();
                return None;
            }
        };
        let mut node = Node::param(kind, self.token.line);
        self.bump();
        if let Some(name) = self.expect_identifier() {
            node.attr = Attr::Name(name);
        }
        if self.eat(&Token::LeftSquare) {
            if let NodeKind::Param(kind) = &mut node.kind {
                *kind = match kind {
                    ParamKind::IdInt => ParamKind::ArrayInt,
                    _ => ParamKind::ArrayChar,
                };
            }
            self.expect(&Token::RightSquare);
        }
        Some(Box::new(node))
    }
}
