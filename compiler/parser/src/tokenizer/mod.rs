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

//! The tokenizer to convert Minc code text into tokens.
//!
//! The central type is the [`Lexer`], a DFA over a two-buffer line source.
//! Beyond `next_token` it offers the [`Lexer::mark`]/[`Lexer::restore`]
//! checkpoint pair the parser uses for its one-line speculative rewinds.

pub mod token;
pub use self::token::*;

pub mod lexer;
pub use self::lexer::*;

pub mod source;
pub use self::source::*;

/// Tokenizes an in-memory source with default options, collecting every
/// token up to (and excluding) ENDFILE.
pub fn tokenize(source: &str) -> Vec<ScannedToken> {
    let mut lexer = Lexer::new(StrSource::new(source), ParserOptions::default());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token == Token::Eof {
            return tokens;
        }
        tokens.push(ScannedToken { token, line: lexer.token_line() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn scans_every_token_kind() {
        let source = "x abc 12345 if else while return int char bool void \
                      + - * / = == != < <= > >= ( ) [ ] { } ; ,";
        let expected = [
            Token::Ident("x".into()),
            Token::Ident("abc".into()),
            Token::Num("12345".into()),
            Token::If,
            Token::Else,
            Token::While,
            Token::Return,
            Token::Int,
            Token::Char,
            Token::Bool,
            Token::Void,
            Token::Add,
            Token::Minus,
            Token::Mul,
            Token::Div,
            Token::Assign,
            Token::Eq,
            Token::NotEq,
            Token::Lt,
            Token::LtEq,
            Token::Gt,
            Token::GtEq,
            Token::LeftParen,
            Token::RightParen,
            Token::LeftSquare,
            Token::RightSquare,
            Token::LeftCurly,
            Token::RightCurly,
            Token::Semicolon,
            Token::Comma,
        ];
        assert_eq!(kinds(source), expected);
    }

    #[test]
    fn adjacent_operators_need_no_spaces() {
        assert_eq!(kinds("a<=b"), [
            Token::Ident("a".into()),
            Token::LtEq,
            Token::Ident("b".into()),
        ]);
        // `=` followed by a non-`=` pushes the lookahead back.
        assert_eq!(kinds("a=b==c"), [
            Token::Ident("a".into()),
            Token::Assign,
            Token::Ident("b".into()),
            Token::Eq,
            Token::Ident("c".into()),
        ]);
    }

    #[test]
    fn identifiers_are_purely_alphabetic() {
        // A digit terminates the identifier and starts a number.
        assert_eq!(kinds("ab1cd"), [
            Token::Ident("ab".into()),
            Token::Num("1".into()),
            Token::Ident("cd".into()),
        ]);
    }

    #[test]
    fn reserved_words_are_promoted() {
        assert_eq!(kinds("iff if"), [Token::Ident("iff".into()), Token::If]);
    }

    #[test]
    fn lone_bang_is_an_error_token() {
        assert_eq!(kinds("! !="), [Token::Error("!".into()), Token::NotEq]);
    }

    #[test]
    fn unknown_character_is_an_error_token() {
        assert_eq!(kinds("a @ b"), [
            Token::Ident("a".into()),
            Token::Error("@".into()),
            Token::Ident("b".into()),
        ]);
    }

    #[test]
    fn comments_are_discarded() {
        assert_eq!(kinds("a /* comment */ b"), [
            Token::Ident("a".into()),
            Token::Ident("b".into()),
        ]);
    }

    #[test]
    fn comments_span_lines() {
        let tokens = tokenize("a /* one\ntwo\nthree */ b");
        assert_eq!(tokens[0], ScannedToken { token: Token::Ident("a".into()), line: 1 });
        assert_eq!(tokens[1], ScannedToken { token: Token::Ident("b".into()), line: 3 });
    }

    #[test]
    fn comments_do_not_nest() {
        // The first `*/` ends the comment.
        assert_eq!(kinds("/* a /* b */ c */"), [
            Token::Ident("c".into()),
            Token::Mul,
            Token::Div,
        ]);
    }

    #[test]
    fn unterminated_comment_is_silent_end_of_file() {
        assert_eq!(kinds("a /* runs off"), [Token::Ident("a".into())]);
    }

    #[test]
    fn slash_without_star_is_division() {
        assert_eq!(kinds("a/b"), [
            Token::Ident("a".into()),
            Token::Div,
            Token::Ident("b".into()),
        ]);
    }

    #[test]
    fn line_numbers_follow_newlines() {
        let tokens = tokenize("a\nb\n\nc");
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 2, 4]);
    }

    #[test]
    fn lexeme_is_truncated_at_max_token_len() {
        let options = ParserOptions { max_token_len: 4, ..ParserOptions::default() };
        let mut lexer = Lexer::new(StrSource::new("abcdefgh rest"), options);
        assert_eq!(lexer.next_token(), Token::Ident("abcd".into()));
        // The whole identifier was consumed, not just the stored prefix.
        assert_eq!(lexer.next_token(), Token::Ident("rest".into()));
    }

    #[test]
    fn lexeme_accessor_reports_last_token() {
        let mut lexer = Lexer::new(StrSource::new("while x"), ParserOptions::default());
        assert_eq!(lexer.next_token(), Token::While);
        assert_eq!(lexer.lexeme(), "while");
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));
        assert_eq!(lexer.lexeme(), "x");
    }

    #[test]
    fn checkpoint_restores_within_a_line() {
        let mut lexer = Lexer::new(StrSource::new("int x ;"), ParserOptions::default());
        let current = lexer.next_token();
        assert_eq!(current, Token::Int);

        let mark = lexer.mark();
        let ahead = lexer.next_token();
        assert_eq!(ahead, Token::Ident("x".into()));

        lexer.restore(mark);
        // The first token after a restore re-primes with the current token.
        assert_eq!(lexer.next_token(), current);
        assert_eq!(lexer.next_token(), ahead);
        assert_eq!(lexer.next_token(), Token::Semicolon);
    }

    #[test]
    fn checkpoint_restores_across_a_line_flip() {
        // The marked token ends one line, the lookahead begins the next, so
        // the restore crosses a buffer flip and the cached line must be
        // re-entered without consuming fresh input.
        let mut lexer = Lexer::new(StrSource::new("int\nx;\nchar y;"), ParserOptions::default());
        let current = lexer.next_token();
        assert_eq!(current, Token::Int);

        let mark = lexer.mark();
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));

        lexer.restore(mark);
        assert_eq!(lexer.next_token(), current);
        assert_eq!(lexer.token_line(), 1);
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));
        assert_eq!(lexer.token_line(), 2);
        assert_eq!(lexer.next_token(), Token::Semicolon);
        // Loading resumes normally after the cached line is re-entered.
        assert_eq!(lexer.next_token(), Token::Char);
        assert_eq!(lexer.token_line(), 3);
        assert_eq!(lexer.next_token(), Token::Ident("y".into()));
        assert_eq!(lexer.next_token(), Token::Semicolon);
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn checkpoint_restores_after_end_of_input() {
        let mut lexer = Lexer::new(StrSource::new("x"), ParserOptions::default());
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));

        let mark = lexer.mark();
        assert_eq!(lexer.next_token(), Token::Eof);

        lexer.restore(mark);
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));
        assert_eq!(lexer.next_token(), Token::Eof);
        assert_eq!(lexer.next_token(), Token::Eof);
    }

    #[test]
    fn checkpoint_skips_a_comment_tail_on_the_marked_line() {
        // The marked token's line starts with the tail of a block comment;
        // the checkpoint must anchor past it, at the token itself.
        let mut lexer = Lexer::new(StrSource::new("/* c\nc */ int x;"), ParserOptions::default());
        assert_eq!(lexer.next_token(), Token::Int);

        let mark = lexer.mark();
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));

        lexer.restore(mark);
        assert_eq!(lexer.next_token(), Token::Int);
        assert_eq!(lexer.next_token(), Token::Ident("x".into()));
    }

    #[test]
    fn source_echo_writes_numbered_lines() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Sink(Arc<Mutex<Vec<u8>>>);
        impl std::io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Sink(Arc::new(Mutex::new(Vec::new())));
        let options = ParserOptions { echo_source: true, trace_scan: true, ..Default::default() };
        let mut lexer = Lexer::new(StrSource::new("int x;\n"), options);
        lexer.set_listing(Box::new(sink.clone()));
        while lexer.next_token() != Token::Eof {}

        let listing = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(listing.contains("   1: int x;"));
        assert!(listing.contains("\t1: reserved word: int"));
        assert!(listing.contains("\t1: ID, name= x"));
        assert!(listing.contains("\t1: ;"));
    }
}
