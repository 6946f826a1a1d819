//! Parser state and the program entry point.
//!
//! The `Parser` is the token cursor the grammar functions share. It owns the
//! token stream and the current position, and offers the probes the grammar
//! is written against:
//! - `consume` tests for a token kind and steps past it on a match
//! - `expect` does the same but fails the parse on a mismatch
//! - `consume_identifier` and `expect_number` for the two leaf token kinds

use std::rc::Rc;

use log::trace;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// How many expressions may be open at once: the statement itself, then one
/// more per `(` or chained `=`.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Expressions currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end in one,
    /// so the cursor always has a current token.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));

            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the trailing `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Steps past the current token if it is of `kind`.
    pub fn consume(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `ExpectedToken` error at the offending token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance().clone())
        } else {
            Err(self.expected(expected_kind))
        }
    }

    /// Steps past the current token and returns it if it is an identifier.
    pub fn consume_identifier(&mut self) -> Option<Token> {
        if self.current_token_kind() == TokenKind::Identifier {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    /// Expects an integer literal and returns its value.
    pub fn expect_number(&mut self) -> Result<i64, Error> {
        let token = self.expect(TokenKind::Number)?;

        token.value.parse::<i64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
    }

    /// Builds the error for a missing `expected_kind` at the current token.
    pub fn expected(&self, expected_kind: TokenKind) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found: token.value.clone(),
            },
            token.span.start.clone(),
        )
    }

    /// Opens one more nested expression, failing at the current token once
    /// `MAX_NESTING_DEPTH` expressions are already open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Parses a stream of tokens into a program.
///
/// Statements are parsed until `EOF`. The first error aborts the whole parse
/// and no partial program is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);

    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        trace!("{}: parsed statement {}: {}", parser.get_file(), body.len(), stmt);
        body.push(stmt);
    }

    Ok(Program { body })
}
