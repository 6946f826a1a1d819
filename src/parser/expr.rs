//! Expression grammar, one function per precedence level.
//!
//! ```text
//! expr       = assign
//! assign     = equality ("=" assign)?
//! equality   = relational ("==" relational | "!=" relational)*
//! relational = add ("<" add | "<=" add | ">" add | ">=" add)*
//! add        = mul ("+" mul | "-" mul)*
//! mul        = unary ("*" unary | "/" unary)*
//! unary      = ("+" | "-")? primary
//! primary    = "(" expr ")" | ident | num
//! ```
//!
//! Each level only calls the next tighter one for its operands, which is
//! what encodes precedence. The `*` levels fold left; `assign` recurses
//! into itself on the right. Every `assign` opens a nesting level on the
//! parser, which bounds the recursion through `(` and chained `=`.

use crate::{
    ast::ast::{BinaryOp, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_assignment_expr(parser)
}

pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_nesting()?;
    let node = parse_nested_assignment(parser);
    parser.leave_nesting();
    node
}

fn parse_nested_assignment(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.get_position();
    let node = parse_equality_expr(parser)?;

    if parser.consume(TokenKind::Assignment) {
        if !node.is_variable() {
            return Err(Error::new(ErrorImpl::InvalidAssignmentTarget, start));
        }

        let value = parse_assignment_expr(parser)?;
        return Ok(Node::binary(BinaryOp::Assign, node, value));
    }

    Ok(node)
}

pub fn parse_equality_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_relational_expr(parser)?;

    loop {
        if parser.consume(TokenKind::Equals) {
            node = Node::binary(BinaryOp::Equal, node, parse_relational_expr(parser)?);
        } else if parser.consume(TokenKind::NotEquals) {
            node = Node::binary(BinaryOp::NotEqual, node, parse_relational_expr(parser)?);
        } else {
            return Ok(node);
        }
    }
}

pub fn parse_relational_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_additive_expr(parser)?;

    loop {
        if parser.consume(TokenKind::Less) {
            node = Node::binary(BinaryOp::Less, node, parse_additive_expr(parser)?);
        } else if parser.consume(TokenKind::LessEquals) {
            node = Node::binary(BinaryOp::LessEqual, node, parse_additive_expr(parser)?);
        } else if parser.consume(TokenKind::Greater) {
            // a > b  =>  b < a
            node = Node::binary(BinaryOp::Less, parse_additive_expr(parser)?, node);
        } else if parser.consume(TokenKind::GreaterEquals) {
            node = Node::binary(BinaryOp::LessEqual, parse_additive_expr(parser)?, node);
        } else {
            return Ok(node);
        }
    }
}

pub fn parse_additive_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_multiplicative_expr(parser)?;

    loop {
        if parser.consume(TokenKind::Plus) {
            node = Node::binary(BinaryOp::Add, node, parse_multiplicative_expr(parser)?);
        } else if parser.consume(TokenKind::Dash) {
            node = Node::binary(BinaryOp::Sub, node, parse_multiplicative_expr(parser)?);
        } else {
            return Ok(node);
        }
    }
}

pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_unary_expr(parser)?;

    loop {
        if parser.consume(TokenKind::Star) {
            node = Node::binary(BinaryOp::Mul, node, parse_unary_expr(parser)?);
        } else if parser.consume(TokenKind::Slash) {
            node = Node::binary(BinaryOp::Div, node, parse_unary_expr(parser)?);
        } else {
            return Ok(node);
        }
    }
}

/// Unary plus is dropped; unary minus becomes `0 - operand`.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume(TokenKind::Plus) {
        return parse_primary_expr(parser);
    }

    if parser.consume(TokenKind::Dash) {
        return Ok(Node::binary(
            BinaryOp::Sub,
            Node::number(0),
            parse_primary_expr(parser)?,
        ));
    }

    parse_primary_expr(parser)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume(TokenKind::OpenParen) {
        let node = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(node);
    }

    if let Some(token) = parser.consume_identifier() {
        return Node::variable(&token.value).ok_or_else(|| {
            Error::new(
                ErrorImpl::InvalidIdentifier {
                    identifier: token.value.clone(),
                },
                token.span.start.clone(),
            )
        });
    }

    Ok(Node::number(parser.expect_number()?))
}
