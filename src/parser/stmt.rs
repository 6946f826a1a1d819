use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

/// Parses one expression followed by its terminating `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let expr = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(expr)
}
