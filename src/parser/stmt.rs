use crate::{
    ast::{
        ast::{Expression, Statement},
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// A missing identifier or `=` fails the whole statement. A malformed
/// value records its error but keeps the statement with `value: None`.
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    parser.advance();

    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_stmt_value(parser);
    eat_optional_semicolon(parser);

    Ok(Statement::Let(LetStmt {
        name: SymbolExpr {
            value: name_token.value,
        },
        value,
    }))
}

/// The value is optional (`return;` is accepted) and recovers the same
/// way as a `let` value.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    parser.advance();

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => parse_stmt_value(parser),
    };
    eat_optional_semicolon(parser);

    Ok(Statement::Return(ReturnStmt { value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, ParseError> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;
    eat_optional_semicolon(parser);

    Ok(Statement::Expression(ExpressionStmt { expression }))
}

/// A missing `}` is tolerated; the block ends at end of input.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();

    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        match parse_stmt(parser) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize();
            }
        }
    }

    if parser.current_token_kind() == TokenKind::CloseCurly {
        parser.advance();
    }

    Ok(BlockStmt { statements })
}

// The one catch site below statement level: the statement survives a bad
// value, carrying `None`.
fn parse_stmt_value(parser: &mut Parser) -> Option<Expression> {
    match parse_expr(parser, BindingPower::Lowest) {
        Ok(expression) => Some(expression),
        Err(error) => {
            parser.record_error(error);
            parser.skip_to_stmt_boundary();
            None
        }
    }
}

fn eat_optional_semicolon(parser: &mut Parser) {
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}
