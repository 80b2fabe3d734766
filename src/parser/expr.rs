use crate::{
    ast::{
        ast::Expression,
        expressions::{
            ArrayExpr, BinaryExpr, BoolExpr, CallExpr, FnExpr, IfExpr, IndexExpr, NumberExpr,
            PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, infix_handler, prefix_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, ParseError> {
    // First parse the prefix handler for the current token
    let token_kind = parser.current_token_kind();
    let prefix = match prefix_handler(token_kind) {
        Some(handler) => handler,
        None => return Err(ParseError::NoPrefixParseFn(token_kind)),
    };

    let mut left = prefix(parser)?;

    // While the upcoming token binds tighter than bp, fold its infix
    // handler onto the left-hand side
    while binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let infix = match infix_handler(token_kind) {
            Some(handler) => handler,
            None => break,
        };

        left = infix(parser, left, binding_power(token_kind))?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse();

            match result {
                Ok(value) => {
                    parser.advance();
                    Ok(Expression::Number(NumberExpr { value }))
                }
                Err(_) => Err(ParseError::InvalidInteger {
                    literal: parser.current_token().value.clone(),
                }),
            }
        }
        TokenKind::Identifier => Ok(Expression::Symbol(SymbolExpr {
            value: parser.advance().value,
        })),
        TokenKind::String => Ok(Expression::String(StringExpr {
            value: parser.advance().value,
        })),
        TokenKind::True | TokenKind::False => {
            let value = parser.advance().kind == TokenKind::True;
            Ok(Expression::Bool(BoolExpr { value }))
        }
        kind => Err(ParseError::NoPrefixParseFn(kind)),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpr {
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, ParseError> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Binary(BinaryExpr {
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

// Grouping contributes no node of its own.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();

    while parser.current_token_kind() != TokenKind::CloseParen
        && parser.current_token_kind() != TokenKind::EOF
    {
        let parameter = parser.expect(TokenKind::Identifier)?;
        parameters.push(SymbolExpr {
            value: parameter.value,
        });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseParen {
            return Err(ParseError::UnexpectedToken {
                expected: TokenKind::Comma,
                got: parser.current_token_kind(),
            });
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(Expression::Fn(FnExpr { parameters, body }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();

    let elements = parse_expression_list(parser, TokenKind::CloseBracket)?;

    Ok(Expression::Array(ArrayExpr { elements }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, ParseError> {
    parser.advance();

    let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;

    Ok(Expression::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, ParseError> {
    parser.advance();

    let index = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expression::Index(IndexExpr {
        left: Box::new(left),
        index: Box::new(index),
    }))
}

// Comma-separated expressions up to the closing delimiter; shared by call
// arguments and array elements. Each item must be followed by a comma or
// the delimiter.
fn parse_expression_list(
    parser: &mut Parser,
    end: TokenKind,
) -> Result<Vec<Expression>, ParseError> {
    let mut items = Vec::new();

    while parser.current_token_kind() != end && parser.current_token_kind() != TokenKind::EOF {
        items.push(parse_expr(parser, BindingPower::Lowest)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != end {
            return Err(ParseError::UnexpectedToken {
                expected: TokenKind::Comma,
                got: parser.current_token_kind(),
            });
        }
    }

    parser.expect(end)?;

    Ok(items)
}
