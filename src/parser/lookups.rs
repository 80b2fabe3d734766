use crate::{ast::ast::Expression, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, lowest to highest. Infix handlers reparse their
/// right operand at their own level, so equal-precedence chains nest left.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, ParseError>;
pub type InfixHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, ParseError>;

/// The binding power a token has in infix position. Tokens that cannot
/// continue an expression sit at `Lowest` and end the climbing loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen | TokenKind::OpenBracket => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// At most one prefix handler per token kind: the tokens that can start an
/// expression.
pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    match kind {
        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::True
        | TokenKind::False => Some(parse_primary_expr),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_expr),
        TokenKind::OpenBracket => Some(parse_array_expr),
        _ => None,
    }
}

/// At most one infix handler per token kind: the tokens that can continue
/// an expression given an already-parsed left-hand side.
pub fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Equals
        | TokenKind::NotEquals => Some(parse_binary_expr),
        TokenKind::OpenParen => Some(parse_call_expr),
        TokenKind::OpenBracket => Some(parse_index_expr),
        _ => None,
    }
}
