use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses an atomic expression.
///
/// Grammar:
/// ```text
/// atom := integer | boolean | string | name
///       | "(" ")"
///       | "(" expression ")"
///       | "(" expression "," expression ")"
///       | "(" expression (";" expression)+ ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an atom.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
/// - Propagates any errors from parenthesized sub-expressions.
pub fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => {
            Ok(Expr::Literal { value:    LiteralValue::Int(*n),
                               position: *position, })
        },
        Some((Token::Bool(b), position)) => {
            Ok(Expr::Literal { value:    LiteralValue::Bool(*b),
                               position: *position, })
        },
        Some((Token::Str(s), position)) => {
            Ok(Expr::Literal { value:    LiteralValue::Str(s.clone()),
                               position: *position, })
        },
        Some((Token::Identifier(name), position)) => {
            Ok(Expr::Variable { name:     name.clone(),
                                position: *position, })
        },
        Some((Token::LParen, position)) => parse_parenthesized(tokens, *position),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Parses the tail of a `(`-form: the unit literal, a grouping, a pair, or
/// a sequence.
///
/// A pair holds exactly two components, so `(a, b, c)` faults on the second
/// comma. Sequences chain left-associatively: `(a; b; c)` is `((a; b); c)`.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Literal { value: LiteralValue::Unit,
                                  position });
    }

    let mut expression = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::Comma, comma_position)) => {
            let comma_position = *comma_position;
            tokens.next();
            let second = parse_expression(tokens)?;
            expression = Expr::PairUp { first:    Box::new(expression),
                                        second:   Box::new(second),
                                        position: comma_position, };
        },
        _ => {
            while let Some((Token::Semicolon, semi_position)) = tokens.peek() {
                let semi_position = *semi_position;
                tokens.next();
                let second = parse_expression(tokens)?;
                expression = Expr::Seq { first:    Box::new(expression),
                                         second:   Box::new(second),
                                         position: semi_position, };
            }
        },
    }

    expect(tokens, &Token::RParen)?;
    Ok(expression)
}
