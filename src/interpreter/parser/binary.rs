use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Position},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_prefix, utils::is_stopper},
    },
};

/// Parses a short-circuiting disjunction, the lowest-precedence level.
///
/// Grammar: `disjunction := conjunction ("orelse" conjunction)*`
pub fn parse_disjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expression = parse_conjunction(tokens)?;

    while let Some((Token::Orelse, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_conjunction(tokens)?;
        expression = Expr::BinaryOp { left: Box::new(expression),
                                      op: BinaryOperator::Or,
                                      right: Box::new(right),
                                      position };
    }
    Ok(expression)
}

/// Parses a short-circuiting conjunction.
///
/// Grammar: `conjunction := comparison ("andalso" comparison)*`
fn parse_conjunction<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expression = parse_comparison(tokens)?;

    while let Some((Token::Andalso, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let right = parse_comparison(tokens)?;
        expression = Expr::BinaryOp { left: Box::new(expression),
                                      op: BinaryOperator::And,
                                      right: Box::new(right),
                                      position };
    }
    Ok(expression)
}

/// Parses a comparison.
///
/// Comparisons are non-associative: at most one `<` or `=` is accepted at
/// this level, so `a < b < c` leaves the second `<` unconsumed and faults
/// at the program boundary instead of parsing.
///
/// Grammar: `comparison := additive (("<" | "=") additive)?`
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let expression = parse_additive(tokens)?;

    let (op, position) = match tokens.peek() {
        Some((Token::Less, position)) => (BinaryOperator::Less, *position),
        Some((Token::Equals, position)) => (BinaryOperator::Equals, *position),
        _ => return Ok(expression),
    };
    tokens.next();
    let right = parse_additive(tokens)?;

    Ok(Expr::BinaryOp { left: Box::new(expression),
                        op,
                        right: Box::new(right),
                        position })
}

/// Parses an additive chain, left-associative.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expression = parse_multiplicative(tokens)?;

    while let Some((token, position)) = tokens.peek() {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            _ => break,
        };
        let position = *position;
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        expression = Expr::BinaryOp { left: Box::new(expression),
                                      op,
                                      right: Box::new(right),
                                      position };
    }
    Ok(expression)
}

/// Parses a multiplicative chain, left-associative.
///
/// Grammar: `multiplicative := application (("*" | "div" | "mod") application)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expression = parse_application(tokens)?;

    while let Some((token, position)) = tokens.peek() {
        let op = match token {
            Token::Star => BinaryOperator::Mul,
            Token::Div => BinaryOperator::Div,
            Token::Mod => BinaryOperator::Mod,
            _ => break,
        };
        let position = *position;
        tokens.next();
        let right = parse_application(tokens)?;
        expression = Expr::BinaryOp { left: Box::new(expression),
                                      op,
                                      right: Box::new(right),
                                      position };
    }
    Ok(expression)
}

/// Parses a function application chain, left-associative.
///
/// Application is juxtaposition: `f x y` applies `f` to `x`, then the
/// result to `y`. The chain keeps absorbing operands until it peeks a
/// token that cannot start one (an infix operator, a closing keyword or
/// punctuator, or end of input).
///
/// Grammar: `application := prefix prefix*`
fn parse_application<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expression = parse_prefix(tokens)?;

    while let Some((token, position)) = tokens.peek()
          && !is_stopper(token)
    {
        let position = *position;
        let argument = parse_prefix(tokens)?;
        expression = Expr::Apply { function: Box::new(expression),
                                   argument: Box::new(argument),
                                   position };
    }
    Ok(expression)
}
