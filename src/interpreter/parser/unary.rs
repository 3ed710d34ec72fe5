use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{atom::parse_atom, core::ParseResult},
    },
};

/// Parses a prefix operation, or falls through to an atom.
///
/// Each prefix operator binds exactly one atom, so `fst p q` is the
/// application of `fst p` to `q` and `not x = y` negates only `x`. Tighter
/// binding than that requires parentheses, same as in ML.
///
/// Grammar: `prefix := ("not" | "print" | "fst" | "snd") atom | atom`
pub fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (op, position) = match tokens.peek() {
        Some((Token::Not, position)) => (UnaryOperator::Not, *position),
        Some((Token::Print, position)) => (UnaryOperator::Print, *position),
        Some((Token::Fst, position)) => (UnaryOperator::Fst, *position),
        Some((Token::Snd, position)) => (UnaryOperator::Snd, *position),
        _ => return parse_atom(tokens),
    };
    tokens.next();
    let operand = parse_atom(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(operand),
                       position })
}
