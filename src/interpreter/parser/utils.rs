use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`, and returns its
/// position.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token, position)) if token == expected => Ok(*position),
        Some((token, position)) => {
            Err(ParseError::ExpectedToken { expected: expected.to_string(),
                                            found:    token.to_string(),
                                            position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Consumes the next token, which must be an identifier, and returns its
/// name with its position.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_name<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((token, position)) => {
            Err(ParseError::ExpectedName { found:    token.to_string(),
                                           position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Checks whether `token` ends the operand chain of a function application.
///
/// The application level keeps absorbing operands until it peeks one of
/// these: a keyword or punctuator that closes the surrounding form, the
/// end-of-input sentinel, or any infix operator (which a lower-precedence
/// level will pick up).
#[must_use]
pub(in crate::interpreter::parser) const fn is_stopper(token: &Token) -> bool {
    matches!(token,
             Token::Then
             | Token::Else
             | Token::In
             | Token::And
             | Token::End
             | Token::RParen
             | Token::Semicolon
             | Token::Comma
             | Token::Eof
             | Token::Orelse
             | Token::Andalso
             | Token::Less
             | Token::Equals
             | Token::Plus
             | Token::Minus
             | Token::Star
             | Token::Div
             | Token::Mod)
}
