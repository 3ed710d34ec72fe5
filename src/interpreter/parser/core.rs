use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Declaration, Expr, FunctionDef, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_disjunction,
            utils::{expect, expect_name},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program from a token sequence.
///
/// The sequence must be the output of [`tokenize`], i.e. terminated by an
/// explicit [`Token::Eof`]. A program is a single expression; anything left
/// over after it is a fault, never silently ignored.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
///
/// # Errors
/// Returns a `ParseError` if:
/// - the input holds no tokens at all,
/// - the expression is malformed,
/// - tokens remain after a complete expression.
///
/// # Example
/// ```
/// use miniml::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_ok());
/// ```
pub fn parse(tokens: &[(Token, Position)]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter().peekable();
    if let Some((Token::Eof, _)) | None = tokens.peek() {
        return Err(ParseError::EmptyInput);
    }

    let expression = parse_expression(&mut tokens)?;

    match tokens.peek() {
        Some((Token::Eof, _)) | None => Ok(expression),
        Some((_, position)) => {
            let position = *position;
            let leftover = tokens.map(|(token, _)| token)
                                 .filter(|token| **token != Token::Eof)
                                 .map(ToString::to_string)
                                 .collect();
            Err(ParseError::TrailingTokens { tokens: leftover,
                                             position })
        },
    }
}

/// Parses a full expression.
///
/// The special forms `if`, `let` and `fn` are recognized here; their tail
/// expressions recurse into this function, so each extends as far right as
/// the surrounding brackets allow. Everything else descends into the
/// operator precedence ladder.
///
/// Grammar:
/// ```text
/// expression := "if" expression "then" expression "else" expression
///             | "let" declaration "in" expression "end"
///             | "fn" name "=>" expression
///             | disjunction
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::If, position)) => {
            let position = *position;
            tokens.next();
            parse_if(tokens, position)
        },
        Some((Token::Let, position)) => {
            let position = *position;
            tokens.next();
            parse_let(tokens, position)
        },
        Some((Token::Fn, position)) => {
            let position = *position;
            tokens.next();
            parse_lambda(tokens, position)
        },
        _ => parse_disjunction(tokens),
    }
}

/// Parses an `if` expression. Both branches are mandatory.
///
/// Grammar: `if := "if" expression "then" expression "else" expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `position`: Position of the `if` token.
///
/// # Errors
/// - `ExpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then)?;
    let then_branch = parse_expression(tokens)?;
    expect(tokens, &Token::Else)?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      position })
}

/// Parses a `let` expression and its single declaration.
///
/// Grammar:
/// ```text
/// let         := "let" declaration "in" expression "end"
/// declaration := "val" name "=" expression
///              | "fun" name name "=" expression ("and" name name "=" expression)*
/// ```
///
/// A `fun` group collects every `and`-joined binding in declaration order;
/// the evaluator later closes the whole group over one shared environment.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `let` keyword.
/// - `position`: Position of the `let` token.
///
/// # Errors
/// - `ExpectedToken` if the declaration keyword, `=`, `in` or `end` is
///   missing.
/// - `ExpectedName` if a bound name or parameter is missing.
/// - Propagates any errors from sub-expression parsing.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let decl = match tokens.peek() {
        Some((Token::Val, _)) => {
            tokens.next();
            let (name, name_position) = expect_name(tokens)?;
            expect(tokens, &Token::Equals)?;
            let value = parse_expression(tokens)?;
            Declaration::Val { name,
                               value: Box::new(value),
                               position: name_position }
        },
        _ => {
            expect(tokens, &Token::Fun)?;
            let mut definitions = vec![parse_function_def(tokens)?];
            while let Some((Token::And, _)) = tokens.peek() {
                tokens.next();
                definitions.push(parse_function_def(tokens)?);
            }
            Declaration::Fun(definitions)
        },
    };

    expect(tokens, &Token::In)?;
    let body = parse_expression(tokens)?;
    expect(tokens, &Token::End)?;

    Ok(Expr::Let { decl,
                   body: Box::new(body),
                   position })
}

/// Parses one `name param = body` binding of a `fun` group.
fn parse_function_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, position) = expect_name(tokens)?;
    let (param, _) = expect_name(tokens)?;
    expect(tokens, &Token::Equals)?;
    let body = parse_expression(tokens)?;

    Ok(FunctionDef { name,
                     param,
                     body: Rc::new(body),
                     position })
}

/// Parses a function literal.
///
/// Grammar: `lambda := "fn" name "=>" expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `fn` keyword.
/// - `position`: Position of the `fn` token.
///
/// # Errors
/// - `ExpectedName` if the parameter name is missing.
/// - `ExpectedToken` if `=>` is missing.
/// - Propagates any errors from body parsing.
fn parse_lambda<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (param, _) = expect_name(tokens)?;
    expect(tokens, &Token::FatArrow)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::Lambda { param,
                      body: Rc::new(body),
                      position })
}
