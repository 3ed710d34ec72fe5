//! # miniml
//!
//! miniml is a tree-walking interpreter for a small eager ML subset.
//! It lexes, parses, and evaluates programs with integers, booleans, unit,
//! pairs, first-class functions, and mutually recursive `fun` groups.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{env::Env, evaluator::evaluate, lexer::tokenize, parser::parse,
                         value::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and declaration types for all language constructs.
/// - Attaches source positions to AST nodes for fault reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all faults that can be raised while lexing,
/// parsing, or evaluating code, and the `Fault` sum the boundary surfaces
/// receive. Every fault except an entirely empty input carries the source
/// position it arose at.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and human-readable messages.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments,
/// and value representations to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and faults between phases.
pub mod interpreter;
/// The embedded language test suite.
///
/// Twenty-eight small programs with known results, runnable from the CLI
/// to check an installation end to end.
pub mod suite;

/// Interprets a complete program, writing anything it prints to standard
/// output.
///
/// The source must contain exactly one expression; empty input and
/// leftover tokens after the expression are faults, as is anything the
/// lexer, parser, or evaluator rejects.
///
/// # Errors
/// Returns a [`Fault`](error::Fault) wrapping the parse or runtime error.
///
/// # Examples
/// ```
/// use miniml::interpret;
/// use miniml::interpreter::value::Value;
///
/// let result = interpret("let val x = 5 in x + 1 end").unwrap();
/// assert_eq!(result, Value::Int(6));
///
/// assert!(interpret("1 + true").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, error::Fault> {
    interpret_with(source, &mut std::io::stdout())
}

/// Interprets a complete program, writing anything it prints to `out`.
///
/// This is [`interpret`] with the output channel under the caller's
/// control, so program output can be captured instead of interleaving
/// with the process stdout.
///
/// # Errors
/// Returns a [`Fault`](error::Fault) wrapping the parse or runtime error.
pub fn interpret_with(source: &str, out: &mut dyn Write) -> Result<Value, error::Fault> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(evaluate(&program, &Env::new(), out)?)
}
