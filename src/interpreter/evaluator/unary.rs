use std::io::Write;

use crate::{
    ast::{Expr, Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{core::{EvalResult, evaluate},
                    utils::{as_bool, as_pair}},
        value::Value,
    },
};

/// Evaluates a prefix operation.
///
/// `print` writes the operand's default rendering to `out` with no
/// trailing newline and returns unit, so interleaving with other output is
/// exactly source order.
///
/// # Errors
/// - `ExpectedBool` if `not` is applied to a non-boolean.
/// - `ExpectedPair` if `fst` or `snd` is applied to a non-pair.
/// - `PrintFailed` if the write to `out` fails.
pub fn evaluate_unary(op: UnaryOperator,
                      expr: &Expr,
                      env: &Env,
                      out: &mut dyn Write,
                      position: Position)
                      -> EvalResult<Value> {
    let value = evaluate(expr, env, out)?;
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!as_bool(value, position)?)),
        UnaryOperator::Print => {
            write!(out, "{value}").and_then(|()| out.flush())
                                  .map_err(|e| RuntimeError::PrintFailed { message:  e.to_string(),
                                                                           position })?;
            Ok(Value::Unit)
        },
        UnaryOperator::Fst => Ok(as_pair(value, position)?.0),
        UnaryOperator::Snd => Ok(as_pair(value, position)?.1),
    }
}
