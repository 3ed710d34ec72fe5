use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, Position},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{core::{EvalResult, evaluate},
                    utils::{as_bool, as_int}},
        value::Value,
    },
};

/// Evaluates a binary operation.
///
/// The connectives short-circuit, so their right operands are received
/// unevaluated; `false andalso loop ()` never runs `loop`. All other
/// operators evaluate both operands, left first.
///
/// # Errors
/// - `ExpectedBool` / `ExpectedInt` on operand type mismatches.
/// - `DivisionByZero` / `ModuloByZero` for a zero right operand of `div`
///   or `mod`.
/// - `Overflow` when a result does not fit an `i64`, including
///   `i64::MIN div -1`.
pub fn evaluate_binary(op: BinaryOperator,
                       left: &Expr,
                       right: &Expr,
                       env: &Env,
                       out: &mut dyn Write,
                       position: Position)
                       -> EvalResult<Value> {
    match op {
        BinaryOperator::Or => {
            if as_bool(evaluate(left, env, out)?, position)? {
                Ok(Value::Bool(true))
            } else {
                Ok(Value::Bool(as_bool(evaluate(right, env, out)?, position)?))
            }
        },
        BinaryOperator::And => {
            if as_bool(evaluate(left, env, out)?, position)? {
                Ok(Value::Bool(as_bool(evaluate(right, env, out)?, position)?))
            } else {
                Ok(Value::Bool(false))
            }
        },
        BinaryOperator::Less => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            Ok(Value::Bool(lhs < rhs))
        },
        BinaryOperator::Equals => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            Ok(Value::Bool(lhs == rhs))
        },
        BinaryOperator::Add => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            checked(lhs.checked_add(rhs), position)
        },
        BinaryOperator::Sub => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            checked(lhs.checked_sub(rhs), position)
        },
        BinaryOperator::Mul => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            checked(lhs.checked_mul(rhs), position)
        },
        BinaryOperator::Div => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            checked(lhs.checked_div(rhs), position)
        },
        BinaryOperator::Mod => {
            let (lhs, rhs) = int_operands(left, right, env, out, position)?;
            if rhs == 0 {
                return Err(RuntimeError::ModuloByZero { position });
            }
            checked(lhs.checked_rem(rhs), position)
        },
    }
}

/// Evaluates both operands and coerces them to integers, left first.
fn int_operands(left: &Expr, right: &Expr, env: &Env, out: &mut dyn Write, position: Position)
                -> EvalResult<(i64, i64)> {
    let lhs = as_int(evaluate(left, env, out)?, position)?;
    let rhs = as_int(evaluate(right, env, out)?, position)?;
    Ok((lhs, rhs))
}

/// Turns a checked arithmetic result into a value, faulting on overflow.
/// The only `None` from `checked_div`/`checked_rem` with a non-zero
/// divisor is `i64::MIN` against `-1`, which is an overflow too.
fn checked(result: Option<i64>, position: Position) -> EvalResult<Value> {
    result.map(Value::Int)
          .ok_or(RuntimeError::Overflow { position })
}
