use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{binary::evaluate_binary, binding::evaluate_let, unary::evaluate_unary,
                    utils::{as_bool, as_closure}},
        value::{Closure, Value},
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression in the given environment.
///
/// This is the single dispatch point of the evaluator. Evaluation is eager
/// and deterministic: sub-expressions evaluate left to right, and every
/// fault aborts the whole evaluation rather than producing a sentinel
/// value. Everything `print` emits goes to `out`, so callers can capture
/// program output instead of sharing the process stdout.
///
/// # Parameters
/// - `expr`: The expression to evaluate.
/// - `env`: The environment resolving free variables of `expr`.
/// - `out`: The sink `print` writes to.
///
/// # Returns
/// The resulting [`Value`].
///
/// # Errors
/// Returns a [`RuntimeError`] for unbound variables, operand type
/// mismatches, division or modulo by zero, integer overflow, application
/// of a non-function, or a construct without evaluation semantics.
pub fn evaluate(expr: &Expr, env: &Env, out: &mut dyn Write) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, position } => match value {
            LiteralValue::Int(n) => Ok(Value::Int(*n)),
            LiteralValue::Bool(b) => Ok(Value::Bool(*b)),
            LiteralValue::Unit => Ok(Value::Unit),
            LiteralValue::Str(_) => {
                Err(RuntimeError::Unimplemented { what:     "string literals".to_string(),
                                                  position: *position, })
            },
        },
        Expr::Variable { name, position } => {
            env.lookup(name)
               .cloned()
               .ok_or_else(|| RuntimeError::UnboundVariable { name:     name.clone(),
                                                              position: *position, })
        },
        Expr::UnaryOp { op, expr, position } => evaluate_unary(*op, expr, env, out, *position),
        Expr::BinaryOp { left, op, right, position } => {
            evaluate_binary(*op, left, right, env, out, *position)
        },
        Expr::IfExpr { condition,
                       then_branch,
                       else_branch,
                       position, } => {
            let chosen = if as_bool(evaluate(condition, env, out)?, *position)? {
                then_branch
            } else {
                else_branch
            };
            evaluate(chosen, env, out)
        },
        Expr::Let { decl, body, position: _ } => evaluate_let(decl, body, env, out),
        Expr::Lambda { param, body, position: _ } => {
            Ok(Value::Closure(Closure { param: param.clone(),
                                        body:  Rc::clone(body),
                                        env:   Rc::new(RefCell::new(env.clone())), }))
        },
        Expr::Apply { function, argument, position } => {
            let closure = as_closure(evaluate(function, env, out)?, *position)?;
            let argument = evaluate(argument, env, out)?;
            let call_env = closure.env.borrow().bind(&closure.param, argument);
            evaluate(&closure.body, &call_env, out)
        },
        Expr::PairUp { first, second, position: _ } => {
            let first = evaluate(first, env, out)?;
            let second = evaluate(second, env, out)?;
            Ok(Value::Pair(Box::new(first), Box::new(second)))
        },
        Expr::Seq { first, second, position: _ } => {
            evaluate(first, env, out)?;
            evaluate(second, env, out)
        },
    }
}
