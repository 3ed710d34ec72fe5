use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Closure, Value},
    },
};

/// Coerces a value to a boolean, or faults with the value's typed
/// rendering.
pub(in crate::interpreter::evaluator) fn as_bool(value: Value,
                                                 position: Position)
                                                 -> EvalResult<bool> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(RuntimeError::ExpectedBool { found: other.to_string_typed(),
                                                  position }),
    }
}

/// Coerces a value to an integer.
pub(in crate::interpreter::evaluator) fn as_int(value: Value,
                                                position: Position)
                                                -> EvalResult<i64> {
    match value {
        Value::Int(n) => Ok(n),
        other => Err(RuntimeError::ExpectedInt { found: other.to_string_typed(),
                                                 position }),
    }
}

/// Coerces a value to a pair, surrendering both components.
pub(in crate::interpreter::evaluator) fn as_pair(value: Value,
                                                 position: Position)
                                                 -> EvalResult<(Value, Value)> {
    match value {
        Value::Pair(first, second) => Ok((*first, *second)),
        other => Err(RuntimeError::ExpectedPair { found: other.to_string_typed(),
                                                  position }),
    }
}

/// Coerces a value to a closure.
pub(in crate::interpreter::evaluator) fn as_closure(value: Value,
                                                    position: Position)
                                                    -> EvalResult<Closure> {
    match value {
        Value::Closure(closure) => Ok(closure),
        other => Err(RuntimeError::ExpectedClosure { found: other.to_string_typed(),
                                                     position }),
    }
}
