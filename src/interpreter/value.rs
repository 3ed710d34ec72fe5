use std::{cell::RefCell, fmt, rc::Rc};

use crate::{ast::Expr, interpreter::env::Env};

/// Represents a finished evaluation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// The unit value, written `()`.
    Unit,
    /// An ordered pair of values.
    Pair(Box<Value>, Box<Value>),
    /// A function value closed over its defining environment.
    Closure(Closure),
}

/// A function value: the parameter name, the body, and the environment the
/// body evaluates under.
///
/// The environment lives behind a shared mutable cell so that a group of
/// mutually recursive functions can first be built over the surrounding
/// environment and then all be repointed at the finished group environment.
/// After that single patch the cell is never written again.
#[derive(Clone)]
pub struct Closure {
    pub param: String,
    pub body:  Rc<Expr>,
    pub env:   Rc<RefCell<Env>>,
}

impl Value {
    /// Renders this value with an explicit type tag, `[Tag, value]`.
    ///
    /// # Example
    /// ```
    /// use miniml::interpreter::value::Value;
    ///
    /// let pair = Value::Pair(Box::new(Value::Int(2)), Box::new(Value::Bool(true)));
    /// assert_eq!(pair.to_string_typed(), "[Pair, ([Int, 2], [Bool, true])]");
    /// ```
    #[must_use]
    pub fn to_string_typed(&self) -> String {
        match self {
            Self::Int(n) => format!("[Int, {n}]"),
            Self::Bool(b) => format!("[Bool, {b}]"),
            Self::Unit => "[Unit, ()]".to_string(),
            Self::Pair(first, second) => {
                format!("[Pair, ({}, {})]", first.to_string_typed(), second.to_string_typed())
            },
            Self::Closure(closure) => format!("[Clos, fn {} => <fn>]", closure.param),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Unit => write!(f, "()"),
            Self::Pair(first, second) => write!(f, "({first},{second})"),
            Self::Closure(closure) => write!(f, "fn {} => <fn>", closure.param),
        }
    }
}

// Recursive groups make the closure environment graph cyclic, so equality
// and debugging must not walk into the environment. Two closures are equal
// exactly when they are the same closure.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param
        && Rc::ptr_eq(&self.body, &other.body)
        && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("param", &self.param)
         .field("body", &Rc::as_ptr(&self.body))
         .field("env", &Rc::as_ptr(&self.env))
         .finish()
    }
}
