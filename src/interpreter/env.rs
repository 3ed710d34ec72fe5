use std::rc::Rc;

use crate::interpreter::value::Value;

/// A persistent binding environment.
///
/// An environment is an immutable linked chain of frames, one binding per
/// frame, youngest first. Extending an environment shares the tail with the
/// parent rather than copying it, so every closure can hang on to the exact
/// environment it was built over while evaluation moves on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Env {
    head: Option<Rc<Frame>>,
}

#[derive(Debug, PartialEq)]
struct Frame {
    name:  String,
    value: Value,
    rest:  Option<Rc<Frame>>,
}

impl Env {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns a new environment with `name` bound to `value`, shadowing
    /// any earlier binding of the same name. `self` is untouched.
    #[must_use]
    pub fn bind(&self, name: &str, value: Value) -> Self {
        Self { head: Some(Rc::new(Frame { name: name.to_string(),
                                          value,
                                          rest: self.head.clone() })), }
    }

    /// Looks up the youngest binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut frame = self.head.as_deref();
        while let Some(current) = frame {
            if current.name == name {
                return Some(&current.value);
            }
            frame = current.rest.as_deref();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_in_empty_env_misses() {
        assert_eq!(Env::new().lookup("x"), None);
    }

    #[test]
    fn bind_leaves_the_parent_untouched() {
        let outer = Env::new().bind("x", Value::Int(1));
        let inner = outer.bind("y", Value::Int(2));

        assert_eq!(outer.lookup("y"), None);
        assert_eq!(inner.lookup("x"), Some(&Value::Int(1)));
        assert_eq!(inner.lookup("y"), Some(&Value::Int(2)));
    }

    #[test]
    fn younger_bindings_shadow_older_ones() {
        let env = Env::new().bind("x", Value::Int(1)).bind("x", Value::Int(2));
        assert_eq!(env.lookup("x"), Some(&Value::Int(2)));
    }
}
