use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    ast::{Declaration, Expr},
    interpreter::{
        env::Env,
        evaluator::core::{EvalResult, evaluate},
        value::{Closure, Value},
    },
};

/// Evaluates a `let` expression by extending the environment with its
/// declaration and evaluating the body in the extension.
///
/// A `val` binding is non-recursive: its right-hand side evaluates in the
/// outer environment, so the bound name is not in scope there.
///
/// A `fun` group is mutually recursive. The group is closed in two phases:
/// first each definition, in declaration order, becomes a closure over the
/// environment built so far (so each can already see the members declared
/// before it); then every closure's environment cell is overwritten with
/// the finished group environment, at which point each member sees the
/// whole group, itself included. The cells are never written again.
///
/// # Errors
/// Propagates any fault from the right-hand sides or the body.
pub fn evaluate_let(decl: &Declaration, body: &Expr, env: &Env, out: &mut dyn Write)
                    -> EvalResult<Value> {
    match decl {
        Declaration::Val { name, value, position: _ } => {
            let value = evaluate(value, env, out)?;
            evaluate(body, &env.bind(name, value), out)
        },
        Declaration::Fun(definitions) => {
            let mut group_env = env.clone();
            let mut cells = Vec::with_capacity(definitions.len());

            for definition in definitions {
                let cell = Rc::new(RefCell::new(group_env.clone()));
                let closure = Closure { param: definition.param.clone(),
                                        body:  Rc::clone(&definition.body),
                                        env:   Rc::clone(&cell), };
                group_env = group_env.bind(&definition.name, Value::Closure(closure));
                cells.push(cell);
            }
            for cell in &cells {
                *cell.borrow_mut() = group_env.clone();
            }

            evaluate(body, &group_env, out)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse};

    fn run(source: &str) -> Value {
        let tokens = tokenize(source).unwrap();
        evaluate(&parse(&tokens).unwrap(), &Env::new(), &mut Vec::new()).unwrap()
    }

    #[test]
    fn val_right_hand_side_cannot_see_its_own_name() {
        let result = run("let val x = 1 in let val x = x + 1 in x end end");
        assert_eq!(result, Value::Int(2));
    }

    #[test]
    fn single_fun_can_recurse() {
        let result = run("let fun fact n = if n < 2 then 1 else n * fact (n-1) \
                          in fact 5 end");
        assert_eq!(result, Value::Int(120));
    }

    #[test]
    fn later_group_members_are_visible_to_earlier_ones() {
        let result = run("let fun even n = if n = 0 then true else odd (n-1) \
                          and bounce x = x \
                          and odd n = if n = 0 then false else even (n-1) \
                          in (even 10, odd 10) end");
        assert_eq!(result,
                   Value::Pair(Box::new(Value::Bool(true)), Box::new(Value::Bool(false))));
    }

    #[test]
    fn group_members_shadow_outer_bindings_inside_the_group() {
        let result = run("let fun f x = x + 1 in \
                          let fun f x = if x = 0 then 0 else f (x - 1) \
                          in f 3 end end");
        assert_eq!(result, Value::Int(0));
    }
}
