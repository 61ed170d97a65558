use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interrupt, eval_block},
        value::{
            core::{FunctionValue, Value},
            environment::{Env, Environment},
        },
    },
};

/// Applies a callable to already-evaluated arguments.
///
/// User-defined functions run their body in a fresh frame enclosed by the
/// environment captured at their definition site; an early return inside
/// the body is unwound here, at the call boundary, so it never escapes into
/// the caller. Builtins are invoked directly after the arity check. Any
/// other callee is a `not a function` failure.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> EvalResult {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got:  arguments.len(),
                    want: function.parameters.len(),
                }.into());
            }

            let frame = extend_function_env(function, arguments);
            match eval_block(&function.body, &frame) {
                Err(Interrupt::Return(value)) => Ok(value),
                other => other,
            }
        },
        Value::Builtin(def) => {
            def.arity.check(arguments.len())?;
            (def.func)(arguments).map_err(Interrupt::from)
        },
        _ => Err(RuntimeError::NotAFunction { kind: callee.type_name(), }.into()),
    }
}

/// Builds the call frame for a user-defined function.
///
/// The frame's outer link is the function's captured environment — not the
/// caller's — which is what gives the language lexical rather than dynamic
/// scoping. Parameters are bound positionally.
fn extend_function_env(function: &FunctionValue, arguments: Vec<Value>) -> Env {
    let frame = Environment::new_enclosed(&function.env);

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        frame.borrow_mut().set(parameter.clone(), argument);
    }

    frame
}
