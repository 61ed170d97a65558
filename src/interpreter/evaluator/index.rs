use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{
            core::{HashKey, HashPair, Value},
            environment::Env,
        },
    },
};

/// Evaluates an index operation on already-evaluated operands.
///
/// Arrays are indexed by integers; hashes by any hashable value. Every
/// other container kind is an `index operator not supported` failure.
pub fn eval_index_expression(left: &Value, index: &Value) -> EvalResult {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Value::Hash(pairs), _) => eval_hash_index(pairs, index),
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name(), }.into()),
    }
}

/// Indexes an array.
///
/// Positions outside `0..len` — negative ones included — yield `null`, not
/// a failure.
fn eval_array_index(elements: &[Value], position: i64) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position))
                             .cloned()
                             .unwrap_or(Value::Null)
}

/// Indexes a hash.
///
/// A missing key yields `null`; a non-hashable index is a failure.
fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, index: &Value) -> EvalResult {
    let Some(key) = index.hash_key() else {
        return Err(RuntimeError::UnusableAsHashKey { kind: index.type_name(), }.into());
    };

    Ok(pairs.get(&key)
            .map_or(Value::Null, |pair| pair.value.clone()))
}

/// Evaluates a hash literal.
///
/// Pairs are evaluated in source order, key before value, with the usual
/// short-circuit on failure. Non-hashable keys fail; duplicate keys are
/// resolved last-writer-wins.
pub fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let Some(hash_key) = key.hash_key() else {
            return Err(RuntimeError::UnusableAsHashKey { kind: key.type_name(), }.into());
        };

        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}
