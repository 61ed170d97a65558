use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
pub fn eval_prefix_expression(operator: PrefixOperator, right: &Value) -> EvalResult {
    match operator {
        PrefixOperator::Bang => Ok(eval_bang_operator(right)),
        PrefixOperator::Minus => eval_minus_operator(right),
    }
}

/// Negates a value by its truthiness.
///
/// `!true` is `false`, `!false` and `!null` are `true`, and any other value
/// is truthy, so its negation is `false`.
fn eval_bang_operator(right: &Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Negates an integer, wrapping on `i64::MIN`.
///
/// Any non-integer operand is an `unknown operator` failure.
fn eval_minus_operator(right: &Value) -> EvalResult {
    match right {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Minus,
                                                       operand:  right.type_name(), }.into()),
    }
}
