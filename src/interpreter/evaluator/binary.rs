use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operation on two already-evaluated operands.
///
/// Dispatch order matters and mirrors the language's fixed semantics:
///
/// 1. two integers go through arithmetic and comparison,
/// 2. two strings support only concatenation,
/// 3. `==`/`!=` on anything else compare by identity (booleans and `null`
///    structurally, containers and functions by allocation), so mixed-kind
///    comparisons yield `false`/`true` rather than an error,
/// 4. remaining mixed-kind operands are a `type mismatch`,
/// 5. remaining same-kind operands are an `unknown operator`.
pub fn eval_infix_expression(operator: InfixOperator, left: Value, right: Value) -> EvalResult {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ => match operator {
            InfixOperator::Eq => Ok(Value::Boolean(left == right)),
            InfixOperator::NotEq => Ok(Value::Boolean(left != right)),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 operator,
                                                 right: right.type_name(), }.into())
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name(), }.into()),
        },
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic wraps on 64-bit overflow. Division truncates toward zero; a
/// zero divisor is a defined failure.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult {
    let value = match operator {
        InfixOperator::Plus => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Slash => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero.into());
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Lt => Value::Boolean(left < right),
        InfixOperator::Gt => Value::Boolean(left > right),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
    };
    Ok(value)
}

/// String operations.
///
/// `+` concatenates; every other operator on two strings — equality
/// included — is an `unknown operator` failure.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult {
    if operator == InfixOperator::Plus {
        Ok(Value::Str(format!("{left}{right}").into()))
    } else {
        Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                 operator,
                                                 right: "STRING", }.into())
    }
}
