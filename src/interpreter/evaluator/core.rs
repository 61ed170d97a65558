use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_infix_expression,
            builtin,
            function::apply_function,
            index::{eval_hash_literal, eval_index_expression},
            unary::eval_prefix_expression,
        },
        value::{
            core::{FunctionValue, Value},
            environment::Env,
        },
    },
};

/// A control signal travelling up the evaluation stack.
///
/// Both early returns and runtime failures ride the `Err` channel of
/// [`EvalResult`], so `?` propagates them through arbitrarily nested blocks
/// without any unwrapping. `Return` is unwrapped at exactly two places — the
/// program boundary and the function-call boundary — which is what lets a
/// `return` escape any nesting depth while stopping at the enclosing call.
/// `Failure` is never unwrapped; it reaches the driver untouched.
#[derive(Debug)]
pub enum Interrupt {
    /// A `return` statement's value on its way to the nearest boundary.
    Return(Value),
    /// A runtime error terminating evaluation.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Failure(error)
    }
}

/// Result type used by the evaluator.
///
/// Evaluation either produces a value or a control signal; see
/// [`Interrupt`].
pub type EvalResult<T = Value> = Result<T, Interrupt>;

/// Evaluates a program in the given environment.
///
/// Statements run in order; the program's value is the last statement's
/// value, or `null` for an empty program. A top-level `return` ends the
/// program early with the returned value. The first runtime failure
/// terminates evaluation and is handed to the caller.
///
/// # Errors
/// Returns the runtime error that terminated evaluation, if any.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::environment::Environment,
/// };
///
/// let program = Parser::new(Lexer::new("let x = 2; x * 21")).parse_program();
/// let env = Environment::new();
///
/// let value = eval_program(&program, &env).unwrap();
/// assert_eq!(value.to_string(), "42");
/// ```
pub fn eval_program(program: &Program, env: &Env) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Interrupt::Return(value)) => return Ok(value),
            Err(Interrupt::Failure(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds into the current environment and yields `null`; `return`
/// wraps its value into the [`Interrupt::Return`] signal; an expression
/// statement yields its expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Err(Interrupt::Return(value))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a block of statements.
///
/// The block's value is its last statement's value, or `null` when empty.
/// Unlike [`eval_program`], a block never unwraps control signals: `?`
/// forwards both returns and failures to the enclosing construct.
pub fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates an expression.
///
/// Dispatch is an exhaustive match on the node variant. Child expressions
/// are always evaluated through this function, so a failing child
/// short-circuits every enclosing operation via `?`.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value } => Ok(Value::Boolean(*value)),
        Expr::StringLiteral { value } => Ok(Value::Str(Rc::from(value.as_str()))),
        Expr::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix_expression(*operator, &right)
        },
        Expr::Infix { left,
                      operator,
                      right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix_expression(*operator, left, right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            apply_function(&callee, arguments)
        },
        Expr::Index { left, index } => {
            let container = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index_expression(&container, &index)
        },
    }
}

/// Evaluates a conditional expression.
///
/// The condition decides by truthiness. With a falsy condition and no
/// alternative the expression yields `null`.
fn eval_if_expression(condition: &Expr,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Env)
                      -> EvalResult {
    let condition = eval_expression(condition, env)?;

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// Resolves an identifier.
///
/// The environment chain is consulted first, then the builtin table, so
/// user bindings shadow builtins of the same name.
fn eval_identifier(name: &str, env: &Env) -> EvalResult {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(def) = builtin::lookup(name) {
        return Ok(Value::Builtin(def));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string(), }.into())
}

/// Evaluates a list of expressions left to right.
///
/// The first failing element aborts the whole list; its signal is the
/// result.
pub fn eval_expressions(expressions: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
    expressions.iter()
               .map(|expression| eval_expression(expression, env))
               .collect()
}

/// Decides the truthiness of a value.
///
/// Only `null` and `false` are falsy; every other value — including `0`,
/// the empty string and the empty array — is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}
