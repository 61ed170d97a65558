//! # quill
//!
//! quill is a small, dynamically typed, expression-oriented scripting
//! language. Source text flows through a hand-written lexer and a Pratt
//! parser into an AST, which a recursive evaluator reduces to a value inside
//! a lexically scoped, closure-capturing environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Provides the fully parenthesized re-printing used by diagnostics, the
///   rendering of function values, and the parser tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. It standardizes error reporting: parse errors
/// accumulate into an ordered listing, runtime errors carry a message drawn
/// from a fixed taxonomy.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Renders every error as the exact diagnostic text the driver prints.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the environment chain to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides the entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::RunError,
    interpreter::value::environment::{Env, Environment},
};

/// Parses and evaluates `source` inside `env`, returning the final value.
///
/// The program's value is the value of its last statement (`null` for a
/// trailing `let` or an empty program). Parsing always consumes the whole
/// source; when it recorded errors the program is not evaluated and the full
/// listing is returned instead.
///
/// # Errors
/// Returns [`RunError::Parse`] with every recorded parse error, or
/// [`RunError::Runtime`] with the error that terminated evaluation.
///
/// # Examples
/// ```
/// use quill::{Environment, run_source};
///
/// let env = Environment::new();
///
/// let value = run_source("let x = 5; let y = 10; x + y;", &env).unwrap();
/// assert_eq!(value.to_string(), "15");
///
/// // The environment persists between runs, like one REPL session.
/// let value = run_source("x * 2", &env).unwrap();
/// assert_eq!(value.to_string(), "10");
/// ```
pub fn run_source(source: &str, env: &Env) -> Result<Value, RunError> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(RunError::Parse(parser.errors().to_vec()));
    }

    eval_program(&program, env).map_err(RunError::Runtime)
}

/// Runs a standalone script in a fresh environment.
///
/// This is the script-mode entry used by the driver: the program runs to
/// completion and, when `auto_print` is set, the value of the final
/// statement is written to standard output (unless it is `null`).
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// // Simple script: the result is computed and no error occurs.
/// let res = get_result("let result = 2 + 2", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::new();
    let value = run_source(source, &env)?;

    if auto_print && !matches!(value, Value::Null) {
        println!("{value}");
    }

    Ok(())
}
