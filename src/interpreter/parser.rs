/// Infix parse rules.
///
/// Handles every construct that extends an already-parsed left expression:
/// the binary operators, call expressions bound to `(`, and index
/// expressions bound to `[`.
pub mod binary;

/// Block statement parsing.
///
/// Collects statements between `{` and `}` for if-consequences and function
/// bodies.
pub mod block;

/// Core parsing machinery.
///
/// Contains the parser state, the precedence ladder, the Pratt expression
/// loop with its prefix/infix dispatch, and conditional expressions.
pub mod core;

/// Statement parsing.
///
/// Drives the program loop and parses `let`, `return` and expression
/// statements.
pub mod statement;

/// Prefix parse rules.
///
/// Handles every construct that begins an expression: identifiers, literals
/// of all kinds, prefix operators, grouping, and function literals.
pub mod unary;

/// Shared parsing helpers.
///
/// Provides the comma-separated list routines used by array literals, call
/// arguments and parameter lists.
pub mod utils;
