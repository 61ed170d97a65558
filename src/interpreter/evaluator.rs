/// Infix operator evaluation.
///
/// Integer arithmetic and comparisons, string concatenation, and the
/// identity-based equality fallback.
pub mod binary;

/// Host-provided builtin functions.
///
/// Declares the static builtin table (`len`, `first`, `last`, `rest`,
/// `push`, `puts`) consulted when an identifier is not bound in any scope.
pub mod builtin;

/// Core evaluation logic.
///
/// Contains the control-flow signals, the program/block/statement drivers,
/// the expression dispatch, identifier resolution and truthiness.
pub mod core;

/// Function application.
///
/// Builds call frames over captured environments, binds arguments, unwinds
/// early returns at the call boundary, and invokes builtins.
pub mod function;

/// Container indexing and hash construction.
///
/// Array and hash index evaluation and hash-literal assembly.
pub mod index;

/// Prefix operator evaluation.
///
/// Logical negation over truthiness and arithmetic negation of integers.
pub mod unary;
