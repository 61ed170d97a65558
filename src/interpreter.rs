/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// resolves identifiers against the environment chain, applies functions and
/// builtins, and produces runtime values. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Propagates early returns across nested blocks and unwinds them at the
///   program and call boundaries.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// pairing a kind with the exact text that produced it. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into tokens, one per call.
/// - Handles integer and string literals, identifiers, keywords and
///   operators.
/// - Marks unrecognized bytes as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST using top-down operator-precedence (Pratt) dispatch with a
/// two-token lookahead window. It never backtracks and never stops on the
/// first error.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence through a single ascending ladder.
/// - Accumulates syntax errors while always consuming the full token stream.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution: integers,
/// booleans, strings, arrays, hashes, the null value, first-class functions
/// with their captured environments, and builtin handles. It also defines the
/// environment chain that gives the language its lexical scoping.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Derives stable hash keys for the hashable value kinds.
/// - Provides the shared, outer-linked `Environment` used for scoping and
///   closures.
pub mod value;
