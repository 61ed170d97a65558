use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// Runtime errors carry only a human-readable message; they propagate to the
/// program boundary and terminate evaluation, and the driver renders them
/// prefixed with `ERROR: `.
pub enum RuntimeError {
    /// An infix operator was applied to operands of differing types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An infix operator was applied to same-typed but unsupported operands.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A name was neither bound in any enclosing scope nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call targeted a value that is not callable.
    NotAFunction {
        /// Type name of the call target.
        kind: &'static str,
    },
    /// The index operator was applied to an unsupported container.
    IndexNotSupported {
        /// Type name of the indexed value.
        kind: &'static str,
    },
    /// A hash key or hash index was not a hashable value kind.
    UnusableAsHashKey {
        /// Type name of the offending value.
        kind: &'static str,
    },
    /// A call supplied a different number of arguments than declared.
    WrongNumberOfArguments {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of parameters declared.
        want: usize,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// A builtin received an argument kind it does not support at all.
    UnsupportedBuiltinArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// Type name of the offending argument.
        got:     &'static str,
    },
    /// A builtin received the wrong argument kind in a typed position.
    WrongBuiltinArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// The required type name.
        want:    &'static str,
        /// Type name of the offending argument.
        got:     &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::UnusableAsHashKey { kind } => {
                write!(f, "unusable as hash key: {kind}")
            },
            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnsupportedBuiltinArgument { builtin, got } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            },
            Self::WrongBuiltinArgument { builtin,
                                         want,
                                         got, } => {
                write!(f, "argument to `{builtin}` must be {want}, got {got}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
