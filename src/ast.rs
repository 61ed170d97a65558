use std::fmt;

/// The root node of a parsed source text.
///
/// A program is an ordered sequence of top-level statements. It is produced
/// once per parse and owns every node beneath it for the lifetime of the
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the consequence and alternative of an `if` expression and
/// as the body of a function literal. A `{` in expression position is a hash
/// literal, so the parser never produces a free-standing block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The statements inside the braces, in source order.
    pub statements: Vec<Statement>,
}

/// A single statement.
///
/// Statements are the units collected by `parse_program`. Everything that is
/// not a `let` or `return` is an expression statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding of the form `let <name> = <expression>;`.
    Let {
        /// The bound identifier.
        name:  String,
        /// The expression producing the bound value.
        value: Expr,
    },
    /// An early return of the form `return <expression>;`.
    Return {
        /// The expression producing the returned value.
        value: Expr,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The wrapped expression.
        expr: Expr,
    },
}

/// An expression node.
///
/// `Expr` covers every value-producing construct of the language, from
/// literals and identifiers to conditionals, function literals, calls and
/// index operations. Each variant models a distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a binding by name.
    Identifier {
        /// The spelled name.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The parsed value.
        value: i64,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A double-quoted string literal. The lexer performs no escape
    /// processing, so the value holds the literal source bytes.
    StringLiteral {
        /// The enclosed text.
        value: String,
    },
    /// An array literal such as `[1, 2 * 2, "three"]`.
    ArrayLiteral {
        /// The element expressions in source order.
        elements: Vec<Expr>,
    },
    /// A hash literal such as `{"a": 1, true: 2}`.
    ///
    /// Pairs keep their source order; duplicate keys are resolved
    /// last-writer-wins at evaluation time.
    HashLiteral {
        /// The `(key, value)` expression pairs in source order.
        pairs: Vec<(Expr, Expr)>,
    },
    /// A prefix operation such as `!ok` or `-x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expr>,
    },
    /// An infix operation such as `a + b` or `a == b`.
    Infix {
        /// The left operand.
        left:     Box<Expr>,
        /// The operator.
        operator: InfixOperator,
        /// The right operand.
        right:    Box<Expr>,
    },
    /// A conditional expression with an optional alternative.
    If {
        /// The tested condition.
        condition:   Box<Expr>,
        /// The block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// The block evaluated otherwise, when present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal such as `fn(x, y) { x + y; }`.
    FunctionLiteral {
        /// The parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// A call expression such as `add(1, 2 * 3)`.
    Call {
        /// The expression producing the callee.
        function:  Box<Expr>,
        /// The argument expressions in source order.
        arguments: Vec<Expr>,
    },
    /// An index expression such as `xs[i]` or `h["key"]`.
    Index {
        /// The indexed container.
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!`).
    Bang,
    /// Arithmetic negation (`-`).
    Minus,
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`).
    Plus,
    /// Subtraction (`-`).
    Minus,
    /// Multiplication (`*`).
    Asterisk,
    /// Division (`/`).
    Slash,
    /// Less-than comparison (`<`).
    Lt,
    /// Greater-than comparison (`>`).
    Gt,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

/// Re-prints an expression tree in fully parenthesized form.
///
/// Every prefix and infix node is wrapped in parentheses, so the rendering
/// makes the parsed grouping explicit: parsing `a + b * c` and printing the
/// result yields `(a + (b * c))`. Re-parsing a rendering produces an
/// isomorphic tree, which the parser tests rely on.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[{}]", join_expressions(elements))
            },
            Self::HashLiteral { pairs } => {
                let rendered = pairs.iter()
                                    .map(|(key, value)| format!("{key}: {value}"))
                                    .collect::<Vec<_>>()
                                    .join(", ");
                write!(f, "{{{rendered}}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}({})", join_expressions(arguments))
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

fn join_expressions(expressions: &[Expr]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}
