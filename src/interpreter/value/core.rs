use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{evaluator::builtin::BuiltinDef, value::environment::Env},
};

/// FNV-1a 64 offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64 prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: the scalar kinds,
/// `null`, the two container kinds, first-class functions carrying their
/// captured environment, and handles to host-provided builtins. Containers
/// and functions are reference counted, so cloning a value is cheap and two
/// clones of the same container observe the same allocation.
#[derive(Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The null value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Value>>),
    /// A mapping from hashable values to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A host-provided builtin function.
    Builtin(&'static BuiltinDef),
}

/// A user-defined function value.
///
/// The function keeps a handle to the environment that was active at its
/// definition site; free identifiers in the body resolve against that
/// environment at call time, which is what makes closures work. The captured
/// environment may in turn hold the function itself, forming a cycle that is
/// tolerated for the session lifetime.
pub struct FunctionValue {
    /// The parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Env,
}

/// The kind tag of a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Key derived from an integer.
    Integer,
    /// Key derived from a boolean.
    Boolean,
    /// Key derived from a string.
    Str,
}

/// A stable key derived from a hashable value.
///
/// The key pairs a kind tag with a 64-bit digest, so that two hashable values
/// are equal as language values exactly when their keys are equal: integers
/// digest to their own bits, booleans to `1` or `0`, and strings to the
/// FNV-1a 64 hash of their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The kind of value the key was derived from.
    pub kind:   HashKind,
    /// The 64-bit digest.
    pub digest: u64,
}

/// An entry of a hash value.
///
/// The original key value is retained next to the stored value so the hash
/// can be rendered back in `{key: value}` form.
#[derive(Clone)]
pub struct HashPair {
    /// The key as it was written.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Returns the value's type name as used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Derives the hash key of a hashable value.
    ///
    /// Only integers, booleans and strings are hashable; every other kind
    /// returns `None` and is reported as `unusable as hash key` by the
    /// evaluator.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let a = Value::Str("name".into()).hash_key();
    /// let b = Value::Str("name".into()).hash_key();
    ///
    /// assert!(a.is_some());
    /// assert_eq!(a, b);
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            #[allow(clippy::cast_sign_loss)]
            Self::Integer(value) => Some(HashKey { kind:   HashKind::Integer,
                                                   digest: *value as u64, }),
            Self::Boolean(value) => Some(HashKey { kind:   HashKind::Boolean,
                                                   digest: u64::from(*value), }),
            Self::Str(value) => Some(HashKey { kind:   HashKind::Str,
                                               digest: fnv1a_64(value.as_bytes()), }),
            _ => None,
        }
    }
}

/// Computes the FNV-1a 64 digest of a byte slice.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut digest = FNV_OFFSET_BASIS;
    for byte in bytes {
        digest ^= u64::from(*byte);
        digest = digest.wrapping_mul(FNV_PRIME);
    }
    digest
}

/// Equality over values.
///
/// Scalars and `null` compare structurally. Containers and functions compare
/// by identity (`Rc::ptr_eq`), which matches the language's `==` semantics on
/// non-scalar operands and keeps comparison from chasing captured
/// environments (a closure stored in the environment it captures would make a
/// structural walk cycle).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}

/// Debug rendering delegates to `Display`.
///
/// A derived impl would descend into captured environments, which may contain
/// the function itself.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
