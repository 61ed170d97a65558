/// Core runtime value types.
///
/// Defines the `Value` enum with all its variants, the hash-key derivation
/// for hashable kinds, and the human-readable rendering of every value.
pub mod core;

/// The lexically scoped environment chain.
///
/// Defines the name-to-value store with its optional outer link, shared
/// through reference-counted handles so closures can capture their defining
/// scope.
pub mod environment;
