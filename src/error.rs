/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors accumulate inside the parser and are surfaced as an
/// ordered listing once `parse_program` has consumed the full token stream.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors carry a human-readable message drawn from a fixed taxonomy (type
/// mismatches, unknown operators, unresolved identifiers, and so on).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The failure modes of running a piece of source end to end.
///
/// `Parse` carries the full ordered listing the parser accumulated; the
/// driver prints one message per line and never evaluates the program.
/// `Runtime` carries the error that terminated evaluation.
pub enum RunError {
    /// Parsing produced one or more errors.
    Parse(Vec<ParseError>),
    /// Evaluation was terminated by a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                writeln!(f, "parse errors:")?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "\t{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for RunError {}
