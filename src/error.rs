/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include malformed literals, unterminated strings and
/// comments, unexpected tokens, and leftover input after a complete parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unbound variables, division by zero, and
/// constructs without evaluation semantics.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A fault raised anywhere in the pipeline.
///
/// The core performs no recovery: every fault propagates unchanged to the
/// nearest external boundary (the CLI or the embedded test suite), which
/// decides how to report it and whether to continue.
#[derive(Debug)]
pub enum Fault {
    /// The source could not be lexed or parsed.
    Parse(ParseError),
    /// The program faulted during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Fault {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Fault {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Fault {}
