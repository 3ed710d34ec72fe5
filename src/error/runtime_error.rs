use crate::ast::Position;

#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable with no binding in scope.
    UnboundVariable {
        /// The name of the variable.
        name:     String,
        /// Position of the use.
        position: Position,
    },
    /// A boolean value was expected, but not found.
    ExpectedBool {
        /// Rendering of the value actually seen.
        found:    String,
        /// Position of the operation.
        position: Position,
    },
    /// An integer value was expected, but not found.
    ExpectedInt {
        /// Rendering of the value actually seen.
        found:    String,
        /// Position of the operation.
        position: Position,
    },
    /// A pair value was expected, but not found.
    ExpectedPair {
        /// Rendering of the value actually seen.
        found:    String,
        /// Position of the projection.
        position: Position,
    },
    /// A function (closure) value was expected, but not found.
    ExpectedClosure {
        /// Rendering of the value actually seen.
        found:    String,
        /// Position of the application.
        position: Position,
    },
    /// Division by zero.
    DivisionByZero {
        /// Position of the `div`.
        position: Position,
    },
    /// Modulo by zero.
    ModuloByZero {
        /// Position of the `mod`.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Position of the operation.
        position: Position,
    },
    /// A construct reached evaluation with no defined semantics.
    Unimplemented {
        /// A short description of the construct.
        what:     String,
        /// Position of the construct.
        position: Position,
    },
    /// Writing to the print channel failed.
    PrintFailed {
        /// The underlying I/O error message.
        message:  String,
        /// Position of the `print`.
        position: Position,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, position } => {
                write!(f, "Error at {position}: Use of unbound variable '{name}'.")
            },
            Self::ExpectedBool { found, position } => {
                write!(f, "Error at {position}: Expected a boolean value, got {found}.")
            },
            Self::ExpectedInt { found, position } => {
                write!(f, "Error at {position}: Expected an integer value, got {found}.")
            },
            Self::ExpectedPair { found, position } => {
                write!(f, "Error at {position}: Expected a pair, got {found}.")
            },
            Self::ExpectedClosure { found, position } => {
                write!(f, "Error at {position}: Expected a function, got {found}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at {position}: Division by zero.")
            },
            Self::ModuloByZero { position } => {
                write!(f, "Error at {position}: Modulo by zero.")
            },
            Self::Overflow { position } => {
                write!(f, "Error at {position}: Integer overflow while trying to compute result.")
            },
            Self::Unimplemented { what, position } => {
                write!(f, "Error at {position}: No evaluation semantics for {what}.")
            },
            Self::PrintFailed { message, position } => {
                write!(f, "Error at {position}: Printing failed: {message}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
