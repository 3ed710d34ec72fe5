use crate::ast::Position;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input ended inside a string literal.
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// The input ended inside a `(* ... *)` comment.
    UnterminatedComment {
        /// Position of the comment opener.
        position: Position,
    },
    /// A string literal contained an escape other than `\\`, `\n`, `\t`,
    /// `\"` or a backslash-newline continuation.
    InvalidEscape {
        /// Position of the string literal.
        position: Position,
    },
    /// A string literal contained a literal (unescaped) newline.
    NewlineInString {
        /// Position of the string literal.
        position: Position,
    },
    /// A string literal contained a literal tab character.
    TabInString {
        /// Position of the string literal.
        position: Position,
    },
    /// An integer literal was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// Position of the literal.
        position: Position,
    },
    /// A character that no lexer rule accepts.
    UnexpectedCharacter {
        /// The offending input slice.
        text:     String,
        /// Position of the character.
        position: Position,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Position of the token.
        position: Position,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// The token that was required.
        expected: String,
        /// The token actually seen.
        found:    String,
        /// Position of the token seen.
        position: Position,
    },
    /// A name (identifier) was required but something else was found.
    ExpectedName {
        /// The token actually seen.
        found:    String,
        /// Position of the token seen.
        position: Position,
    },
    /// Reached the end of input where more was required.
    UnexpectedEndOfInput {
        /// Position just past the last token.
        position: Position,
    },
    /// An expression was required but the input was empty.
    EmptyInput,
    /// A complete expression was parsed but tokens remain.
    TrailingTokens {
        /// The leftover tokens, in order.
        tokens:   Vec<String>,
        /// Position of the first leftover token.
        position: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { position } => {
                write!(f, "Error at {position}: End of input inside string literal.")
            },
            Self::UnterminatedComment { position } => {
                write!(f, "Error at {position}: End of input inside comment.")
            },
            Self::InvalidEscape { position } => {
                write!(f, "Error at {position}: Bad string escape character.")
            },
            Self::NewlineInString { position } => {
                write!(f, "Error at {position}: End of line encountered within string.")
            },
            Self::TabInString { position } => {
                write!(f, "Error at {position}: Tab encountered within string.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at {position}: Integer literal is too large.")
            },
            Self::UnexpectedCharacter { text, position } => {
                write!(f, "Error at {position}: Unexpected character '{text}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at {position}: Unexpected token. Saw: '{token}'.")
            },
            Self::ExpectedToken { expected, found, position } => {
                write!(f,
                       "Error at {position}: Unexpected token. Saw: '{found}'. Expected: '{expected}'.")
            },
            Self::ExpectedName { found, position } => {
                write!(f, "Error at {position}: Unexpected token. Saw: '{found}'. Expected a name.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at {position}: Unexpected end of input.")
            },
            Self::EmptyInput => {
                write!(f, "Error: An expression was expected but the input is empty.")
            },
            Self::TrailingTokens { tokens, position } => {
                write!(f,
                       "Error at {position}: Parsing failed to consume tokens ({} remaining): {}",
                       tokens.len(),
                       tokens.join(" "))
            },
        }
    }
}

impl std::error::Error for ParseError {}
