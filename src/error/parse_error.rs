use crate::error::RuntimeError;

#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while lexing or parsing a line.
pub enum ParseError {
    /// The lexer hit a character it has no rule for.
    UnrecognizedCharacter {
        /// The offending input slice.
        found: String,
    },
    /// The line ended while an expression was still expected.
    UnexpectedEndOfInput,
    /// A token appeared at the start of an expression but has no prefix
    /// handler.
    NoPrefixHandler {
        /// The token encountered.
        token: String,
    },
    /// A token appeared after a complete sub-expression but has no infix
    /// handler.
    NoInfixHandler {
        /// The token encountered.
        token: String,
    },
    /// A handler was invoked on a token type it does not accept.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A builtin call was missing its opening bracket.
    ExpectedOpeningBracket {
        /// The name of the builtin being called.
        name: String,
    },
    /// A closing bracket `)` was expected but not found.
    ExpectedClosingBracket,
    /// A `,` between call arguments was expected but not found.
    ExpectedComma {
        /// The name of the builtin being called.
        name: String,
    },
    /// The left side of an assignment was not a bare variable reference.
    InvalidAssignmentTarget,
    /// A keyword token named something absent from the builtin registries.
    UnknownName {
        /// The unregistered name.
        name: String,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// Evaluating the right-hand side of an assignment failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found } => {
                write!(f, "Unrecognized character: '{found}'.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::NoPrefixHandler { token } => {
                write!(f, "Token '{token}' cannot start an expression.")
            },

            Self::NoInfixHandler { token } => {
                write!(f, "Token '{token}' cannot continue an expression.")
            },

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: '{token}'."),

            Self::ExpectedOpeningBracket { name } => {
                write!(f, "Expected '(' after '{name}'.")
            },

            Self::ExpectedClosingBracket => {
                write!(f, "Expected closing bracket ')' but none found.")
            },

            Self::ExpectedComma { name } => {
                write!(f, "Expected ',' between arguments of '{name}'.")
            },

            Self::InvalidAssignmentTarget => {
                write!(f, "Left side of assignment must be an identifier.")
            },

            Self::UnknownName { name } => write!(f, "Unknown identifier '{name}'."),

            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra tokens after expression, starting at '{token}'.")
            },

            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<RuntimeError> for ParseError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
