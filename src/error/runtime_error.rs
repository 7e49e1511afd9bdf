#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    ArgumentCountMismatch {
        /// The name of the builtin.
        name: &'static str,
        /// The number of arguments the builtin expects.
        expected: usize,
        /// The number of arguments actually supplied.
        found: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Identifier '{name}' not found."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Wrong number of arguments for '{name}': expected {expected}, got {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
