/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, tokens that are
/// not valid in prefix or infix position, missing brackets, and invalid
/// assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree, such as references to unbound variables or builtin calls with the
/// wrong number of arguments.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
