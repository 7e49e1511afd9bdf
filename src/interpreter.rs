/// The lexer module tokenizes one input line for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a meaningful element such as a number, an operator,
/// a bracket, or a name. Names are classified against the builtin registries:
/// registered names become keyword tokens, anything else an identifier.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Skips whitespace and reports unrecognized characters.
/// - Appends the end-of-input marker the parser relies on.
pub mod lexer;
/// The registry module defines the builtin symbol tables.
///
/// Builtins are functions and constants known to the language (`sin`, `pi`,
/// `mean`, ...). Each is described by a table row holding its dense tag, its
/// source spelling, its arity, and its evaluation handler. The table is
/// immutable and indexed both by tag (array lookup) and by name (string
/// lookup via [`registry::Registries`]).
pub mod registry;
/// The parser module builds the expression tree from tokens.
///
/// Parsing uses a Pratt (operator-precedence) engine: every token type owns
/// an optional prefix handler, an optional infix handler, and a pair of
/// binding powers, and a single precedence-climbing loop assembles the tree.
///
/// # Responsibilities
/// - Drives the rule table to honor precedence and associativity.
/// - Builds calls of registered builtins and variable references.
/// - Performs assignment writes into the variable store.
pub mod parser;
/// The evaluator module executes expression trees and computes results.
///
/// Evaluation is a single recursive pass over the tree: literals return their
/// value, operators apply their arithmetic, builtin calls check arity and
/// dispatch through the registry, and variable references read the store.
pub mod evaluator;
