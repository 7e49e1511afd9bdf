//! # parith
//!
//! parith is a small interactive arithmetic-expression evaluator written in
//! Rust. It parses each input line with a precedence-climbing parser into an
//! expression tree, evaluates the tree to a floating-point number, and
//! supports named variables, builtin functions, and constants.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::VariableStore,
    lexer::tokenize,
    parser::core::Parser,
    registry::Registries,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an input line as a tree. The tree is built by the parser, rendered back to
/// text by its `Display` implementation, and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Renders the canonical parenthesized text form of an expression.
/// - Applies unary and binary operators to evaluated operands.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a line. It standardizes error reporting and carries the
/// offending token or name so failures read well at the prompt.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the offending input fragment to each error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, parsing, the builtin registries, and
/// evaluation to provide a complete pipeline from one raw input line to its
/// numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, registries, evaluator.
/// - Provides entry points for tokenizing and parsing user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The outcome of evaluating one input line.
#[derive(Debug)]
pub struct Evaluation {
    /// The canonical parenthesized rendering of the parsed expression.
    pub rendered: String,
    /// The numeric result of evaluating it.
    pub value: f64,
}

/// Runs one input line through the whole pipeline.
///
/// The line is tokenized, parsed against the registries (assignments write
/// into `store` as a side effect of parsing), and the resulting tree is
/// evaluated. Both the rendered tree and its value are returned, so callers
/// can echo the parse alongside the result.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use parith::{
///     evaluate_line,
///     interpreter::{evaluator::core::VariableStore, registry::Registries},
/// };
///
/// let registries = Registries::new();
/// let mut store = VariableStore::new();
///
/// evaluate_line("x = 5", &registries, &mut store).unwrap();
/// let result = evaluate_line("x + 1", &registries, &mut store).unwrap();
///
/// assert_eq!(result.value, 6.0);
/// assert_eq!(result.rendered, "(x + 1)");
/// ```
pub fn evaluate_line(source: &str,
                     registries: &Registries,
                     store: &mut VariableStore)
                     -> Result<Evaluation, Box<dyn std::error::Error>> {
    let tokens = tokenize(source, registries)?;
    let mut parser = Parser::new(tokens, registries, store);
    let expr = parser.parse_expression()?;

    let rendered = expr.to_string();
    let value = expr.eval(registries, store)?;

    Ok(Evaluation { rendered, value })
}
