/// The evaluator core.
///
/// Contains the variable store and the recursive tree evaluation.
pub mod core;
