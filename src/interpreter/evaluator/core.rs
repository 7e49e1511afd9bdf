use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::registry::{Arity, Registries},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the values of user-defined variables.
///
/// The store is created empty and persists across lines within one session;
/// each assignment writes into it and each variable reference reads from it.
/// Redefining a name silently replaces its previous value.
///
/// # Example
/// ```
/// use parith::interpreter::evaluator::core::VariableStore;
///
/// let mut store = VariableStore::new();
/// store.set("x", 2.0);
///
/// assert_eq!(store.get("x"), Some(2.0));
/// assert_eq!(store.get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Gets the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

impl Expr {
    /// Evaluates the expression tree to a number.
    ///
    /// Evaluation is a straightforward post-order walk: operands and call
    /// arguments are evaluated left to right before the node itself is
    /// applied. Division by zero and domain errors are not trapped; they
    /// follow IEEE 754 semantics and surface as infinities or NaN.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownVariable`] when a variable reference has no
    ///   binding in the store.
    /// - [`RuntimeError::ArgumentCountMismatch`] when a call carries a number
    ///   of arguments its builtin's fixed arity does not allow.
    ///
    /// # Example
    /// ```
    /// use parith::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::VariableStore, registry::Registries},
    /// };
    ///
    /// let registries = Registries::new();
    /// let mut store = VariableStore::new();
    /// store.set("x", 2.0);
    ///
    /// let expr = Expr::Variable { name: "x".to_string() };
    ///
    /// assert_eq!(expr.eval(&registries, &store), Ok(2.0));
    /// ```
    pub fn eval(&self, registries: &Registries, store: &VariableStore) -> EvalResult<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Unary { op, operand } => {
                let value = operand.eval(registries, store)?;
                Ok(op.apply(value))
            },
            Self::Binary { op, left, right } => {
                let left = left.eval(registries, store)?;
                let right = right.eval(registries, store)?;
                Ok(op.apply(left, right))
            },
            Self::Call { id, args } => {
                let values = args.iter()
                                 .map(|arg| arg.eval(registries, store))
                                 .collect::<EvalResult<Vec<f64>>>()?;

                let info = id.info();
                if let Arity::Exact(expected) = info.arity {
                    if values.len() != expected {
                        return Err(RuntimeError::ArgumentCountMismatch { name: info.name,
                                                                         expected,
                                                                         found: values.len() });
                    }
                }
                Ok((info.eval)(&values))
            },
            Self::Variable { name } => {
                store.get(name)
                     .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
        }
    }
}
