use std::fmt;

use crate::interpreter::registry::Builtin;

/// Represents a unary operator.
///
/// Unary operators appear in prefix position and take a single operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl UnaryOperator {
    /// Applies the operator to an already evaluated operand.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Plus => value,
            Self::Negate => -value,
        }
    }
}

/// Represents a binary operator.
///
/// All binary operators combine two numeric operands into a numeric result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Applies the operator to two already evaluated operands.
    ///
    /// Division follows raw IEEE-754 semantics: dividing by zero yields an
    /// infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct the parser can produce: numeric literals,
/// unary and binary operations, calls of registered builtins, and references
/// to named variables. Each node exclusively owns its children; the tree has
/// no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op: UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call of a registered builtin function or constant (e.g. `sin(x)`,
    /// `pi`).
    Call {
        /// Tag of the builtin being called.
        id: Builtin,
        /// Arguments to the builtin, in source order.
        args: Vec<Self>,
    },
    /// Reference to a variable by name.
    ///
    /// The name is resolved against the variable store at evaluation time,
    /// not at parse time.
    Variable {
        /// Name of the variable.
        name: String,
    },
}

/// Renders the canonical, fully parenthesized form of the expression.
///
/// Numbers print their decimal form, unary operations print `(opX)`, binary
/// operations print `(L op R)`, and calls print `name(arg, arg, ...)` or the
/// bare `name` when nullary. Re-parsing the rendered text yields an
/// expression with the same value.
///
/// # Example
/// ```
/// use parith::ast::{BinaryOperator, Expr};
///
/// let expr = Expr::Binary { op:    BinaryOperator::Add,
///                           left:  Box::new(Expr::Number(1.0)),
///                           right: Box::new(Expr::Number(2.0)), };
///
/// assert_eq!(expr.to_string(), "(1 + 2)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { id, args } => {
                write!(f, "{}", id.name())?;
                if args.is_empty() {
                    return Ok(());
                }
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::Variable { name } => write!(f, "{name}"),
        }
    }
}
