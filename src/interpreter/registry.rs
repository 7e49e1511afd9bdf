use std::collections::HashMap;

/// Type alias for builtin evaluation handlers.
///
/// A handler receives the already evaluated argument values and returns the
/// numeric result. Argument counts are validated against the entry's
/// [`Arity`] before the handler runs.
pub type EvalFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The builtin must receive exactly this many arguments. Zero means the
    /// builtin is a constant and is written without brackets.
    Exact(usize),
    /// The builtin accepts any number of arguments (at least one).
    Variadic,
}

/// A single row of the builtin table.
///
/// Rows are immutable and live for the whole process; they are reachable both
/// by dense tag (array lookup) and by name (string lookup through
/// [`Registries`]).
pub struct BuiltinDef {
    /// Dense tag of this builtin.
    pub id: Builtin,
    /// Source spelling, looked up by the lexer and the parser.
    pub name: &'static str,
    /// Number of arguments the builtin expects.
    pub arity: Arity,
    /// Evaluation handler applied to the evaluated arguments.
    pub eval: EvalFn,
}

/// Defines the builtin functions and constants.
///
/// Each entry provides the tag variant, the source spelling, an arity
/// specification, and the evaluation handler. The macro produces the
/// [`Builtin`] tag enum and the static lookup table in the same order, which
/// keeps `id as usize` a valid table index.
macro_rules! builtins {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                arity: $arity:expr,
                eval: $eval:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Dense tag identifying a registered builtin.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Builtin {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { id: Builtin::$variant, name: $name, arity: $arity, eval: $eval },
            )*
        ];
    };
}

builtins! {
    Sin    => { name: "sin",    arity: Arity::Exact(1), eval: |args| args[0].sin() },
    Cos    => { name: "cos",    arity: Arity::Exact(1), eval: |args| args[0].cos() },
    Tan    => { name: "tan",    arity: Arity::Exact(1), eval: |args| args[0].tan() },
    Asin   => { name: "arcsin", arity: Arity::Exact(1), eval: |args| args[0].asin() },
    Acos   => { name: "arccos", arity: Arity::Exact(1), eval: |args| args[0].acos() },
    Atan   => { name: "arctan", arity: Arity::Exact(1), eval: |args| args[0].atan() },
    Sqrt   => { name: "sqrt",   arity: Arity::Exact(1), eval: |args| args[0].sqrt() },
    Log    => { name: "log",    arity: Arity::Exact(1), eval: |args| args[0].ln() },
    Min    => { name: "min",    arity: Arity::Exact(2), eval: |args| args[0].min(args[1]) },
    Max    => { name: "max",    arity: Arity::Exact(2), eval: |args| args[0].max(args[1]) },
    Pi     => { name: "pi",     arity: Arity::Exact(0), eval: |_| std::f64::consts::PI },
    E      => { name: "e",      arity: Arity::Exact(0), eval: |_| std::f64::consts::E },
    Mean   => { name: "mean",   arity: Arity::Variadic,
                eval: |args| args.iter().sum::<f64>() / args.len() as f64 },
}

impl Builtin {
    /// Gets the table row for this tag. Dense array lookup.
    #[must_use]
    pub fn info(self) -> &'static BuiltinDef {
        &BUILTIN_TABLE[self as usize]
    }

    /// Gets the source spelling of this builtin.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }
}

/// The symbol tables of the language, built once at startup.
///
/// `Registries` owns the name index over the static builtin table and is
/// passed by reference into tokenizing, parsing, and evaluation. The table
/// itself never changes after construction, so shared read-only access is
/// safe.
///
/// # Example
/// ```
/// use parith::interpreter::registry::{Arity, Registries};
///
/// let registries = Registries::new();
///
/// assert_eq!(registries.lookup("mean").unwrap().arity, Arity::Variadic);
/// assert!(registries.lookup("foo").is_none());
/// ```
pub struct Registries {
    /// Maps source spellings to builtin tags.
    name_index: HashMap<&'static str, Builtin>,
}

impl Registries {
    /// Builds the name index over the builtin table.
    #[must_use]
    pub fn new() -> Self {
        let name_index = BUILTIN_TABLE.iter().map(|def| (def.name, def.id)).collect();
        Self { name_index }
    }

    /// Looks up a builtin by its source spelling.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static BuiltinDef> {
        self.name_index.get(name).map(|id| id.info())
    }

    /// Tests whether `name` is a registered builtin.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}
