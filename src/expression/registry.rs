//! Named functions and constants available to every expression.
//!
//! [`FunctionRegistry`]
//! ├ functions : name -> [`Function`] (name + [`FunctionBody`])
//! └ constants : name -> value (`pi`, `e`)
//!
//! Two configurations share one evaluator:
//! - [`FunctionRegistry::builtin`]               : math library only
//! - [`FunctionRegistry::with_custom_functions`] : math library + `myFunc`
//!
//! Names are matched case-insensitively. [`default_registry`] is the
//! process-wide, read-only instance used when no registry is given.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}
impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exact(k)   => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }
}
impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(k)   => write!(f, "{k}"),
            Arity::AtLeast(k) => write!(f, "at least {k}"),
        }
    }
}


/// Implementation of a registered function.
/// - [`FunctionBody::Unary`]    : exactly one argument
/// - [`FunctionBody::Binary`]   : exactly two arguments
/// - [`FunctionBody::Variadic`] : at least `min` arguments
#[derive(Debug, Copy, Clone)]
pub enum FunctionBody {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    Variadic { min: usize, body: fn(&[f64]) -> f64 },
}


#[derive(Debug, Copy, Clone)]
pub struct Function {
    pub name : &'static str,
    pub body : FunctionBody,
}
impl Function {
    pub fn arity(&self) -> Arity {
        match self.body {
            FunctionBody::Unary(_)             => Arity::Exact(1),
            FunctionBody::Binary(_)            => Arity::Exact(2),
            FunctionBody::Variadic { min, .. } => Arity::AtLeast(min),
        }
    }

    /// Applies the function, or returns `None` if `args` does not satisfy
    /// [`Function::arity`].
    #[inline]
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        match (self.body, args) {
            (FunctionBody::Unary(op), &[a])      => Some(op(a)),
            (FunctionBody::Binary(op), &[a, b])  => Some(op(a, b)),
            (FunctionBody::Variadic { min, body }, _) if args.len() >= min => Some(body(args)),
            _ => None,
        }
    }
}


/// The custom two-argument function: `myFunc(a, b) = 1 + (a*b)/3`.
pub fn my_func(a: f64, b: f64) -> f64 {
    1.0 + (a * b) / 3.0
}


#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions : HashMap<String, Function>,
    constants : HashMap<String, f64>,
}

impl FunctionRegistry {
    /// Empty registry: no functions, no constants.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard math library and the constants `pi` and `e`.
    pub fn builtin() -> Self {
        use FunctionBody::{Binary, Unary, Variadic};

        let mut reg = Self::empty();

        reg.define_constant("pi", std::f64::consts::PI);
        reg.define_constant("e",  std::f64::consts::E);

        reg.define("sin",   Unary(f64::sin));
        reg.define("cos",   Unary(f64::cos));
        reg.define("tan",   Unary(f64::tan));
        reg.define("asin",  Unary(f64::asin));
        reg.define("acos",  Unary(f64::acos));
        reg.define("atan",  Unary(f64::atan));
        reg.define("sinh",  Unary(f64::sinh));
        reg.define("cosh",  Unary(f64::cosh));
        reg.define("tanh",  Unary(f64::tanh));
        reg.define("exp",   Unary(f64::exp));
        reg.define("log",   Unary(f64::ln));
        reg.define("ln",    Unary(f64::ln));
        reg.define("log10", Unary(f64::log10));
        reg.define("log2",  Unary(f64::log2));
        reg.define("sqrt",  Unary(f64::sqrt));
        reg.define("cbrt",  Unary(f64::cbrt));
        reg.define("abs",   Unary(f64::abs));
        reg.define("floor", Unary(f64::floor));
        reg.define("ceil",  Unary(f64::ceil));
        reg.define("round", Unary(f64::round));

        reg.define("pow",   Binary(f64::powf));
        reg.define("atan2", Binary(f64::atan2));
        reg.define("hypot", Binary(f64::hypot));

        reg.define("min", Variadic { min: 1, body: |a| a.iter().copied().fold(f64::INFINITY, f64::min) });
        reg.define("max", Variadic { min: 1, body: |a| a.iter().copied().fold(f64::NEG_INFINITY, f64::max) });

        reg
    }

    /// [`FunctionRegistry::builtin`] plus the custom function `myFunc`.
    pub fn with_custom_functions() -> Self {
        let mut reg = Self::builtin();
        reg.define("myFunc", FunctionBody::Binary(my_func));
        reg
    }

    /// Registers (or replaces) a function.
    pub fn define(&mut self, name: &'static str, body: FunctionBody) {
        self.functions.insert(name.to_lowercase(), Function { name, body });
    }

    /// Registers (or replaces) a named constant.
    pub fn define_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_lowercase(), value);
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(&name.to_lowercase())
    }

    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(&name.to_lowercase()).copied()
    }

    /// Registered function names, sorted.
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.values().map(|f| f.name).collect();
        names.sort_unstable();
        names
    }
}


static DEFAULT_REGISTRY: LazyLock<FunctionRegistry> =
    LazyLock::new(FunctionRegistry::with_custom_functions);

/// Process-wide registry with the math library and `myFunc`.
pub fn default_registry() -> &'static FunctionRegistry {
    &DEFAULT_REGISTRY
}
