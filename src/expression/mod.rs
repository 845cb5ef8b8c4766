// function text -> compiled tree
pub mod errors;
pub mod registry;
pub mod evaluator;
pub(crate) mod lexer;
pub(crate) mod node;
pub(crate) mod parser;

pub use errors::ExpressionError;
pub use evaluator::{evaluate, evaluate_with, Expression};
pub use parser::MAX_DEPTH;
pub use registry::{default_registry, Arity, Function, FunctionBody, FunctionRegistry};

/// Name of the single free variable.
pub const VARIABLE: &str = "x";
