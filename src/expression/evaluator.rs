//! Compiled single-variable expressions.
//!
//! [`Expression`] holds the source text and its parsed tree. Compilation
//! resolves every name against a [`FunctionRegistry`], so an expression
//! that compiles can always be evaluated; domain errors (`log(-1)`,
//! `1/0`) surface as NaN/inf per IEEE-754 and are left to the caller.

use std::fmt;

use super::errors::ExpressionError;
use super::lexer::tokenize;
use super::node::Node;
use super::parser::Parser;
use super::registry::{default_registry, FunctionRegistry};


#[derive(Debug, Clone)]
pub struct Expression {
    source : String,
    root   : Node,
}

impl Expression {
    /// Compiles `text` against [`default_registry`].
    pub fn compile(text: &str) -> Result<Self, ExpressionError> {
        Self::compile_with(text, default_registry())
    }

    /// Compiles `text` against `registry`.
    ///
    /// # Errors
    /// - [`ExpressionError::Empty`]             : blank text
    /// - [`ExpressionError::UnexpectedChar`]    : character outside the grammar
    /// - [`ExpressionError::UnknownIdentifier`] : name that is not `x` or a constant
    /// - [`ExpressionError::UnknownFunction`]   : call to an unregistered function
    /// - [`ExpressionError::ArityMismatch`]     : wrong number of call arguments
    /// - remaining variants for malformed syntax
    pub fn compile_with(text: &str, registry: &FunctionRegistry) -> Result<Self, ExpressionError> {
        let source = text.trim();
        let tokens = tokenize(source)?;
        let root = Parser::new(&tokens, registry).parse()?;

        log::debug!("compiled expression `{source}`");

        Ok(Self { source: source.to_string(), root })
    }

    /// Evaluates the expression at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Source text, trimmed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `false` for constant expressions such as `2 + 3`.
    pub fn depends_on_x(&self) -> bool {
        self.root.depends_on_x()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}


/// Compiles `text` and evaluates it at `x` in one step, using
/// [`default_registry`].
///
/// Nothing is cached; callers evaluating the same text repeatedly should
/// hold on to an [`Expression`] instead.
pub fn evaluate(text: &str, x: f64) -> Result<f64, ExpressionError> {
    evaluate_with(text, x, default_registry())
}

/// Like [`evaluate`] with an explicit registry.
pub fn evaluate_with(text: &str, x: f64, registry: &FunctionRegistry) -> Result<f64, ExpressionError> {
    Ok(Expression::compile_with(text, registry)?.eval(x))
}
