//! Expression compilation errors.
//!
//! ┌ [`ExpressionError`] : the text does not compile into a formula over `x`
//! │   ├ lexical errors (unexpected character, malformed number)
//! │   ├ syntax errors  (unexpected token, unexpected end, unbalanced parens)
//! │   ├ name errors    (unknown identifier/function, arity mismatch)
//! │   └ nesting deeper than the parser allows
//! │
//! └ positions are byte offsets into the source text


use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal '{literal}' at position {pos}")]
    InvalidNumber { literal: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    #[error("unknown identifier '{name}' at position {pos}; the only variable is `x`")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("function '{name}' at position {pos} is missing its argument list")]
    MissingArguments { name: String, pos: usize },

    #[error("unknown function '{name}' at position {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("function '{name}' expects {expected} argument(s), got {got}")]
    ArityMismatch { name: String, expected: String, got: usize },

    #[error("expression nested too deeply at position {pos} (limit {max})")]
    TooDeep { pos: usize, max: usize },
}
