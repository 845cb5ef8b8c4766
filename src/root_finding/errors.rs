//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   ├ iteration limit exceeded without meeting the tolerance
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ malformed `10^<exponent>` text (format errors)
//!     └ invalid tolerance value (non-finite or <= 0)
//!
//! Method-specific failures (vanishing denominators) live with each
//! method: [`NewtonError`](super::newton::NewtonError) and
//! [`SecantError`](super::secant::SecantError).


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// ├ No iterate met the tolerance within `max_iter` iterations
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("failed to converge within {max_iter} iterations; last estimate x={last}")]
    IterationLimitExceeded { max_iter: usize, last: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance parsing and validation errors.
///
/// ┌ Text lacks `^`
/// ├ Text before `^` is not `10`
/// ├ Text after `^` is not a real number
/// └ Tolerance invalid (<= 0 or non-finite)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToleranceError {
    #[error("tolerance must be written as '10^<exponent>' (e.g. '10^-6'); no '^' in '{input}'")]
    MissingCaret { input: String },

    #[error("tolerance base must be 10. got '{base}'")]
    UnsupportedBase { base: String },

    #[error("tolerance exponent must be a number. got '{exponent}'")]
    InvalidExponent { exponent: String },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}

impl ToleranceError {
    /// `true` for errors in the textual form, as opposed to a bad value.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ToleranceError::InvalidTolerance { .. })
    }
}
