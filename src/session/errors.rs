//! Session-level error types.
//!
//! ┌ [`RunError`]     : one method run failed (input or numerics)
//! ├ [`ConfigError`]  : config file unreadable or invalid
//! ├ [`LoggerError`]  : logger could not be installed
//! ├ [`InvalidChoice`]: menu answer not understood
//! └ [`SessionError`] : console I/O failed; ends the session

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::expression::ExpressionError;
use crate::root_finding::{NewtonError, RootFindingError, SecantError, ToleranceError};


/// Everything that can stop a single Newton or secant run.
///
/// `Expression` and `Tolerance` are input errors the session recovers from
/// by asking again; the method errors end the run and are reported with
/// the partial trace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Newton(#[from] NewtonError),

    #[error(transparent)]
    Secant(#[from] SecantError),
}

impl RunError {
    /// Zero denominator (or non-finite step) in either recurrence.
    pub fn is_divergence(&self) -> bool {
        match self {
            RunError::Newton(e) => e.is_divergence(),
            RunError::Secant(e) => e.is_divergence(),
            _ => false,
        }
    }

    /// Tolerance not met within the iteration cap.
    pub fn is_iteration_limit(&self) -> bool {
        matches!(
            self,
            RunError::RootFinding(RootFindingError::IterationLimitExceeded { .. })
                | RunError::Newton(NewtonError::RootFinding(RootFindingError::IterationLimitExceeded { .. }))
                | RunError::Secant(SecantError::RootFinding(RootFindingError::IterationLimitExceeded { .. }))
        )
    }
}


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid precision: must be <= {max}. got precision={got}")]
    InvalidPrecision { got: usize, max: usize },

    #[error("invalid log_level '{got}': expected off, error, warn, info, debug or trace")]
    InvalidLogLevel { got: String },

    #[error("invalid default_expression: {0}")]
    DefaultExpression(#[from] ExpressionError),
}


#[derive(Debug, Error)]
pub enum LoggerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot create log file {}: {source}", .path.display())]
    File { path: PathBuf, #[source] source: io::Error },

    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}


#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice '{0}'")]
pub struct InvalidChoice(pub String);


#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
