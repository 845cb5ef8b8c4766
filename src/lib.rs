//! Interactive root approximation.
//!
//! ┌ [`expression`]   : parse and evaluate a real function of `x`
//! ├ [`root_finding`] : Newton's and the secant method with per-iteration trace
//! └ [`session`]      : prompts, config, logging and table output

pub mod expression;
pub mod root_finding;
pub mod session;
