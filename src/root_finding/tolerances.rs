//! Tolerance utilities for root-finding algorithms.
//!
//! Tolerances are entered as `10^<exponent>` and used as an absolute
//! bound on the distance between consecutive estimates.
//!
//! - [`parse_tolerance`]    : `"10^-6"` -> `1e-6`
//! - [`validate_tolerance`] : finite and > 0
//! - [`step_converged`]     : `|next - prev| < tol`


use crate::root_finding::errors::ToleranceError;


/// Converts a tolerance written as `10^<exponent>` into its value.
///
/// # Arguments
/// - `text` : e.g. `"10^-6"`, `"10^0"`, `"10^-2.5"`; surrounding
///   whitespace is ignored
///
/// # Returns
/// - `Ok(10^exponent)`; integer exponents are exact (`"10^-6"` == `1e-6`)
///
/// # Errors
/// - [`ToleranceError::MissingCaret`]     : no `^` in `text`
/// - [`ToleranceError::UnsupportedBase`]  : text before `^` is not `10`
/// - [`ToleranceError::InvalidExponent`]  : text after `^` is not a real number
/// - [`ToleranceError::InvalidTolerance`] : value is not finite and > 0
///   (e.g. `"10^400"`, `"10^-400"`)
pub fn parse_tolerance(text: &str) -> Result<f64, ToleranceError> {
    let text = text.trim();

    let (base, exponent) = text
        .split_once('^')
        .ok_or_else(|| ToleranceError::MissingCaret { input: text.to_string() })?;

    let base = base.trim();
    if base != "10" {
        return Err(ToleranceError::UnsupportedBase { base: base.to_string() });
    }

    let exponent = exponent.trim();
    let invalid = || ToleranceError::InvalidExponent { exponent: exponent.to_string() };

    // integer exponents go through the decimal parser so 10^-6 is exactly 1e-6
    let value = if let Ok(e) = exponent.parse::<i32>() {
        format!("1e{e}").parse::<f64>().map_err(|_| invalid())?
    } else {
        let e = exponent.parse::<f64>().map_err(|_| invalid())?;
        if !e.is_finite() {
            return Err(invalid());
        }
        10f64.powf(e)
    };

    validate_tolerance(value)?;
    log::debug!("parsed tolerance '{text}' -> {value:e}");

    Ok(value)
}


/// Checks that `tol` is usable as an absolute step bound.
///
/// # Errors
/// - [`ToleranceError::InvalidTolerance`] if `tol` is non-finite or <= 0
#[inline]
pub fn validate_tolerance(tol: f64) -> Result<f64, ToleranceError> {
    if !tol.is_finite() || tol <= 0.0 {
        return Err(ToleranceError::InvalidTolerance { got: tol });
    }
    Ok(tol)
}


/// Convergence test shared by both methods. Strict, so a step of exactly
/// `tol` keeps iterating.
#[inline]
pub(crate) fn step_converged(prev: f64, next: f64, tol: f64) -> bool {
    (next - prev).abs() < tol
}
