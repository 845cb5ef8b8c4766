use super::algorithms::Algorithm;
use super::report::RootFindingReport;
use super::tolerances::{step_converged, validate_tolerance};
use super::trace::{emit, IterationRecord, TraceObserver};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x1={x1} and x2={x2} must be finite")]
    InvalidGuess { x1: f64, x2: f64 },

    #[error("divergence: f(x1) == f(x2) = {fx} at x1={x1}, x2={x2}; secant step undefined")]
    Divergence { x1: f64, x2: f64, fx: f64 },

    #[error("secant step non-finite from x1={x1}, x2={x2}")]
    StepNotFinite { x1: f64, x2: f64 },
}

impl SecantError {
    /// `true` when the recurrence itself broke down, as opposed to bad
    /// input or a bad function value.
    pub fn is_divergence(&self) -> bool {
        matches!(self, SecantError::Divergence { .. } | SecantError::StepNotFinite { .. })
    }
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with the step tolerance and optional `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] ([`MAX_ITS`](super::algorithms::MAX_ITS)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the next secant iterate from the line through
/// `(x1, fx1)` and `(x2, fx2)`:
/// `x2 - fx2 * (x2 - x1) / (fx2 - fx1)`
///
/// # Returns
/// - `Ok(x_next)`               : if the step is finite
/// - `Err(Divergence)`          : if `fx2 == fx1`
/// - `Err(StepNotFinite)`       : if the quotient overflows
#[inline]
pub(crate) fn secant_step(
    (x1, fx1): (f64, f64),
    (x2, fx2): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx2 - fx1;
    if denom == 0.0 {
        return Err(SecantError::Divergence { x1, x2, fx: fx2 });
    }

    let x_next = x2 - fx2 * ((x2 - x1) / denom);
    if !x_next.is_finite() {
        return Err(SecantError::StepNotFinite { x1, x2 });
    }

    Ok(x_next)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`     : The function whose root is to be found
/// - `x1`       : First initial guess.  Must be finite
/// - `x2`       : Second initial guess. Must be finite; need not bracket a root
/// - `cfg`      : [`SecantCfg`] (step tolerance, optional `max_iter`)
/// - `observer` : receives [`IterationRecord`]s; indices 0 and 1 are `x1`
///   and `x2`, then one row per computed iterate. No derivative column.
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`           : first iterate with `|x_next - x2| < tolerance`
/// - `f_root`         : function value at `root`
/// - `iterations`     : number of iterates computed
/// - `evaluations`    : total function evaluations
/// - `tolerance`      : tolerance used
/// - `algorithm_name` : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]                : `x1` or `x2` is NaN/inf
/// - [`SecantError::Divergence`]                  : `f(x2) == f(x1)`
/// - [`SecantError::StepNotFinite`]               : secant step overflowed
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`]    : `f(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimitExceeded`] : tolerance not met within `max_iter`
/// - [`RootFindingError::InvalidMaxIter`]         : `max_iter` = 0
///
/// * Propagated via [`SecantError::Tolerance`]
/// - [`ToleranceError::InvalidTolerance`]         : tolerance <= 0.0 or inf
///
/// # Behavior
/// - Update:
///     - x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
///     - the window slides: (x_{k-1}, x_k) <- (x_k, x_{k+1})
/// - Function values are carried with the window, so each iterate costs
///   one evaluation.
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
pub fn secant<F, O> (
    mut func: F,
    x1: f64,
    x2: f64,
    cfg: SecantCfg,
    observer: &mut O,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
    O: TraceObserver + ?Sized
{
    if !(x1.is_finite() && x2.is_finite()) {
        return Err(SecantError::InvalidGuess { x1, x2 });
    }

    let algorithm  = Algorithm::Secant;
    let algo_name  = algorithm.algorithm_name();
    let tol        = validate_tolerance(cfg.common.tolerance())?;

    let num_iter = match cfg.common.max_iter() {
        // already validated via building config; redundant guard
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),

        Some(v) => v,
        None    => algorithm.default_max_iter(),
    };

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        }

        Ok(fx)
    };

    // rows 0 and 1: the two starting points
    let fx1 = eval(x1)?;
    emit(observer, algo_name, IterationRecord { index: 0, x: x1, fx: fx1, dfx: None });
    let fx2 = eval(x2)?;
    emit(observer, algo_name, IterationRecord { index: 1, x: x2, fx: fx2, dfx: None });

    // main loop
    let mut x_prev = x1;
    let mut f_prev = fx1;
    let mut x_curr = x2;
    let mut f_curr = fx2;
    for iter in 1..=num_iter {
        let x_next = secant_step((x_prev, f_prev), (x_curr, f_curr)).inspect_err(|e| {
            log::warn!("{algo_name}: {e}");
        })?;
        let f_next = eval(x_next)?;
        emit(observer, algo_name, IterationRecord { index: iter + 1, x: x_next, fx: f_next, dfx: None });

        // check step tolerance
        if step_converged(x_curr, x_next, tol) {
            log::info!("{algo_name}: converged to x={x_next} in {iter} iteration(s)");
            return Ok(RootFindingReport {
                root           : x_next,
                f_root         : f_next,
                iterations     : iter,
                evaluations    : evals,
                tolerance      : tol,
                algorithm_name : algo_name,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    log::warn!("{algo_name}: no convergence within {num_iter} iterations, last x={x_curr}");
    Err(RootFindingError::IterationLimitExceeded { max_iter: num_iter, last: x_curr }.into())
}
