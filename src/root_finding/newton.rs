//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::report::RootFindingReport;
use super::tolerances::{step_converged, validate_tolerance};
use super::trace::{emit, IterationRecord, TraceObserver};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x1={x1}, x2={x2}; both and their midpoint must be finite")]
    InvalidGuess { x1: f64, x2: f64 },

    #[error("divergence: derivative vanishes at x={x}, f'(x)={dfx}; Newton step undefined")]
    Divergence { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("finite-difference step not representable at x={x}, h={h};\
             try smaller |x| scaling or analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 },
}

impl NewtonError {
    /// `true` when the recurrence itself broke down (vanishing or
    /// non-finite step), as opposed to bad input or a bad function value.
    pub fn is_divergence(&self) -> bool {
        matches!(self, NewtonError::Divergence { .. } | NewtonError::StepNotFinite { .. })
    }
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with the step tolerance and optional `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters
///   ([`NewtonCfg::set_tolerance`], [`NewtonCfg::set_max_iter`]).
///
/// # Defaults
/// - If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] ([`MAX_ITS`](super::algorithms::MAX_ITS)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(NewtonCfg);


/// Starting estimate for Newton's method: the midpoint of two guesses.
#[inline]
pub fn midpoint(x1: f64, x2: f64) -> f64 {
    (x1 + x2) / 2.0
}


/// ULP helpers for finite-difference fallback near representability edges
#[inline]
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal
    if x == 0.0 { return f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}
#[inline]
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY { return x; }
    // largest negative subnormal
    if x == 0.0 { return -f64::from_bits(1); }

    let bits = x.to_bits();
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Helpers
/// - `eval_fx_checked`   : evaluates `f(x)` with finite-check
/// - `eval_dfx_analytic` : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`       : central finite-difference with ULP rescue
/// - `eval_dfx`          : picks analytic or finite-difference
#[inline]
fn eval_fx_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }

    Ok(fx)
}
#[inline]
fn eval_dfx_analytic<G>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> f64 {
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_fd<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    // central finite-difference
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let mut xp = x + h;
    let mut xm = x - h;

    // try rescue if representability collapses
    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        xp = next_up(x);
        xm = next_down(x);
        h = 0.5 * (xp - xm);

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let fxp = eval_fx_checked(f, xp, evals)?;
    let fxm = eval_fx_checked(f, xm, evals)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx<F, G>(
    f: &mut F,
    df: Option<&mut G>,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    match df {
        Some(g) => eval_dfx_analytic(g, x, evals),
        None    => eval_dfx_fd(f, x, evals),
    }
}


fn newton_loop<F, G, O>(
    mut f: F,
    mut df: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
    observer: &mut O,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    O: TraceObserver + ?Sized
{
    let algorithm = Algorithm::Newton;
    let algo_name = algorithm.algorithm_name();

    let tol      = validate_tolerance(cfg.common.tolerance())?;
    let num_iter = match cfg.common.max_iter() {
        // already validated via building config; redundant guard
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),

        Some(v) => v,
        None    => algorithm.default_max_iter(),
    };

    let mut evals: usize = 0;

    // row 0: the starting midpoint
    let mut x   = x0;
    let mut fx  = eval_fx_checked(&mut f, x, &mut evals)?;
    let mut dfx = eval_dfx(&mut f, df.as_mut(), x, &mut evals)?;
    emit(observer, algo_name, IterationRecord { index: 0, x, fx, dfx: Some(dfx) });

    // main loop
    for iter in 1..=num_iter {
        if dfx == 0.0 {
            log::warn!("{algo_name}: zero derivative at x={x} after {} iteration(s)", iter - 1);
            return Err(NewtonError::Divergence { x, dfx });
        }

        // raw step
        let step = -fx / dfx;
        if !step.is_finite() {
            log::warn!("{algo_name}: non-finite step at x={x}, f'(x)={dfx}");
            return Err(NewtonError::Divergence { x, dfx });
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let fx_next = eval_fx_checked(&mut f, x_next, &mut evals)?;

        // check step tolerance; f' at the root is only shown, never required
        if step_converged(x, x_next, tol) {
            let dfx_next = eval_dfx(&mut f, df.as_mut(), x_next, &mut evals).ok();
            emit(observer, algo_name, IterationRecord { index: iter, x: x_next, fx: fx_next, dfx: dfx_next });

            log::info!("{algo_name}: converged to x={x_next} in {iter} iteration(s)");
            return Ok(RootFindingReport {
                root           : x_next,
                f_root         : fx_next,
                iterations     : iter,
                evaluations    : evals,
                tolerance      : tol,
                algorithm_name : algo_name,
            });
        }

        let dfx_next = eval_dfx(&mut f, df.as_mut(), x_next, &mut evals)?;
        emit(observer, algo_name, IterationRecord { index: iter, x: x_next, fx: fx_next, dfx: Some(dfx_next) });

        x   = x_next;
        fx  = fx_next;
        dfx = dfx_next;
    }

    log::warn!("{algo_name}: no convergence within {num_iter} iterations, last x={x}");
    Err(RootFindingError::IterationLimitExceeded { max_iter: num_iter, last: x }.into())
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// starting from the midpoint of `x1` and `x2`.
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`     : function whose root is sought
/// - `dfunc`    : optional analytic derivative; if `None`, use finite-difference
/// - `x1`/`x2`  : finite guesses; the iteration starts at `(x1 + x2) / 2`
/// - `cfg`      : [`NewtonCfg`] (step tolerance, optional `max_iter`)
/// - `observer` : receives one [`IterationRecord`] per row, index 0 being
///   the midpoint; every row carries `f'(x)`, except that the final row's
///   `f'(x)` is `None` when it cannot be evaluated
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`           : first iterate with `|x_{n+1} - x_n| < tolerance`
/// - `f_root`         : function value at `root`
/// - `iterations`     : number of iterates computed
/// - `evaluations`    : total evaluations (f and f')
/// - `tolerance`      : tolerance used
/// - `algorithm_name` : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]                 : `x1`, `x2` or midpoint non-finite
/// - [`NewtonError::Divergence`]                   : `f'(x) == 0` or the step `-f/f'` is non-finite
/// - [`NewtonError::StepNotFinite`]                : `x + step` not representable
/// - [`NewtonError::DerivativeNotFinite`]          : derivative non-finite at a non-final iterate
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`]  : FD step unrepresentable near `x`
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonFiniteEvaluation`]     : `f(x)` produced NaN/inf
/// - [`RootFindingError::IterationLimitExceeded`]  : tolerance not met within `max_iter`
/// - [`RootFindingError::InvalidMaxIter`]          : `max_iter = 0`
///
/// * Propagated via [`NewtonError::Tolerance`]:
/// - [`ToleranceError::InvalidTolerance`]          : tolerance <= 0.0 or inf
///
/// # Behavior
/// - Derivative:
///     - analytic path uses `df(x)`
///     - FD path uses central finite-difference with `h = eps^{1/3} * max(|x|, 1)`,
///       rescued by ULP nudges (`next_up/down`) if `x +/- h` collapses.
/// - Trace: rows observed before an error are kept by the observer, so a
///   failed run still shows how far it got.
///
/// # Notes
/// - Convergence is *local only* and depends on a good starting point and
///   smoothness of `f`. Poor guesses or ill-behaved functions can diverge or cycle.
pub fn newton<F, G, O>(
    func: F,
    dfunc: Option<G>,
    x1: f64,
    x2: f64,
    cfg: NewtonCfg,
    observer: &mut O,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    O: TraceObserver + ?Sized
{
    let x0 = midpoint(x1, x2);
    if !(x1.is_finite() && x2.is_finite() && x0.is_finite()) {
        return Err(NewtonError::InvalidGuess { x1, x2 });
    }

    newton_loop(func, dfunc, x0, cfg, observer)
}
