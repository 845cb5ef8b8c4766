//! Glue between compiled expressions and the root-finding methods.
//!
//! Both entry points take the expression explicitly; nothing is shared
//! between runs except what the caller passes in.

use crate::expression::Expression;
use crate::root_finding::{
    newton, parse_tolerance, secant, NewtonCfg, RootFindingReport, SecantCfg, TraceObserver,
};

use super::errors::RunError;


/// Runs Newton's method on `expression` from the midpoint of `x1`, `x2`.
///
/// `derivative` is the user's `f'(x)`; when `None` the derivative is
/// approximated by central differences of `expression`.
pub fn solve_newton<O>(
    expression: &Expression,
    derivative: Option<&Expression>,
    x1: f64,
    x2: f64,
    tolerance: f64,
    max_iter: usize,
    observer: &mut O,
) -> Result<RootFindingReport, RunError>
where O: TraceObserver + ?Sized {
    let cfg = NewtonCfg::new()
        .set_tolerance(tolerance)?
        .set_max_iter(max_iter)?;

    log::info!(
        "newton: f(x) = {expression}, f'(x) = {}, x1={x1}, x2={x2}, tol={tolerance:e}",
        derivative.map_or("<numeric>".to_string(), |d| d.to_string())
    );

    let f = |x: f64| expression.eval(x);
    let report = match derivative {
        Some(d) => newton(f, Some(|x: f64| d.eval(x)), x1, x2, cfg, observer)?,
        None    => newton(f, None::<fn(f64) -> f64>, x1, x2, cfg, observer)?,
    };

    Ok(report)
}


/// Runs the secant method on `expression` from `x1`, `x2`.
pub fn solve_secant<O>(
    expression: &Expression,
    x1: f64,
    x2: f64,
    tolerance: f64,
    max_iter: usize,
    observer: &mut O,
) -> Result<RootFindingReport, RunError>
where O: TraceObserver + ?Sized {
    let cfg = SecantCfg::new()
        .set_tolerance(tolerance)?
        .set_max_iter(max_iter)?;

    log::info!("secant: f(x) = {expression}, x1={x1}, x2={x2}, tol={tolerance:e}");

    Ok(secant(|x: f64| expression.eval(x), x1, x2, cfg, observer)?)
}


/// Compiles `function` and `derivative` texts, parses `tolerance` and runs
/// Newton's method with the default iteration cap.
///
/// An empty `derivative` text selects the numeric derivative.
pub fn newton_from_text<O>(
    function: &str,
    derivative: &str,
    x1: f64,
    x2: f64,
    tolerance: &str,
    observer: &mut O,
) -> Result<RootFindingReport, RunError>
where O: TraceObserver + ?Sized {
    let expression = Expression::compile(function)?;
    let derivative = match derivative.trim() {
        ""   => None,
        text => Some(Expression::compile(text)?),
    };
    let tol = parse_tolerance(tolerance)?;

    solve_newton(&expression, derivative.as_ref(), x1, x2, tol, crate::root_finding::MAX_ITS, observer)
}


/// Compiles `function`, parses `tolerance` and runs the secant method with
/// the default iteration cap.
pub fn secant_from_text<O>(
    function: &str,
    x1: f64,
    x2: f64,
    tolerance: &str,
    observer: &mut O,
) -> Result<RootFindingReport, RunError>
where O: TraceObserver + ?Sized {
    let expression = Expression::compile(function)?;
    let tol = parse_tolerance(tolerance)?;

    solve_secant(&expression, x1, x2, tol, crate::root_finding::MAX_ITS, observer)
}
