use approx::assert_relative_eq;

use root_approximator::expression::Expression;
use root_approximator::root_finding::{NoTrace, Trace};
use root_approximator::session::{newton_from_text, secant_from_text, solve_secant, RunError};

type TestResult = Result<(), RunError>;

#[test]
fn newton_from_text_with_and_without_derivative() -> TestResult {
    let analytic = newton_from_text("x^2 - 2", "2*x", 1.0, 2.0, "10^-7", &mut NoTrace)?;
    let numeric = newton_from_text("x^2 - 2", "  ", 1.0, 2.0, "10^-7", &mut NoTrace)?;

    assert_relative_eq!(analytic.root, 2.0_f64.sqrt(), epsilon = 1e-7);
    assert_relative_eq!(numeric.root, 2.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn secant_from_text_uses_custom_function() -> TestResult {
    // myFunc(x, 3) = 1 + x, root at -1
    let mut trace = Trace::new();
    let report = secant_from_text("myFunc(x, 3)", 0.0, 1.0, "10^-9", &mut trace)?;

    assert_relative_eq!(report.root, -1.0, epsilon = 1e-9);
    assert_eq!(trace.len(), report.iterations + 2);
    Ok(())
}

#[test]
fn input_errors_are_distinguished() {
    let bad_function = secant_from_text("x +", 0.0, 1.0, "10^-6", &mut NoTrace);
    assert!(matches!(bad_function, Err(RunError::Expression(_))));

    let bad_tolerance = secant_from_text("x", 0.0, 1.0, "0.001", &mut NoTrace);
    assert!(matches!(bad_tolerance, Err(RunError::Tolerance(_))));

    let bad_derivative = newton_from_text("x", "y", 0.0, 1.0, "10^-6", &mut NoTrace);
    assert!(matches!(bad_derivative, Err(RunError::Expression(_))));
}

#[test]
fn method_failures_are_classified() -> Result<(), Box<dyn std::error::Error>> {
    let parabola = Expression::compile("x^2 + 1")?;

    let divergence = solve_secant(&parabola, -1.0, 1.0, 1e-6, 20, &mut NoTrace).unwrap_err();
    assert!(divergence.is_divergence());
    assert!(!divergence.is_iteration_limit());

    let limit = newton_from_text("x^2 + 1", "2*x", 0.5, 1.0, "10^-6", &mut NoTrace).unwrap_err();
    assert!(limit.is_iteration_limit());
    assert!(!limit.is_divergence());
    Ok(())
}

#[test]
fn zero_cap_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let f = Expression::compile("x")?;
    let err = solve_secant(&f, 0.0, 1.0, 1e-6, 0, &mut NoTrace).unwrap_err();
    assert!(matches!(err, RunError::RootFinding(_)));
    Ok(())
}
