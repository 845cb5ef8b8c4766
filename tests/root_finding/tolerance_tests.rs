use root_approximator::root_finding::errors::ToleranceError;
use root_approximator::root_finding::tolerances::{parse_tolerance, validate_tolerance};

type TestResult = Result<(), ToleranceError>;

#[test]
fn integer_exponents_are_exact() -> TestResult {
    assert_eq!(parse_tolerance("10^-6")?, 1e-6);
    assert_eq!(parse_tolerance("10^-7")?, 1e-7);
    assert_eq!(parse_tolerance("10^0")?, 1.0);
    assert_eq!(parse_tolerance("10^2")?, 100.0);
    Ok(())
}

#[test]
fn whitespace_is_ignored() -> TestResult {
    assert_eq!(parse_tolerance("  10 ^ -3 \n")?, 1e-3);
    Ok(())
}

#[test]
fn fractional_exponent() -> TestResult {
    let tol = parse_tolerance("10^-2.5")?;
    assert!((tol - 10f64.powf(-2.5)).abs() < 1e-15);
    Ok(())
}

#[test]
fn missing_caret_is_a_format_error() {
    let err = parse_tolerance("1e-6").unwrap_err();
    assert_eq!(err, ToleranceError::MissingCaret { input: "1e-6".to_string() });
    assert!(err.is_format_error());
}

#[test]
fn other_bases_are_rejected() {
    assert!(matches!(
        parse_tolerance("2^-10"),
        Err(ToleranceError::UnsupportedBase { base }) if base == "2"
    ));
}

#[test]
fn bad_exponent_is_rejected() {
    assert!(matches!(parse_tolerance("10^abc"), Err(ToleranceError::InvalidExponent { .. })));
    assert!(matches!(parse_tolerance("10^"), Err(ToleranceError::InvalidExponent { .. })));
    assert!(matches!(parse_tolerance("10^inf"), Err(ToleranceError::InvalidExponent { .. })));
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(matches!(parse_tolerance("10^400"), Err(ToleranceError::InvalidTolerance { .. })));
    assert!(matches!(parse_tolerance("10^-400"), Err(ToleranceError::InvalidTolerance { .. })));
}

#[test]
fn validate_requires_positive_finite() {
    assert!(validate_tolerance(1e-9).is_ok());
    assert!(validate_tolerance(0.0).is_err());
    assert!(validate_tolerance(-1.0).is_err());
    assert!(validate_tolerance(f64::NAN).is_err());
}
