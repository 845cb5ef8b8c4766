use root_approximator::expression::{Expression, ExpressionError, MAX_DEPTH};

fn compile_err(text: &str) -> ExpressionError {
    match Expression::compile(text) {
        Ok(_) => panic!("`{text}` compiled"),
        Err(e) => e,
    }
}

#[test]
fn blank_text_is_empty() {
    assert_eq!(compile_err(""), ExpressionError::Empty);
    assert_eq!(compile_err("   "), ExpressionError::Empty);
}

#[test]
fn unknown_characters() {
    assert_eq!(compile_err("x # 2"), ExpressionError::UnexpectedChar { ch: '#', pos: 2 });
}

#[test]
fn malformed_numbers() {
    assert!(matches!(compile_err("."), ExpressionError::InvalidNumber { .. }));
}

#[test]
fn dangling_operator() {
    assert!(matches!(compile_err("x +"), ExpressionError::UnexpectedEnd { .. }));
}

#[test]
fn implicit_multiplication_is_rejected() {
    assert!(matches!(compile_err("2x"), ExpressionError::UnexpectedToken { pos: 1, .. }));
}

#[test]
fn unbalanced_parentheses() {
    assert!(matches!(compile_err("(x + 1"), ExpressionError::UnbalancedParen { pos: 0 }));
    assert!(matches!(compile_err("x + 1)"), ExpressionError::UnbalancedParen { pos: 5 }));
    assert!(matches!(compile_err("sin(x"), ExpressionError::UnbalancedParen { .. }));
}

#[test]
fn only_x_is_a_variable() {
    assert_eq!(
        compile_err("y + 1"),
        ExpressionError::UnknownIdentifier { name: "y".to_string(), pos: 0 }
    );
}

#[test]
fn unknown_functions() {
    assert_eq!(
        compile_err("foo(x)"),
        ExpressionError::UnknownFunction { name: "foo".to_string(), pos: 0 }
    );
}

#[test]
fn function_without_arguments() {
    assert!(matches!(compile_err("sin + 1"), ExpressionError::MissingArguments { .. }));
}

#[test]
fn wrong_number_of_arguments() {
    assert_eq!(
        compile_err("sin(x, 2)"),
        ExpressionError::ArityMismatch { name: "sin".to_string(), expected: "1".to_string(), got: 2 }
    );
    assert!(matches!(compile_err("max()"), ExpressionError::ArityMismatch { got: 0, .. }));
}

#[test]
fn deep_parenthesis_nesting_is_rejected() {
    let text = format!("{}x{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(matches!(compile_err(&text), ExpressionError::TooDeep { max: MAX_DEPTH, .. }));
}

#[test]
fn long_negation_run_is_rejected() {
    let text = format!("{}x", "-".repeat(200_000));
    assert!(matches!(compile_err(&text), ExpressionError::TooDeep { .. }));
}

#[test]
fn long_operator_chain_is_rejected() {
    let text = format!("{}x", "x + ".repeat(10_000));
    assert!(matches!(compile_err(&text), ExpressionError::TooDeep { .. }));

    let text = format!("{}x", "x^".repeat(10_000));
    assert!(matches!(compile_err(&text), ExpressionError::TooDeep { .. }));
}

#[test]
fn moderate_nesting_still_compiles() -> Result<(), ExpressionError> {
    let nested = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(Expression::compile(&nested)?.eval(3.0), 3.0);

    let chain = format!("{}x", "x + ".repeat(100));
    assert_eq!(Expression::compile(&chain)?.eval(1.0), 101.0);
    Ok(())
}
