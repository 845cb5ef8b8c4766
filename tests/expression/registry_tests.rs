use approx::assert_relative_eq;

use root_approximator::expression::registry::my_func;
use root_approximator::expression::{
    default_registry, evaluate, evaluate_with, Arity, Expression, ExpressionError, FunctionBody,
    FunctionRegistry,
};

type TestResult = Result<(), ExpressionError>;

#[test]
fn my_func_is_available_by_default() -> TestResult {
    for x in [-3.0, 0.0, 1.5, 10.0] {
        assert_relative_eq!(evaluate("myFunc(x, 2)", x)?, 1.0 + (2.0 * x) / 3.0);
    }
    assert_eq!(my_func(3.0, 3.0), 4.0);
    Ok(())
}

#[test]
fn builtin_registry_has_no_custom_functions() {
    let builtin = FunctionRegistry::builtin();
    assert!(matches!(
        evaluate_with("myFunc(x, 2)", 1.0, &builtin),
        Err(ExpressionError::UnknownFunction { .. })
    ));
    assert!(evaluate_with("sin(x)", 1.0, &builtin).is_ok());
}

#[test]
fn empty_registry_knows_nothing() {
    let empty = FunctionRegistry::empty();
    assert!(matches!(
        evaluate_with("pi", 1.0, &empty),
        Err(ExpressionError::UnknownIdentifier { .. })
    ));
    assert!(evaluate_with("x + 1", 1.0, &empty).is_ok());
}

#[test]
fn user_defined_functions_and_constants() -> TestResult {
    let mut reg = FunctionRegistry::builtin();
    reg.define("twice", FunctionBody::Unary(|a| 2.0 * a));
    reg.define("sum", FunctionBody::Variadic { min: 2, body: |a| a.iter().sum() });
    reg.define_constant("g", 9.81);

    let f = Expression::compile_with("twice(x) + sum(1, 2, 3) + G", &reg)?;
    assert_relative_eq!(f.eval(1.0), 2.0 + 6.0 + 9.81);

    assert_eq!(reg.function("SUM").map(|f| f.arity()), Some(Arity::AtLeast(2)));
    Ok(())
}

#[test]
fn function_names_are_sorted() {
    let names = FunctionRegistry::with_custom_functions().function_names();
    assert!(names.contains(&"myFunc"));
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn direct_calls_check_arity() {
    let sin = default_registry().function("sin").copied();
    let sin = sin.expect("sin is built in");
    assert_eq!(sin.call(&[]), None);
    assert_eq!(sin.call(&[0.0, 1.0]), None);
    assert_eq!(sin.call(&[0.0]), Some(0.0));

    let max = FunctionRegistry::builtin().function("max").copied().expect("max is built in");
    assert_eq!(max.call(&[]), None);
    assert_eq!(max.call(&[1.0, 4.0, 2.0]), Some(4.0));
}
