use root_approximator::root_finding::{IterationRecord, Trace, TraceObserver};
use root_approximator::session::table::{format_value, render_trace};

fn trace_of(rows: &[(f64, f64, Option<f64>)]) -> Trace {
    let mut trace = Trace::new();
    for (index, &(x, fx, dfx)) in rows.iter().enumerate() {
        trace.observe(&IterationRecord { index, x, fx, dfx });
    }
    trace
}

#[test]
fn fixed_precision_formatting() {
    assert_eq!(format_value(1.0, 7), "1.0000000");
    assert_eq!(format_value(2.0_f64.sqrt(), 3), "1.414");
    assert_eq!(format_value(-2.5, 1), "-2.5");
}

#[test]
fn newton_table_has_derivative_column() {
    let table = render_trace(&trace_of(&[(1.5, 0.25, Some(3.0)), (1.4166667, 0.0069444, Some(2.8333333))]), 7);

    assert!(table.contains("f'(x)"));
    assert!(table.contains("1.5000000"));
    assert!(table.contains("3.0000000"));
    assert!(table.lines().count() >= 4);
}

#[test]
fn secant_table_has_no_derivative_column() {
    let table = render_trace(&trace_of(&[(1.0, -1.0, None), (2.0, 2.0, None)]), 2);

    assert!(table.contains("f(x)"));
    assert!(!table.contains("f'(x)"));
    assert!(table.contains("-1.00"));
}

#[test]
fn empty_trace_renders_header_only() {
    let table = render_trace(&Trace::new(), 7);
    assert!(table.contains("f(x)"));
}
