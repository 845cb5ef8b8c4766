use root_approximator::root_finding::newton::{newton, NewtonCfg};
use root_approximator::root_finding::secant::{secant, SecantCfg};
use root_approximator::root_finding::trace::{IterationRecord, Trace, TraceObserver};
use root_approximator::root_finding::{Algorithm, RootFindingReport};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn assert_contiguous(trace: &Trace) {
    for (i, record) in trace.into_iter().enumerate() {
        assert_eq!(record.index, i);
    }
}

fn assert_root_is_last_row(trace: &Trace, report: &RootFindingReport) {
    let last = trace.last().expect("trace is empty");
    assert_eq!(last.x, report.root);
    assert_eq!(last.fx, report.f_root);
}

#[test]
fn newton_rows_are_contiguous_and_end_at_the_root() -> TestResult {
    let f = |x: f64| x.powi(3) - x - 2.0;

    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;
    let mut trace = Trace::new();
    let report = newton(f, None::<fn(f64) -> f64>, 1.0, 2.0, cfg, &mut trace)?;

    assert_contiguous(&trace);
    assert_root_is_last_row(&trace, &report);
    assert_eq!(trace.len(), report.iterations + Algorithm::Newton.seed_points());
    assert!(trace.into_iter().all(|r| r.dfx.is_some()));
    Ok(())
}

#[test]
fn secant_rows_are_contiguous_and_end_at_the_root() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let cfg = SecantCfg::new().set_tolerance(1e-10)?;
    let mut trace = Trace::new();
    let report = secant(f, 0.0, 1.0, cfg, &mut trace)?;

    assert_contiguous(&trace);
    assert_root_is_last_row(&trace, &report);
    assert_eq!(trace.len(), report.iterations + Algorithm::Secant.seed_points());
    assert!(trace.into_iter().all(|r| r.dfx.is_none()));
    Ok(())
}

#[test]
fn custom_observer_sees_every_row() -> TestResult {
    struct Counter {
        rows: usize,
        last_index: Option<usize>,
    }
    impl TraceObserver for Counter {
        fn observe(&mut self, record: &IterationRecord) {
            self.rows += 1;
            self.last_index = Some(record.index);
        }
    }

    let f = |x: f64| x * x - 2.0;
    let mut counter = Counter { rows: 0, last_index: None };
    let report = secant(f, 1.0, 2.0, SecantCfg::new(), &mut counter)?;

    assert_eq!(counter.rows, report.iterations + 2);
    assert_eq!(counter.last_index, Some(report.iterations + 1));
    Ok(())
}

#[test]
fn observer_can_be_a_trait_object() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let mut trace = Trace::new();
    let observer: &mut dyn TraceObserver = &mut trace;

    secant(f, 1.0, 2.0, SecantCfg::new(), observer)?;
    assert!(!trace.is_empty());
    Ok(())
}
