use std::io::Cursor;

use root_approximator::session::{Console, Session, SessionCfg, SessionError};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs a session over `input` and returns it with everything it printed.
fn run_script(cfg: SessionCfg, input: &str) -> Result<(Session<'static>, String), SessionError> {
    let mut session = Session::new(cfg).expect("valid config");
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    session.run(&mut console)?;
    let (_, out) = console.into_inner();
    Ok((session, String::from_utf8(out).expect("utf-8 output")))
}

#[test]
fn newton_on_predefined_function_with_numeric_derivative() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "Y\n1\n1\n2\n\n10^-6\n")?;

    assert!(out.contains("Use previous/pre-defined function? (Y/N)"));
    assert!(out.contains("f(x) = x - 4*log(x)"));
    assert!(out.contains("f'(x)"));
    assert!(out.contains("Approximation: 1.4296"));
    assert_eq!(session.outcomes().len(), 1);
    assert!(session.outcomes()[0].is_ok());
    Ok(())
}

#[test]
fn newton_with_user_derivative() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "N\nx^2 - 2\n1\n1\n2\n2*x\n10^-7\n")?;

    assert!(out.contains("Approximation: 1.4142136"));
    let report = session.outcomes()[0].as_ref().map_err(|e| e.to_string())?;
    assert_eq!(report.algorithm_name, "newton");
    Ok(())
}

#[test]
fn secant_after_rejected_function() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "N\nfoo(x)\nx^2-2\n2\n1\n2\n10^-7\n")?;

    assert!(out.contains("Error: unknown function 'foo'"));
    assert!(out.contains("Approximation: 1.4142136"));
    assert_eq!(session.current_expression().map(|e| e.source()), Some("x^2-2"));
    Ok(())
}

#[test]
fn invalid_menu_choice_is_asked_again() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "Y\n7\n3\n")?;

    assert!(out.contains("Error: Invalid choice. Choose again."));
    assert!(out.contains("Goodbye!"));
    assert!(session.outcomes().is_empty());
    Ok(())
}

#[test]
fn malformed_tolerance_is_asked_again() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "Y\n2\n1\n2\n1e-6\n10^-6\n")?;

    assert!(out.contains("no '^' in '1e-6'"));
    assert!(out.contains("Tolerance: 1e-6"));
    assert!(session.outcomes()[0].is_ok());
    Ok(())
}

#[test]
fn bad_guess_is_asked_again() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "Y\n2\nabc\n1\n2\n10^-6\n")?;

    assert!(out.contains("'abc' is not a finite number"));
    assert_eq!(session.outcomes().len(), 1);
    Ok(())
}

#[test]
fn divergence_ends_the_run_with_a_message() -> TestResult {
    let (session, out) = run_script(SessionCfg::default(), "N\nx^2\n2\n-1\n1\n10^-6\n")?;

    assert!(out.contains("Error: divergence"));
    assert!(!out.contains("Approximation"));
    match &session.outcomes()[0] {
        Err(e) => assert!(e.is_divergence()),
        Ok(report) => panic!("expected divergence, got {report:?}"),
    }
    Ok(())
}

#[test]
fn iteration_limit_reports_partial_table() -> TestResult {
    let cfg = SessionCfg { max_iter: 3, ..SessionCfg::default() };
    let (session, out) = run_script(cfg, "N\nx^2 + 1\n1\n0.5\n1\n2*x\n10^-9\n")?;

    assert!(out.contains("Error: failed to converge within 3 iterations"));
    match &session.outcomes()[0] {
        Err(e) => assert!(e.is_iteration_limit()),
        Ok(report) => panic!("expected iteration limit, got {report:?}"),
    }
    Ok(())
}

#[test]
fn precision_controls_printed_digits() -> TestResult {
    let cfg = SessionCfg { precision: 3, ..SessionCfg::default() };
    let (_, out) = run_script(cfg, "N\nx^2-2\n2\n1\n2\n10^-7\n")?;

    assert!(out.contains("Approximation: 1.414\n"));
    Ok(())
}

#[test]
fn repeat_returns_to_the_first_prompt() -> TestResult {
    let cfg = SessionCfg { repeat: true, ..SessionCfg::default() };
    let (session, out) = run_script(cfg, "Y\n2\n1\n2\n10^-6\nY\n3\n")?;

    assert_eq!(session.outcomes().len(), 1);
    assert_eq!(out.matches("Use previous/pre-defined function?").count(), 2);
    assert!(out.contains("Goodbye!"));
    Ok(())
}

#[test]
fn no_default_expression_asks_for_one() -> TestResult {
    let cfg = SessionCfg { default_expression: None, ..SessionCfg::default() };
    let (session, out) = run_script(cfg, "Y\nx - 1\n3\n")?;

    assert!(out.contains("No previous function"));
    assert_eq!(session.current_expression().map(|e| e.source()), Some("x - 1"));
    Ok(())
}

#[test]
fn end_of_input_ends_quietly() -> TestResult {
    let (session, _) = run_script(SessionCfg::default(), "")?;
    assert!(session.outcomes().is_empty());

    let (session, _) = run_script(SessionCfg::default(), "Y\n1\n1\n")?;
    assert!(session.outcomes().is_empty());
    Ok(())
}

#[test]
fn console_trims_answers_and_reports_end_of_input() -> TestResult {
    let mut console = Console::new(Cursor::new(b"  42 \r\n".to_vec()), Vec::new());

    assert_eq!(console.prompt("> ")?, Some("42".to_string()));
    assert_eq!(console.prompt("> ")?, None);
    assert_eq!(console.writer().as_slice(), b"> > ");
    Ok(())
}

#[test]
fn disabled_default_expression_asks_for_a_function() -> TestResult {
    let cfg = SessionCfg { default_expression: Some("  ".to_string()), ..SessionCfg::default() };
    let (_, out) = run_script(cfg, "Y\nx - 2\n3\n")?;

    assert!(out.contains("No previous function"));
    assert!(out.contains("Goodbye!"));
    Ok(())
}
