//! Interactive session.
//!
//! Drives one conversation over a [`Console`]:
//!
//! ```text
//! ┌ Use previous/pre-defined function? (Y/N)
//! │   └ N -> Input function of x        (re-asked until it compiles)
//! ├ Choose method (1 Newton, 2 Secant, 3 Exit)
//! ├ x1, x2 [, f'(x)], tolerance 10^x     (each re-asked until valid)
//! ├ iteration table + Approximation / Error line
//! └ exit, or back to the top when `repeat` is set
//! ```
//!
//! Input errors (bad function text, bad numbers, bad tolerance) are
//! answered with a message and the question is asked again. Method
//! failures end the run with the partial table; they never end the
//! process. End of input ends the session quietly.

pub mod config;
pub mod console;
pub mod errors;
pub mod logger;
pub mod solve;
pub mod table;

use std::io::{BufRead, Write};
use std::str::FromStr;

pub use config::SessionCfg;
pub use console::Console;
pub use errors::{ConfigError, InvalidChoice, LoggerError, RunError, SessionError};
pub use logger::init_logger;
pub use solve::{newton_from_text, secant_from_text, solve_newton, solve_secant};

use crate::expression::{default_registry, Expression, FunctionRegistry};
use crate::root_finding::{parse_tolerance, RootFindingReport, Trace};
use table::{format_value, render_trace};


const REUSE_PROMPT    : &str = "Use previous/pre-defined function? (Y/N)\n";
const FUNCTION_PROMPT : &str = "Input function of x: ";
const METHOD_PROMPT   : &str = "\nChoose method (1 = Newton's Method, 2 = Secant Method, 3 = Exit): ";
const DERIV_PROMPT    : &str = "f'(x) (leave blank for a numeric derivative): ";
const TOL_PROMPT      : &str = "Error Tolerance: Input as '10^x', where x = exponent (for example: '10^-6'): ";


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MethodChoice {
    Newton,
    Secant,
    Exit,
}

impl FromStr for MethodChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "newton" => Ok(MethodChoice::Newton),
            "2" | "secant" => Ok(MethodChoice::Secant),
            "3" | "exit" | "quit" | "q" => Ok(MethodChoice::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}


/// Outcome of one method run: the report, or why it stopped.
pub type RunOutcome = Result<RootFindingReport, RunError>;


pub struct Session<'r> {
    cfg      : SessionCfg,
    registry : &'r FunctionRegistry,
    current  : Option<Expression>,
    outcomes : Vec<RunOutcome>,
}

impl Session<'static> {
    /// Session over [`default_registry`].
    pub fn new(cfg: SessionCfg) -> Result<Self, ConfigError> {
        Session::with_registry(cfg, default_registry())
    }
}

impl<'r> Session<'r> {
    /// Session over `registry`. The configured default expression, if
    /// any, must compile against it; a blank one means none.
    pub fn with_registry(cfg: SessionCfg, registry: &'r FunctionRegistry) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let current = cfg
            .default_expression
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(|text| Expression::compile_with(text, registry))
            .transpose()?;

        Ok(Self { cfg, registry, current, outcomes: Vec::new() })
    }

    pub fn config(&self) -> &SessionCfg {
        &self.cfg
    }

    /// Function offered by "use previous".
    pub fn current_expression(&self) -> Option<&Expression> {
        self.current.as_ref()
    }

    /// Outcomes of the runs completed so far, oldest first.
    pub fn outcomes(&self) -> &[RunOutcome] {
        &self.outcomes
    }

    /// Runs the conversation until the user exits, a run completes (unless
    /// `repeat` is set), or input ends.
    ///
    /// # Errors
    /// - [`SessionError::Io`] if the console cannot be read or written
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), SessionError> {
        loop {
            let Some(expression) = self.acquire_expression(console)? else {
                return Ok(());
            };
            let Some(choice) = self.choose_method(console)? else {
                return Ok(());
            };

            let outcome = match choice {
                MethodChoice::Exit => {
                    console.say("Goodbye!")?;
                    return Ok(());
                }
                MethodChoice::Newton => self.newton_run(console, &expression)?,
                MethodChoice::Secant => self.secant_run(console, &expression)?,
            };

            let Some(outcome) = outcome else {
                return Ok(());
            };
            self.outcomes.push(outcome);

            if !self.cfg.repeat {
                return Ok(());
            }
            console.say("")?;
        }
    }

    fn acquire_expression<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Expression>, SessionError> {
        loop {
            let Some(answer) = console.prompt(REUSE_PROMPT)? else {
                return Ok(None);
            };

            match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => match &self.current {
                    Some(expression) => {
                        console.say(&format!("f(x) = {expression}"))?;
                        return Ok(Some(expression.clone()));
                    }
                    None => console.say("No previous function; please enter one.")?,
                },
                Some('n') => {}
                _ => {
                    console.say("Please answer Y or N.")?;
                    continue;
                }
            }

            return self.read_function(console);
        }
    }

    fn read_function<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Expression>, SessionError> {
        loop {
            let Some(text) = console.prompt(FUNCTION_PROMPT)? else {
                return Ok(None);
            };
            match Expression::compile_with(&text, self.registry) {
                Ok(expression) => {
                    if !expression.depends_on_x() {
                        log::warn!("function `{expression}` does not depend on x");
                    }
                    self.current = Some(expression.clone());
                    return Ok(Some(expression));
                }
                Err(e) => {
                    log::warn!("rejected function `{text}`: {e}");
                    console.say(&format!("Error: {e}. Try again."))?;
                }
            }
        }
    }

    fn choose_method<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<MethodChoice>, SessionError> {
        loop {
            let Some(answer) = console.prompt(METHOD_PROMPT)? else {
                return Ok(None);
            };
            match answer.parse::<MethodChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => console.say("Error: Invalid choice. Choose again.")?,
            }
        }
    }

    fn read_derivative<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Option<Expression>>, SessionError> {
        loop {
            let Some(text) = console.prompt(DERIV_PROMPT)? else {
                return Ok(None);
            };
            if text.is_empty() {
                return Ok(Some(None));
            }
            match Expression::compile_with(&text, self.registry) {
                Ok(derivative) => return Ok(Some(Some(derivative))),
                Err(e) => console.say(&format!("Error: {e}. Try again."))?,
            }
        }
    }

    fn read_tolerance<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<f64>, SessionError> {
        loop {
            let Some(text) = console.prompt(TOL_PROMPT)? else {
                return Ok(None);
            };
            match parse_tolerance(&text) {
                Ok(tol) => {
                    console.say(&format!("Tolerance: {tol:e}"))?;
                    return Ok(Some(tol));
                }
                Err(e) => console.say(&format!("Error: {e}. Try again."))?,
            }
        }
    }

    fn newton_run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        expression: &Expression,
    ) -> Result<Option<RunOutcome>, SessionError> {
        let Some(x1) = read_number(console, "x1: ")? else { return Ok(None) };
        let Some(x2) = read_number(console, "x2: ")? else { return Ok(None) };
        let Some(derivative) = self.read_derivative(console)? else { return Ok(None) };
        let Some(tol) = self.read_tolerance(console)? else { return Ok(None) };

        let mut trace = Trace::new();
        let outcome = solve_newton(expression, derivative.as_ref(), x1, x2, tol, self.cfg.max_iter, &mut trace);
        self.report(console, &trace, &outcome)?;

        Ok(Some(outcome))
    }

    fn secant_run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        expression: &Expression,
    ) -> Result<Option<RunOutcome>, SessionError> {
        let Some(x1) = read_number(console, "x1: ")? else { return Ok(None) };
        let Some(x2) = read_number(console, "x2: ")? else { return Ok(None) };
        let Some(tol) = self.read_tolerance(console)? else { return Ok(None) };

        let mut trace = Trace::new();
        let outcome = solve_secant(expression, x1, x2, tol, self.cfg.max_iter, &mut trace);
        self.report(console, &trace, &outcome)?;

        Ok(Some(outcome))
    }

    fn report<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        trace: &Trace,
        outcome: &RunOutcome,
    ) -> Result<(), SessionError> {
        let precision = self.cfg.precision;

        console.say("")?;
        console.say(&render_trace(trace, precision))?;
        match outcome {
            Ok(report) => console.say(&format!(
                "Approximation: {}",
                format_value(report.root, precision)
            ))?,
            Err(e) => console.say(&format!("Error: {e}"))?,
        }
        Ok(())
    }
}


/// Asks until a finite number is entered; `None` at end of input.
fn read_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<Option<f64>, SessionError> {
    loop {
        let Some(text) = console.prompt(label)? else {
            return Ok(None);
        };
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => console.say(&format!("Error: '{text}' is not a finite number. Try again."))?,
        }
    }
}
