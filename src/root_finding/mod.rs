// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod trace;
pub mod tolerances;
pub(crate) mod config;

// algorithms
pub mod secant;
pub mod newton;

pub use algorithms::{Algorithm, MAX_ITS};
pub use errors::{RootFindingError, ToleranceError};
pub use newton::{newton, NewtonCfg, NewtonError};
pub use report::RootFindingReport;
pub use secant::{secant, SecantCfg, SecantError};
pub use tolerances::parse_tolerance;
pub use trace::{IterationRecord, NoTrace, Trace, TraceObserver};
