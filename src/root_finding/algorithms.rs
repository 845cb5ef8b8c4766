//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the supported methods,
//! along with the shared [`MAX_ITS`] iteration cap.


/// Iteration cap applied when a config does not set `max_iter`.
///
/// Counts computed iterates only; the starting point(s) reported at
/// trace index 0 (and 1 for the secant method) are not iterations.
pub const MAX_ITS: usize = 20;


/// Root-finding algorithm variants.
/// - [`Algorithm::Newton`] : single-point update, needs `f` and `f'`
/// - [`Algorithm::Secant`] : two-point update, needs `f` only
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Newton => MAX_ITS,
            Algorithm::Secant => MAX_ITS,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton => "newton",
            Algorithm::Secant => "secant",
        }
    }

    /// Number of trace rows recorded before the first computed iterate.
    pub const fn seed_points(self) -> usize {
        match self {
            Algorithm::Newton => 1,
            Algorithm::Secant => 2,
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
