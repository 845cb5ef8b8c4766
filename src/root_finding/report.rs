//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms on success.


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`           : approximate root (the last computed iterate)
/// - `f_root`         : function value at `root`
/// - `iterations`     : computed iterates, starting point(s) excluded
/// - `evaluations`    : total function evaluations (f and f')
/// - `tolerance`      : absolute step tolerance that was met
/// - `algorithm_name` : algorithm name (e.g. `"newton"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root           : f64,
    pub f_root         : f64,
    pub iterations     : usize,
    pub evaluations    : usize,
    pub tolerance      : f64,
    pub algorithm_name : &'static str,
}
