//! Per-iteration trace.
//!
//! Every point an algorithm visits is handed to a [`TraceObserver`] as an
//! [`IterationRecord`] the moment it is computed, so the rows gathered
//! before a failure are still available to the caller.
//!
//! ┌ [`Trace`]   : collects all records
//! └ [`NoTrace`] : discards them
//!
//! Each record is also logged at `debug` level.


/// One row of the iteration table.
///
/// - `index` : 0 for the first starting point, +1 per row
/// - `x`     : estimate
/// - `fx`    : f(x)
/// - `dfx`   : f'(x) for Newton's method, `None` for the secant method
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord {
    pub index : usize,
    pub x     : f64,
    pub fx    : f64,
    pub dfx   : Option<f64>,
}


pub trait TraceObserver {
    fn observe(&mut self, record: &IterationRecord);
}


/// Collected trace of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<IterationRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `true` if any row carries a derivative value.
    pub fn has_derivative(&self) -> bool {
        self.records.iter().any(|r| r.dfx.is_some())
    }
}

impl TraceObserver for Trace {
    fn observe(&mut self, record: &IterationRecord) {
        self.records.push(*record);
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}


/// Observer that keeps nothing.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoTrace;

impl TraceObserver for NoTrace {
    fn observe(&mut self, _record: &IterationRecord) {}
}


/// Logs `record` and forwards it to `observer`.
#[inline]
pub(crate) fn emit<O>(observer: &mut O, algorithm: &str, record: IterationRecord)
where O: TraceObserver + ?Sized {
    match record.dfx {
        Some(dfx) => log::debug!(
            "{algorithm} i={} x={} f(x)={} f'(x)={}", record.index, record.x, record.fx, dfx
        ),
        None => log::debug!(
            "{algorithm} i={} x={} f(x)={}", record.index, record.x, record.fx
        ),
    }
    observer.observe(&record);
}
