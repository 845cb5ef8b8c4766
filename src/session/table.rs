//! Iteration table rendering.

use tabled::{builder::Builder, settings::Style};

use crate::root_finding::Trace;


/// Formats `v` with a fixed number of decimals.
#[inline]
pub fn format_value(v: f64, precision: usize) -> String {
    format!("{v:.precision$}")
}


/// Renders `trace` as a table with columns `i, x, f(x)` and, when any
/// row carries a derivative, `f'(x)`.
pub fn render_trace(trace: &Trace, precision: usize) -> String {
    let with_derivative = trace.has_derivative();

    let mut builder = Builder::default();

    let mut header = vec!["i".to_string(), "x".to_string(), "f(x)".to_string()];
    if with_derivative {
        header.push("f'(x)".to_string());
    }
    builder.push_record(header);

    for record in trace {
        let mut row = vec![
            record.index.to_string(),
            format_value(record.x, precision),
            format_value(record.fx, precision),
        ];
        if with_derivative {
            row.push(record.dfx.map_or_else(String::new, |d| format_value(d, precision)));
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
