//! Dynamic page fragments: the query-entry table, the sample JSON array and
//! the task report.

use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::http::request::QueryList;
use crate::pages::tasks::TaskSource;

/// Renders the received query entries as an HTML table.
pub fn query_table(query: &QueryList) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Number of elements: {}", query.len());
    out.push_str("<table>\n");
    for entry in query.entries() {
        let _ = writeln!(
            out,
            "<tr><td>{} <td>{}",
            entry.name.as_str(),
            entry.value.as_str()
        );
    }
    out.push_str("</table>\n");

    out
}

/// Number of values in the sample array.
pub const SAMPLE_LEN: usize = 1000;

/// The generated sample value at position `i`.
pub fn sample_value(i: usize) -> usize {
    i / 2 + 1 + i / 3
}

/// Renders the sample data set as a JSON object: `{"val":[v0,...,v999]}`.
pub fn sample_json() -> String {
    let mut out = String::from("{\"val\":[");

    for i in 0..SAMPLE_LEN {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", sample_value(i));
    }
    out.push_str("]}");

    out
}

/// Renders the live task report as preformatted text.
pub fn task_report(tasks: &dyn TaskSource) -> String {
    let mut out = String::new();

    out.push_str("<pre>\r\n");
    out.push_str("Name          State  Priority  Stack   Num\r\n");
    out.push_str("------------------------------------------\r\n");

    for task in tasks.tasks() {
        let _ = write!(
            out,
            "{:<13} {:<6} {:<9} {:<7} {}\r\n",
            task.name, task.state, task.priority, task.stack_free, task.num
        );
    }

    out.push_str("------------------------------------------\r\n");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let _ = write!(out, "System Time: {}\r\n", now);

    out.push_str("</pre>\r\n");

    out
}
