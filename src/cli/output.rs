//! Command output for operators.
//!
//! Tracing goes to stderr; these helpers print what a cron mail or a
//! terminal should show once a command finishes.

use std::fmt::Display;

use crate::application::BuildReport;
use crate::domain::group_thousands;

const LABEL_WIDTH: usize = 12;

/// Blank line, a title and an underline of matching width.
pub fn heading(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count().max(LABEL_WIDTH)));
}

/// One aligned `label  value` line.
pub fn field(label: &str, value: impl Display) {
    println!("  {label:<width$} {value}", width = LABEL_WIDTH);
}

pub fn success(message: &str) {
    println!("[ok] {message}");
}

pub fn notice(message: &str) {
    println!("[!!] {message}");
}

/// Printed on stderr so a failed cron run stands out from its summary.
pub fn failure(message: &str) {
    eprintln!("[error] {message}");
}

/// Summary of a finished build.
pub fn build_summary(report: &BuildReport) {
    success(&format!("Wrote {}", report.output.display()));
    heading("Board");
    field(
        "Rows",
        format!(
            "{} shown, {} below cutoff",
            report.rows_rendered, report.rows_filtered
        ),
    );
    field(
        "Icons",
        format!(
            "{} cached, {} downloaded, {} placeholder",
            report.icons_cached, report.icons_downloaded, report.icons_fallback
        ),
    );
    field("Divine", format!("{} chaos", group_thousands(report.anchors.primary, 1)));
    field("Mirror", format!("{} chaos", group_thousands(report.anchors.reference, 0)));

    if report.icons_fallback > 0 {
        notice("Some icons use the placeholder; they are retried on the next build");
    }
}
