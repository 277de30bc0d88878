//! Run summary output

use comfy_table::{presets::NOTHING, Cell, CellAlignment, Table};
use log::info;

use crate::audit::RunSummary;
use crate::hcp::QueryMode;

use super::common::format_percent;

/// Banner line opening the logged summary
pub fn summary_banner(mode: QueryMode) -> String {
    format!("==== WORKSPACE SUMMARY ({} MODE) ====", mode.label())
}

/// Summary rows as (label, count, percent) triples
fn summary_rows(summary: &RunSummary) -> Vec<(&'static str, usize, String)> {
    vec![
        (
            "With workspaces",
            summary.with_workspaces(),
            format_percent(summary.percent_of_total(summary.with_workspaces())),
        ),
        (
            "Without workspaces",
            summary.without_workspaces(),
            format_percent(summary.percent_of_total(summary.without_workspaces())),
        ),
        (
            "Errors",
            summary.errored(),
            format_percent(summary.percent_of_total(summary.errored())),
        ),
    ]
}

/// Write the summary to the log
pub fn log_summary(summary: &RunSummary, mode: QueryMode) {
    info!("{}", summary_banner(mode));
    info!("Total organizations processed: {}", summary.total());
    for (label, count, percent) in summary_rows(summary) {
        info!("{}: {} ({})", label, count, percent);
    }
}

/// Render the summary as a table
pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ORGANIZATIONS", "COUNT", "PERCENT"]);

    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(summary.total()).set_alignment(CellAlignment::Right),
        Cell::new(format_percent(100.0)).set_alignment(CellAlignment::Right),
    ]);
    for (label, count, percent) in summary_rows(summary) {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(percent).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print the summary table to stdout
pub fn print_summary(summary: &RunSummary, mode: QueryMode) {
    println!();
    println!("{}", summary_banner(mode));
    println!("{}", summary_table(summary));
}
