//! Report and summary output

mod common;
pub mod csv;
mod summary;

pub use csv::{write_csv, write_report};
pub use summary::{log_summary, print_summary, summary_banner, summary_table};
