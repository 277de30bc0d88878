//! Progress bar utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.blue} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Create a progress bar over `total` organizations
///
/// Returns `None` if quiet mode is enabled.
pub fn create_progress_bar(total: usize, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
        .progress_chars("=> ");
    bar.set_style(style);
    bar.set_message("Processing organizations");
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

/// Finish the bar, noting whether the run was cut short
pub fn finish_progress_bar(bar: Option<ProgressBar>, cancelled: bool) {
    if let Some(b) = bar {
        if cancelled {
            b.abandon_with_message("Cancelled");
        } else {
            b.finish_with_message("Done");
        }
    }
}
