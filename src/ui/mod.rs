//! UI utilities for terminal output

mod progress;

pub use progress::{create_progress_bar, finish_progress_bar};
