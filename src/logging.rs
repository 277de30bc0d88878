//! Logger setup
//!
//! Log lines look like `2024-03-09 07:05:01,123 - tokio-runtime-worker - INFO - message`
//! and go to stderr, plus an optional log file.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TfeError};

/// Writer that duplicates every write into two sinks
struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Initialize the global logger
///
/// `level` is the default filter; `RUST_LOG` still takes precedence.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            std::thread::current().name().unwrap_or("unnamed"),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                TfeError::Io(format!("Failed to open log file {}: {}", path.display(), e))
            })?;
        builder.target(Target::Pipe(Box::new(Tee {
            first: io::stderr(),
            second: file,
        })));
    }

    builder
        .try_init()
        .map_err(|e| TfeError::Config(format!("Failed to initialize logging: {}", e)))
}
