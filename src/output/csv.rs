//! CSV report writer

use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::audit::OrgRecord;
use crate::config::report;
use crate::error::{Result, TfeError};
use crate::hcp::QueryMode;
use crate::settings::ReportTarget;

use super::common::escape_csv;

/// Report columns for a mode
pub fn headers(mode: QueryMode) -> &'static [&'static str] {
    match mode {
        QueryMode::Count => &["org", "workspace_count", "has_workspaces", "error"],
        QueryMode::ExistsOnly => &["org", "has_workspaces", "error"],
    }
}

fn format_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "TRUE".to_string(),
        Some(false) => "FALSE".to_string(),
        None => String::new(),
    }
}

/// Cells for one record, matching [`headers`] for the record's mode
pub fn record_cells(record: &OrgRecord) -> Vec<String> {
    let error = record.error.clone().unwrap_or_default();
    match record.mode {
        QueryMode::Count => vec![
            record.org.clone(),
            record
                .workspace_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            format_bool(record.has_any_workspaces()),
            error,
        ],
        QueryMode::ExistsOnly => vec![
            record.org.clone(),
            format_bool(record.has_workspaces),
            error,
        ],
    }
}

/// Write header and rows for `records` to any writer
pub fn write_csv<W: Write>(records: &[OrgRecord], mode: QueryMode, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", headers(mode).join(","))?;

    for record in records {
        let row: Vec<String> = record_cells(record)
            .iter()
            .map(|cell| escape_csv(cell))
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    writer.flush()?;
    Ok(())
}

/// Resolve the report file path for a target
pub fn report_path(target: &ReportTarget) -> PathBuf {
    match target {
        ReportTarget::File(path) => path.clone(),
        ReportTarget::Directory(dir) => dir.join(
            chrono::Local::now()
                .format(report::FILE_NAME_FORMAT)
                .to_string(),
        ),
    }
}

/// Write the CSV report and return its path
pub fn write_report(
    records: &[OrgRecord],
    mode: QueryMode,
    target: &ReportTarget,
) -> Result<PathBuf> {
    let path = report_path(target);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TfeError::Io(format!(
                "Failed to create report directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    debug!("Writing {} records to {}", records.len(), path.display());

    let file = File::create(&path).map_err(|e| {
        TfeError::Io(format!(
            "Failed to create report file {}: {}",
            path.display(),
            e
        ))
    })?;
    write_csv(records, mode, BufWriter::new(file))?;

    info!("CSV report written to {}", path.display());
    Ok(path)
}
