//! Durable storage for the audit report.
//!
//! Persistence is the one stage allowed to fail loudly: a completed
//! analysis that cannot be recorded must be reported as failed, not
//! silently dropped. The write is all-or-nothing via a temp file and an
//! atomic rename, so no partial report is ever left at the destination.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::report::AnalysisReport;

/// Failure to persist the report.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create report directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot finalize report at {path}: {source}")]
    Rename {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write the report as JSON to `dest`, creating parent directories.
pub fn persist(report: &AnalysisReport, dest: &Path) -> Result<(), WriteError> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    let json = report.to_json()?;

    // Temp path in the same directory so the rename stays on one filesystem
    let mut tmp_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "report.json".to_string());
    tmp_name.push_str(".tmp");
    let tmp = dest.with_file_name(tmp_name);

    fs::write(&tmp, json).map_err(|source| WriteError::Write {
        path: tmp.display().to_string(),
        source,
    })?;

    fs::rename(&tmp, dest).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        WriteError::Rename {
            path: dest.display().to_string(),
            source,
        }
    })?;

    Ok(())
}
