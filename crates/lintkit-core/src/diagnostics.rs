//! Finding and error types for the sync layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::severity::Severity;

pub type SyncResult<T> = Result<T, SyncError>;

/// A single lint finding handed to a reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Id of the issue that produced this finding
    pub issue_id: String,
    pub severity: Severity,
    pub message: String,
    pub path: PathBuf,
    /// 1-based line, 0 when unknown
    pub line: usize,
    /// 1-based column, 0 when unknown
    pub column: usize,
    /// Suggested remedy, embedded in reports when fixes are included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(
        issue_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            issue_id: issue_id.into(),
            severity,
            message: message.into(),
            path: path.into(),
            line,
            column,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Fatal configuration errors surfaced to the invoking build tool.
///
/// Nothing here is retried or recovered; each failure aborts the sync.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Could not create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not delete old {}", path.display())]
    DeleteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output file into {}", path.display())]
    DirNotWritable { path: PathBuf },

    #[error("Failed to open {format} report at {}", path.display())]
    OpenReport {
        format: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
