//! Export orchestration for Signal chat history.
//!
//! Drives the external `sigexport` tool: validates the requested date
//! range, rotates any pre-existing output directory to a single backup
//! generation, invokes the tool, and verifies that the expected chat
//! markdown artifact was produced and is non-empty.

mod tool;

pub use tool::{command_exists, ExportTool, Sigexport, EXPORT_TOOL};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use thiserror::Error;

/// Errors from export orchestration.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{tool} binary not found. Please install signal-export: pip install signal-export")]
    ToolMissing { tool: &'static str },

    #[error("Invalid {field} date: {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Failed to access output directory: {source}")]
    Filesystem {
        #[source]
        source: io::Error,
    },

    #[error("Failed to execute {tool}: {message}")]
    Execution {
        tool: &'static str,
        message: String,
    },

    #[error("Output file {} does not exist. {} may have failed.", .path.display(), .tool)]
    ArtifactMissing {
        path: PathBuf,
        tool: &'static str,
    },

    #[error("Output file {} is empty", .path.display())]
    ArtifactEmpty { path: PathBuf },
}

/// A validated request to export one chat over a date range.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub chat_name: String,
    pub output_dir: PathBuf,
}

impl ExportRequest {
    /// Create a request covering the last seven days, ending now.
    pub fn new(chat_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(7),
            end,
            chat_name: chat_name.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Paths produced by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// The output directory the tool wrote into.
    pub output_path: PathBuf,
    /// The chat markdown file inside it, verified non-empty.
    pub chat_markdown_path: PathBuf,
}

/// Parse a user-supplied export boundary date.
///
/// Accepts the full `YYYY-MM-DDTHH:MM:SS+00:00` form the tool itself uses,
/// or a bare `YYYY-MM-DD` (interpreted as midnight UTC).
pub fn parse_export_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, ExportError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(ExportError::InvalidInput {
        field,
        value: value.to_string(),
    })
}

/// Format a timestamp the way sigexport expects: `YYYY-MM-DDTHH:MM:SS+00:00`.
pub fn format_export_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}

/// Convert a chat name to the directory segment the export tool creates,
/// e.g. "Odd Fellows Members" -> "OddFellowsMembers".
pub fn chat_dir_name(chat_name: &str) -> String {
    chat_name.split_whitespace().collect()
}

/// Backup path for an output directory: the path with `-bak` appended.
pub fn backup_path_for(dir: &Path) -> PathBuf {
    let mut backup = dir.as_os_str().to_owned();
    backup.push("-bak");
    PathBuf::from(backup)
}

/// Prepare the output directory for an export run.
///
/// The export tool refuses to run if the target directory already exists,
/// so an existing directory is rotated to `<dir>-bak`, discarding any
/// previous backup first. Exactly one backup generation is kept. A missing
/// directory needs no preparation; any other filesystem error is fatal.
pub fn prepare_output_dir(output_dir: &Path) -> Result<(), ExportError> {
    match fs::metadata(output_dir) {
        Ok(_) => {
            let backup = backup_path_for(output_dir);
            if let Err(source) = fs::remove_dir_all(&backup) {
                if source.kind() != io::ErrorKind::NotFound {
                    return Err(ExportError::Filesystem { source });
                }
            }
            fs::rename(output_dir, &backup)
                .map_err(|source| ExportError::Filesystem { source })?;
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExportError::Filesystem { source }),
    }
}

/// Run a full export: availability check, directory preparation, tool
/// invocation, artifact verification.
pub fn run_export(
    tool: &dyn ExportTool,
    request: &ExportRequest,
) -> Result<ExportResult, ExportError> {
    if !tool.is_available() {
        return Err(ExportError::ToolMissing { tool: tool.name() });
    }

    prepare_output_dir(&request.output_dir)?;
    tool.run(request)?;
    verify_artifact(request, tool.name())
}

/// Check the expected chat markdown artifact exists and is non-empty.
fn verify_artifact(
    request: &ExportRequest,
    tool: &'static str,
) -> Result<ExportResult, ExportError> {
    let chat_markdown_path = request
        .output_dir
        .join(chat_dir_name(&request.chat_name))
        .join("chat.md");

    match fs::metadata(&chat_markdown_path) {
        Ok(meta) if meta.len() == 0 => Err(ExportError::ArtifactEmpty {
            path: chat_markdown_path,
        }),
        Ok(_) => Ok(ExportResult {
            output_path: request.output_dir.clone(),
            chat_markdown_path,
        }),
        Err(_) => Err(ExportError::ArtifactMissing {
            path: chat_markdown_path,
            tool,
        }),
    }
}
