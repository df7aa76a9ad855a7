//! The sigexport CLI wrapper.

use std::process::Command;

use super::{format_export_timestamp, ExportError, ExportRequest};

/// CLI command name of the external export tool.
pub const EXPORT_TOOL: &str = "sigexport";

/// Capability interface for the external export tool.
///
/// A single run method plus an availability probe, so orchestration can be
/// tested with stub implementations that never spawn a process.
pub trait ExportTool {
    /// Tool name for diagnostics.
    fn name(&self) -> &'static str;

    /// Check the tool is installed and reachable on PATH.
    fn is_available(&self) -> bool;

    /// Run the export for the given request.
    ///
    /// The tool's stdout/stderr are surfaced as diagnostics, not parsed.
    fn run(&self, request: &ExportRequest) -> Result<(), ExportError>;
}

/// The real sigexport binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigexport;

impl ExportTool for Sigexport {
    fn name(&self) -> &'static str {
        EXPORT_TOOL
    }

    fn is_available(&self) -> bool {
        command_exists(EXPORT_TOOL)
    }

    fn run(&self, request: &ExportRequest) -> Result<(), ExportError> {
        let output = Command::new(EXPORT_TOOL)
            .arg("--start")
            .arg(format_export_timestamp(&request.start))
            .arg("--end")
            .arg(format_export_timestamp(&request.end))
            .arg("--chats")
            .arg(&request.chat_name)
            .arg(&request.output_dir)
            .output()
            .map_err(|err| ExportError::Execution {
                tool: EXPORT_TOOL,
                message: err.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            println!("{EXPORT_TOOL} output: {}", stdout.trim());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            eprintln!("{EXPORT_TOOL} stderr: {}", stderr.trim());
        }

        if !output.status.success() {
            return Err(ExportError::Execution {
                tool: EXPORT_TOOL,
                message: format!("exit code {}", output.status.code().unwrap_or(-1)),
            });
        }
        Ok(())
    }
}

/// Check if a command is available in PATH.
///
/// Uses platform-specific command lookup:
/// - Unix: `which` command
/// - Windows: `where` command
pub fn command_exists(command: &str) -> bool {
    #[cfg(windows)]
    let lookup_cmd = "where";
    #[cfg(not(windows))]
    let lookup_cmd = "which";

    Command::new(lookup_cmd)
        .arg(command)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
