//! Integration tests for export orchestration

use std::cell::Cell;
use std::fs;
use std::path::Path;

use sigsum::export::{
    backup_path_for, chat_dir_name, prepare_output_dir, run_export, ExportError, ExportTool,
};
use sigsum::ExportRequest;
use tempfile::TempDir;

/// Stub export tool with a scripted artifact outcome.
struct StubTool {
    available: bool,
    /// What to write when run: Some(content) creates the chat.md artifact.
    artifact: Option<&'static str>,
    ran: Cell<bool>,
}

impl StubTool {
    fn writing(artifact: &'static str) -> Self {
        Self {
            available: true,
            artifact: Some(artifact),
            ran: Cell::new(false),
        }
    }

    fn producing_nothing() -> Self {
        Self {
            available: true,
            artifact: None,
            ran: Cell::new(false),
        }
    }

    fn missing() -> Self {
        Self {
            available: false,
            artifact: None,
            ran: Cell::new(false),
        }
    }
}

impl ExportTool for StubTool {
    fn name(&self) -> &'static str {
        "sigexport"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn run(&self, request: &ExportRequest) -> Result<(), ExportError> {
        self.ran.set(true);
        if let Some(content) = self.artifact {
            let chat_dir = request.output_dir.join(chat_dir_name(&request.chat_name));
            fs::create_dir_all(&chat_dir).unwrap();
            fs::write(chat_dir.join("chat.md"), content).unwrap();
        }
        Ok(())
    }
}

fn request_in(temp: &TempDir, chat_name: &str) -> ExportRequest {
    ExportRequest::new(chat_name, temp.path().join("output"))
}

#[test]
fn run_export_returns_verified_paths() {
    let temp = TempDir::new().unwrap();
    let request = request_in(&temp, "Odd Fellows Members");

    let result = run_export(&StubTool::writing("[2024-01-01 10:00:00] hi"), &request).unwrap();

    assert_eq!(result.output_path, temp.path().join("output"));
    assert_eq!(
        result.chat_markdown_path,
        temp.path().join("output/OddFellowsMembers/chat.md")
    );
}

#[test]
fn run_export_missing_tool_fails_without_running() {
    let temp = TempDir::new().unwrap();
    let tool = StubTool::missing();

    let err = run_export(&tool, &request_in(&temp, "Family")).unwrap_err();

    assert!(matches!(err, ExportError::ToolMissing { .. }));
    assert!(format!("{err}").contains("pip install signal-export"));
    assert!(!tool.ran.get());
}

#[test]
fn run_export_distinguishes_missing_artifact() {
    let temp = TempDir::new().unwrap();

    let err = run_export(&StubTool::producing_nothing(), &request_in(&temp, "Family")).unwrap_err();

    assert!(matches!(err, ExportError::ArtifactMissing { .. }));
    assert!(format!("{err}").contains("does not exist"));
}

#[test]
fn run_export_distinguishes_empty_artifact() {
    let temp = TempDir::new().unwrap();

    let err = run_export(&StubTool::writing(""), &request_in(&temp, "Family")).unwrap_err();

    assert!(matches!(err, ExportError::ArtifactEmpty { .. }));
    assert!(format!("{err}").contains("is empty"));
}

#[test]
fn prepare_rotates_existing_dir_and_discards_old_backup() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("output");
    let backup = backup_path_for(&output);

    // Seed both the output directory and a stale backup.
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("current.md"), "current contents").unwrap();
    fs::create_dir_all(&backup).unwrap();
    fs::write(backup.join("stale.md"), "stale contents").unwrap();

    prepare_output_dir(&output).unwrap();

    // The former output contents are now the backup; the stale backup is gone.
    assert!(!output.exists());
    assert!(backup.join("current.md").exists());
    assert!(!backup.join("stale.md").exists());
}

#[test]
fn prepare_fresh_dir_performs_no_rename() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("never-created");

    prepare_output_dir(&output).unwrap();

    assert!(!output.exists());
    assert!(!backup_path_for(&output).exists());
}

#[test]
fn prepare_keeps_exactly_one_backup_generation() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("output");
    let backup = backup_path_for(&output);

    for generation in ["first", "second", "third"] {
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("gen.md"), generation).unwrap();
        prepare_output_dir(&output).unwrap();
    }

    assert_eq!(fs::read_to_string(backup.join("gen.md")).unwrap(), "third");
    assert!(!Path::new(&format!("{}-bak", backup.display())).exists());
}
