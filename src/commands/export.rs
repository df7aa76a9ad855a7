//! Export command handler

use std::path::PathBuf;

use anyhow::Result;

use sigsum::export::{self, format_export_timestamp, parse_export_date, Sigexport};
use sigsum::{Config, ExportRequest};

/// Export the requested chat to markdown via sigexport.
///
/// Flags override the configured defaults; dates are validated before the
/// tool is probed or invoked.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    start: Option<&str>,
    end: Option<&str>,
    chat: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let chat_name = chat.unwrap_or(&config.export.chat_name);
    let output_dir = output
        .map(PathBuf::from)
        .unwrap_or_else(|| config.export_output_dir());

    let mut request = ExportRequest::new(chat_name, output_dir);
    if let Some(raw) = start {
        request.start = parse_export_date("start", raw)?;
    }
    if let Some(raw) = end {
        request.end = parse_export_date("end", raw)?;
    }

    println!("Exporting Signal chat history...");
    println!("  Chat: {}", request.chat_name);
    println!("  Start: {}", format_export_timestamp(&request.start));
    println!("  End: {}", format_export_timestamp(&request.end));
    println!("  Output: {}", request.output_dir.display());
    println!();

    let result = export::run_export(&Sigexport, &request)?;

    println!("Export completed successfully!");
    println!("  Output directory: {}", result.output_path.display());
    println!("  Chat markdown: {}", result.chat_markdown_path.display());

    Ok(())
}
