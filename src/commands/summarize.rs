//! Summarize command handler

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use sigsum::summary::{assemble_report, summarize_days, OpenAiSummarizer, SummarizeOptions};
use sigsum::transcript::{group_by_day, segment};
use sigsum::Config;

/// Summarize an exported chat markdown file day by day.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    markdown_path: Option<&str>,
    model: Option<&str>,
    temperature: Option<f32>,
    output: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;

    let markdown_path = markdown_path
        .map(PathBuf::from)
        .unwrap_or_else(|| config.markdown_path());
    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.summarizer.output));
    let options = SummarizeOptions {
        model: model
            .map(str::to_string)
            .unwrap_or_else(|| config.summarizer.model.clone()),
        temperature: temperature.unwrap_or(config.summarizer.temperature),
    };

    println!("Reading chat markdown file...");
    println!("  Path: {}", markdown_path.display());
    println!();

    let transcript = match fs::read_to_string(&markdown_path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            anyhow::bail!(
                "File not found at {}. Run 'sigsum export' first.",
                markdown_path.display()
            );
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", markdown_path.display()));
        }
    };

    if transcript.trim().is_empty() {
        anyhow::bail!("The markdown file at {} is empty", markdown_path.display());
    }

    println!("Read {} characters from file", transcript.len());
    println!("Parsing messages by timestamp...");

    let messages = segment(&transcript);
    let buckets = group_by_day(&messages);

    println!(
        "Found {} messages across {} days",
        messages.len(),
        buckets.len()
    );
    println!("Generating daily summaries...");
    println!("  Model: {}", options.model);
    println!("  Temperature: {}", options.temperature);
    println!();

    let summarizer = OpenAiSummarizer::from_env(config.summarizer.api_base.as_deref())?;
    let summaries = summarize_days(&summarizer, &buckets, &options)?;
    let report = assemble_report(&summaries);

    println!();
    println!("Writing summary to {}...", output_path.display());
    fs::write(&output_path, &report)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("Summary written successfully!");

    Ok(())
}
