//! CLI definitions for sigsum
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the library surface can expose them for documentation and
//! testing.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "sigsum")]
#[command(about = "[ Signal Summarizer ] - export Signal chats and summarize them day by day with AI!")]
#[command(
    long_about = "Signal Summarizer (sigsum) - Per-day AI summaries of Signal chat history.

sigsum exports a chat with the sigexport tool, splits the exported
transcript into calendar days, and asks an OpenAI-compatible model for a
summary of each day, assembled into one chronological report.

QUICK START:
    sigsum export                  Export the configured chat (last 7 days)
    sigsum summarize               Summarize the exported transcript
    sigsum config show             Show current configuration

Summarization reads the API key from the OPENAI_API_KEY environment variable."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export Signal chat history to markdown
    #[command(long_about = "Export Signal chat history to markdown with sigexport.

Dates default to the last seven days ending now. If the output directory
already exists it is rotated to '<dir>-bak' first; sigexport refuses to
write into an existing directory.

EXAMPLES:
    sigsum export                                    Last 7 days of the configured chat
    sigsum export --chat \"Book Club\"                 Another chat
    sigsum export --start 2024-01-01 --end 2024-02-01
    sigsum export --output /tmp/book-club-export")]
    Export {
        /// Start date (defaults to 7 days ago)
        #[arg(
            long,
            help = "Start date in YYYY-MM-DDTHH:MM:SS+00:00 or YYYY-MM-DD format (defaults to 7 days ago)"
        )]
        start: Option<String>,
        /// End date (defaults to now)
        #[arg(
            long,
            help = "End date in YYYY-MM-DDTHH:MM:SS+00:00 or YYYY-MM-DD format (defaults to now)"
        )]
        end: Option<String>,
        /// Name of the chat to export
        #[arg(long, help = "Name of the chat to export (defaults to config)")]
        chat: Option<String>,
        /// Output directory
        #[arg(long, help = "Output directory (defaults to config)")]
        output: Option<String>,
    },

    /// Summarize an exported chat markdown file
    #[command(long_about = "Summarize an exported chat markdown file day by day.

Reads the transcript, groups messages by calendar date, and summarizes
each day in chronological order with one model call per day. The calls
are sequential; a failed day aborts the run without writing a report.

EXAMPLES:
    sigsum summarize                                 Use paths and model from config
    sigsum summarize --model gpt-4o --temperature 0.3
    sigsum summarize --markdown-path /tmp/export/Family/chat.md --output family.md")]
    Summarize {
        /// Path to the chat markdown file
        #[arg(
            long = "markdown-path",
            help = "Path to the chat markdown file (defaults to the configured export location)"
        )]
        markdown_path: Option<String>,
        /// Model to use for summarization
        #[arg(long, help = "Model to use for summarization")]
        model: Option<String>,
        /// Temperature for response generation (0-2)
        #[arg(long, help = "Temperature for response generation (0-2)")]
        temperature: Option<f32>,
        /// Path to write the summary markdown file
        #[arg(long, help = "Path to write the summary markdown file")]
        output: Option<String>,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the sigsum configuration file.

Configuration is stored in ~/.config/sigsum/config.toml and includes the
default chat name, export output directory, and summarizer model settings.

EXAMPLES:
    sigsum config show          Display current configuration
    sigsum config edit          Open config in $EDITOR"
    )]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

EXAMPLE:
    sigsum config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/sigsum/config.toml

EXAMPLE:
    sigsum config edit
    EDITOR=nano sigsum config edit")]
    Edit,
}
