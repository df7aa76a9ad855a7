//! Signal Summarizer (sigsum) - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use sigsum::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            start,
            end,
            chat,
            output,
        } => commands::export::handle(
            start.as_deref(),
            end.as_deref(),
            chat.as_deref(),
            output.as_deref(),
        ),
        Commands::Summarize {
            markdown_path,
            model,
            temperature,
            output,
        } => commands::summarize::handle(
            markdown_path.as_deref(),
            model.as_deref(),
            temperature,
            output.as_deref(),
        ),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
    }
}
