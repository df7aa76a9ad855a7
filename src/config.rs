//! Configuration management for sigsum

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::export::chat_dir_name;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Chat to export when none is given on the command line
    #[serde(default = "default_chat_name")]
    pub chat_name: String,
    /// Directory sigexport writes into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Summarizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Where the assembled report is written
    #[serde(default = "default_summary_output")]
    pub output: String,
    /// Override for OpenAI-compatible endpoints; unset means api.openai.com
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

fn default_chat_name() -> String {
    "Family".to_string()
}

fn default_output_dir() -> String {
    "/tmp/sigsum-output".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_summary_output() -> String {
    "summary.md".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            chat_name: default_chat_name(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            output: default_summary_output(),
            api_base: None,
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/sigsum/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the config directory path (~/.config/sigsum)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("sigsum"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Expand ~ in the export output directory path
    pub fn export_output_dir(&self) -> PathBuf {
        expand_home(&self.export.output_dir)
    }

    /// Default location of the exported chat markdown: the configured
    /// output directory, the chat's directory segment, then `chat.md`.
    pub fn markdown_path(&self) -> PathBuf {
        self.export_output_dir()
            .join(chat_dir_name(&self.export.chat_name))
            .join("chat.md")
    }
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(dir)
}
