//! Signal Summarizer (sigsum) Library
//!
//! A Rust library for exporting Signal chat history with sigexport and
//! producing per-day AI summaries of the exported transcript.

pub mod cli;
pub mod config;
pub mod export;
pub mod summary;
pub mod transcript;

pub use config::Config;
pub use export::{ExportRequest, ExportResult, ExportTool, Sigexport};
pub use summary::{DailySummary, SummarizeOptions, Summarizer};
pub use transcript::Message;
