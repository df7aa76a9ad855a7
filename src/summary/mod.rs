//! Per-day summarization of aggregated transcript text.
//!
//! The [`Summarizer`] trait is the seam to the external summarization
//! service; [`summarize_days`] drives it sequentially over day buckets and
//! [`assemble_report`] concatenates the results into the final document.

mod backend;
mod pipeline;
mod report;

pub use backend::{OpenAiSummarizer, SummarizeError, SummarizeOptions, SummarizeResult, Summarizer};
pub use pipeline::{summarize_days, DailySummary};
pub use report::assemble_report;
