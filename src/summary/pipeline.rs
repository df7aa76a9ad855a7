//! Sequential per-day summarization pipeline.

use chrono::NaiveDate;

use crate::transcript::{sorted_dates, DayBuckets};

use super::backend::{SummarizeOptions, SummarizeResult, Summarizer};

/// The summarizer's output for one day bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub summary: String,
}

/// Summarize every day bucket in ascending date order.
///
/// Calls are strictly sequential; each summarizer call completes before the
/// next date is attempted, so the external service sees no bursts and the
/// output order matches the report order. A date whose bucket text is
/// absent or empty is skipped with a diagnostic. The first failed call
/// aborts the whole pipeline; no partial result is returned and nothing is
/// retried.
pub fn summarize_days(
    summarizer: &dyn Summarizer,
    buckets: &DayBuckets,
    options: &SummarizeOptions,
) -> SummarizeResult<Vec<DailySummary>> {
    let dates = sorted_dates(buckets);
    let mut summaries = Vec::with_capacity(dates.len());

    for date in dates {
        let content = match buckets.get(&date) {
            Some(content) if !content.trim().is_empty() => content,
            _ => {
                eprintln!("No content found for date: {date}");
                continue;
            }
        };

        println!("Summarizing {date}...");
        let summary = summarizer.summarize(content, options)?;
        summaries.push(DailySummary { date, summary });
    }

    Ok(summaries)
}
