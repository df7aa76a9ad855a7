//! End-to-end tests for the summarization pipeline and report assembly

use chrono::NaiveDate;
use sigsum::summary::{
    assemble_report, summarize_days, SummarizeError, SummarizeOptions, SummarizeResult, Summarizer,
};
use sigsum::transcript::{group_by_day, segment};

const EXAMPLE: &str =
    "[2024-01-01 10:00:00] hello\n[2024-01-01 11:00:00] world\n[2024-01-02 09:00:00] next day";

/// Stub summarizer echoing the first line of its input.
struct FirstLineSummarizer;

impl Summarizer for FirstLineSummarizer {
    fn summarize(&self, text: &str, _options: &SummarizeOptions) -> SummarizeResult<String> {
        Ok(format!("SUMMARY:{}", text.lines().next().unwrap_or("")))
    }
}

/// Stub summarizer that always fails.
struct BrokenSummarizer;

impl Summarizer for BrokenSummarizer {
    fn summarize(&self, _text: &str, _options: &SummarizeOptions) -> SummarizeResult<String> {
        Err(SummarizeError::Api("service unavailable".to_string()))
    }
}

fn options() -> SummarizeOptions {
    SummarizeOptions {
        model: "gpt-4o-mini".to_string(),
        temperature: 0.7,
    }
}

/// Parse the `## YYYY-MM-DD` headings back out of an assembled report.
fn report_dates(report: &str) -> Vec<NaiveDate> {
    report
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .filter_map(|heading| NaiveDate::parse_from_str(heading, "%Y-%m-%d").ok())
        .collect()
}

#[test]
fn example_transcript_produces_ordered_report() {
    let buckets = group_by_day(&segment(EXAMPLE));
    let summaries = summarize_days(&FirstLineSummarizer, &buckets, &options()).unwrap();
    let report = assemble_report(&summaries);

    assert!(report.starts_with("## 2024-01-01\n\nSUMMARY:[2024-01-01 10:00:00] hello\n\n"));
    assert!(report.contains("## 2024-01-02"));
    assert!(report.contains("SUMMARY:[2024-01-02 09:00:00] next day"));
}

#[test]
fn empty_transcript_produces_empty_report_without_error() {
    let buckets = group_by_day(&segment("no markers here"));
    let summaries = summarize_days(&FirstLineSummarizer, &buckets, &options()).unwrap();

    assert!(summaries.is_empty());
    assert_eq!(assemble_report(&summaries), "");
}

#[test]
fn report_headings_round_trip_to_the_same_date_list() {
    let shuffled = "[2024-02-10 09:00:00] b\n[2024-02-08 09:00:00] a\n[2024-02-09 09:00:00] c";
    let buckets = group_by_day(&segment(shuffled));
    let summaries = summarize_days(&FirstLineSummarizer, &buckets, &options()).unwrap();
    let report = assemble_report(&summaries);

    let expected: Vec<NaiveDate> = summaries.iter().map(|s| s.date).collect();
    assert_eq!(report_dates(&report), expected);
    assert!(expected.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn summarizer_failure_is_fatal_to_the_pipeline() {
    let buckets = group_by_day(&segment(EXAMPLE));
    let result = summarize_days(&BrokenSummarizer, &buckets, &options());

    assert!(matches!(result, Err(SummarizeError::Api(_))));
}
