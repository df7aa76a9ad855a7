//! Final report assembly from per-day summaries.

use super::pipeline::DailySummary;

/// Width of the horizontal rule between day sections.
const RULE_WIDTH: usize = 80;

/// Concatenate daily summaries into the final report document.
///
/// Each entry becomes a level-2 heading with the date, the summary text,
/// and a horizontal rule, in the order the summaries are given (the
/// pipeline produces them ascending by date). An empty summary sequence
/// produces an empty document.
pub fn assemble_report(summaries: &[DailySummary]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut report = String::new();

    for DailySummary { date, summary } in summaries {
        report.push_str(&format!("## {date}\n\n{summary}\n\n {rule}\n\n"));
    }

    report
}
