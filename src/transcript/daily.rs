//! Per-day aggregation of message content.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::segment::Message;

/// Accumulated message text per calendar date.
///
/// Iteration order of the map itself is unspecified; consumers go through
/// [`sorted_dates`] to get the chronological ordering.
pub type DayBuckets = HashMap<NaiveDate, String>;

/// Fold messages into per-day text buckets.
///
/// Each message's content is appended to its date's bucket followed by a
/// blank-line separator, in the order the messages were encountered. Every
/// message lands in exactly one bucket.
pub fn group_by_day(messages: &[Message]) -> DayBuckets {
    let mut buckets = DayBuckets::new();

    for message in messages {
        let bucket = buckets.entry(message.date).or_default();
        bucket.push_str(&message.content);
        bucket.push_str("\n\n");
    }

    buckets
}

/// The bucket dates in ascending order.
///
/// Sorting at consumption time, not map iteration order, is the ordering
/// contract; lexicographic order of YYYY-MM-DD dates is chronological.
pub fn sorted_dates(buckets: &DayBuckets) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = buckets.keys().copied().collect();
    dates.sort();
    dates
}
