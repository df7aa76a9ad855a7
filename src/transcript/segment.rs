//! Message segmentation between timestamp markers.

use chrono::{NaiveDate, NaiveDateTime};

use super::scanner::scan;

/// Format of the timestamp inside a message marker.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamp-delimited unit of transcript content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The timestamp as written in the transcript, no timezone conversion.
    pub timestamp: NaiveDateTime,
    /// The calendar-date component of the timestamp.
    pub date: NaiveDate,
    /// Message text including its own leading marker, up to (exclusive of)
    /// the next marker or end of transcript, trimmed of surrounding
    /// whitespace.
    pub content: String,
}

/// Split transcript text into messages.
///
/// Each message spans from its marker's offset to the next marker's offset,
/// or to the end of the text for the last one. A transcript with no markers
/// produces an empty vector; callers treat "zero messages" as a valid state
/// rather than an error.
///
/// A marker whose digits do not form a real calendar date (e.g.
/// `[2024-13-01 ..]`) is not treated as a message start; its text is
/// absorbed by the preceding message.
pub fn segment(text: &str) -> Vec<Message> {
    let starts: Vec<(usize, NaiveDateTime)> = scan(text)
        .filter_map(|m| {
            NaiveDateTime::parse_from_str(m.timestamp, TIMESTAMP_FORMAT)
                .ok()
                .map(|ts| (m.offset, ts))
        })
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &(offset, timestamp))| {
            let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
            Message {
                timestamp,
                date: timestamp.date(),
                content: text[offset..end].trim().to_string(),
            }
        })
        .collect()
}
