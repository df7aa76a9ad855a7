//! Transcript parsing for exported Signal chats.
//!
//! An exported transcript is plain text where each message starts with a
//! bracketed `[YYYY-MM-DD HH:MM:SS]` marker at the beginning of a line.
//! This module turns that text into discrete messages and groups them into
//! per-day buckets for summarization.
//!
//! # Pipeline
//!
//! 1. [`scan`] - find message-start markers and their byte offsets
//! 2. [`segment`] - slice the text between consecutive markers into [`Message`]s
//! 3. [`group_by_day`] - accumulate message content per calendar date

mod daily;
mod scanner;
mod segment;

pub use daily::{group_by_day, sorted_dates, DayBuckets};
pub use scanner::{scan, Marker};
pub use segment::{segment, Message, TIMESTAMP_FORMAT};
