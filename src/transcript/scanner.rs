//! Timestamp marker scanning for transcript text.

use std::sync::OnceLock;

use regex::Regex;

static MARKER_RE: OnceLock<Regex> = OnceLock::new();

/// Pattern for a message-start marker, anchored at the start of a line.
fn marker_regex() -> &'static Regex {
    MARKER_RE.get_or_init(|| {
        Regex::new(r"(?m)^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\]")
            .expect("marker pattern is valid")
    })
}

/// A message-start marker found in transcript text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'t> {
    /// Byte offset of the opening bracket within the transcript.
    pub offset: usize,
    /// The timestamp text between the brackets, e.g. `2024-01-01 10:00:00`.
    pub timestamp: &'t str,
}

/// Scan transcript text for message-start markers.
///
/// Yields one [`Marker`] per bracketed `[YYYY-MM-DD HH:MM:SS]` timestamp
/// found at the start of a line, in strictly increasing offset order. The
/// iterator is lazy and holds no state beyond its position in the input,
/// so scanning can be restarted by calling again. Text with no markers
/// yields an empty sequence.
pub fn scan(text: &str) -> impl Iterator<Item = Marker<'_>> {
    marker_regex().find_iter(text).map(|m| {
        let matched = m.as_str();
        Marker {
            offset: m.start(),
            // Strip the surrounding brackets from the match.
            timestamp: &matched[1..matched.len() - 1],
        }
    })
}
