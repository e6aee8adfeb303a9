use serde::Serialize;

use crate::modules::feedback::core::entry::FeedbackEntry;

/// One row of the feedback wall. `index` is the entry's insertion position,
/// which is what the delete operation addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub index: i64,
    pub name: String,
    pub dept: String,
    pub tag: String,
    pub note: String,
    pub time: String,
}

/// Newest first.
pub fn feed(entries: Vec<FeedbackEntry>) -> Vec<FeedItem> {
    entries
        .into_iter()
        .enumerate()
        .rev()
        .map(|(position, entry)| FeedItem {
            index: position as i64,
            name: entry.name,
            dept: entry.dept,
            tag: entry.tag,
            note: entry.note,
            time: entry.time,
        })
        .collect()
}
