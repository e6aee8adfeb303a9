// A single feedback record as persisted and displayed.
//
// Invariants
// - name and note are non-empty for every entry built by the submission decider.
// - Entries are never mutated after creation; they only get appended or removed.
// - Field order matches COLUMNS and the persisted header row.

use serde::{Deserialize, Serialize};

pub const COLUMNS: [&str; 5] = ["name", "dept", "tag", "note", "time"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub dept: String,
    pub tag: String,
    pub note: String,
    pub time: String,
}
