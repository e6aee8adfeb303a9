use crate::modules::feedback::core::entry::FeedbackEntry;

pub fn make_feedback_entry(name: &str, note: &str) -> FeedbackEntry {
    FeedbackEntry {
        name: name.to_string(),
        dept: "Responsable De Magasin".to_string(),
        tag: "All Technical Assistance".to_string(),
        note: note.to_string(),
        time: "14:05 | 31 Jan 2025".to_string(),
    }
}
