// Pure decision function for a feedback submission.
//
// Responsibilities
// - Resolve name and department from the directory or the manual entry fields.
// - Resolve the tag from the service mode.
// - Resolve the timestamp from the admin backdate or the request time.
// - Reject when name or note is empty. Never perform input or output.

use crate::modules::feedback::core::colleagues::{ColleagueDirectory, Identity};
use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use crate::shared::core::primitives::format_timestamp;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Name and observation are required")]
    MissingRequiredFields,

    #[error("Unknown colleague: {0}")]
    UnknownColleague(String),
}

pub fn decide_submit(
    command: SubmitFeedback,
    directory: &ColleagueDirectory,
) -> Result<FeedbackEntry, DecideError> {
    let (name, dept) = match directory.lookup(&command.colleague) {
        Some(Identity::Known(colleague)) => (colleague.name.clone(), colleague.dept.clone()),
        Some(Identity::Manual) => (command.full_name, command.department),
        None => return Err(DecideError::UnknownColleague(command.colleague)),
    };

    let tag = if command.mode.requires_task_detail() {
        command.task_detail
    } else {
        command.mode.label().to_string()
    };

    let at = command.backdate.unwrap_or(command.requested_at);

    if name.is_empty() || command.note.is_empty() {
        return Err(DecideError::MissingRequiredFields);
    }

    Ok(FeedbackEntry {
        name,
        dept,
        tag,
        note: command.note,
        time: format_timestamp(at),
    })
}
