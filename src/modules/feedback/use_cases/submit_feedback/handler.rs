use crate::modules::feedback::core::colleagues::ColleagueDirectory;
use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::modules::feedback::core::store::EntryStore;
use crate::modules::feedback::use_cases::errors::ApplicationError;
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use crate::modules::feedback::use_cases::submit_feedback::decide::decide_submit;
use std::sync::Arc;

pub struct SubmitFeedbackHandler {
    store: Arc<EntryStore>,
    directory: Arc<ColleagueDirectory>,
}

impl SubmitFeedbackHandler {
    pub fn new(store: Arc<EntryStore>, directory: Arc<ColleagueDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(&self, command: SubmitFeedback) -> Result<FeedbackEntry, ApplicationError> {
        let entry = match decide_submit(command, &self.directory) {
            Ok(entry) => entry,
            Err(reason) => {
                tracing::info!(%reason, "feedback submission rejected");
                return Err(reason.into());
            }
        };
        self.store.append(entry.clone()).await?;
        tracing::info!(name = %entry.name, tag = %entry.tag, "feedback saved");
        Ok(entry)
    }
}
