// Deletion command handler.
//
// Responsibilities
// - Check the delete key before touching the store.
// - Remove the entry by position and let the store rewrite the snapshot.
//
// Admin mode itself is checked at the inbound boundary, not here.

use crate::modules::feedback::core::access::AccessPolicy;
use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::modules::feedback::core::store::EntryStore;
use crate::modules::feedback::use_cases::delete_feedback::command::DeleteFeedback;
use crate::modules::feedback::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteFeedbackHandler {
    store: Arc<EntryStore>,
    access: Arc<AccessPolicy>,
}

impl DeleteFeedbackHandler {
    pub fn new(store: Arc<EntryStore>, access: Arc<AccessPolicy>) -> Self {
        Self { store, access }
    }

    pub async fn handle(&self, command: DeleteFeedback) -> Result<FeedbackEntry, ApplicationError> {
        if !self.access.accepts_delete_key(&command.delete_key) {
            tracing::warn!(index = command.index, "delete rejected: invalid key");
            return Err(ApplicationError::InvalidDeleteKey);
        }
        let removed = self.store.delete_at(command.index).await?;
        tracing::info!(index = command.index, name = %removed.name, "feedback deleted");
        Ok(removed)
    }
}
