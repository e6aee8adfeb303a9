use crate::modules::feedback::core::access::AccessPolicy;
use crate::modules::feedback::core::colleagues::ColleagueDirectory;
use crate::modules::feedback::core::store::EntryStore;
use crate::modules::feedback::use_cases::delete_feedback::handler::DeleteFeedbackHandler;
use crate::modules::feedback::use_cases::submit_feedback::handler::SubmitFeedbackHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub directory: Arc<ColleagueDirectory>,
    pub access: Arc<AccessPolicy>,
    pub submit_handler: Arc<SubmitFeedbackHandler>,
    pub delete_handler: Arc<DeleteFeedbackHandler>,
    pub export_file_name: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<EntryStore>,
        directory: Arc<ColleagueDirectory>,
        access: Arc<AccessPolicy>,
        export_file_name: &str,
    ) -> Self {
        let submit_handler = Arc::new(SubmitFeedbackHandler::new(
            store.clone(),
            directory.clone(),
        ));
        let delete_handler = Arc::new(DeleteFeedbackHandler::new(store.clone(), access.clone()));
        Self {
            store,
            directory,
            access,
            submit_handler,
            delete_handler,
            export_file_name: Arc::from(export_file_name),
        }
    }
}
