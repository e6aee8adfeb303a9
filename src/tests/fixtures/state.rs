use std::sync::Arc;

use crate::modules::feedback::adapters::outbound::in_memory::InMemoryEntries;
use crate::modules::feedback::core::access::AccessPolicy;
use crate::modules::feedback::core::colleagues::ColleagueDirectory;
use crate::modules::feedback::core::store::EntryStore;
use crate::shell::state::AppState;

pub const ADMIN_KEY: &str = "MERCADIA2025";
pub const DELETE_KEY: &str = "drop-it";
pub const EXPORT_FILE_NAME: &str = "mercadia_it_impact.csv";

pub async fn make_test_state(persistence: Arc<InMemoryEntries>) -> AppState {
    let store = Arc::new(EntryStore::open(persistence).await);
    AppState::new(
        store,
        Arc::new(ColleagueDirectory::default()),
        Arc::new(AccessPolicy::new(
            Some(ADMIN_KEY.into()),
            Some(DELETE_KEY.into()),
        )),
        EXPORT_FILE_NAME,
    )
}
