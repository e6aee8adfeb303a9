use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::feedback::use_cases::list_feedback::projection::{FeedItem, feed};
use crate::shell::admin::AdminMode;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct FeedbackWall {
    pub admin: bool,
    pub entries: Vec<FeedItem>,
}

pub async fn handle(
    State(state): State<AppState>,
    AdminMode(admin): AdminMode,
) -> impl IntoResponse {
    let entries = feed(state.store.entries().await);
    Json(FeedbackWall { admin, entries })
}
