use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::feedback::use_cases::delete_feedback::command::DeleteFeedback;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteFeedbackBody {
    pub delete_key: String,
}

/// Mounted behind the admin route layer.
pub async fn handle(
    State(state): State<AppState>,
    Path(index): Path<i64>,
    body: Result<Json<DeleteFeedbackBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeleteFeedback {
        index,
        delete_key: body.delete_key,
    };

    match state.delete_handler.handle(command).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiProblem::from(e).into_response(),
    }
}
