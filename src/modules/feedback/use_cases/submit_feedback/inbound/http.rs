use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::feedback::core::service_mode::ServiceMode;
use crate::modules::feedback::use_cases::submit_feedback::command::{
    SubmitFeedback, admin_backdate,
};
use crate::shared::core::primitives::local_now;
use crate::shell::admin::AdminMode;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitFeedbackBody {
    pub colleague: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub mode: ServiceMode,
    #[serde(default)]
    pub task_detail: String,
    #[serde(default)]
    pub note: String,
    pub date: Option<String>,
    pub time: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    AdminMode(is_admin): AdminMode,
    body: Result<Json<SubmitFeedbackBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let requested_at = local_now();
    let backdate = match admin_backdate(
        is_admin,
        body.date.as_deref(),
        body.time.as_deref(),
        requested_at,
    ) {
        Ok(backdate) => backdate,
        Err(e) => return ApiProblem::from(e).into_response(),
    };

    let command = SubmitFeedback {
        colleague: body.colleague,
        full_name: body.full_name,
        department: body.department,
        mode: body.mode,
        task_detail: body.task_detail,
        note: body.note,
        requested_at,
        backdate,
    };

    match state.submit_handler.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => ApiProblem::from(e).into_response(),
    }
}
