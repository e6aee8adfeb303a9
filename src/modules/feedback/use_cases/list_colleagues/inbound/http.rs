use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::feedback::core::colleagues::Colleague;
use crate::modules::feedback::core::service_mode::ServiceMode;
use crate::shell::state::AppState;

/// Everything a front end needs to render the submission form.
#[derive(Serialize)]
pub struct FormOptions {
    pub colleagues: Vec<Colleague>,
    pub modes: Vec<&'static str>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(FormOptions {
        colleagues: state.directory.options(),
        modes: ServiceMode::ALL.iter().map(|m| m.label()).collect(),
    })
}
