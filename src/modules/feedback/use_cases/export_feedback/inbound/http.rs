use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::modules::feedback::use_cases::errors::ApplicationError;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.store.export().await {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"{}\"", state.export_file_name);
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => ApiProblem::from(ApplicationError::from(e)).into_response(),
    }
}
