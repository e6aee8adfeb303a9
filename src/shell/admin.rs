// Admin mode detection at the HTTP boundary.
//
// Admin mode is a capability token: the `admin` query parameter must equal the
// configured admin key. It is evaluated per request; there is no session.

use axum::{
    extract::{FromRequestParts, Query, Request, State},
    http::{Uri, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::convert::Infallible;

use crate::modules::feedback::core::access::AccessPolicy;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

pub const ADMIN_QUERY_PARAM: &str = "admin";

#[derive(Deserialize)]
struct AdminQuery {
    admin: Option<String>,
}

/// Whether the current request carries a valid admin token. Never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminMode(pub bool);

impl AdminMode {
    pub fn from_uri(access: &AccessPolicy, uri: &Uri) -> Self {
        let token = Query::<AdminQuery>::try_from_uri(uri)
            .ok()
            .and_then(|Query(query)| query.admin);
        AdminMode(access.is_admin(token.as_deref()))
    }
}

impl FromRequestParts<AppState> for AdminMode {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AdminMode::from_uri(&state.access, &parts.uri))
    }
}

/// Route layer that answers 403 unless the request is in admin mode.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let AdminMode(is_admin) = AdminMode::from_uri(&state.access, request.uri());
    if !is_admin {
        tracing::warn!(path = %request.uri().path(), "admin route requested without admin mode");
        return ApiProblem::admin_required().into_response();
    }
    next.run(request).await
}
