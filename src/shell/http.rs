use axum::{
    Extension, Router,
    http::Method,
    middleware::from_fn_with_state,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::feedback::use_cases::delete_feedback::inbound::http as delete_http;
use crate::modules::feedback::use_cases::export_feedback::inbound::http as export_http;
use crate::modules::feedback::use_cases::list_colleagues::inbound::http as colleagues_http;
use crate::modules::feedback::use_cases::list_feedback::inbound::http as list_http;
use crate::modules::feedback::use_cases::submit_feedback::inbound::http as submit_http;
use crate::shell::admin::require_admin;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    let admin_only = from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/feedback", get(list_http::handle).post(submit_http::handle))
        .route("/feedback/export", get(export_http::handle))
        .route(
            "/feedback/{index}",
            delete(delete_http::handle).route_layer(admin_only),
        )
        .route("/colleagues", get(colleagues_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE]),
        )
        .with_state(state)
}
