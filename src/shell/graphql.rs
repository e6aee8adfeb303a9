use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::feedback::use_cases::delete_feedback::inbound::graphql::DeleteMutation;
use crate::modules::feedback::use_cases::submit_feedback::inbound::graphql::SubmitMutation;
use crate::shell::admin::AdminMode;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

pub use crate::modules::feedback::use_cases::list_feedback::inbound::graphql::QueryRoot;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitMutation, DeleteMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Carry the HTTP status of a problem as the `status` error extension.
pub fn problem_to_gql(problem: ApiProblem) -> async_graphql::Error {
    let status = problem.status().as_u16();
    async_graphql::Error::new(problem.detail()).extend_with(|_, ext| ext.set("status", status))
}

/// Admin mode travels with each request, detected from the same `admin` query parameter.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    admin: AdminMode,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(admin)).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
