use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::feedback::use_cases::delete_feedback::command::DeleteFeedback;
use crate::shell::admin::AdminMode;
use crate::shell::graphql::problem_to_gql;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteMutation;

#[Object]
impl DeleteMutation {
    /// Returns true once the entry at `index` (insertion order) is gone.
    async fn delete_feedback(
        &self,
        context: &Context<'_>,
        index: i64,
        delete_key: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let is_admin = context
            .data_opt::<AdminMode>()
            .is_some_and(|AdminMode(admin)| *admin);
        if !is_admin {
            tracing::warn!(index, "graphql delete requested without admin mode");
            return Err(problem_to_gql(ApiProblem::admin_required()));
        }

        state
            .delete_handler
            .handle(DeleteFeedback { index, delete_key })
            .await
            .map_err(|e| problem_to_gql(ApiProblem::from(e)))?;
        Ok(true)
    }
}
