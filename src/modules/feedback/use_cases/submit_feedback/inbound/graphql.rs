use async_graphql::{Context, Enum, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::feedback::core::entry::FeedbackEntry;
use crate::modules::feedback::core::service_mode::ServiceMode;
use crate::modules::feedback::use_cases::submit_feedback::command::{
    SubmitFeedback, admin_backdate,
};
use crate::shared::core::primitives::local_now;
use crate::shell::admin::AdminMode;
use crate::shell::graphql::problem_to_gql;
use crate::shell::problem::ApiProblem;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "ServiceMode")]
pub enum GqlServiceMode {
    AllTechnicalAssistance,
    SpecificItProject,
}

impl From<GqlServiceMode> for ServiceMode {
    fn from(v: GqlServiceMode) -> Self {
        match v {
            GqlServiceMode::AllTechnicalAssistance => ServiceMode::AllTechnicalAssistance,
            GqlServiceMode::SpecificItProject => ServiceMode::SpecificItProject,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlFeedbackEntry {
    pub name: String,
    pub dept: String,
    pub tag: String,
    pub note: String,
    pub time: String,
}

impl From<FeedbackEntry> for GqlFeedbackEntry {
    fn from(v: FeedbackEntry) -> Self {
        Self {
            name: v.name,
            dept: v.dept,
            tag: v.tag,
            note: v.note,
            time: v.time,
        }
    }
}

/// Form fields of a submission. `date` and `time` only apply in admin mode.
#[derive(InputObject)]
pub struct SubmitFeedbackInput {
    pub colleague: String,
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub mode: Option<GqlServiceMode>,
    pub task_detail: Option<String>,
    pub note: String,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Default)]
pub struct SubmitMutation;

#[Object]
impl SubmitMutation {
    async fn submit_feedback(
        &self,
        context: &Context<'_>,
        input: SubmitFeedbackInput,
    ) -> GqlResult<GqlFeedbackEntry> {
        let state = context.data_unchecked::<AppState>();
        let is_admin = context
            .data_opt::<AdminMode>()
            .is_some_and(|AdminMode(admin)| *admin);

        let requested_at = local_now();
        let backdate = admin_backdate(
            is_admin,
            input.date.as_deref(),
            input.time.as_deref(),
            requested_at,
        )
        .map_err(|e| problem_to_gql(ApiProblem::from(e)))?;

        let command = SubmitFeedback {
            colleague: input.colleague,
            full_name: input.full_name.unwrap_or_default(),
            department: input.department.unwrap_or_default(),
            mode: input.mode.map(Into::into).unwrap_or_default(),
            task_detail: input.task_detail.unwrap_or_default(),
            note: input.note,
            requested_at,
            backdate,
        };

        let entry = state
            .submit_handler
            .handle(command)
            .await
            .map_err(|e| problem_to_gql(ApiProblem::from(e)))?;
        Ok(entry.into())
    }
}
