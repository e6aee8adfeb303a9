use async_graphql::{Context, Object, SimpleObject};

use crate::modules::feedback::core::colleagues::Colleague;
use crate::modules::feedback::use_cases::list_feedback::projection::{FeedItem, feed};
use crate::shell::admin::AdminMode;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlFeedItem {
    pub index: i64,
    pub name: String,
    pub dept: String,
    pub tag: String,
    pub note: String,
    pub time: String,
}

impl From<FeedItem> for GqlFeedItem {
    fn from(v: FeedItem) -> Self {
        Self {
            index: v.index,
            name: v.name,
            dept: v.dept,
            tag: v.tag,
            note: v.note,
            time: v.time,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlColleague {
    pub name: String,
    pub dept: String,
}

impl From<Colleague> for GqlColleague {
    fn from(v: Colleague) -> Self {
        Self {
            name: v.name,
            dept: v.dept,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Feedback wall, newest first.
    async fn feedback(&self, context: &Context<'_>) -> Vec<GqlFeedItem> {
        let state = context.data_unchecked::<AppState>();
        feed(state.store.entries().await)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    async fn colleagues(&self, context: &Context<'_>) -> Vec<GqlColleague> {
        let state = context.data_unchecked::<AppState>();
        state
            .directory
            .options()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    async fn is_admin(&self, context: &Context<'_>) -> bool {
        context
            .data_opt::<AdminMode>()
            .is_some_and(|AdminMode(admin)| *admin)
    }
}
