use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl GqlActivity {
    pub fn new(name: String, activity: Activity) -> Self {
        Self {
            spots_left: activity.spots_left(),
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state.directory.list().await;
        Ok(activities
            .into_iter()
            .map(|(name, activity)| GqlActivity::new(name, activity))
            .collect())
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> GqlResult<GqlActivity> {
        let state = context.data_unchecked::<AppState>();
        let activity = state
            .directory
            .get(&name)
            .await
            .map_err(|e| async_graphql::Error::new(ApplicationError::from(e).to_string()))?;
        Ok(GqlActivity::new(name, activity))
    }
}
