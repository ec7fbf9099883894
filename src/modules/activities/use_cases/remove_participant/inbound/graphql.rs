use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject)]
pub struct RemoveParticipantPayload {
    pub message: String,
    pub participants: Vec<String>,
}

#[derive(Default)]
pub struct RemoveParticipantMutation;

#[Object]
impl RemoveParticipantMutation {
    async fn remove_participant(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<RemoveParticipantPayload> {
        let state = context.data_unchecked::<AppState>();
        let removed = state
            .remove_handler
            .handle(RemoveParticipant {
                activity_name,
                email,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(RemoveParticipantPayload {
            message: removed.message(),
            participants: removed.participants,
        })
    }
}
