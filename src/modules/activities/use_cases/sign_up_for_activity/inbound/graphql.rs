use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject)]
pub struct SignUpPayload {
    pub message: String,
    pub participants: Vec<String>,
}

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<SignUpPayload> {
        let state = context.data_unchecked::<AppState>();
        let signed_up = state
            .sign_up_handler
            .handle(SignUpForActivity {
                activity_name,
                email,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(SignUpPayload {
            message: signed_up.message(),
            participants: signed_up.participants,
        })
    }
}
