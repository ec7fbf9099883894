use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory::ActivityDirectory;
use crate::modules::activities::core::email::ParticipantEmail;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::{
    SignUpForActivity, SignedUp,
};

pub struct SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<SignedUp, ApplicationError> {
        let email = ParticipantEmail::parse(command.email).inspect_err(|e| {
            tracing::debug!(activity = %command.activity_name, error = %e, "signup rejected: invalid email");
        })?;

        let participants = self
            .directory
            .add_participant(&command.activity_name, &email)
            .await
            .inspect_err(|e| {
                tracing::warn!(activity = %command.activity_name, email = %email, error = %e, "signup rejected");
            })?;

        tracing::info!(
            activity = %command.activity_name,
            email = %email,
            participants = participants.len(),
            "participant signed up"
        );
        Ok(SignedUp {
            activity_name: command.activity_name,
            email: email.into_inner(),
            participants,
        })
    }
}
