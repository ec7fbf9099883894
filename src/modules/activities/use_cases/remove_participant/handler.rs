use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory::ActivityDirectory;
use crate::modules::activities::core::email::ParticipantEmail;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::remove_participant::command::{
    ParticipantRemoved, RemoveParticipant,
};

pub struct RemoveParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> RemoveParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        command: RemoveParticipant,
    ) -> Result<ParticipantRemoved, ApplicationError> {
        let email = ParticipantEmail::parse(command.email).inspect_err(|e| {
            tracing::debug!(activity = %command.activity_name, error = %e, "removal rejected: invalid email");
        })?;

        let participants = self
            .directory
            .remove_participant(&command.activity_name, &email)
            .await
            .inspect_err(|e| {
                tracing::warn!(activity = %command.activity_name, email = %email, error = %e, "removal rejected");
            })?;

        tracing::info!(
            activity = %command.activity_name,
            email = %email,
            participants = participants.len(),
            "participant removed"
        );
        Ok(ParticipantRemoved {
            activity_name: command.activity_name,
            email: email.into_inner(),
            participants,
        })
    }
}
