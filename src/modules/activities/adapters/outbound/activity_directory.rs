use async_trait::async_trait;

use crate::modules::activities::core::activity::{Activity, RosterError};
use crate::modules::activities::core::catalog::Catalog;
use crate::modules::activities::core::email::ParticipantEmail;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound { name: String },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Owns every activity for the lifetime of the process.
///
/// Each mutation checks and applies its change atomically; callers never
/// observe a roster above capacity or holding the same email twice.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    async fn list(&self) -> Catalog;

    async fn get(&self, name: &str) -> Result<Activity, DirectoryError>;

    /// Returns the roster after the email was appended.
    async fn add_participant(
        &self,
        name: &str,
        email: &ParticipantEmail,
    ) -> Result<Vec<String>, DirectoryError>;

    /// Returns the roster after the email was removed.
    async fn remove_participant(
        &self,
        name: &str,
        email: &ParticipantEmail,
    ) -> Result<Vec<String>, DirectoryError>;

    async fn reset(&self);
}
