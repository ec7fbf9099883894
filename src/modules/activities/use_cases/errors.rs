use thiserror::Error;

use crate::modules::activities::adapters::outbound::activity_directory::DirectoryError;
use crate::modules::activities::core::activity::RosterError;
use crate::modules::activities::core::email::EmailError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error(transparent)]
    Rejected(RosterError),
}

impl From<DirectoryError> for ApplicationError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::NotFound { name } => ApplicationError::ActivityNotFound(name),
            DirectoryError::Roster(reason) => ApplicationError::Rejected(reason),
        }
    }
}
