use serde::{Deserialize, Serialize};

use crate::modules::activities::core::email::ParticipantEmail;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RosterError {
    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Activity is full")]
    ActivityFull { max_participants: u32 },
}

/// An extracurricular activity and its roster.
///
/// The name is not part of the record; the directory keys activities by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn is_participant(&self, email: &ParticipantEmail) -> bool {
        self.participants.iter().any(|p| p == email.as_str())
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Appends `email` to the roster. A duplicate is reported before a full roster.
    pub fn admit(&mut self, email: &ParticipantEmail) -> Result<(), RosterError> {
        if self.is_participant(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if self.spots_left() == 0 {
            return Err(RosterError::ActivityFull {
                max_participants: self.max_participants,
            });
        }
        self.participants.push(email.as_str().to_string());
        Ok(())
    }

    pub fn release(&mut self, email: &ParticipantEmail) -> Result<(), RosterError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email.as_str())
            .ok_or(RosterError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }
}
