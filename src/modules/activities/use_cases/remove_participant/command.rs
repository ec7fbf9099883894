#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveParticipant {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRemoved {
    pub activity_name: String,
    pub email: String,
    pub participants: Vec<String>,
}

impl ParticipantRemoved {
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity_name)
    }
}
