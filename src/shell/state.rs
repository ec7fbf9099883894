use crate::modules::activities::adapters::outbound::activity_directory::ActivityDirectory;
use crate::modules::activities::adapters::outbound::activity_directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::use_cases::remove_participant::handler::RemoveParticipantHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn ActivityDirectory>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryActivityDirectory>>,
    pub remove_handler: Arc<RemoveParticipantHandler<InMemoryActivityDirectory>>,
}

impl AppState {
    pub fn in_memory(directory: Arc<InMemoryActivityDirectory>) -> Self {
        Self {
            sign_up_handler: Arc::new(SignUpHandler::new(directory.clone())),
            remove_handler: Arc::new(RemoveParticipantHandler::new(directory.clone())),
            directory,
        }
    }
}
