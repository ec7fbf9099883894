use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::activities::adapters::outbound::activity_directory::{
    ActivityDirectory, DirectoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalog::{Catalog, mergington_catalog};
use crate::modules::activities::core::email::ParticipantEmail;

pub struct InMemoryActivityDirectory {
    seed: Catalog,
    activities: Mutex<Catalog>,
}

impl InMemoryActivityDirectory {
    pub fn new(seed: Catalog) -> Self {
        Self {
            activities: Mutex::new(seed.clone()),
            seed,
        }
    }
}

impl Default for InMemoryActivityDirectory {
    fn default() -> Self {
        Self::new(mergington_catalog())
    }
}

#[async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn list(&self) -> Catalog {
        self.activities.lock().await.clone()
    }

    async fn get(&self, name: &str) -> Result<Activity, DirectoryError> {
        self.activities
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })
    }

    async fn add_participant(
        &self,
        name: &str,
        email: &ParticipantEmail,
    ) -> Result<Vec<String>, DirectoryError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })?;
        activity.admit(email)?;
        Ok(activity.participants.clone())
    }

    async fn remove_participant(
        &self,
        name: &str,
        email: &ParticipantEmail,
    ) -> Result<Vec<String>, DirectoryError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })?;
        activity.release(email)?;
        Ok(activity.participants.clone())
    }

    async fn reset(&self) {
        *self.activities.lock().await = self.seed.clone();
    }
}
