// Seed catalog the directory starts from (and resets to).

use std::collections::{BTreeMap, HashSet};

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::email::{EmailError, ParticipantEmail};

pub type Catalog = BTreeMap<String, Activity>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("seed catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity '{name}' has {participants} participants but allows only {max_participants}")]
    OverCapacity {
        name: String,
        participants: usize,
        max_participants: u32,
    },

    #[error("activity '{name}' lists '{email}' more than once")]
    DuplicateParticipant { name: String, email: String },

    #[error("activity '{name}' lists invalid participant '{email}': {source}")]
    InvalidParticipant {
        name: String,
        email: String,
        source: EmailError,
    },
}

/// The Mergington High School activities.
pub fn mergington_catalog() -> Catalog {
    let seed = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ];

    seed.into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            let mut activity = Activity::new(description, schedule, max_participants);
            activity.participants = participants.iter().map(|p| p.to_string()).collect();
            (name.to_string(), activity)
        })
        .collect()
}

/// Parses a catalog from JSON shaped like the `GET /activities` response.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    for (name, activity) in catalog {
        if activity.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(name.clone()));
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(CatalogError::OverCapacity {
                name: name.clone(),
                participants: activity.participants.len(),
                max_participants: activity.max_participants,
            });
        }
        for email in &activity.participants {
            ParticipantEmail::parse(email.as_str()).map_err(|source| {
                CatalogError::InvalidParticipant {
                    name: name.clone(),
                    email: email.clone(),
                    source,
                }
            })?;
        }
        let mut seen = HashSet::new();
        if let Some(email) = activity.participants.iter().find(|p| !seen.insert(*p)) {
            return Err(CatalogError::DuplicateParticipant {
                name: name.clone(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
