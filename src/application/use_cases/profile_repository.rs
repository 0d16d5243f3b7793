use crate::domain::error::{AppError, Result};
use crate::domain::profile::Profile;
use crate::infrastructure::storage::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Local-scope key holding the whole parsed collection as one blob
pub const PROFILES_KEY: &str = "csvProfiles";

/// Addressable collection of parsed profiles, persisted to the local
/// storage scope. The collection is only ever replaced wholesale;
/// `profile_name` is a lookup key but is not unique — first match wins.
pub struct ProfileRepository {
    local: Arc<dyn KeyValueStore>,
}

impl ProfileRepository {
    pub fn new(local: Arc<dyn KeyValueStore>) -> Self {
        Self { local }
    }

    /// Replace the stored collection with `profiles`, as a single write
    pub async fn replace_all(&self, profiles: &[Profile]) -> Result<()> {
        let blob = serde_json::to_string(profiles).map_err(|e| {
            AppError::PersistenceError(format!("Failed to serialize profiles: {}", e))
        })?;

        self.local.set(PROFILES_KEY, &blob).await?;
        info!(count = profiles.len(), "Stored profile collection");
        Ok(())
    }

    /// The stored collection in source-row order, or empty when none stored
    pub async fn list(&self) -> Result<Vec<Profile>> {
        match self.local.get(PROFILES_KEY).await? {
            Some(blob) => serde_json::from_str(&blob).map_err(|e| {
                AppError::CorruptState(format!("Failed to decode stored profiles: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// First profile whose `profile_name` equals `name`
    pub async fn find_by_name(&self, name: &str) -> Result<Profile> {
        let profiles = self.list().await?;
        profiles
            .into_iter()
            .find(|profile| profile.profile_name() == Some(name))
            .ok_or_else(|| AppError::NotFound(format!("Profile not found: {}", name)))
    }

    /// Drop the stored collection. Callers that also want the active
    /// selection gone go through `ProfileSyncUseCase::clear_all`.
    pub async fn clear(&self) -> Result<()> {
        self.local.remove(PROFILES_KEY).await
    }
}
