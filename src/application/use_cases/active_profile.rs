use crate::domain::error::{AppError, Result};
use crate::domain::fields::ProfileField;
use crate::domain::profile::Profile;
use crate::infrastructure::storage::KeyValueStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

/// Serialized active profile, duplicated in both scopes
pub const PROFILE_INFO_KEY: &str = "profileInfo";
/// Name of the active profile, duplicated in both scopes
pub const PROFILE_NAME_KEY: &str = "profile_name";

static PROFILE_URL_MARKER: &str = "whoerip.com/multilogin/";

static PROFILE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"multilogin/([A-Za-z0-9]+)").unwrap());

/// Designates one profile as current and mirrors it into the synced
/// and local storage scopes.
///
/// The mirror is two independent writes, synced scope first. A failed
/// second write leaves the scopes inconsistent; no rollback is
/// attempted and the selection counts as not committed.
pub struct ActiveProfileSelector {
    synced: Arc<dyn KeyValueStore>,
    local: Arc<dyn KeyValueStore>,
}

impl ActiveProfileSelector {
    pub fn new(synced: Arc<dyn KeyValueStore>, local: Arc<dyn KeyValueStore>) -> Self {
        Self { synced, local }
    }

    /// Make `profile` the current selection in both scopes
    pub async fn select(&self, profile: &Profile) -> Result<()> {
        let serialized = profile.to_json()?;
        let name = profile.profile_name().unwrap_or("");

        self.synced.set(PROFILE_INFO_KEY, &serialized).await?;
        self.synced.set(PROFILE_NAME_KEY, name).await?;
        self.local.set(PROFILE_INFO_KEY, &serialized).await?;
        self.local.set(PROFILE_NAME_KEY, name).await?;

        info!(profile_name = name, "Selected active profile");
        Ok(())
    }

    /// The current selection from the synced scope, or `None` when no
    /// profile is selected. An undecodable blob is `CorruptState`.
    pub async fn current(&self) -> Result<Option<Profile>> {
        match self.synced.get(PROFILE_INFO_KEY).await? {
            Some(raw) => Profile::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Name of the current selection, without decoding the full record
    pub async fn current_name(&self) -> Result<Option<String>> {
        self.synced.get(PROFILE_NAME_KEY).await
    }

    /// Store only the profile name in the synced scope, for callers
    /// that key a profile in by hand before any CSV is loaded
    pub async fn save_profile_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Profile name is required.".to_string(),
            ));
        }
        self.synced.set(PROFILE_NAME_KEY, name).await
    }

    /// Update one field of the current selection and re-mirror it.
    /// This backs inbound credential-update commands.
    pub async fn update_field(&self, field: ProfileField, value: &str) -> Result<()> {
        let mut profile = self.current().await?.ok_or_else(|| {
            AppError::NotFound("No active profile to update".to_string())
        })?;

        profile.set(field.as_str(), value);
        self.select(&profile).await
    }

    /// Drop the selection from both scopes; safe to call repeatedly
    pub async fn clear(&self) -> Result<()> {
        self.synced.remove(PROFILE_INFO_KEY).await?;
        self.synced.remove(PROFILE_NAME_KEY).await?;
        self.local.remove(PROFILE_INFO_KEY).await?;
        self.local.remove(PROFILE_NAME_KEY).await?;
        Ok(())
    }

    /// Pick a candidate profile name out of a set of open-tab URLs.
    /// Matches the first alphanumeric token after the multilogin path
    /// marker; performs no persistence.
    pub fn auto_detect(candidate_urls: &[String]) -> Option<String> {
        for url in candidate_urls {
            if !url.contains(PROFILE_URL_MARKER) {
                continue;
            }
            if let Some(captures) = PROFILE_URL_PATTERN.captures(url) {
                return Some(captures[1].to_string());
            }
        }
        None
    }
}
