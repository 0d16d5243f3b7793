use crate::application::use_cases::active_profile::ActiveProfileSelector;
use crate::application::use_cases::profile_repository::ProfileRepository;
use crate::domain::error::{AppError, Result};
use crate::domain::profile::Profile;
use crate::infrastructure::csv::CsvProfileParser;
use crate::infrastructure::remote::RemoteCsvClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates CSV ingestion and active-profile selection: parse raw
/// text into the repository, promote one record to the mirrored
/// selection, and tear everything down together.
pub struct ProfileSyncUseCase {
    parser: CsvProfileParser,
    repository: Arc<ProfileRepository>,
    selector: Arc<ActiveProfileSelector>,
}

impl ProfileSyncUseCase {
    pub fn new(repository: Arc<ProfileRepository>, selector: Arc<ActiveProfileSelector>) -> Self {
        Self {
            parser: CsvProfileParser::new(),
            repository,
            selector,
        }
    }

    /// Parse `content` and replace the stored collection with the
    /// result. Nothing is stored when parsing fails or yields no rows.
    pub async fn import_csv(&self, content: &str) -> Result<usize> {
        let profiles = self.parser.parse(content)?;
        if profiles.is_empty() {
            return Err(AppError::ParseError(
                "No valid profiles found in CSV".to_string(),
            ));
        }

        self.repository.replace_all(&profiles).await?;
        info!(count = profiles.len(), "Imported CSV profiles");
        Ok(profiles.len())
    }

    /// Pull CSV text from a remote export, then import it
    pub async fn import_remote(&self, client: &RemoteCsvClient, url: &str) -> Result<usize> {
        let content = client.fetch_csv(url).await?;
        self.import_csv(&content).await
    }

    /// Look `name` up in the collection and make it the active
    /// selection in both scopes. First match wins on duplicates.
    pub async fn select_by_name(&self, name: &str) -> Result<Profile> {
        let profile = self.repository.find_by_name(name).await?;
        self.selector.select(&profile).await?;
        Ok(profile)
    }

    /// The active selection; a corrupt stored blob degrades to `None`
    pub async fn current(&self) -> Result<Option<Profile>> {
        match self.selector.current().await {
            Ok(current) => Ok(current),
            Err(AppError::CorruptState(msg)) => {
                warn!(reason = %msg, "Active profile blob is corrupt, treating as none");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Clear the collection and the active selection from every scope
    pub async fn clear_all(&self) -> Result<()> {
        self.repository.clear().await?;
        self.selector.clear().await?;
        info!("Cleared profile collection and active selection");
        Ok(())
    }
}
