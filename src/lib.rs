//! CSV profile ingestion and synchronization engine.
//!
//! Raw CSV text (pasted, uploaded, or fetched from a remote export)
//! is parsed into addressable profile records; one record can be made
//! the active selection, mirrored across a synced and a local storage
//! scope for the autofill agent to read back.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::active_profile::ActiveProfileSelector;
pub use application::use_cases::display::{mask_value, project, DisplayField};
pub use application::use_cases::profile_repository::ProfileRepository;
pub use application::use_cases::profile_sync::ProfileSyncUseCase;
pub use domain::error::{AppError, Result};
pub use domain::fields::ProfileField;
pub use domain::profile::Profile;
pub use infrastructure::config::EngineConfig;
pub use infrastructure::csv::CsvProfileParser;
pub use infrastructure::remote::RemoteCsvClient;
pub use infrastructure::storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Install the default tracing subscriber; safe to call more than once
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}
