pub mod use_cases;

pub use use_cases::active_profile::ActiveProfileSelector;
pub use use_cases::profile_repository::ProfileRepository;
pub use use_cases::profile_sync::ProfileSyncUseCase;
