pub mod active_profile;
pub mod display;
pub mod profile_repository;
pub mod profile_sync;
