pub mod error;
pub mod fields;
pub mod profile;
