// ============================================================
// PROFILE RECORD
// ============================================================
// One CSV data row as a field-name -> field-value mapping

use crate::domain::error::{AppError, Result};
use crate::domain::fields::ProfileField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single identity/payment profile, keyed by CSV header names.
///
/// Serializes as a flat JSON object so the stored blob matches what
/// the autofill agent reads back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    fields: HashMap<String, String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of a field, or `None` when absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|value| value.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// Value of a well-known field
    pub fn field(&self, field: ProfileField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// The lookup key used by the repository and the active selection
    pub fn profile_name(&self) -> Option<&str> {
        self.field(ProfileField::ProfileName)
    }

    /// True when every stored value is empty
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.is_empty())
    }

    /// Absent and empty-string are equivalent for derivation checks
    fn is_unset(&self, field: ProfileField) -> bool {
        self.field(field).map_or(true, |value| value.is_empty())
    }

    /// Fill in `full_name` and `uuid` when the CSV did not supply them.
    ///
    /// `row_index` is the 1-based position of the row among the data rows
    /// of the source text, counted before any row skipping.
    pub fn derive_defaults(&mut self, row_index: usize) {
        if self.is_unset(ProfileField::FullName) {
            let fname = self.field(ProfileField::Fname).unwrap_or("");
            let lname = self.field(ProfileField::Lname).unwrap_or("");
            if !fname.is_empty() && !lname.is_empty() {
                let full_name = format!("{} {}", fname, lname);
                self.set(ProfileField::FullName.as_str(), &full_name);
            }
        }

        if self.is_unset(ProfileField::Uuid) {
            let uuid = match self.profile_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("profile_{}", row_index),
            };
            self.set(ProfileField::Uuid.as_str(), &uuid);
        }
    }

    /// Serialized form written to storage
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::PersistenceError(format!("Failed to serialize profile: {}", e)))
    }

    /// Decode a stored blob; failure means the blob is corrupt, not fatal
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::CorruptState(format!("Failed to decode stored profile: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_of(pairs: &[(&str, &str)]) -> Profile {
        let mut profile = Profile::new();
        for (name, value) in pairs {
            profile.set(name, value);
        }
        profile
    }

    #[test]
    fn test_derive_full_name_from_parts() {
        let mut profile = profile_of(&[("fname", "Jane"), ("lname", "Doe")]);
        profile.derive_defaults(1);
        assert_eq!(profile.get("full_name"), Some("Jane Doe"));
    }

    #[test]
    fn test_existing_full_name_kept() {
        let mut profile = profile_of(&[
            ("fname", "Jane"),
            ("lname", "Doe"),
            ("full_name", "J. Doe"),
        ]);
        profile.derive_defaults(1);
        assert_eq!(profile.get("full_name"), Some("J. Doe"));
    }

    #[test]
    fn test_full_name_needs_both_parts() {
        let mut profile = profile_of(&[("fname", "Jane"), ("lname", "")]);
        profile.derive_defaults(1);
        assert_eq!(profile.get("full_name"), None);
    }

    #[test]
    fn test_uuid_falls_back_to_profile_name() {
        let mut profile = profile_of(&[("profile_name", "alpha")]);
        profile.derive_defaults(7);
        assert_eq!(profile.get("uuid"), Some("alpha"));
    }

    #[test]
    fn test_uuid_positional_fallback() {
        let mut profile = profile_of(&[("acc_email", "a@b.c")]);
        profile.derive_defaults(3);
        assert_eq!(profile.get("uuid"), Some("profile_3"));
    }

    #[test]
    fn test_json_round_trip() {
        let profile = profile_of(&[("profile_name", "alpha"), ("tel", "555-0100")]);
        let raw = profile.to_json().unwrap();
        let restored = Profile::from_json(&raw).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Profile::from_json("not json at all").unwrap_err();
        assert!(matches!(err, AppError::CorruptState(_)));
    }
}
