use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Engine settings merged from `Autofill.toml` and `AUTOFILL_*` env vars
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Remote spreadsheet export to pull CSV profiles from
    #[serde(default)]
    pub remote_csv_url: Option<String>,
}

impl EngineConfig {
    pub fn load() -> Result<Self> {
        Figment::new()
            .merge(Toml::file("Autofill.toml"))
            .merge(Env::prefixed("AUTOFILL_"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid engine config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config: EngineConfig = Figment::new().extract().unwrap();
        assert!(config.remote_csv_url.is_none());
    }
}
