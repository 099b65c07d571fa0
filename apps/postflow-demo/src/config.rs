//! Application configuration loaded from environment variables.

use postflow_core::ports::StorageError;
use postflow_infra::StorageConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    /// Identity recorded on audit entries.
    pub actor: String,
    /// Reset the post collection to the seed posts before the walkthrough.
    pub reset_on_start: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StorageError> {
        Ok(Self {
            storage: StorageConfig::from_lookup(&lookup)?,
            actor: lookup("POSTFLOW_ACTOR")
                .filter(|actor| !actor.trim().is_empty())
                .unwrap_or_else(|| postflow_core::domain::CURRENT_USER.to_string()),
            reset_on_start: lookup("POSTFLOW_RESET")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postflow_infra::StorageBackend;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.actor, "current-user");
        assert!(!config.reset_on_start);
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "POSTFLOW_ACTOR" => Some("sam".to_string()),
            "POSTFLOW_RESET" => Some("1".to_string()),
            "STORAGE_BACKEND" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.actor, "sam");
        assert!(config.reset_on_start);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
