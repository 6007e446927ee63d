//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Which key dominates a stable multi-key sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPriority {
    /// The first name given is the primary key; later names break ties.
    #[default]
    FirstIsPrimary,
    /// Passes run in the order given, so the last name dominates.
    LastIsPrimary,
}

/// Configuration for a bound collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Priority of keys in stable multi-key sorts
    pub key_priority: KeyPriority,
}

impl SortConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how multi-key sorts rank their keys.
    pub fn with_key_priority(mut self, key_priority: KeyPriority) -> Self {
        self.key_priority = key_priority;
        self
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortError;

    #[test]
    fn default_is_first_key_primary() {
        assert_eq!(SortConfig::new().key_priority, KeyPriority::FirstIsPrimary);
    }

    #[test]
    fn parses_json() {
        let config = SortConfig::from_json(r#"{ "key_priority": "last_is_primary" }"#).unwrap();
        assert_eq!(config.key_priority, KeyPriority::LastIsPrimary);

        let config = SortConfig::from_json("{}").unwrap();
        assert_eq!(config, SortConfig::default());
    }

    #[test]
    fn rejects_unknown_priority() {
        let err = SortConfig::from_json(r#"{ "key_priority": "middle" }"#).unwrap_err();
        assert!(matches!(err, SortError::Config(_)));
        assert!(err.to_string().starts_with("Invalid sort configuration"));
    }

    #[test]
    fn round_trips_through_serde() {
        let config = SortConfig::new().with_key_priority(KeyPriority::LastIsPrimary);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"key_priority":"last_is_primary"}"#);
    }
}
