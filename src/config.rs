//! Analytics configuration
//!
//! Loaded from YAML or built in code; every field has a default so partial
//! files are accepted.

use crate::graph::EdgeType;
use serde::{Deserialize, Serialize};
use socialgraph_algorithms::EigenvectorConfig;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by the analytics queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Relation type the analytics run over
    pub relation: EdgeType,
    /// Attribute used to break ties between equally scored suggestions
    pub display_attribute: String,
    /// Attributes indexed at import time
    pub indexed_attributes: Vec<String>,
    /// Maximum number of suggestions to keep (None = all)
    pub suggestion_limit: Option<usize>,
    /// Power-iteration settings
    pub centrality: EigenvectorConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            relation: EdgeType::friend(),
            display_attribute: "name".to_string(),
            indexed_attributes: vec!["age".to_string()],
            suggestion_limit: None,
            centrality: EigenvectorConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: AnalyticsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded analytics config from {:?}", path);
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.relation.as_str().is_empty() {
            return Err(ConfigError::Invalid("relation must not be empty".to_string()));
        }
        if self.centrality.tolerance <= 0.0 || !self.centrality.tolerance.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "centrality.tolerance must be a positive number, got {}",
                self.centrality.tolerance
            )));
        }
        if self.centrality.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "centrality.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.relation, EdgeType::new("is_friend"));
        assert_eq!(config.display_attribute, "name");
        assert_eq!(config.indexed_attributes, vec!["age"]);
        assert_eq!(config.centrality.tolerance, 0.01);
        assert_eq!(config.centrality.max_iterations, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "relation: works_with\ncentrality:\n  tolerance: 0.000001\n";
        let config = AnalyticsConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.relation, EdgeType::new("works_with"));
        assert_eq!(config.centrality.tolerance, 1e-6);
        assert_eq!(config.centrality.max_iterations, 10_000);
        assert_eq!(config.display_attribute, "name");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AnalyticsConfig {
            suggestion_limit: Some(10),
            ..AnalyticsConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AnalyticsConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_centrality_settings() {
        let err = AnalyticsConfig::from_yaml_str("centrality:\n  tolerance: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AnalyticsConfig::from_yaml_str("centrality:\n  max_iterations: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = AnalyticsConfig::from_yaml_str("indexed_attributes: {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display_attribute: nickname").unwrap();
        writeln!(file, "indexed_attributes: [age, gender]").unwrap();

        let config = AnalyticsConfig::from_file(file.path()).unwrap();
        assert_eq!(config.display_attribute, "nickname");
        assert_eq!(config.indexed_attributes, vec!["age", "gender"]);
    }

    #[test]
    fn test_missing_file() {
        let err = AnalyticsConfig::from_file("/nonexistent/socialgraph.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
