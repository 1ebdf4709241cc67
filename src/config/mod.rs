//! Configuration management for the enrollment core
//!
//! Handles loading and validating the role/permission seed data and the
//! classification name lists. Configuration is read once at startup and
//! treated as immutable afterwards; changing it means redeploying, not
//! mutating in place during request handling.

pub mod models;
pub mod validation;

pub use models::{AccessConfig, ClassificationConfig, RoleSeed};
pub use validation::Validate;

use crate::utils::error::{AcademicError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the enrollment core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Access control configuration
    #[serde(default)]
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AcademicError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AcademicError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// `ACADEMICO_STUDENT_ROLES` and `ACADEMICO_PROFESSOR_ROLES` override the
    /// classification lists as comma-separated role names; role seeds keep
    /// their defaults.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(names) = std::env::var("ACADEMICO_STUDENT_ROLES") {
            config.access.classification.student_roles = split_names(&names);
        }
        if let Ok(names) = std::env::var("ACADEMICO_PROFESSOR_ROLES") {
            config.access.classification.professor_roles = split_names(&names);
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the access control configuration
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| AcademicError::Config(format!("Access config error: {}", e)))?;

        Ok(())
    }
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
