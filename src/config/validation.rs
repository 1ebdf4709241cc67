//! Configuration validation
//!
//! Structural checks applied after deserialization and before the registry
//! is built. Per-field errors are strings; the caller wraps them into the
//! crate's configuration error.

use super::models::{AccessConfig, ClassificationConfig};
use crate::core::catalog::catalog;
use std::collections::HashSet;

/// Validation trait for configuration structures
pub trait Validate {
    /// Validate the structure, returning a description of the first problem
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ClassificationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.student_roles.is_empty() {
            return Err("classification.student_roles must not be empty".to_string());
        }
        if self.professor_roles.is_empty() {
            return Err("classification.professor_roles must not be empty".to_string());
        }

        for name in &self.student_roles {
            if self.professor_roles.contains(name) {
                return Err(format!(
                    "role name '{}' appears in both classification lists",
                    name
                ));
            }
        }

        Ok(())
    }
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        self.classification.validate()?;

        if self.roles.is_empty() {
            return Err("at least one role must be seeded".to_string());
        }

        let mut seen = HashSet::new();
        for seed in &self.roles {
            if seed.name.trim().is_empty() {
                return Err("role name must not be empty".to_string());
            }
            if !seen.insert(seed.name.as_str()) {
                return Err(format!("duplicate role name '{}'", seed.name));
            }
            for codename in &seed.permissions {
                if !catalog().contains(codename) {
                    return Err(format!(
                        "role '{}' references unknown permission '{}'",
                        seed.name, codename
                    ));
                }
            }
        }

        Ok(())
    }
}
