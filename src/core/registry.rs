//! Role registry
//!
//! Maps role names to permission sets. Roles are seeded once from
//! configuration; a seed referencing a codename outside the catalog is a
//! startup-time fatal error, surfaced here before any decision can be made.
//! Each role also carries a classification (student / professor / other),
//! computed once at load from the configured name lists rather than re-tested
//! per check.

use crate::config::AccessConfig;
use crate::core::catalog::catalog;
use crate::utils::error::{AcademicError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Role classification, derived from the role name at registry load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    /// Student-like role
    Student,
    /// Professor-like role, eligible to teach sections
    Professor,
    /// Administrative or other role
    Other,
}

/// Role definition
#[derive(Debug, Clone)]
pub struct Role {
    /// Role name (unique)
    pub name: String,
    /// Role description
    pub description: String,
    /// Permission codenames granted by this role
    pub permissions: HashSet<String>,
    /// Seed metadata flag; not consulted by permission checks
    pub active: bool,
    /// Classification computed at load time
    pub category: RoleCategory,
}

impl Role {
    /// Whether the role grants the given permission codename
    pub fn grants(&self, codename: &str) -> bool {
        self.permissions.contains(codename)
    }
}

/// Registry of all known roles
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Build the registry from configuration.
    ///
    /// Fails with a configuration error when a role seed references a
    /// permission codename outside the catalog; the registry never becomes
    /// usable with malformed seed data.
    pub fn from_config(config: &AccessConfig) -> Result<Self> {
        info!("Initializing role registry");

        let mut roles = HashMap::new();
        for seed in &config.roles {
            for codename in &seed.permissions {
                if !catalog().contains(codename) {
                    return Err(AcademicError::Config(format!(
                        "role '{}' references unknown permission '{}'",
                        seed.name, codename
                    )));
                }
            }

            let category = config.classification.classify(&seed.name);
            let role = Role {
                name: seed.name.clone(),
                description: seed.description.clone(),
                permissions: seed.permissions.iter().cloned().collect(),
                active: seed.active,
                category,
            };
            roles.insert(role.name.clone(), role);
        }

        debug!("Initialized {} roles", roles.len());
        Ok(Self { roles })
    }

    /// Get a role by name
    pub fn get(&self, role_name: &str) -> Option<&Role> {
        self.roles.get(role_name)
    }

    /// List all roles
    pub fn list_roles(&self) -> Vec<&Role> {
        self.roles.values().collect()
    }

    /// Permission codenames granted by a role, if the role exists
    pub fn permissions_of(&self, role_name: &str) -> Option<&HashSet<String>> {
        self.roles.get(role_name).map(|r| &r.permissions)
    }

    /// Whether the named role grants the given codename.
    ///
    /// Total over every input: an unknown role or codename denies instead of
    /// erroring.
    pub fn grants(&self, role_name: &str, codename: &str) -> bool {
        self.roles
            .get(role_name)
            .map(|r| r.grants(codename))
            .unwrap_or(false)
    }

    /// Classification of the named role; unknown roles classify as other
    pub fn classify(&self, role_name: &str) -> RoleCategory {
        self.roles
            .get(role_name)
            .map(|r| r.category)
            .unwrap_or(RoleCategory::Other)
    }
}
