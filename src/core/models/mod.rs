//! Core data models for the enrollment core
//!
//! This module defines the record types the authorization engine and grade
//! workflow operate on. Records are owned by external collaborators (identity
//! and storage); the core reads their fields and never persists them itself.

pub mod enrollment;
pub mod profile;

// Re-export commonly used types
pub use enrollment::*;
pub use profile::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common metadata for all records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}
