//! In-memory enrollment store
//!
//! Reference implementation of [`EnrollmentStore`] backed by hash maps. Grade
//! stamps are applied under the write lock, which is what makes the
//! four-field update atomic with respect to every reader.

use super::EnrollmentStore;
use crate::core::models::{Enrollment, GradeStamp, Section};
use crate::utils::error::{AcademicError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Hash-map backed store for sections and enrollments
#[derive(Debug, Default)]
pub struct MemoryStore {
    sections: RwLock<HashMap<Uuid, Section>>,
    enrollments: RwLock<HashMap<Uuid, Enrollment>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored enrollments
    pub fn enrollment_count(&self) -> usize {
        self.enrollments.read().len()
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn find_section(&self, id: Uuid) -> Result<Option<Section>> {
        Ok(self.sections.read().get(&id).cloned())
    }

    async fn find_enrollment(&self, id: Uuid) -> Result<Option<Enrollment>> {
        Ok(self.enrollments.read().get(&id).cloned())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        Ok(self.enrollments.read().values().cloned().collect())
    }

    async fn insert_section(&self, section: Section) -> Result<()> {
        self.sections.write().insert(section.id(), section);
        Ok(())
    }

    async fn insert_enrollment(&self, enrollment: Enrollment) -> Result<()> {
        self.enrollments.write().insert(enrollment.id(), enrollment);
        Ok(())
    }

    async fn apply_grade(&self, enrollment_id: Uuid, stamp: GradeStamp) -> Result<Enrollment> {
        let mut enrollments = self.enrollments.write();
        let enrollment = enrollments
            .get_mut(&enrollment_id)
            .ok_or_else(|| AcademicError::NotFound(format!("enrollment {}", enrollment_id)))?;
        enrollment.apply_stamp(stamp);
        Ok(enrollment.clone())
    }
}
