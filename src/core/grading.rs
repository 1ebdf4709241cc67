//! Grade workflow
//!
//! The single mutating transition in the core: stamping a grade onto an
//! enrollment. Validation runs first (range, then lifecycle, then
//! authorization), and only then is the store asked for one atomic
//! field-level update. Re-grading is permitted and overwrites the previous
//! stamp; no history of prior grades is retained.

use crate::core::guard::EnrollmentGuard;
use crate::core::models::{ActorContext, Enrollment, EnrollmentStatus, GradeStamp};
use crate::storage::EnrollmentStore;
use crate::utils::error::{AcademicError, Result};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Lowest accepted grade value
pub const GRADE_MIN: f64 = 0.0;
/// Highest accepted grade value
pub const GRADE_MAX: f64 = 20.0;

/// Gated grading transition over a storage collaborator
#[derive(Clone)]
pub struct GradeWorkflow {
    guard: EnrollmentGuard,
    store: Arc<dyn EnrollmentStore>,
}

impl GradeWorkflow {
    /// Create a workflow over the given guard and store
    pub fn new(guard: EnrollmentGuard, store: Arc<dyn EnrollmentStore>) -> Self {
        Self { guard, store }
    }

    /// Record a grade on an enrollment.
    ///
    /// Checks run in a fixed order and the first failure wins, with no
    /// mutation performed:
    /// 1. `value` must lie in `[0, 20]`, else [`AcademicError::InvalidGrade`];
    /// 2. the enrollment must not be cancelled, else
    ///    [`AcademicError::EnrollmentCancelled`];
    /// 3. the actor must resolve to a grading profile, else
    ///    [`AcademicError::ProfileNotFound`] (no active profiles) or
    ///    [`AcademicError::NotSectionProfessor`].
    ///
    /// On success all four grade fields are updated together and the updated
    /// enrollment is returned. Grading an already graded enrollment replaces
    /// the previous stamp.
    pub async fn set_grade(
        &self,
        actor: &ActorContext,
        enrollment_id: Uuid,
        value: f64,
        notes: Option<String>,
    ) -> Result<Enrollment> {
        if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
            return Err(AcademicError::InvalidGrade { value });
        }

        let enrollment = self
            .store
            .find_enrollment(enrollment_id)
            .await?
            .ok_or_else(|| AcademicError::NotFound(format!("enrollment {}", enrollment_id)))?;

        if enrollment.status == EnrollmentStatus::Cancelled {
            return Err(AcademicError::EnrollmentCancelled);
        }

        let section = self
            .store
            .find_section(enrollment.section_id)
            .await?
            .ok_or_else(|| {
                AcademicError::NotFound(format!("section {}", enrollment.section_id))
            })?;

        if !actor.has_active_profiles() {
            return Err(AcademicError::ProfileNotFound);
        }
        let grading_profile = self
            .guard
            .resolve_grading_profile(actor, &enrollment, &section)
            .ok_or(AcademicError::NotSectionProfessor)?;

        if let Some(previous) = enrollment.grade {
            info!(
                enrollment = %enrollment_id,
                previous_grade = previous,
                new_grade = value,
                "replacing existing grade"
            );
        }

        let stamp = GradeStamp {
            grade: value,
            notes,
            graded_at: chrono::Utc::now(),
            graded_by: grading_profile.id(),
        };
        let updated = self.store.apply_grade(enrollment_id, stamp).await?;

        info!(
            enrollment = %enrollment_id,
            section = %section.id(),
            graded_by = %updated.graded_by.unwrap_or_default(),
            grade = value,
            "grade recorded"
        );
        Ok(updated)
    }
}
