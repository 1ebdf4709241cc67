//! Enrollment service
//!
//! The surface an API or presentation layer consumes: generic permission
//! checks, the visible-enrollment projection, object-level grading checks,
//! and the grade transition. Composes the registry, guard, and workflow over
//! a storage collaborator, so callers hold one handle instead of four.

use crate::core::engine::{AccessDecision, DenialReason};
use crate::core::guard::EnrollmentGuard;
use crate::core::grading::GradeWorkflow;
use crate::core::models::{ActorContext, Enrollment, Section};
use crate::core::registry::RoleRegistry;
use crate::storage::EnrollmentStore;
use crate::utils::error::{AcademicError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Authorization and grading facade over a storage collaborator
#[derive(Clone)]
pub struct EnrollmentService {
    guard: EnrollmentGuard,
    workflow: GradeWorkflow,
    store: Arc<dyn EnrollmentStore>,
}

impl EnrollmentService {
    /// Create a service over the given registry and store
    pub fn new(registry: Arc<RoleRegistry>, store: Arc<dyn EnrollmentStore>) -> Self {
        info!("Initializing enrollment service");

        let guard = EnrollmentGuard::new(registry);
        let workflow = GradeWorkflow::new(guard.clone(), store.clone());

        Self {
            guard,
            workflow,
            store,
        }
    }

    /// The guard used for object-level checks
    pub fn guard(&self) -> &EnrollmentGuard {
        &self.guard
    }

    /// Whether the actor holds the permission, ignoring object scope
    pub fn authorize(&self, actor: &ActorContext, codename: &str) -> bool {
        self.guard.engine().authorize(actor, codename, None)
    }

    /// Detailed permission check, reporting the granting profile or the
    /// denial reason
    pub fn authorize_detailed(&self, actor: &ActorContext, codename: &str) -> AccessDecision {
        self.guard.engine().authorize_detailed(actor, codename, None)
    }

    /// Require a permission, converting denial into an error value
    pub fn require(&self, actor: &ActorContext, codename: &str) -> Result<()> {
        let decision = self.authorize_detailed(actor, codename);
        if decision.allowed {
            Ok(())
        } else {
            Err(AcademicError::PermissionDenied(
                decision.reason.unwrap_or(DenialReason::NoMatchingProfile),
            ))
        }
    }

    /// IDs of every enrollment the actor may view: their own, those in
    /// sections they teach, and all of them when a profile holds the global
    /// view grant.
    ///
    /// The projection filters through the same guard predicate as
    /// [`can_be_viewed_by`](Self::can_be_viewed_by), so the two can never
    /// disagree.
    pub async fn list_visible(&self, actor: &ActorContext) -> Result<HashSet<Uuid>> {
        let enrollments = self.store.list_enrollments().await?;

        let mut visible = HashSet::new();
        for enrollment in &enrollments {
            let Some(section) = self.store.find_section(enrollment.section_id).await? else {
                warn!(
                    enrollment = %enrollment.id(),
                    section = %enrollment.section_id,
                    "enrollment references missing section; skipping"
                );
                continue;
            };
            if self.guard.can_be_viewed_by(actor, enrollment, &section) {
                visible.insert(enrollment.id());
            }
        }
        Ok(visible)
    }

    /// Whether the actor may view the enrollment
    pub async fn can_be_viewed_by(&self, actor: &ActorContext, enrollment_id: Uuid) -> Result<bool> {
        let (enrollment, section) = self.load_enrollment(enrollment_id).await?;
        Ok(self.guard.can_be_viewed_by(actor, &enrollment, &section))
    }

    /// Whether the actor may grade the enrollment, optionally pinned to one
    /// specific profile
    pub async fn can_be_graded_by(
        &self,
        actor: &ActorContext,
        enrollment_id: Uuid,
        profile_hint: Option<Uuid>,
    ) -> Result<bool> {
        let (enrollment, section) = self.load_enrollment(enrollment_id).await?;
        Ok(self
            .guard
            .can_be_graded_by(actor, &enrollment, &section, profile_hint))
    }

    /// Record a grade on an enrollment; see [`GradeWorkflow::set_grade`]
    pub async fn set_grade(
        &self,
        actor: &ActorContext,
        enrollment_id: Uuid,
        value: f64,
        notes: Option<String>,
    ) -> Result<Enrollment> {
        self.workflow
            .set_grade(actor, enrollment_id, value, notes)
            .await
    }

    async fn load_enrollment(&self, enrollment_id: Uuid) -> Result<(Enrollment, Section)> {
        let enrollment = self
            .store
            .find_enrollment(enrollment_id)
            .await?
            .ok_or_else(|| AcademicError::NotFound(format!("enrollment {}", enrollment_id)))?;
        let section = self
            .store
            .find_section(enrollment.section_id)
            .await?
            .ok_or_else(|| {
                AcademicError::NotFound(format!("section {}", enrollment.section_id))
            })?;
        Ok((enrollment, section))
    }
}
