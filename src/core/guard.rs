//! Enrollment guard
//!
//! Object-level policy layered on the authorization engine: which profiles
//! may see a given enrollment, and which specific profile may grade it. The
//! grading side distinguishes "may grade" (a boolean) from "grades as whom"
//! (a concrete profile), because the workflow must attribute the grade to an
//! identity.

use crate::core::catalog::{
    GRADE_ENROLLMENT, VIEW_ALL_ENROLLMENTS, VIEW_OWN_ENROLLMENT, VIEW_SECTION_ENROLLMENTS,
};
use crate::core::engine::AccessEngine;
use crate::core::models::{ActorContext, Enrollment, EnrollmentStatus, Profile, Section};
use crate::core::registry::{RoleCategory, RoleRegistry};
use std::sync::Arc;
use uuid::Uuid;

/// Record scope for an object-level authorization check
#[derive(Debug, Clone, Copy)]
pub enum ObjectContext<'a> {
    /// An enrollment joined with its section
    Enrollment {
        /// The enrollment under decision
        enrollment: &'a Enrollment,
        /// The section the enrollment belongs to
        section: &'a Section,
    },
}

impl ObjectContext<'_> {
    /// Whether the profile's relationship to the record satisfies the
    /// permission's object constraint.
    ///
    /// Permissions without an object constraint are satisfied by any record.
    pub fn satisfied_by(&self, profile: &Profile, codename: &str) -> bool {
        match self {
            ObjectContext::Enrollment {
                enrollment,
                section,
            } => match codename {
                VIEW_OWN_ENROLLMENT => profile.id() == enrollment.student_profile_id,
                VIEW_SECTION_ENROLLMENTS => profile.id() == section.professor_profile_id,
                GRADE_ENROLLMENT => {
                    profile.id() == section.professor_profile_id
                        && enrollment.status != EnrollmentStatus::Cancelled
                }
                _ => true,
            },
        }
    }
}

/// Object-level view and grading policy for enrollments
#[derive(Debug, Clone)]
pub struct EnrollmentGuard {
    engine: AccessEngine,
}

impl EnrollmentGuard {
    /// Create a guard over the given role registry
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self {
            engine: AccessEngine::new(registry),
        }
    }

    /// The underlying authorization engine
    pub fn engine(&self) -> &AccessEngine {
        &self.engine
    }

    /// Whether the actor may view the enrollment, through ownership, through
    /// teaching the section, or through a global view grant
    pub fn can_be_viewed_by(
        &self,
        actor: &ActorContext,
        enrollment: &Enrollment,
        section: &Section,
    ) -> bool {
        let ctx = ObjectContext::Enrollment {
            enrollment,
            section,
        };
        [
            VIEW_OWN_ENROLLMENT,
            VIEW_SECTION_ENROLLMENTS,
            VIEW_ALL_ENROLLMENTS,
        ]
        .iter()
        .any(|codename| self.engine.authorize(actor, codename, Some(&ctx)))
    }

    /// Whether the actor may grade the enrollment.
    ///
    /// With `profile_hint`, only that profile is checked; this lets callers
    /// disambiguate actors holding several professor profiles. Without a
    /// hint, any qualifying profile suffices.
    pub fn can_be_graded_by(
        &self,
        actor: &ActorContext,
        enrollment: &Enrollment,
        section: &Section,
        profile_hint: Option<Uuid>,
    ) -> bool {
        match profile_hint {
            Some(hint) => actor
                .active_profiles()
                .find(|p| p.id() == hint)
                .map(|p| self.profile_can_grade(p, enrollment, section))
                .unwrap_or(false),
            None => {
                let ctx = ObjectContext::Enrollment {
                    enrollment,
                    section,
                };
                self.engine.authorize(actor, GRADE_ENROLLMENT, Some(&ctx))
            }
        }
    }

    /// The specific profile that would perform the grading.
    ///
    /// `None` when no profile qualifies; unlike the boolean checks, the
    /// superuser bypass does not apply here because the grade must be
    /// attributed to a concrete professor profile.
    pub fn resolve_grading_profile<'a>(
        &self,
        actor: &'a ActorContext,
        enrollment: &Enrollment,
        section: &Section,
    ) -> Option<&'a Profile> {
        actor
            .active_profiles()
            .filter(|p| self.engine.registry().classify(&p.role) == RoleCategory::Professor)
            .find(|p| self.profile_can_grade(p, enrollment, section))
    }

    fn profile_can_grade(
        &self,
        profile: &Profile,
        enrollment: &Enrollment,
        section: &Section,
    ) -> bool {
        let ctx = ObjectContext::Enrollment {
            enrollment,
            section,
        };
        self.engine.registry().grants(&profile.role, GRADE_ENROLLMENT)
            && ctx.satisfied_by(profile, GRADE_ENROLLMENT)
    }
}
