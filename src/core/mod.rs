//! Core decision logic
//!
//! The permission catalog, role registry, authorization engine, enrollment
//! guard, and grade workflow. Everything here except the grade workflow is
//! pure and synchronous; the workflow performs the core's single mutation
//! through the storage boundary.

pub mod catalog;
pub mod engine;
pub mod grading;
pub mod guard;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use engine::{AccessDecision, AccessEngine, DenialReason};
pub use grading::{GRADE_MAX, GRADE_MIN, GradeWorkflow};
pub use guard::{EnrollmentGuard, ObjectContext};
pub use models::{
    ActorContext, Enrollment, EnrollmentStatus, GradeStamp, Metadata, Profile, Section,
};
pub use registry::{Role, RoleCategory, RoleRegistry};
