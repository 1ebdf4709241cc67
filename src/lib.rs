//! # Sistema Academico RS
//!
//! A Rust implementation of the sistema_academico enrollment platform's
//! authorization core: multi-profile role-based access control for academic
//! enrollment records, with an audited grading workflow.
//!
//! ## Features
//!
//! - **Multi-Profile Actors**: one user, several simultaneous capability
//!   sets (a PhD student who also teaches holds both a student and a
//!   professor profile); decisions resolve across the full set
//! - **Closed Permission Catalog**: a fixed set of named capabilities,
//!   referenced by role seed data and validated at startup
//! - **Object-Level Checks**: view and grade decisions tied to the
//!   relationship between a profile and a specific enrollment or section
//! - **Pure Decision Core**: the engine and guard are side-effect-free and
//!   safe to call concurrently without locking
//! - **Audited Grading**: the one mutating transition stamps grade, notes,
//!   timestamp, and grader identity as a single atomic update
//! - **Pluggable Storage**: sections and enrollments live behind an async
//!   store trait; an in-memory implementation is bundled
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sistema_academico_rs::config::Config;
//! use sistema_academico_rs::core::models::{ActorContext, Enrollment, Profile, Section};
//! use sistema_academico_rs::core::registry::RoleRegistry;
//! use sistema_academico_rs::services::EnrollmentService;
//! use sistema_academico_rs::storage::{EnrollmentStore, MemoryStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let registry = Arc::new(RoleRegistry::from_config(&config.access)?);
//!     let store = Arc::new(MemoryStore::new());
//!     let service = EnrollmentService::new(registry, store.clone());
//!
//!     // Records normally arrive from the storage and identity collaborators
//!     let professor = Profile::new(uuid::Uuid::new_v4(), "Professor");
//!     let student = Profile::new(uuid::Uuid::new_v4(), "Student");
//!     let section = Section::new("CS101-A", professor.id());
//!     let enrollment = Enrollment::new(student.id(), section.id());
//!     let enrollment_id = enrollment.id();
//!     store.insert_section(section).await?;
//!     store.insert_enrollment(enrollment).await?;
//!
//!     let actor = ActorContext::new(vec![professor]);
//!     let graded = service
//!         .set_grade(&actor, enrollment_id, 17.5, Some("solid work".to_string()))
//!         .await?;
//!     assert!(graded.is_graded());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::utils::error::{AcademicError, Result};

// Export the decision surface
pub use crate::core::engine::{AccessDecision, AccessEngine, DenialReason};
pub use crate::core::grading::{GRADE_MAX, GRADE_MIN, GradeWorkflow};
pub use crate::core::guard::{EnrollmentGuard, ObjectContext};
pub use crate::core::models::{
    ActorContext, Enrollment, EnrollmentStatus, GradeStamp, Profile, Section,
};
pub use crate::core::registry::{Role, RoleCategory, RoleRegistry};
pub use crate::services::EnrollmentService;
pub use crate::storage::{EnrollmentStore, MemoryStore};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
