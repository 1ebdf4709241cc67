//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use sistema_academico_rs::config::AccessConfig;
use sistema_academico_rs::core::models::{Enrollment, EnrollmentStatus, Profile, Section};
use sistema_academico_rs::core::registry::RoleRegistry;
use sistema_academico_rs::services::EnrollmentService;
use sistema_academico_rs::storage::{EnrollmentStore, MemoryStore};
use std::sync::Arc;
use uuid::Uuid;

/// Factory for creating test profiles
pub struct ProfileFactory;

impl ProfileFactory {
    /// Create a profile with the given role
    pub fn with_role(role: &str) -> Profile {
        Profile::new(Uuid::new_v4(), role)
    }

    /// Create a student profile with a linked student record
    pub fn student() -> Profile {
        Profile::new(Uuid::new_v4(), "Student")
            .with_student_id(format!("STU{}", &Uuid::new_v4().to_string()[..8]))
    }

    /// Create a professor profile with a linked employee record
    pub fn professor() -> Profile {
        Profile::new(Uuid::new_v4(), "Professor")
            .with_employee_id(format!("EMP{}", &Uuid::new_v4().to_string()[..8]))
    }

    /// Create an academic coordinator profile
    pub fn coordinator() -> Profile {
        Profile::new(Uuid::new_v4(), "Academic Coordinator")
            .with_employee_id(format!("EMP{}", &Uuid::new_v4().to_string()[..8]))
    }
}

/// Factory for creating test sections
pub struct SectionFactory;

impl SectionFactory {
    /// Create a section taught by the given professor profile
    pub fn taught_by(professor: &Profile) -> Section {
        Section::new(
            format!("CS{}-A", &Uuid::new_v4().to_string()[..4]),
            professor.id(),
        )
    }
}

/// Factory for creating test enrollments
pub struct EnrollmentFactory;

impl EnrollmentFactory {
    /// Create a pending enrollment of the student in the section
    pub fn of(student: &Profile, section: &Section) -> Enrollment {
        Enrollment::new(student.id(), section.id())
    }

    /// Create a cancelled enrollment of the student in the section
    pub fn cancelled(student: &Profile, section: &Section) -> Enrollment {
        Enrollment::new(student.id(), section.id()).with_status(EnrollmentStatus::Cancelled)
    }
}

/// Build a service over the default role seeds and an empty in-memory store
pub fn service() -> (EnrollmentService, Arc<MemoryStore>) {
    let registry = Arc::new(
        RoleRegistry::from_config(&AccessConfig::default()).expect("default config must load"),
    );
    let store = Arc::new(MemoryStore::new());
    (EnrollmentService::new(registry, store.clone()), store)
}

/// Seed a section and an enrollment into the store, returning the enrollment ID
pub async fn seed_enrollment(
    store: &Arc<MemoryStore>,
    student: &Profile,
    professor: &Profile,
) -> Uuid {
    let section = SectionFactory::taught_by(professor);
    let enrollment = EnrollmentFactory::of(student, &section);
    let enrollment_id = enrollment.id();
    store.insert_section(section).await.unwrap();
    store.insert_enrollment(enrollment).await.unwrap();
    enrollment_id
}
