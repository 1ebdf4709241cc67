//! Storage boundary for the enrollment core
//!
//! The core never owns persistence. Sections and enrollments live behind the
//! [`EnrollmentStore`] trait; embedders plug in their database collaborator,
//! and the bundled in-memory implementation serves tests and evaluation
//! setups. Profiles are deliberately absent: actors arrive fully formed from
//! the identity collaborator.

pub mod memory;

pub use memory::MemoryStore;

use crate::core::models::{Enrollment, GradeStamp, Section};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Load/store interface the core requires from its storage collaborator
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Find a section by ID
    async fn find_section(&self, id: Uuid) -> Result<Option<Section>>;

    /// Find an enrollment by ID
    async fn find_enrollment(&self, id: Uuid) -> Result<Option<Enrollment>>;

    /// List all enrollments
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;

    /// Insert a section
    async fn insert_section(&self, section: Section) -> Result<()>;

    /// Insert an enrollment
    async fn insert_enrollment(&self, enrollment: Enrollment) -> Result<()>;

    /// Apply a grade stamp to an enrollment as one atomic field-level update,
    /// returning the updated record.
    ///
    /// All four grade fields change together; no caller may observe a
    /// partially stamped enrollment. Concurrent stamps race last-write-wins.
    async fn apply_grade(&self, enrollment_id: Uuid, stamp: GradeStamp) -> Result<Enrollment>;
}
