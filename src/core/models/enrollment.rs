//! Section and enrollment models
//!
//! An enrollment registers a student profile in a section. The grade fields
//! (`grade`, `grade_notes`, `graded_at`, `graded_by`) are set and cleared as
//! one unit; no partially graded state is ever observable.

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enrollment payment/lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// Awaiting payment
    Pending,
    /// Paid and active
    Paid,
    /// Cancelled; locked against grading
    Cancelled,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "pending"),
            EnrollmentStatus::Paid => write!(f, "paid"),
            EnrollmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EnrollmentStatus::Pending),
            "paid" => Ok(EnrollmentStatus::Paid),
            "cancelled" => Ok(EnrollmentStatus::Cancelled),
            _ => Err(format!("Invalid enrollment status: {}", s)),
        }
    }
}

/// A course offering taught by one professor-classified profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Course the section belongs to, e.g. "CS101-A"
    pub course_code: String,
    /// Profile authorized to grade enrollments in this section
    pub professor_profile_id: Uuid,
}

impl Section {
    /// Create a new section
    pub fn new(course_code: impl Into<String>, professor_profile_id: Uuid) -> Self {
        Self {
            metadata: Metadata::new(),
            course_code: course_code.into(),
            professor_profile_id,
        }
    }

    /// Get the section ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}

/// The atomic unit of a grading mutation: all four audit fields together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeStamp {
    /// Grade value in `[0, 20]`
    pub grade: f64,
    /// Free-form grading notes
    pub notes: Option<String>,
    /// When the grade was recorded
    pub graded_at: chrono::DateTime<chrono::Utc>,
    /// Profile that performed the grading
    pub graded_by: Uuid,
}

/// A student profile's registration in a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Enrolled student profile
    pub student_profile_id: Uuid,
    /// Section enrolled in
    pub section_id: Uuid,
    /// Lifecycle status
    pub status: EnrollmentStatus,
    /// Grade value; set together with the audit fields below
    pub grade: Option<f64>,
    /// Grading notes
    pub grade_notes: Option<String>,
    /// When the grade was recorded
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Profile that recorded the grade
    pub graded_by: Option<Uuid>,
}

impl Enrollment {
    /// Create a new pending enrollment
    pub fn new(student_profile_id: Uuid, section_id: Uuid) -> Self {
        Self {
            metadata: Metadata::new(),
            student_profile_id,
            section_id,
            status: EnrollmentStatus::Pending,
            grade: None,
            grade_notes: None,
            graded_at: None,
            graded_by: None,
        }
    }

    /// Get the enrollment ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Set the lifecycle status
    pub fn with_status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether all grade fields are set
    pub fn is_graded(&self) -> bool {
        self.grade.is_some() && self.graded_at.is_some() && self.graded_by.is_some()
    }

    /// Whether the enrollment can still transition into a graded state
    pub fn is_gradable(&self) -> bool {
        self.status != EnrollmentStatus::Cancelled
    }

    /// Apply a grade stamp, replacing any previous one.
    ///
    /// All four fields change together so the set/unset invariant holds at
    /// every observable point.
    pub fn apply_stamp(&mut self, stamp: GradeStamp) {
        self.grade = Some(stamp.grade);
        self.grade_notes = stamp.notes;
        self.graded_at = Some(stamp.graded_at);
        self.graded_by = Some(stamp.graded_by);
        self.metadata.touch();
    }
}
