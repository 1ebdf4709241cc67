//! Error handling for the enrollment core
//!
//! This module defines all error types used throughout the crate. The
//! authorization-related variants form a closed taxonomy returned as values,
//! so callers can render precise feedback without catching panics.

use crate::core::engine::DenialReason;
use thiserror::Error;

/// Result type alias for the enrollment core
pub type Result<T> = std::result::Result<T, AcademicError>;

/// Main error type for the enrollment core
#[derive(Error, Debug)]
pub enum AcademicError {
    /// Configuration errors (startup-time fatal)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage collaborator errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Record lookup failures
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic authorization denial with a reason from the closed taxonomy
    #[error("Permission denied: {0}")]
    PermissionDenied(DenialReason),

    /// Grade value outside the accepted range
    #[error("Invalid grade: {value} (must be between 0 and 20)")]
    InvalidGrade {
        /// The rejected grade value
        value: f64,
    },

    /// Grading attempted on a cancelled enrollment
    #[error("Enrollment is cancelled and cannot be graded")]
    EnrollmentCancelled,

    /// Actor holds no profile that teaches the enrollment's section
    #[error("Actor has no profile authorized to grade this section")]
    NotSectionProfessor,

    /// Actor has no active profiles at all
    #[error("Actor has no active profiles")]
    ProfileNotFound,
}

impl AcademicError {
    /// Whether the error is recoverable by the caller (present and retry)
    /// rather than fatal to the process
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AcademicError::Config(_))
    }
}
