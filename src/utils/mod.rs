//! Shared utilities
//!
//! Error types and logging helpers used across the crate.

pub mod error;
pub mod logging;

pub use error::{AcademicError, Result};
