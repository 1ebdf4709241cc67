//! Service layer
//!
//! Composition roots that wire the decision core to its collaborators.

pub mod enrollment;

pub use enrollment::EnrollmentService;
