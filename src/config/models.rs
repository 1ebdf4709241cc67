//! Access control configuration models
//!
//! Role seed data and classification name lists. Defaults reproduce the
//! standard academic role menu, so an embedder with no config file gets a
//! working registry out of the box.

use crate::core::catalog;
use crate::core::registry::RoleCategory;
use serde::{Deserialize, Serialize};

/// Access control configuration: classification lists plus role seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Role-name classification lists
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Role seed data, loaded once at startup
    #[serde(default = "default_role_seeds")]
    pub roles: Vec<RoleSeed>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            classification: ClassificationConfig::default(),
            roles: default_role_seeds(),
        }
    }
}

/// Ordered role-name lists driving student/professor classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Role names that classify as student
    #[serde(default = "default_student_roles")]
    pub student_roles: Vec<String>,
    /// Role names that classify as professor
    #[serde(default = "default_professor_roles")]
    pub professor_roles: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            student_roles: default_student_roles(),
            professor_roles: default_professor_roles(),
        }
    }
}

impl ClassificationConfig {
    /// Classify a role name. The student list is consulted first, then the
    /// professor list; names on neither classify as other.
    pub fn classify(&self, role_name: &str) -> RoleCategory {
        if self.student_roles.iter().any(|n| n == role_name) {
            RoleCategory::Student
        } else if self.professor_roles.iter().any(|n| n == role_name) {
            RoleCategory::Professor
        } else {
            RoleCategory::Other
        }
    }
}

/// A single role seed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSeed {
    /// Role name (unique)
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Permission codenames granted by this role
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Whether the role is active
    #[serde(default = "default_true")]
    pub active: bool,
}

impl RoleSeed {
    fn new(name: &str, description: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            active: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_student_roles() -> Vec<String> {
    [
        "Student",
        "Undergraduate Student",
        "Graduate Student",
        "PhD Student",
        "PhD Candidate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_professor_roles() -> Vec<String> {
    [
        "Professor",
        "Associate Professor",
        "Full Professor",
        "Teaching Assistant",
        "Adjunct Professor",
        "Visiting Professor",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_role_seeds() -> Vec<RoleSeed> {
    let student_perms = [catalog::VIEW_OWN_ENROLLMENT];
    let professor_perms = [catalog::VIEW_SECTION_ENROLLMENTS, catalog::GRADE_ENROLLMENT];
    let coordinator_perms = [
        catalog::VIEW_ALL_ENROLLMENTS,
        catalog::MANAGE_ENROLLMENTS,
        catalog::MANAGE_COURSES,
        catalog::MANAGE_SECTIONS,
    ];
    let admin_perms = [
        catalog::VIEW_OWN_ENROLLMENT,
        catalog::VIEW_SECTION_ENROLLMENTS,
        catalog::VIEW_ALL_ENROLLMENTS,
        catalog::GRADE_ENROLLMENT,
        catalog::MANAGE_ENROLLMENTS,
        catalog::MANAGE_COURSES,
        catalog::MANAGE_SECTIONS,
        catalog::MANAGE_USERS,
    ];

    vec![
        RoleSeed::new(
            "Student",
            "General student with access to view own enrollments and grades",
            &student_perms,
        ),
        RoleSeed::new(
            "Undergraduate Student",
            "Undergraduate student with basic permissions",
            &student_perms,
        ),
        RoleSeed::new(
            "Graduate Student",
            "Graduate student with additional research permissions",
            &student_perms,
        ),
        RoleSeed::new(
            "PhD Student",
            "PhD student with research and teaching permissions",
            &student_perms,
        ),
        RoleSeed::new(
            "PhD Candidate",
            "PhD candidate with advanced research permissions",
            &student_perms,
        ),
        RoleSeed::new(
            "Professor",
            "Professor with access to view and grade student enrollments in their sections",
            &professor_perms,
        ),
        RoleSeed::new(
            "Associate Professor",
            "Associate Professor with teaching and grading permissions",
            &professor_perms,
        ),
        RoleSeed::new(
            "Full Professor",
            "Full Professor with teaching and grading permissions",
            &professor_perms,
        ),
        RoleSeed::new(
            "Teaching Assistant",
            "Teaching Assistant who can grade but with limited permissions",
            &professor_perms,
        ),
        RoleSeed::new(
            "Adjunct Professor",
            "Adjunct Professor with teaching permissions",
            &professor_perms,
        ),
        RoleSeed::new(
            "Visiting Professor",
            "Visiting Professor with temporary teaching permissions",
            &professor_perms,
        ),
        RoleSeed::new(
            "Academic Coordinator",
            "Academic coordinator with access to manage courses, sections, and enrollments",
            &coordinator_perms,
        ),
        RoleSeed::new(
            "Administrator",
            "Administrator with full access to the system",
            &admin_perms,
        ),
    ]
}
