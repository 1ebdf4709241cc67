//! Permission catalog
//!
//! The closed set of capabilities the system knows about. The catalog is
//! fixed at compile time and versioned with the deployment; roles reference
//! entries by codename. Lookups are total: an unknown codename is simply
//! absent, never an error, so permission checks against it always deny.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Can view their own enrollments
pub const VIEW_OWN_ENROLLMENT: &str = "view_own_enrollment";
/// Can view enrollments in their teaching sections
pub const VIEW_SECTION_ENROLLMENTS: &str = "view_section_enrollments";
/// Can view all enrollments in the system
pub const VIEW_ALL_ENROLLMENTS: &str = "view_all_enrollments";
/// Can grade student enrollments in their sections
pub const GRADE_ENROLLMENT: &str = "grade_enrollment";
/// Can create, update, and delete enrollments
pub const MANAGE_ENROLLMENTS: &str = "manage_enrollments";
/// Can create, update, and delete courses
pub const MANAGE_COURSES: &str = "manage_courses";
/// Can create, update, and delete sections
pub const MANAGE_SECTIONS: &str = "manage_sections";
/// Can create, update, and delete users
pub const MANAGE_USERS: &str = "manage_users";

/// Permission definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    /// Unique codename, the identifier roles reference
    pub codename: String,
    /// Human-readable name
    pub name: String,
    /// What the permission allows
    pub description: String,
}

/// The closed, immutable-at-runtime set of permissions
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    permissions: HashMap<String, Permission>,
}

impl PermissionCatalog {
    /// Build the built-in catalog
    fn builtin() -> Self {
        let entries = [
            (
                VIEW_OWN_ENROLLMENT,
                "View Own Enrollment",
                "Can view their own enrollments",
            ),
            (
                VIEW_SECTION_ENROLLMENTS,
                "View Section Enrollments",
                "Can view enrollments in their teaching sections",
            ),
            (
                VIEW_ALL_ENROLLMENTS,
                "View All Enrollments",
                "Can view all enrollments in the system",
            ),
            (
                GRADE_ENROLLMENT,
                "Grade Enrollment",
                "Can grade student enrollments in their sections",
            ),
            (
                MANAGE_ENROLLMENTS,
                "Manage Enrollments",
                "Can create, update, and delete enrollments",
            ),
            (
                MANAGE_COURSES,
                "Manage Courses",
                "Can create, update, and delete courses",
            ),
            (
                MANAGE_SECTIONS,
                "Manage Sections",
                "Can create, update, and delete sections",
            ),
            (
                MANAGE_USERS,
                "Manage Users",
                "Can create, update, and delete users",
            ),
        ];

        let permissions = entries
            .into_iter()
            .map(|(codename, name, description)| {
                (
                    codename.to_string(),
                    Permission {
                        codename: codename.to_string(),
                        name: name.to_string(),
                        description: description.to_string(),
                    },
                )
            })
            .collect();

        Self { permissions }
    }

    /// Whether the catalog contains the given codename
    pub fn contains(&self, codename: &str) -> bool {
        self.permissions.contains_key(codename)
    }

    /// Get a permission by codename
    pub fn get(&self, codename: &str) -> Option<&Permission> {
        self.permissions.get(codename)
    }

    /// List all permissions
    pub fn all(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.values()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

static CATALOG: Lazy<PermissionCatalog> = Lazy::new(PermissionCatalog::builtin);

/// The process-wide permission catalog
pub fn catalog() -> &'static PermissionCatalog {
    &CATALOG
}
