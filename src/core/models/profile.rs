//! Profile and actor models
//!
//! A profile binds a user to exactly one role. Users may hold several active
//! profiles at once (a PhD student who also teaches holds one student profile
//! and one professor profile), and every authorization decision is resolved
//! across the full set.

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single capability binding of a user to one role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Owning user ID
    pub user_id: Uuid,
    /// Role name, resolved against the role registry
    pub role: String,
    /// Whether the profile is active; revoked profiles are deactivated, not
    /// deleted, so historical grading attribution survives
    pub active: bool,
    /// Linked student record identifier, if the role is student-classified
    pub student_id: Option<String>,
    /// Linked employee record identifier, if the role is staff-classified
    pub employee_id: Option<String>,
}

impl Profile {
    /// Create a new active profile for a user
    pub fn new(user_id: Uuid, role: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            user_id,
            role: role.into(),
            active: true,
            student_id: None,
            employee_id: None,
        }
    }

    /// Get the profile ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Set the linked student record identifier
    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Set the linked employee record identifier
    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// Deactivate the profile
    pub fn deactivate(&mut self) {
        self.active = false;
        self.metadata.touch();
    }
}

/// An authenticated actor: superuser flag plus the set of owned profiles.
///
/// Supplied by the external identity collaborator. The core never verifies
/// who the user is; it only resolves what the presented profiles allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorContext {
    /// Unconditional administrative bypass
    pub is_superuser: bool,
    /// Profiles owned by the actor, in the collaborator's order
    pub profiles: Vec<Profile>,
}

impl ActorContext {
    /// Create an actor holding the given profiles
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            is_superuser: false,
            profiles,
        }
    }

    /// Create a superuser actor with no profiles of its own
    pub fn superuser() -> Self {
        Self {
            is_superuser: true,
            profiles: Vec::new(),
        }
    }

    /// Add a profile to the actor
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Iterate over the actor's active profiles
    pub fn active_profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|p| p.active)
    }

    /// Whether the actor has any active profile
    pub fn has_active_profiles(&self) -> bool {
        self.active_profiles().next().is_some()
    }
}
