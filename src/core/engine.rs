//! Authorization engine
//!
//! The pure decision function at the center of the crate: given an actor's
//! profiles and a required permission, optionally scoped to a record, decide
//! allow or deny. The engine has no side effects and never mutates actor or
//! record state; the outcome is the OR over the actor's active profiles, so
//! profile order never changes the answer.

use crate::core::guard::ObjectContext;
use crate::core::models::ActorContext;
use crate::core::registry::RoleRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Why an authorization check denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No active profile holds the required permission
    NoMatchingProfile,
    /// A profile holds the permission but the record relationship failed
    ObjectMismatch,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenialReason::NoMatchingProfile => write!(f, "no matching profile"),
            DenialReason::ObjectMismatch => write!(f, "object mismatch"),
        }
    }
}

/// Outcome of a detailed authorization check
#[derive(Debug, Clone)]
pub struct AccessDecision {
    /// Whether access is granted
    pub allowed: bool,
    /// Profile that satisfied the check, when one did; superuser grants
    /// carry no profile
    pub granted_by: Option<Uuid>,
    /// Reason for denial (if not allowed)
    pub reason: Option<DenialReason>,
}

impl AccessDecision {
    fn granted(granted_by: Option<Uuid>) -> Self {
        Self {
            allowed: true,
            granted_by,
            reason: None,
        }
    }

    fn denied(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            granted_by: None,
            reason: Some(reason),
        }
    }
}

/// Permission resolution across an actor's profile set
#[derive(Debug, Clone)]
pub struct AccessEngine {
    registry: Arc<RoleRegistry>,
}

impl AccessEngine {
    /// Create an engine over the given role registry
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self { registry }
    }

    /// The role registry decisions resolve against
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Decide whether the actor may exercise the permission, optionally
    /// scoped to a record
    pub fn authorize(
        &self,
        actor: &ActorContext,
        codename: &str,
        object: Option<&ObjectContext<'_>>,
    ) -> bool {
        self.authorize_detailed(actor, codename, object).allowed
    }

    /// Like [`authorize`](Self::authorize), but reporting which profile
    /// granted access or why access was denied.
    ///
    /// Superusers pass unconditionally; the bypass is the one deliberate
    /// escape hatch and is logged so grants remain auditable.
    pub fn authorize_detailed(
        &self,
        actor: &ActorContext,
        codename: &str,
        object: Option<&ObjectContext<'_>>,
    ) -> AccessDecision {
        if actor.is_superuser {
            debug!(permission = codename, "superuser bypass granted");
            return AccessDecision::granted(None);
        }

        let mut object_mismatch = false;
        for profile in actor.active_profiles() {
            if !self.registry.grants(&profile.role, codename) {
                continue;
            }
            match object {
                None => return AccessDecision::granted(Some(profile.id())),
                Some(ctx) if ctx.satisfied_by(profile, codename) => {
                    return AccessDecision::granted(Some(profile.id()));
                }
                Some(_) => object_mismatch = true,
            }
        }

        let reason = if object_mismatch {
            DenialReason::ObjectMismatch
        } else {
            DenialReason::NoMatchingProfile
        };
        debug!(permission = codename, %reason, "authorization denied");
        AccessDecision::denied(reason)
    }
}
