//! Trusted background service actor

use super::{CasePassport, CommunityPassport, Passport};
use crate::actors::ActorKind;
use crate::permissions::SystemPermissions;
use crate::subjects::{CaseSubject, CommunitySubject};
use crate::visa::{CaseVisa, CommunityVisa, FixedSpecVisa};
use std::sync::Arc;

/// Passport for a trusted job, holding an explicit partial spec per context
#[derive(Debug, Clone, Default)]
pub struct SystemPassport {
    profile: Option<String>,
    permissions: SystemPermissions,
}

impl SystemPassport {
    pub fn new(permissions: SystemPermissions) -> Self {
        Self {
            profile: None,
            permissions,
        }
    }

    /// Passport built from a named configuration profile
    pub fn for_profile(profile: impl Into<String>, permissions: SystemPermissions) -> Self {
        Self {
            profile: Some(profile.into()),
            permissions,
        }
    }

    pub fn permissions(&self) -> &SystemPermissions {
        &self.permissions
    }
}

impl CasePassport for SystemPassport {
    fn for_violation_ticket(&self, _ticket: &dyn CaseSubject) -> CaseVisa {
        Arc::new(FixedSpecVisa::new(
            self.permissions.case.merged_over_default(),
        ))
    }
}

impl CommunityPassport for SystemPassport {
    fn for_community(&self, _community: &dyn CommunitySubject) -> CommunityVisa {
        Arc::new(FixedSpecVisa::new(
            self.permissions.community.merged_over_default(),
        ))
    }
}

impl Passport for SystemPassport {
    fn kind(&self) -> ActorKind {
        ActorKind::System
    }

    fn actor_label(&self) -> String {
        match &self.profile {
            Some(profile) => format!("{}:{profile}", ActorKind::System),
            None => ActorKind::System.to_string(),
        }
    }

    fn case(&self) -> &dyn CasePassport {
        self
    }

    fn community(&self) -> &dyn CommunityPassport {
        self
    }
}
