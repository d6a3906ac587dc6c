//! Passport construction, one entry point per actor kind

use super::{GuestPassport, MemberPassport, SharedPassport, StaffUserPassport, SystemPassport};
use crate::actors::{CommunityRef, EndUserRef, MemberRef, StaffUserRef};
use crate::config::HearthConfig;
use crate::permissions::SystemPermissions;
use hearth_core::{HearthError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds passports for the current actor.
///
/// Holds the named system profiles from configuration so background jobs can
/// ask for `provisioning` or `indexer` rather than spelling out flags.
#[derive(Debug, Clone, Default)]
pub struct PassportFactory {
    system_profiles: BTreeMap<String, SystemPermissions>,
}

impl PassportFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HearthConfig) -> Self {
        Self {
            system_profiles: config.system_profiles.clone(),
        }
    }

    /// Register (or replace) a named system profile
    pub fn with_system_profile(
        mut self,
        name: impl Into<String>,
        permissions: SystemPermissions,
    ) -> Self {
        self.system_profiles.insert(name.into(), permissions);
        self
    }

    pub fn for_member(
        &self,
        end_user: EndUserRef,
        member: MemberRef,
        community: CommunityRef,
    ) -> SharedPassport {
        Arc::new(MemberPassport::new(end_user, member, community))
    }

    pub fn for_staff_user(&self, staff_user: StaffUserRef) -> SharedPassport {
        Arc::new(StaffUserPassport::new(staff_user))
    }

    pub fn for_guest(&self) -> SharedPassport {
        Arc::new(GuestPassport)
    }

    /// System passport from an explicit partial spec; `None` grants nothing
    pub fn for_system(&self, permissions: Option<SystemPermissions>) -> SharedPassport {
        Arc::new(SystemPassport::new(permissions.unwrap_or_default()))
    }

    /// System passport from a configured profile
    pub fn for_system_profile(&self, name: &str) -> Result<SharedPassport> {
        let permissions = self
            .system_profiles
            .get(name)
            .ok_or_else(|| HearthError::not_found("system profile", name))?;
        tracing::debug!(
            profile = name,
            case = ?permissions.case.merged_over_default().granted_flags(),
            "Issuing system passport"
        );
        Ok(Arc::new(SystemPassport::for_profile(name, *permissions)))
    }

    pub fn system_profile_names(&self) -> impl Iterator<Item = &str> {
        self.system_profiles.keys().map(String::as_str)
    }
}
