//! Actor identity contexts and roles
//!
//! These are read-only references handed in by the authentication layer. The
//! authorization engine never loads or mutates them.

use crate::permissions::RolePermissions;
use hearth_core::{CommunityId, EndUserId, MemberId, RoleId, StaffUserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of identity a mutation is performed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Guest,
    Member,
    StaffUser,
    System,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActorKind::Guest => "guest",
            ActorKind::Member => "member",
            ActorKind::StaffUser => "staff_user",
            ActorKind::System => "system",
        };
        f.write_str(label)
    }
}

/// Authenticated end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserRef {
    pub id: EndUserId,
    pub display_name: String,
}

/// Community a member belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityRef {
    pub id: CommunityId,
    pub name: String,
}

/// Role assigned to members of one community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndUserRole {
    pub id: RoleId,
    pub community_id: CommunityId,
    pub role_name: String,
    pub is_default: bool,
    pub permissions: RolePermissions,
}

/// Membership of an end user in a community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: MemberId,
    pub community_id: CommunityId,
    pub member_name: String,
    pub role: EndUserRole,
}

/// Platform-wide role for staff accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRole {
    pub id: RoleId,
    pub role_name: String,
    pub permissions: RolePermissions,
}

/// Platform staff account; a staff user without a role holds no capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUserRef {
    pub id: StaffUserId,
    pub display_name: String,
    pub role: Option<StaffRole>,
}

impl StaffUserRef {
    /// The role's permissions, or all-`false` without a role
    pub fn permissions(&self) -> RolePermissions {
        self.role
            .as_ref()
            .map(|role| role.permissions)
            .unwrap_or_default()
    }
}
