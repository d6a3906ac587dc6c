//! Aggregate instances as seen by the authorization engine
//!
//! A visa is bound to one aggregate instance. The engine only needs the few
//! instance facts that feed instance-relative flags and the community scope
//! check, so aggregates expose them through these traits and every
//! `for_<aggregate>` call snapshots them into an owned binding.

use crate::actors::{CommunityRef, MemberRef};
use hearth_core::{CommunityId, MemberId};

/// Facts about a case that authorization depends on
pub trait CaseSubject {
    /// Community that owns the case
    fn community_id(&self) -> &CommunityId;

    /// Member who opened the case
    fn requestor_id(&self) -> &MemberId;

    /// Member the case is assigned to, if any
    fn assigned_to_id(&self) -> Option<&MemberId>;
}

/// Owned snapshot of a [`CaseSubject`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseBinding {
    pub community_id: CommunityId,
    pub requestor_id: MemberId,
    pub assigned_to_id: Option<MemberId>,
}

impl CaseBinding {
    pub fn of(subject: &dyn CaseSubject) -> Self {
        Self {
            community_id: subject.community_id().clone(),
            requestor_id: subject.requestor_id().clone(),
            assigned_to_id: subject.assigned_to_id().cloned(),
        }
    }
}

impl CaseSubject for CaseBinding {
    fn community_id(&self) -> &CommunityId {
        &self.community_id
    }

    fn requestor_id(&self) -> &MemberId {
        &self.requestor_id
    }

    fn assigned_to_id(&self) -> Option<&MemberId> {
        self.assigned_to_id.as_ref()
    }
}

/// Facts about a community-scoped aggregate (the community itself, a member)
pub trait CommunitySubject {
    fn community_id(&self) -> &CommunityId;

    /// The member being edited, when the subject is a member
    fn member_id(&self) -> Option<&MemberId> {
        None
    }
}

/// Owned snapshot of a [`CommunitySubject`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommunityBinding {
    pub community_id: CommunityId,
    pub member_id: Option<MemberId>,
}

impl CommunityBinding {
    pub fn of(subject: &dyn CommunitySubject) -> Self {
        Self {
            community_id: subject.community_id().clone(),
            member_id: subject.member_id().cloned(),
        }
    }
}

impl CommunitySubject for CommunityRef {
    fn community_id(&self) -> &CommunityId {
        &self.id
    }
}

impl CommunitySubject for MemberRef {
    fn community_id(&self) -> &CommunityId {
        &self.community_id
    }

    fn member_id(&self) -> Option<&MemberId> {
        Some(&self.id)
    }
}
