//! Community member actor

use super::{CasePassport, CommunityPassport, Passport};
use crate::actors::{ActorKind, CommunityRef, EndUserRef, MemberRef};
use crate::subjects::{CaseBinding, CaseSubject, CommunityBinding, CommunitySubject};
use crate::visa::{CaseVisa, CommunityVisa, MemberCaseVisa, MemberCommunityVisa};
use std::sync::Arc;

/// Passport for an end user acting through one community membership.
///
/// Visas derive the member's spec per call from the role's base permissions,
/// the instance-relative facts of the bound aggregate, and the community scope.
#[derive(Debug, Clone)]
pub struct MemberPassport {
    end_user: EndUserRef,
    member: MemberRef,
    community: CommunityRef,
}

impl MemberPassport {
    pub fn new(end_user: EndUserRef, member: MemberRef, community: CommunityRef) -> Self {
        Self {
            end_user,
            member,
            community,
        }
    }

    pub fn end_user(&self) -> &EndUserRef {
        &self.end_user
    }

    pub fn member(&self) -> &MemberRef {
        &self.member
    }

    pub fn community_ref(&self) -> &CommunityRef {
        &self.community
    }
}

impl CasePassport for MemberPassport {
    fn for_violation_ticket(&self, ticket: &dyn CaseSubject) -> CaseVisa {
        Arc::new(MemberCaseVisa::new(
            self.member.clone(),
            self.community.clone(),
            CaseBinding::of(ticket),
        ))
    }
}

impl CommunityPassport for MemberPassport {
    fn for_community(&self, community: &dyn CommunitySubject) -> CommunityVisa {
        Arc::new(MemberCommunityVisa::new(
            self.member.clone(),
            self.community.clone(),
            CommunityBinding::of(community),
        ))
    }
}

impl Passport for MemberPassport {
    fn kind(&self) -> ActorKind {
        ActorKind::Member
    }

    fn actor_label(&self) -> String {
        format!("{}:{}", ActorKind::Member, self.member.id)
    }

    fn case(&self) -> &dyn CasePassport {
        self
    }

    fn community(&self) -> &dyn CommunityPassport {
        self
    }
}
