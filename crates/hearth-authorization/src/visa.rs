//! Visas: permission evaluators bound to one (actor, aggregate instance) pair
//!
//! `determine_if` is pure and total: it reads only the visa's own binding, never
//! performs I/O and never mutates anything. Guarded call sites turn a `false`
//! answer into [`HearthError::PermissionDenied`] with [`require`].
//!
//! | Actor | Spec the predicate sees |
//! |---|---|
//! | Guest | none: every predicate is answered `false` |
//! | Member | role spec + instance-relative flags, staff capabilities stripped; `false` outside the member's community |
//! | StaffUser | the staff role's spec (all `false` without a role) |
//! | System | caller-supplied partial spec merged over all-`false` |

use crate::actors::{CommunityRef, MemberRef};
use crate::permissions::{CasePermissions, CommunityPermissions};
use crate::subjects::{CaseBinding, CommunityBinding};
use hearth_core::{HearthError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Permission evaluator for one bounded context's spec `P`
pub trait Visa<P>: fmt::Debug + Send + Sync {
    /// Does `predicate` hold over the spec this visa derives for its binding?
    fn determine_if(&self, predicate: &dyn Fn(&P) -> bool) -> bool;
}

/// Shared visa for case aggregates and their child entities
pub type CaseVisa = Arc<dyn Visa<CasePermissions>>;

/// Shared visa for community-scoped aggregates
pub type CommunityVisa = Arc<dyn Visa<CommunityPermissions>>;

/// Evaluate `predicate` and fail with `PermissionDenied` naming `operation`.
pub fn require<P>(
    visa: &dyn Visa<P>,
    operation: &str,
    predicate: impl Fn(&P) -> bool,
) -> Result<()> {
    if visa.determine_if(&predicate) {
        Ok(())
    } else {
        tracing::debug!(operation, visa = ?visa, "Guarded operation denied");
        Err(HearthError::permission_denied(operation))
    }
}

/// Fail-closed visa: every predicate is `false`.
pub struct DenyAllVisa<P> {
    _spec: PhantomData<fn(&P)>,
}

impl<P> DenyAllVisa<P> {
    pub fn new() -> Self {
        Self { _spec: PhantomData }
    }
}

impl<P> Default for DenyAllVisa<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for DenyAllVisa<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DenyAllVisa")
    }
}

impl<P> Visa<P> for DenyAllVisa<P> {
    fn determine_if(&self, _predicate: &dyn Fn(&P) -> bool) -> bool {
        false
    }
}

/// Visa over a spec fixed at construction (staff roles, system accounts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSpecVisa<P> {
    spec: P,
}

impl<P> FixedSpecVisa<P> {
    pub fn new(spec: P) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &P {
        &self.spec
    }
}

impl<P> Visa<P> for FixedSpecVisa<P>
where
    P: fmt::Debug + Send + Sync,
{
    fn determine_if(&self, predicate: &dyn Fn(&P) -> bool) -> bool {
        predicate(&self.spec)
    }
}

/// A member's visa for one case.
#[derive(Debug, Clone)]
pub struct MemberCaseVisa {
    member: MemberRef,
    community: CommunityRef,
    binding: CaseBinding,
}

impl MemberCaseVisa {
    pub fn new(member: MemberRef, community: CommunityRef, binding: CaseBinding) -> Self {
        Self {
            member,
            community,
            binding,
        }
    }

    fn in_scope(&self) -> bool {
        self.member.community_id == self.community.id
            && self.binding.community_id == self.community.id
    }

    /// Spec derived for this binding; `None` when the case is outside the
    /// member's community.
    pub fn derived_spec(&self) -> Option<CasePermissions> {
        if !self.in_scope() {
            return None;
        }
        let base = self.member.role.permissions.case.without_staff_capabilities();
        Some(CasePermissions {
            is_editing_own_ticket: self.binding.requestor_id == self.member.id,
            is_editing_assigned_ticket: self.binding.assigned_to_id.as_ref()
                == Some(&self.member.id),
            ..base
        })
    }
}

impl Visa<CasePermissions> for MemberCaseVisa {
    fn determine_if(&self, predicate: &dyn Fn(&CasePermissions) -> bool) -> bool {
        match self.derived_spec() {
            Some(spec) => predicate(&spec),
            None => false,
        }
    }
}

/// A member's visa for a community or one of its members.
#[derive(Debug, Clone)]
pub struct MemberCommunityVisa {
    member: MemberRef,
    community: CommunityRef,
    binding: CommunityBinding,
}

impl MemberCommunityVisa {
    pub fn new(member: MemberRef, community: CommunityRef, binding: CommunityBinding) -> Self {
        Self {
            member,
            community,
            binding,
        }
    }

    pub fn derived_spec(&self) -> Option<CommunityPermissions> {
        if self.member.community_id != self.community.id
            || self.binding.community_id != self.community.id
        {
            return None;
        }
        Some(CommunityPermissions {
            is_editing_own_member_account: self.binding.member_id.as_ref()
                == Some(&self.member.id),
            is_system_account: false,
            ..self.member.role.permissions.community
        })
    }
}

impl Visa<CommunityPermissions> for MemberCommunityVisa {
    fn determine_if(&self, predicate: &dyn Fn(&CommunityPermissions) -> bool) -> bool {
        match self.derived_spec() {
            Some(spec) => predicate(&spec),
            None => false,
        }
    }
}
