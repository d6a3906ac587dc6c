//! Platform staff actor

use super::{CasePassport, CommunityPassport, Passport};
use crate::actors::{ActorKind, StaffUserRef};
use crate::subjects::{CaseSubject, CommunitySubject};
use crate::visa::{CaseVisa, CommunityVisa, FixedSpecVisa};
use std::sync::Arc;

/// Passport for a staff user: visas defer entirely to the staff role's flags
#[derive(Debug, Clone)]
pub struct StaffUserPassport {
    staff_user: StaffUserRef,
}

impl StaffUserPassport {
    pub fn new(staff_user: StaffUserRef) -> Self {
        Self { staff_user }
    }

    pub fn staff_user(&self) -> &StaffUserRef {
        &self.staff_user
    }
}

impl CasePassport for StaffUserPassport {
    fn for_violation_ticket(&self, _ticket: &dyn CaseSubject) -> CaseVisa {
        Arc::new(FixedSpecVisa::new(self.staff_user.permissions().case))
    }
}

impl CommunityPassport for StaffUserPassport {
    fn for_community(&self, _community: &dyn CommunitySubject) -> CommunityVisa {
        Arc::new(FixedSpecVisa::new(self.staff_user.permissions().community))
    }
}

impl Passport for StaffUserPassport {
    fn kind(&self) -> ActorKind {
        ActorKind::StaffUser
    }

    fn actor_label(&self) -> String {
        format!("{}:{}", ActorKind::StaffUser, self.staff_user.id)
    }

    fn case(&self) -> &dyn CasePassport {
        self
    }

    fn community(&self) -> &dyn CommunityPassport {
        self
    }
}
