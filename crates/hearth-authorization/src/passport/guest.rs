//! Unauthenticated actor

use super::{CasePassport, CommunityPassport, Passport};
use crate::actors::ActorKind;
use crate::subjects::{CaseSubject, CommunitySubject};
use crate::visa::{CaseVisa, CommunityVisa, DenyAllVisa};
use std::sync::Arc;

/// Passport whose visas deny every capability
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestPassport;

impl CasePassport for GuestPassport {
    fn for_violation_ticket(&self, _ticket: &dyn CaseSubject) -> CaseVisa {
        Arc::new(DenyAllVisa::new())
    }
}

impl CommunityPassport for GuestPassport {
    fn for_community(&self, _community: &dyn CommunitySubject) -> CommunityVisa {
        Arc::new(DenyAllVisa::new())
    }
}

impl Passport for GuestPassport {
    fn kind(&self) -> ActorKind {
        ActorKind::Guest
    }

    fn actor_label(&self) -> String {
        ActorKind::Guest.to_string()
    }

    fn case(&self) -> &dyn CasePassport {
        self
    }

    fn community(&self) -> &dyn CommunityPassport {
        self
    }
}
