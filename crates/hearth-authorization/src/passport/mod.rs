//! Passports: per-actor factories for visas
//!
//! A passport is built once per request for the current actor and mints a fresh
//! visa for every aggregate instance the request touches. Each bounded context
//! has its own passport trait with one `for_<aggregate>` accessor; a
//! [`Passport`] exposes all of them.
//!
//! Building a passport never fails and never checks anything. Authorization
//! failures surface later, at `determine_if` call sites, as `false`.

mod factory;
mod guest;
mod member;
mod staff_user;
mod system;

pub use factory::PassportFactory;
pub use guest::GuestPassport;
pub use member::MemberPassport;
pub use staff_user::StaffUserPassport;
pub use system::SystemPassport;

use crate::actors::ActorKind;
use crate::subjects::{CaseSubject, CommunitySubject};
use crate::visa::{CaseVisa, CommunityVisa};
use std::fmt;
use std::sync::Arc;

/// Visa accessors for the case bounded context
pub trait CasePassport {
    fn for_violation_ticket(&self, ticket: &dyn CaseSubject) -> CaseVisa;
}

/// Visa accessors for the community bounded context
pub trait CommunityPassport {
    fn for_community(&self, community: &dyn CommunitySubject) -> CommunityVisa;

    /// Visa for editing a member of a community
    fn for_member(&self, member: &dyn CommunitySubject) -> CommunityVisa {
        self.for_community(member)
    }
}

/// Everything an actor may be granted, one accessor per bounded context
pub trait Passport: fmt::Debug + Send + Sync {
    fn kind(&self) -> ActorKind;

    /// Short description of the actor for logs, e.g. `member:member-7`
    fn actor_label(&self) -> String;

    fn case(&self) -> &dyn CasePassport;

    fn community(&self) -> &dyn CommunityPassport;
}

/// Shared handle to a passport, held by aggregates for the duration of a request
pub type SharedPassport = Arc<dyn Passport>;
