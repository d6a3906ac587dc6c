//! Hearth Authorization - actor-scoped, instance-bound access decisions
//!
//! The engine answers one question: may *this actor* do *this* to *this
//! aggregate instance*? It does so without global state:
//!
//! 1. the caller builds a [`Passport`] for the current actor through the
//!    [`PassportFactory`] (Guest, Member, StaffUser or System);
//! 2. `passport.case().for_violation_ticket(&ticket)` mints a [`Visa`] bound to
//!    that ticket;
//! 3. guarded call sites ask `visa.determine_if(|spec| ...)` and convert `false`
//!    into `PermissionDenied` via [`require`].
//!
//! Visas are pure functions of their binding: no I/O, no hidden mutable state,
//! so two evaluations for different instances can never interfere.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod actors;
pub mod config;
pub mod passport;
pub mod permissions;
pub mod subjects;
pub mod visa;

pub use actors::{
    ActorKind, CommunityRef, EndUserRef, EndUserRole, MemberRef, StaffRole, StaffUserRef,
};
pub use config::HearthConfig;
pub use passport::{
    CasePassport, CommunityPassport, GuestPassport, MemberPassport, Passport, PassportFactory,
    SharedPassport, StaffUserPassport, SystemPassport,
};
pub use permissions::{
    CasePermissions, CasePermissionsOverride, CommunityPermissions, CommunityPermissionsOverride,
    RolePermissions, SystemPermissions,
};
pub use subjects::{CaseBinding, CaseSubject, CommunityBinding, CommunitySubject};
pub use visa::{
    require, CaseVisa, CommunityVisa, DenyAllVisa, FixedSpecVisa, MemberCaseVisa,
    MemberCommunityVisa, Visa,
};
