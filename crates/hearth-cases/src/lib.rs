//! Hearth Cases - guarded case aggregates
//!
//! The violation ticket is the exemplar aggregate: every mutation consults a
//! visa minted for the current actor and the ticket's current state, status
//! changes follow a fixed transition table, and domain facts are recorded as
//! integration events for the unit of work to publish after commit.
//!
//! - [`violation_ticket`]: the aggregate, its value objects, child entities and
//!   read-only references
//! - [`repository`]: persistence contracts (props adapters live with the
//!   storage layer)
//! - [`memory`]: in-memory adapters for tests and local wiring

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod repository;
pub mod violation_ticket;

pub use memory::{
    InMemoryMemberDirectory, InMemoryUnitOfWork, InMemoryViolationTicketProps,
    InMemoryViolationTicketRepository,
};
pub use repository::{MemberReferenceLoader, ViolationTicketRepository, ViolationTicketUnitOfWork};
pub use violation_ticket::{
    ActivityDetail, ActivityDetailProps, FinanceDetailsProps, MemberEntityReference, Message,
    MessageProps, Photo, PhotoProps, RequestedChanges, RevisionRequest, RevisionRequestProps,
    ViolationTicket, ViolationTicketDraft, ViolationTicketEntityReference, ViolationTicketProps,
};
