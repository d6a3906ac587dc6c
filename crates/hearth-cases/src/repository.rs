//! Persistence collaborator contracts
//!
//! The persistence layer implements these; the aggregate only sees
//! [`ViolationTicketProps`] and [`MemberReferenceLoader`].
//!
//! A unit of work runs a synchronous closure against a repository inside one
//! storage transaction. When the closure returns `Ok`, every saved ticket is
//! committed and the integration events drained during `save` are handed to
//! the event sink. When it returns `Err`, nothing is committed and nothing is
//! published. A sink failure after commit does not turn the result into `Err`.

use crate::violation_ticket::{MemberEntityReference, ViolationTicket, ViolationTicketProps};
use async_trait::async_trait;
use hearth_authorization::SharedPassport;
use hearth_core::{CommunityId, MemberId, Result, TicketId};

/// Lazy loading of member references for foreign keys on a ticket
#[async_trait]
pub trait MemberReferenceLoader: Send + Sync {
    /// Fails with `NotFound` when no such member exists.
    async fn load_member(&self, id: &MemberId) -> Result<MemberEntityReference>;
}

/// Ticket storage as seen from inside a transaction
pub trait ViolationTicketRepository {
    type Props: ViolationTicketProps;

    /// Allocate storage for a new ticket and populate it.
    fn get_new_instance(
        &mut self,
        title: &str,
        description: &str,
        community_id: CommunityId,
        requestor_id: MemberId,
        penalty_amount: f64,
    ) -> Result<ViolationTicket<Self::Props>>;

    /// Fails with `NotFound` for unknown or deleted tickets.
    fn get_by_id(&self, id: &TicketId) -> Result<ViolationTicket<Self::Props>>;

    /// Stage `ticket` for commit and collect its integration events.
    ///
    /// Returns the ticket as stored, with an empty outbox.
    fn save(&mut self, ticket: ViolationTicket<Self::Props>)
        -> Result<ViolationTicket<Self::Props>>;
}

/// Transaction boundary around repository work
#[async_trait]
pub trait ViolationTicketUnitOfWork: Send + Sync {
    type Repository: ViolationTicketRepository + Send;

    /// Run `work` with a repository acting on behalf of `passport`.
    async fn with_transaction<F, T>(&self, passport: SharedPassport, work: F) -> Result<T>
    where
        F: FnOnce(&mut Self::Repository) -> Result<T> + Send,
        T: Send;
}
