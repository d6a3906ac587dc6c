//! Storage-facing shape of a violation ticket
//!
//! The aggregate never touches storage; it reads and writes through this
//! trait, and each persistence adapter supplies its own implementation. Setters
//! take already-validated value objects, so an adapter can never receive an
//! out-of-range value from the aggregate.
//!
//! Adapters track whether anything was written since the last save
//! (`is_modified`) so the unit of work can decide whether to announce an
//! update.

use super::activity_detail::ActivityDetailProps;
use super::finance_details::FinanceDetailsProps;
use super::message::MessageProps;
use super::photo::PhotoProps;
use super::revision_request::RevisionRequestProps;
use super::value_objects::{
    Description, IndexHash, Priority, TicketStatus, TicketType, Title,
};
use chrono::{DateTime, Utc};
use hearth_core::{CommunityId, MemberId, PropertyId, ServiceId, TicketId};
use std::fmt;

pub trait ViolationTicketProps: fmt::Debug + Send {
    fn id(&self) -> &TicketId;

    fn title(&self) -> &str;
    fn set_title(&mut self, title: Title);

    fn description(&self) -> &str;
    fn set_description(&mut self, description: Description);

    fn priority(&self) -> Priority;
    fn set_priority(&mut self, priority: Priority);

    fn status(&self) -> TicketStatus;
    fn set_status(&mut self, status: TicketStatus);

    fn ticket_type(&self) -> Option<&str>;
    fn set_ticket_type(&mut self, ticket_type: Option<TicketType>);

    fn community_id(&self) -> &CommunityId;
    fn set_community_id(&mut self, community_id: CommunityId);

    fn requestor_id(&self) -> &MemberId;
    fn set_requestor_id(&mut self, requestor_id: MemberId);

    fn property_id(&self) -> Option<&PropertyId>;
    fn set_property_id(&mut self, property_id: Option<PropertyId>);

    fn assigned_to_id(&self) -> Option<&MemberId>;
    fn set_assigned_to_id(&mut self, assigned_to_id: Option<MemberId>);

    fn service_id(&self) -> Option<&ServiceId>;
    fn set_service_id(&mut self, service_id: Option<ServiceId>);

    fn activity_log(&self) -> &[ActivityDetailProps];
    fn activity_log_mut(&mut self) -> &mut Vec<ActivityDetailProps>;

    fn messages(&self) -> &[MessageProps];
    fn messages_mut(&mut self) -> &mut Vec<MessageProps>;

    fn photos(&self) -> &[PhotoProps];
    fn photos_mut(&mut self) -> &mut Vec<PhotoProps>;

    fn finance_details(&self) -> &FinanceDetailsProps;
    fn finance_details_mut(&mut self) -> &mut FinanceDetailsProps;

    fn revision_request(&self) -> Option<&RevisionRequestProps>;
    fn revision_request_mut(&mut self) -> Option<&mut RevisionRequestProps>;
    fn set_revision_request(&mut self, revision_request: Option<RevisionRequestProps>);

    /// Content hash of the last search-index document
    fn hash(&self) -> Option<&str>;
    fn set_hash(&mut self, hash: Option<IndexHash>);

    fn last_indexed(&self) -> Option<DateTime<Utc>>;
    fn set_last_indexed(&mut self, at: Option<DateTime<Utc>>);

    fn update_index_failed_date(&self) -> Option<DateTime<Utc>>;
    fn set_update_index_failed_date(&mut self, at: Option<DateTime<Utc>>);

    /// Stamped by the persistence layer
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Anything written since the last `mark_clean`?
    fn is_modified(&self) -> bool;
    fn mark_clean(&mut self);
}
