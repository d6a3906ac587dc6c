//! Read-only entity references
//!
//! Sibling aggregates never hold a mutable aggregate; they hold one of these
//! detached snapshots.

use super::activity_detail::ActivityDetailProps;
use super::finance_details::FinanceDetailsProps;
use super::message::MessageProps;
use super::photo::PhotoProps;
use super::revision_request::RevisionRequestProps;
use super::value_objects::{Priority, TicketStatus};
use chrono::{DateTime, Utc};
use hearth_core::{CommunityId, MemberId, PropertyId, ServiceId, TicketId};
use serde::{Deserialize, Serialize};

/// Read-only view of a community member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntityReference {
    id: MemberId,
    community_id: CommunityId,
    member_name: String,
}

impl MemberEntityReference {
    pub fn new(id: MemberId, community_id: CommunityId, member_name: impl Into<String>) -> Self {
        Self {
            id,
            community_id,
            member_name: member_name.into(),
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn community_id(&self) -> &CommunityId {
        &self.community_id
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }
}

/// Read-only snapshot of a violation ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationTicketEntityReference {
    pub(crate) id: TicketId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) priority: Priority,
    pub(crate) status: TicketStatus,
    pub(crate) ticket_type: Option<String>,
    pub(crate) community_id: CommunityId,
    pub(crate) property_id: Option<PropertyId>,
    pub(crate) requestor_id: MemberId,
    pub(crate) assigned_to_id: Option<MemberId>,
    pub(crate) service_id: Option<ServiceId>,
    pub(crate) activity_log: Vec<ActivityDetailProps>,
    pub(crate) messages: Vec<MessageProps>,
    pub(crate) photos: Vec<PhotoProps>,
    pub(crate) finance_details: FinanceDetailsProps,
    pub(crate) revision_request: Option<RevisionRequestProps>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl ViolationTicketEntityReference {
    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn ticket_type(&self) -> Option<&str> {
        self.ticket_type.as_deref()
    }

    pub fn community_id(&self) -> &CommunityId {
        &self.community_id
    }

    pub fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }

    pub fn requestor_id(&self) -> &MemberId {
        &self.requestor_id
    }

    pub fn assigned_to_id(&self) -> Option<&MemberId> {
        self.assigned_to_id.as_ref()
    }

    pub fn service_id(&self) -> Option<&ServiceId> {
        self.service_id.as_ref()
    }

    pub fn activity_log(&self) -> &[ActivityDetailProps] {
        &self.activity_log
    }

    pub fn messages(&self) -> &[MessageProps] {
        &self.messages
    }

    pub fn photos(&self) -> &[PhotoProps] {
        &self.photos
    }

    pub fn finance_details(&self) -> &FinanceDetailsProps {
        &self.finance_details
    }

    pub fn revision_request(&self) -> Option<&RevisionRequestProps> {
        self.revision_request.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl hearth_authorization::CaseSubject for ViolationTicketEntityReference {
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
