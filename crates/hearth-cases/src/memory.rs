//! In-memory persistence adapters
//!
//! Used by tests and local wiring. The unit of work keeps committed tickets in
//! a map behind a tokio mutex; each transaction works on a private copy and
//! swaps it in only when the closure succeeds.

use crate::repository::{MemberReferenceLoader, ViolationTicketRepository, ViolationTicketUnitOfWork};
use crate::violation_ticket::value_objects::{
    Description, IndexHash, Priority, TicketStatus, TicketType, Title,
};
use crate::violation_ticket::{
    ActivityDetailProps, FinanceDetailsProps, MemberEntityReference, MessageProps, PhotoProps,
    RevisionRequestProps, ViolationTicket, ViolationTicketProps,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hearth_authorization::SharedPassport;
use hearth_core::{
    Aggregate, CommunityId, EventSink, HearthError, IntegrationEvent, MemberId, PropertyId,
    Result, ServiceId, TicketId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Plain-struct props adapter with modification tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryViolationTicketProps {
    id: TicketId,
    title: String,
    description: String,
    priority: Priority,
    status: TicketStatus,
    ticket_type: Option<String>,
    community_id: CommunityId,
    requestor_id: MemberId,
    property_id: Option<PropertyId>,
    assigned_to_id: Option<MemberId>,
    service_id: Option<ServiceId>,
    activity_log: Vec<ActivityDetailProps>,
    messages: Vec<MessageProps>,
    photos: Vec<PhotoProps>,
    finance_details: FinanceDetailsProps,
    revision_request: Option<RevisionRequestProps>,
    hash: Option<String>,
    last_indexed: Option<DateTime<Utc>>,
    update_index_failed_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    modified: bool,
}

impl InMemoryViolationTicketProps {
    /// Empty record; a draft fills in owner, requestor and title.
    pub fn new(id: TicketId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            status: TicketStatus::default(),
            ticket_type: None,
            community_id: CommunityId::new(""),
            requestor_id: MemberId::new(""),
            property_id: None,
            assigned_to_id: None,
            service_id: None,
            activity_log: Vec::new(),
            messages: Vec::new(),
            photos: Vec::new(),
            finance_details: FinanceDetailsProps::default(),
            revision_request: None,
            hash: None,
            last_indexed: None,
            update_index_failed_date: None,
            created_at,
            updated_at: created_at,
            modified: false,
        }
    }

    pub(crate) fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl ViolationTicketProps for InMemoryViolationTicketProps {
    fn id(&self) -> &TicketId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: Title) {
        self.title = title.into();
        self.modified = true;
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: Description) {
        self.description = description.into();
        self.modified = true;
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.modified = true;
    }

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
        self.modified = true;
    }

    fn ticket_type(&self) -> Option<&str> {
        self.ticket_type.as_deref()
    }

    fn set_ticket_type(&mut self, ticket_type: Option<TicketType>) {
        self.ticket_type = ticket_type.map(String::from);
        self.modified = true;
    }

    fn community_id(&self) -> &CommunityId {
        &self.community_id
    }

    fn set_community_id(&mut self, community_id: CommunityId) {
        self.community_id = community_id;
        self.modified = true;
    }

    fn requestor_id(&self) -> &MemberId {
        &self.requestor_id
    }

    fn set_requestor_id(&mut self, requestor_id: MemberId) {
        self.requestor_id = requestor_id;
        self.modified = true;
    }

    fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }

    fn set_property_id(&mut self, property_id: Option<PropertyId>) {
        self.property_id = property_id;
        self.modified = true;
    }

    fn assigned_to_id(&self) -> Option<&MemberId> {
        self.assigned_to_id.as_ref()
    }

    fn set_assigned_to_id(&mut self, assigned_to_id: Option<MemberId>) {
        self.assigned_to_id = assigned_to_id;
        self.modified = true;
    }

    fn service_id(&self) -> Option<&ServiceId> {
        self.service_id.as_ref()
    }

    fn set_service_id(&mut self, service_id: Option<ServiceId>) {
        self.service_id = service_id;
        self.modified = true;
    }

    fn activity_log(&self) -> &[ActivityDetailProps] {
        &self.activity_log
    }

    fn activity_log_mut(&mut self) -> &mut Vec<ActivityDetailProps> {
        self.modified = true;
        &mut self.activity_log
    }

    fn messages(&self) -> &[MessageProps] {
        &self.messages
    }

    fn messages_mut(&mut self) -> &mut Vec<MessageProps> {
        self.modified = true;
        &mut self.messages
    }

    fn photos(&self) -> &[PhotoProps] {
        &self.photos
    }

    fn photos_mut(&mut self) -> &mut Vec<PhotoProps> {
        self.modified = true;
        &mut self.photos
    }

    fn finance_details(&self) -> &FinanceDetailsProps {
        &self.finance_details
    }

    fn finance_details_mut(&mut self) -> &mut FinanceDetailsProps {
        self.modified = true;
        &mut self.finance_details
    }

    fn revision_request(&self) -> Option<&RevisionRequestProps> {
        self.revision_request.as_ref()
    }

    fn revision_request_mut(&mut self) -> Option<&mut RevisionRequestProps> {
        self.modified = true;
        self.revision_request.as_mut()
    }

    fn set_revision_request(&mut self, revision_request: Option<RevisionRequestProps>) {
        self.revision_request = revision_request;
        self.modified = true;
    }

    fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    fn set_hash(&mut self, hash: Option<IndexHash>) {
        self.hash = hash.map(String::from);
        self.modified = true;
    }

    fn last_indexed(&self) -> Option<DateTime<Utc>> {
        self.last_indexed
    }

    fn set_last_indexed(&mut self, at: Option<DateTime<Utc>>) {
        self.last_indexed = at;
        self.modified = true;
    }

    fn update_index_failed_date(&self) -> Option<DateTime<Utc>> {
        self.update_index_failed_date
    }

    fn set_update_index_failed_date(&mut self, at: Option<DateTime<Utc>>) {
        self.update_index_failed_date = at;
        self.modified = true;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn is_modified(&self) -> bool {
        self.modified
    }

    fn mark_clean(&mut self) {
        self.modified = false;
    }
}

/// Repository over one transaction's private copy of the store
#[derive(Debug)]
pub struct InMemoryViolationTicketRepository {
    passport: SharedPassport,
    tickets: BTreeMap<TicketId, InMemoryViolationTicketProps>,
    pending_events: Vec<IntegrationEvent>,
}

impl InMemoryViolationTicketRepository {
    pub fn new(
        passport: SharedPassport,
        tickets: BTreeMap<TicketId, InMemoryViolationTicketProps>,
    ) -> Self {
        Self {
            passport,
            tickets,
            pending_events: Vec::new(),
        }
    }

    /// Events collected by `save` and not yet published
    pub fn pending_events(&self) -> &[IntegrationEvent] {
        &self.pending_events
    }

    fn into_parts(
        self,
    ) -> (
        BTreeMap<TicketId, InMemoryViolationTicketProps>,
        Vec<IntegrationEvent>,
    ) {
        (self.tickets, self.pending_events)
    }
}

impl ViolationTicketRepository for InMemoryViolationTicketRepository {
    type Props = InMemoryViolationTicketProps;

    fn get_new_instance(
        &mut self,
        title: &str,
        description: &str,
        community_id: CommunityId,
        requestor_id: MemberId,
        penalty_amount: f64,
    ) -> Result<ViolationTicket<Self::Props>> {
        let props = InMemoryViolationTicketProps::new(TicketId::generate(), Utc::now());
        ViolationTicket::get_new_instance(
            props,
            self.passport.clone(),
            title,
            description,
            community_id,
            requestor_id,
            penalty_amount,
        )
    }

    fn get_by_id(&self, id: &TicketId) -> Result<ViolationTicket<Self::Props>> {
        self.tickets
            .get(id)
            .cloned()
            .map(|props| ViolationTicket::from_props(props, self.passport.clone()))
            .ok_or_else(|| HearthError::not_found("ViolationTicket", id.as_str()))
    }

    fn save(
        &mut self,
        mut ticket: ViolationTicket<Self::Props>,
    ) -> Result<ViolationTicket<Self::Props>> {
        let id = ticket.id().clone();
        // a brand-new record has only its Created event to announce
        let is_new = !self.tickets.contains_key(&id);
        let is_modified = !is_new && ticket.props().is_modified();
        ticket.on_save(is_modified);
        self.pending_events.extend(ticket.take_integration_events());

        if ticket.is_deleted() {
            self.tickets.remove(&id);
            tracing::debug!(ticket_id = %id, "Violation ticket removed");
            return Ok(ticket);
        }

        let props = ticket.props_mut();
        props.mark_clean();
        if is_modified {
            props.touch(Utc::now());
        }
        self.tickets.insert(id, props.clone());
        Ok(ticket)
    }
}

/// Unit of work that commits to an in-process map and publishes on commit
pub struct InMemoryUnitOfWork {
    tickets: Mutex<BTreeMap<TicketId, InMemoryViolationTicketProps>>,
    sink: Arc<dyn EventSink>,
}

impl InMemoryUnitOfWork {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            tickets: Mutex::new(BTreeMap::new()),
            sink,
        }
    }

    /// Committed state of one ticket
    pub async fn stored(&self, id: &TicketId) -> Option<InMemoryViolationTicketProps> {
        self.tickets.lock().await.get(id).cloned()
    }

    pub async fn stored_count(&self) -> usize {
        self.tickets.lock().await.len()
    }
}

impl std::fmt::Debug for InMemoryUnitOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUnitOfWork").finish_non_exhaustive()
    }
}

#[async_trait]
impl ViolationTicketUnitOfWork for InMemoryUnitOfWork {
    type Repository = InMemoryViolationTicketRepository;

    async fn with_transaction<F, T>(&self, passport: SharedPassport, work: F) -> Result<T>
    where
        F: FnOnce(&mut Self::Repository) -> Result<T> + Send,
        T: Send,
    {
        let actor = passport.actor_label();
        let mut committed = self.tickets.lock().await;
        let mut repository = InMemoryViolationTicketRepository::new(passport, committed.clone());

        match work(&mut repository) {
            Ok(value) => {
                let (tickets, events) = repository.into_parts();
                *committed = tickets;
                drop(committed);
                tracing::debug!(actor = %actor, events = events.len(), "Transaction committed");
                if !events.is_empty() {
                    // already committed, so a publish failure is not a rollback
                    if let Err(err) = self.sink.publish(events).await {
                        tracing::warn!(actor = %actor, error = %err, "Publishing committed events failed");
                    }
                }
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(actor = %actor, error = %err, "Transaction rolled back");
                Err(err)
            }
        }
    }
}

/// Member directory backing [`MemberReferenceLoader`] in tests
#[derive(Debug, Default)]
pub struct InMemoryMemberDirectory {
    members: BTreeMap<MemberId, MemberEntityReference>,
}

impl InMemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member: MemberEntityReference) {
        self.members.insert(member.id().clone(), member);
    }
}

#[async_trait]
impl MemberReferenceLoader for InMemoryMemberDirectory {
    async fn load_member(&self, id: &MemberId) -> Result<MemberEntityReference> {
        self.members
            .get(id)
            .cloned()
            .ok_or_else(|| HearthError::not_found("Member", id.as_str()))
    }
}
