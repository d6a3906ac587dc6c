//! Violation ticket aggregate
//!
//! A violation ticket records a rule violation reported against a property in
//! a community. Every mutating operation mints a visa for the current actor
//! from the ticket's present state, checks it, validates its input, and only
//! then writes. A failed call leaves the ticket exactly as it was.
//!
//! Tickets come into existence through [`ViolationTicketDraft`] (unchecked,
//! validating setters) and [`ViolationTicketDraft::finalize`], which records
//! the `Created` event. Tickets loaded from storage use
//! [`ViolationTicket::from_props`] and record nothing.
//!
//! Status changes after creation go through
//! [`ViolationTicket::request_add_status_transition`], which consults the
//! transition table in [`status`] unless the actor is a system account.

mod activity_detail;
mod draft;
mod finance_details;
mod guard;
mod message;
mod photo;
mod props;
mod reference;
mod revision_request;
pub mod status;
pub mod value_objects;

pub use activity_detail::{ActivityDetail, ActivityDetailProps};
pub use draft::ViolationTicketDraft;
pub use finance_details::FinanceDetailsProps;
pub use message::{Message, MessageProps};
pub use photo::{Photo, PhotoProps};
pub use props::ViolationTicketProps;
pub use reference::{MemberEntityReference, ViolationTicketEntityReference};
pub use revision_request::{RequestedChanges, RevisionRequest, RevisionRequestProps};

use crate::repository::MemberReferenceLoader;
use chrono::{DateTime, Utc};
use hearth_authorization::{require, CasePermissions, CaseSubject, CaseVisa, SharedPassport};
use hearth_core::{
    Aggregate, AggregateRoot, CommunityId, EntityId, HearthError, IntegrationEventKind, MemberId,
    PropertyId, Result, ServiceId, TicketId,
};
use serde_json::{json, Value};
use self::value_objects::{
    ActivityType, Description, IndexHash, Priority, ServiceFee, TicketStatus, TicketType, Title,
};

/// Guard-enforcing violation ticket over a props adapter `P`
#[derive(Debug)]
pub struct ViolationTicket<P> {
    props: P,
    passport: SharedPassport,
    root: AggregateRoot,
}

impl<P: ViolationTicketProps> ViolationTicket<P> {
    pub const AGGREGATE_TYPE: &'static str = "ViolationTicket";

    /// Populate `props` as a new ticket in `Draft` at the lowest priority.
    ///
    /// `penalty_amount` becomes the service fee. Records one `Created` event.
    pub fn get_new_instance(
        props: P,
        passport: SharedPassport,
        title: &str,
        description: &str,
        community_id: CommunityId,
        requestor_id: MemberId,
        penalty_amount: f64,
    ) -> Result<Self> {
        let mut draft = ViolationTicketDraft::new(props, passport, community_id, requestor_id);
        draft
            .set_title(title)?
            .set_description(description)?
            .set_service_fee(penalty_amount)?;
        draft.finalize()
    }

    /// Wrap an existing ticket loaded by the persistence layer.
    pub fn from_props(props: P, passport: SharedPassport) -> Self {
        let root = AggregateRoot::new(Self::AGGREGATE_TYPE, props.id().as_str());
        Self {
            props,
            passport,
            root,
        }
    }

    pub(crate) fn created(props: P, passport: SharedPassport) -> Self {
        let mut ticket = Self::from_props(props, passport);
        let payload = ticket.event_payload();
        ticket.root.record(IntegrationEventKind::Created, payload);
        tracing::debug!(
            ticket_id = %ticket.props.id(),
            actor = %ticket.passport.actor_label(),
            "Violation ticket created"
        );
        ticket
    }

    /// Visa for the current actor over this ticket as it is right now
    pub fn visa(&self) -> CaseVisa {
        self.passport.case().for_violation_ticket(self)
    }

    fn guard(
        &self,
        operation: &str,
        predicate: impl Fn(&CasePermissions) -> bool,
    ) -> Result<()> {
        require(self.visa().as_ref(), operation, predicate).map_err(|err| {
            tracing::debug!(
                ticket_id = %self.props.id(),
                actor = %self.passport.actor_label(),
                operation,
                "Violation ticket change denied"
            );
            err
        })
    }

    fn deny_write_once(&self, operation: &str) -> Result<()> {
        tracing::debug!(
            ticket_id = %self.props.id(),
            actor = %self.passport.actor_label(),
            operation,
            "Write-once field cannot change after creation"
        );
        Err(HearthError::permission_denied(operation))
    }

    fn event_payload(&self) -> Value {
        json!({
            "id": self.props.id().as_str(),
            "communityId": self.props.community_id().as_str(),
            "requestorId": self.props.requestor_id().as_str(),
            "status": self.props.status().value_of(),
        })
    }

    // Accessors

    pub fn id(&self) -> &TicketId {
        self.props.id()
    }

    pub fn title(&self) -> &str {
        self.props.title()
    }

    pub fn description(&self) -> &str {
        self.props.description()
    }

    pub fn priority(&self) -> Priority {
        self.props.priority()
    }

    pub fn status(&self) -> TicketStatus {
        self.props.status()
    }

    pub fn ticket_type(&self) -> Option<&str> {
        self.props.ticket_type()
    }

    pub fn community_id(&self) -> &CommunityId {
        self.props.community_id()
    }

    pub fn requestor_id(&self) -> &MemberId {
        self.props.requestor_id()
    }

    pub fn property_id(&self) -> Option<&PropertyId> {
        self.props.property_id()
    }

    pub fn assigned_to_id(&self) -> Option<&MemberId> {
        self.props.assigned_to_id()
    }

    pub fn service_id(&self) -> Option<&ServiceId> {
        self.props.service_id()
    }

    pub fn activity_log(&self) -> &[ActivityDetailProps] {
        self.props.activity_log()
    }

    pub fn messages(&self) -> &[MessageProps] {
        self.props.messages()
    }

    pub fn photos(&self) -> &[PhotoProps] {
        self.props.photos()
    }

    pub fn finance_details(&self) -> &FinanceDetailsProps {
        self.props.finance_details()
    }

    pub fn revision_request(&self) -> Option<&RevisionRequestProps> {
        self.props.revision_request()
    }

    pub fn hash(&self) -> Option<&str> {
        self.props.hash()
    }

    pub fn last_indexed(&self) -> Option<DateTime<Utc>> {
        self.props.last_indexed()
    }

    pub fn update_index_failed_date(&self) -> Option<DateTime<Utc>> {
        self.props.update_index_failed_date()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.props.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.props.updated_at()
    }

    pub fn passport(&self) -> &SharedPassport {
        &self.passport
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    /// Unguarded access for save bookkeeping inside the persistence layer
    pub(crate) fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    /// Read-only snapshot for sibling aggregates
    pub fn as_entity_reference(&self) -> ViolationTicketEntityReference {
        let props = &self.props;
        ViolationTicketEntityReference {
            id: props.id().clone(),
            title: props.title().to_string(),
            description: props.description().to_string(),
            priority: props.priority(),
            status: props.status(),
            ticket_type: props.ticket_type().map(str::to_string),
            community_id: props.community_id().clone(),
            property_id: props.property_id().cloned(),
            requestor_id: props.requestor_id().clone(),
            assigned_to_id: props.assigned_to_id().cloned(),
            service_id: props.service_id().cloned(),
            activity_log: props.activity_log().to_vec(),
            messages: props.messages().to_vec(),
            photos: props.photos().to_vec(),
            finance_details: *props.finance_details(),
            revision_request: props.revision_request().cloned(),
            created_at: props.created_at(),
            updated_at: props.updated_at(),
        }
    }

    // Guarded field setters

    pub fn set_community_id(&mut self, _community_id: CommunityId) -> Result<()> {
        self.deny_write_once("violation_ticket.set_community_id")
    }

    pub fn set_requestor_id(&mut self, _requestor_id: MemberId) -> Result<()> {
        self.deny_write_once("violation_ticket.set_requestor_id")
    }

    pub fn set_property_id(&mut self, property_id: Option<PropertyId>) -> Result<()> {
        self.guard("violation_ticket.set_property_id", guard::edit_details)?;
        self.props.set_property_id(property_id);
        Ok(())
    }

    pub fn set_service_id(&mut self, service_id: Option<ServiceId>) -> Result<()> {
        self.guard("violation_ticket.set_service_id", guard::edit_details)?;
        self.props.set_service_id(service_id);
        Ok(())
    }

    pub fn set_title(&mut self, raw: &str) -> Result<()> {
        self.guard("violation_ticket.set_title", guard::edit_details)?;
        let title = Title::try_new(raw)?;
        self.props.set_title(title);
        Ok(())
    }

    pub fn set_description(&mut self, raw: &str) -> Result<()> {
        self.guard("violation_ticket.set_description", guard::edit_details)?;
        let description = Description::try_new(raw)?;
        self.props.set_description(description);
        Ok(())
    }

    pub fn set_ticket_type(&mut self, raw: Option<&str>) -> Result<()> {
        self.guard("violation_ticket.set_ticket_type", guard::edit_details)?;
        let ticket_type = raw.map(TicketType::try_new).transpose()?;
        self.props.set_ticket_type(ticket_type);
        Ok(())
    }

    pub fn set_assigned_to_id(&mut self, assigned_to_id: Option<MemberId>) -> Result<()> {
        self.guard("violation_ticket.set_assigned_to_id", guard::edit_assignment)?;
        self.props.set_assigned_to_id(assigned_to_id);
        Ok(())
    }

    /// Direct status write, bypassing the transition table. System accounts only.
    pub fn set_status(&mut self, raw: &str) -> Result<()> {
        self.guard("violation_ticket.set_status", guard::edit_status_directly)?;
        let status = TicketStatus::try_new(raw)?;
        self.props.set_status(status);
        Ok(())
    }

    pub fn set_priority(&mut self, raw: i64) -> Result<()> {
        self.guard("violation_ticket.set_priority", guard::edit_priority)?;
        let priority = Priority::try_new(raw)?;
        self.props.set_priority(priority);
        Ok(())
    }

    pub fn set_hash(&mut self, raw: Option<&str>) -> Result<()> {
        self.guard("violation_ticket.set_hash", guard::edit_index_state)?;
        let hash = raw.map(IndexHash::try_new).transpose()?;
        self.props.set_hash(hash);
        Ok(())
    }

    pub fn set_last_indexed(&mut self, at: Option<DateTime<Utc>>) -> Result<()> {
        self.guard("violation_ticket.set_last_indexed", guard::edit_index_state)?;
        self.props.set_last_indexed(at);
        Ok(())
    }

    pub fn set_update_index_failed_date(&mut self, at: Option<DateTime<Utc>>) -> Result<()> {
        self.guard(
            "violation_ticket.set_update_index_failed_date",
            guard::edit_index_state,
        )?;
        self.props.set_update_index_failed_date(at);
        Ok(())
    }

    pub fn set_service_fee(&mut self, amount: f64) -> Result<()> {
        self.guard("violation_ticket.set_service_fee", guard::manage)?;
        let fee = ServiceFee::try_new(amount)?;
        self.props.finance_details_mut().set_service_fee(fee);
        Ok(())
    }

    // Workflow operations

    /// Move to `new_status` and log the change as an activity entry.
    ///
    /// System accounts may move between any two statuses. Everyone else needs
    /// the edge in the transition table plus one of: manage, assign, creator
    /// of their own ticket, or worker on their assigned ticket.
    ///
    /// Returns the id of the new activity entry.
    pub fn request_add_status_transition(
        &mut self,
        new_status: TicketStatus,
        description: &str,
        activity_by: &MemberId,
    ) -> Result<EntityId> {
        let current = self.props.status();
        let in_table = status::is_allowed_transition(current, new_status);
        self.guard("violation_ticket.request_add_status_transition", |p| {
            p.is_system_account || (in_table && guard::transition_status(p))
        })?;

        let activity = ActivityDetail::get_new_instance(
            status::activity_type_for(new_status),
            description,
            activity_by,
        )?;
        let activity_id = activity.id().clone();
        self.props.set_status(new_status);
        self.props.activity_log_mut().push(activity);

        tracing::info!(
            ticket_id = %self.props.id(),
            from = %current,
            to = %new_status,
            "Violation ticket status changed"
        );
        Ok(activity_id)
    }

    /// Annotate the current status without changing it.
    pub fn request_add_status_update(
        &mut self,
        description: &str,
        activity_by: &MemberId,
    ) -> Result<EntityId> {
        self.guard("violation_ticket.request_add_status_update", guard::participate)?;
        let activity =
            ActivityDetail::get_new_instance(ActivityType::Updated, description, activity_by)?;
        let activity_id = activity.id().clone();
        self.props.activity_log_mut().push(activity);
        Ok(activity_id)
    }

    pub fn request_add_message(
        &mut self,
        message: &str,
        sent_by: &MemberId,
        is_hidden_from_applicant: bool,
    ) -> Result<EntityId> {
        self.guard("violation_ticket.request_add_message", guard::participate)?;
        let message = Message::get_new_instance(message, sent_by, is_hidden_from_applicant)?;
        let message_id = message.id().clone();
        self.props.messages_mut().push(message);
        Ok(message_id)
    }

    pub fn request_add_photo(&mut self, document_id: &str, description: &str) -> Result<EntityId> {
        self.guard("violation_ticket.request_add_photo", guard::participate)?;
        let photo = Photo::get_new_instance(document_id, description)?;
        let photo_id = photo.id().clone();
        self.props.photos_mut().push(photo);
        Ok(photo_id)
    }

    /// Ask the requestor to amend the ticket, replacing any earlier request.
    pub fn request_revision(
        &mut self,
        summary: &str,
        requested_changes: RequestedChanges,
        requested_by: &MemberId,
        requested_at: DateTime<Utc>,
    ) -> Result<()> {
        self.guard("violation_ticket.request_revision", guard::manage)?;
        let request =
            RevisionRequest::get_new_instance(summary, requested_changes, requested_by, requested_at)?;
        self.props.set_revision_request(Some(request));
        Ok(())
    }

    /// Soft-delete the ticket. A second call is a no-op and is not re-checked.
    pub fn request_delete(&mut self) -> Result<()> {
        if self.root.is_deleted() {
            tracing::trace!(ticket_id = %self.props.id(), "Violation ticket already deleted");
            return Ok(());
        }
        self.guard("violation_ticket.request_delete", guard::manage)?;
        let payload = self.event_payload();
        self.root.mark_deleted(payload);
        Ok(())
    }

    /// Save hook: records `Updated` when modified and not deleted.
    pub fn on_save(&mut self, is_modified: bool) -> bool {
        let payload = self.event_payload();
        self.root.on_save(is_modified, payload)
    }

    // Guarded child handles

    pub fn activity_detail_mut(&mut self, id: &EntityId) -> Option<ActivityDetail<'_>> {
        let visa = self.visa();
        self.props
            .activity_log_mut()
            .iter_mut()
            .find(|activity| activity.id() == id)
            .map(|props| ActivityDetail::new(props, visa))
    }

    pub fn message_mut(&mut self, id: &EntityId) -> Option<Message<'_>> {
        let visa = self.visa();
        self.props
            .messages_mut()
            .iter_mut()
            .find(|message| message.id() == id)
            .map(|props| Message::new(props, visa))
    }

    pub fn photo_mut(&mut self, id: &EntityId) -> Option<Photo<'_>> {
        let visa = self.visa();
        self.props
            .photos_mut()
            .iter_mut()
            .find(|photo| photo.id() == id)
            .map(|props| Photo::new(props, visa))
    }

    pub fn revision_request_mut(&mut self) -> Option<RevisionRequest<'_>> {
        let visa = self.visa();
        self.props
            .revision_request_mut()
            .map(|props| RevisionRequest::new(props, visa))
    }

    // Lazy member references

    pub async fn load_requestor(
        &self,
        loader: &dyn MemberReferenceLoader,
    ) -> Result<MemberEntityReference> {
        loader.load_member(self.props.requestor_id()).await
    }

    pub async fn load_assigned_to(
        &self,
        loader: &dyn MemberReferenceLoader,
    ) -> Result<Option<MemberEntityReference>> {
        match self.props.assigned_to_id() {
            Some(id) => loader.load_member(id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Author of one activity entry
    pub async fn load_activity_by(
        &self,
        activity_id: &EntityId,
        loader: &dyn MemberReferenceLoader,
    ) -> Result<MemberEntityReference> {
        let activity = self
            .props
            .activity_log()
            .iter()
            .find(|activity| activity.id() == activity_id)
            .ok_or_else(|| HearthError::not_found("ActivityDetail", activity_id.as_str()))?;
        loader.load_member(activity.activity_by()).await
    }
}

impl<P> Aggregate for ViolationTicket<P> {
    fn root(&self) -> &AggregateRoot {
        &self.root
    }

    fn root_mut(&mut self) -> &mut AggregateRoot {
        &mut self.root
    }
}

impl<P: ViolationTicketProps> CaseSubject for ViolationTicket<P> {
    fn community_id(&self) -> &CommunityId {
        self.props.community_id()
    }

    fn requestor_id(&self) -> &MemberId {
        self.props.requestor_id()
    }

    fn assigned_to_id(&self) -> Option<&MemberId> {
        self.props.assigned_to_id()
    }
}
