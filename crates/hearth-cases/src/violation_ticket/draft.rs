//! Two-phase construction of new violation tickets
//!
//! A draft is the only place where ticket fields are written without a visa
//! check. Every setter still validates through its value object. `finalize`
//! re-checks the fields a ticket cannot exist without and hands back the
//! guard-enforcing aggregate with its `Created` event recorded.

use super::finance_details::FinanceDetailsProps;
use super::props::ViolationTicketProps;
use super::value_objects::{
    Description, Priority, ServiceFee, TicketStatus, TicketType, Title,
};
use super::ViolationTicket;
use hearth_authorization::SharedPassport;
use hearth_core::{CommunityId, MemberId, PropertyId, Result, ServiceId};

#[derive(Debug)]
pub struct ViolationTicketDraft<P> {
    props: P,
    passport: SharedPassport,
}

impl<P: ViolationTicketProps> ViolationTicketDraft<P> {
    /// Start a draft owned by `community_id` and opened by `requestor_id`.
    ///
    /// Status starts at `Draft` and priority at the lowest level.
    pub fn new(
        mut props: P,
        passport: SharedPassport,
        community_id: CommunityId,
        requestor_id: MemberId,
    ) -> Self {
        props.set_community_id(community_id);
        props.set_requestor_id(requestor_id);
        props.set_status(TicketStatus::Draft);
        props.set_priority(Priority::default());
        Self { props, passport }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn set_title(&mut self, raw: &str) -> Result<&mut Self> {
        self.props.set_title(Title::try_new(raw)?);
        Ok(self)
    }

    pub fn set_description(&mut self, raw: &str) -> Result<&mut Self> {
        self.props.set_description(Description::try_new(raw)?);
        Ok(self)
    }

    pub fn set_priority(&mut self, raw: i64) -> Result<&mut Self> {
        self.props.set_priority(Priority::try_new(raw)?);
        Ok(self)
    }

    pub fn set_ticket_type(&mut self, raw: Option<&str>) -> Result<&mut Self> {
        let ticket_type = raw.map(TicketType::try_new).transpose()?;
        self.props.set_ticket_type(ticket_type);
        Ok(self)
    }

    pub fn set_service_fee(&mut self, amount: f64) -> Result<&mut Self> {
        let fee = ServiceFee::try_new(amount)?;
        *self.props.finance_details_mut() = FinanceDetailsProps::new(fee);
        Ok(self)
    }

    pub fn set_property_id(&mut self, property_id: Option<PropertyId>) -> &mut Self {
        self.props.set_property_id(property_id);
        self
    }

    pub fn set_service_id(&mut self, service_id: Option<ServiceId>) -> &mut Self {
        self.props.set_service_id(service_id);
        self
    }

    pub fn set_assigned_to_id(&mut self, assigned_to_id: Option<MemberId>) -> &mut Self {
        self.props.set_assigned_to_id(assigned_to_id);
        self
    }

    /// Check required fields and produce the guarded aggregate.
    ///
    /// Fails with `InvalidValue` when the title was never set.
    pub fn finalize(self) -> Result<ViolationTicket<P>> {
        Title::try_new(self.props.title())?;
        Description::try_new(self.props.description())?;
        Ok(ViolationTicket::created(self.props, self.passport))
    }
}
