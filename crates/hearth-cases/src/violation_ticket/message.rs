//! Messages exchanged on a violation ticket

use super::guard;
use super::value_objects::MessageText;
use hearth_authorization::{require, CaseVisa};
use hearth_core::{EntityId, MemberId, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageProps {
    id: EntityId,
    sent_by: MemberId,
    message: String,
    is_hidden_from_applicant: bool,
}

impl MessageProps {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn sent_by(&self) -> &MemberId {
        &self.sent_by
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Internal notes between staff are hidden from the requestor
    pub fn is_hidden_from_applicant(&self) -> bool {
        self.is_hidden_from_applicant
    }
}

#[derive(Debug)]
pub struct Message<'a> {
    props: &'a mut MessageProps,
    visa: CaseVisa,
}

impl<'a> Message<'a> {
    pub(crate) fn new(props: &'a mut MessageProps, visa: CaseVisa) -> Self {
        Self { props, visa }
    }

    pub(crate) fn get_new_instance(
        message: &str,
        sent_by: &MemberId,
        is_hidden_from_applicant: bool,
    ) -> Result<MessageProps> {
        let message = MessageText::try_new(message)?;
        Ok(MessageProps {
            id: EntityId::generate(),
            sent_by: sent_by.clone(),
            message: message.into(),
            is_hidden_from_applicant,
        })
    }

    pub fn props(&self) -> &MessageProps {
        self.props
    }

    pub fn set_message(&mut self, raw: &str) -> Result<()> {
        require(self.visa.as_ref(), "message.set_message", guard::participate)?;
        let message = MessageText::try_new(raw)?;
        self.props.message = message.into();
        Ok(())
    }

    pub fn set_hidden_from_applicant(&mut self, hidden: bool) -> Result<()> {
        require(
            self.visa.as_ref(),
            "message.set_hidden_from_applicant",
            guard::manage,
        )?;
        self.props.is_hidden_from_applicant = hidden;
        Ok(())
    }
}
