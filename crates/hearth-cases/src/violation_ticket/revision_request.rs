//! Revision requests: a manager asks the requestor to amend a submitted ticket

use super::guard;
use super::value_objects::RevisionSummary;
use chrono::{DateTime, Utc};
use hearth_authorization::{require, CaseVisa};
use hearth_core::{MemberId, Result};
use serde::{Deserialize, Serialize};

/// Which parts of the ticket the requestor is asked to revisit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedChanges {
    pub request_updated_assignment: bool,
    pub request_updated_status: bool,
    pub request_updated_property: bool,
    pub request_updated_payment_transaction: bool,
}

impl RequestedChanges {
    pub fn is_empty(&self) -> bool {
        !(self.request_updated_assignment
            || self.request_updated_status
            || self.request_updated_property
            || self.request_updated_payment_transaction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRequestProps {
    requested_at: DateTime<Utc>,
    requested_by: MemberId,
    revision_summary: String,
    requested_changes: RequestedChanges,
    revision_submitted_at: Option<DateTime<Utc>>,
}

impl RevisionRequestProps {
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    pub fn requested_by(&self) -> &MemberId {
        &self.requested_by
    }

    pub fn revision_summary(&self) -> &str {
        &self.revision_summary
    }

    pub fn requested_changes(&self) -> RequestedChanges {
        self.requested_changes
    }

    /// Set once the requestor resubmits the amended ticket
    pub fn revision_submitted_at(&self) -> Option<DateTime<Utc>> {
        self.revision_submitted_at
    }
}

#[derive(Debug)]
pub struct RevisionRequest<'a> {
    props: &'a mut RevisionRequestProps,
    visa: CaseVisa,
}

impl<'a> RevisionRequest<'a> {
    pub(crate) fn new(props: &'a mut RevisionRequestProps, visa: CaseVisa) -> Self {
        Self { props, visa }
    }

    pub(crate) fn get_new_instance(
        summary: &str,
        requested_changes: RequestedChanges,
        requested_by: &MemberId,
        requested_at: DateTime<Utc>,
    ) -> Result<RevisionRequestProps> {
        let summary = RevisionSummary::try_new(summary)?;
        Ok(RevisionRequestProps {
            requested_at,
            requested_by: requested_by.clone(),
            revision_summary: summary.into(),
            requested_changes,
            revision_submitted_at: None,
        })
    }

    pub fn props(&self) -> &RevisionRequestProps {
        self.props
    }

    pub fn set_revision_summary(&mut self, raw: &str) -> Result<()> {
        require(
            self.visa.as_ref(),
            "revision_request.set_revision_summary",
            guard::manage,
        )?;
        let summary = RevisionSummary::try_new(raw)?;
        self.props.revision_summary = summary.into();
        Ok(())
    }

    pub fn set_requested_changes(&mut self, changes: RequestedChanges) -> Result<()> {
        require(
            self.visa.as_ref(),
            "revision_request.set_requested_changes",
            guard::manage,
        )?;
        self.props.requested_changes = changes;
        Ok(())
    }

    pub fn mark_revision_submitted(&mut self, at: DateTime<Utc>) -> Result<()> {
        require(
            self.visa.as_ref(),
            "revision_request.mark_revision_submitted",
            guard::submit_revision,
        )?;
        self.props.revision_submitted_at = Some(at);
        Ok(())
    }
}
