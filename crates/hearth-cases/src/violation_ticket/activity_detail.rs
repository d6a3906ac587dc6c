//! Activity log entries
//!
//! Entries are appended by the aggregate (creation of a transition or a status
//! annotation) and afterwards only their description may be edited.

use super::guard;
use super::value_objects::{ActivityDescription, ActivityType};
use hearth_authorization::{require, CaseVisa};
use hearth_core::{EntityId, MemberId, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetailProps {
    id: EntityId,
    activity_type: ActivityType,
    activity_description: String,
    activity_by: MemberId,
}

impl ActivityDetailProps {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    pub fn activity_description(&self) -> &str {
        &self.activity_description
    }

    pub fn activity_by(&self) -> &MemberId {
        &self.activity_by
    }
}

/// Guarded handle over one activity entry, carrying the parent ticket's visa
#[derive(Debug)]
pub struct ActivityDetail<'a> {
    props: &'a mut ActivityDetailProps,
    visa: CaseVisa,
}

impl<'a> ActivityDetail<'a> {
    pub(crate) fn new(props: &'a mut ActivityDetailProps, visa: CaseVisa) -> Self {
        Self { props, visa }
    }

    /// Build a fresh entry, validating the description.
    pub(crate) fn get_new_instance(
        activity_type: ActivityType,
        description: &str,
        activity_by: &MemberId,
    ) -> Result<ActivityDetailProps> {
        let description = ActivityDescription::try_new(description)?;
        Ok(ActivityDetailProps {
            id: EntityId::generate(),
            activity_type,
            activity_description: description.into(),
            activity_by: activity_by.clone(),
        })
    }

    pub fn props(&self) -> &ActivityDetailProps {
        self.props
    }

    pub fn set_description(&mut self, raw: &str) -> Result<()> {
        require(
            self.visa.as_ref(),
            "activity_detail.set_description",
            guard::participate,
        )?;
        let description = ActivityDescription::try_new(raw)?;
        self.props.activity_description = description.into();
        Ok(())
    }
}
