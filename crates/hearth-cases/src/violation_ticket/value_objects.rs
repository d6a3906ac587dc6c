//! Value objects for violation tickets and their child entities

use hearth_core::value_objects::{json_f64, json_i64, validate_number};
use hearth_core::{bounded_string, closed_set, InvalidValue};
use serde::{Deserialize, Serialize};
use std::fmt;

bounded_string!(
    /// Ticket title, 5 to 200 characters
    Title,
    "title",
    5,
    200
);

bounded_string!(
    /// Ticket description, up to 2000 characters
    Description,
    "description",
    0,
    2000
);

bounded_string!(
    /// Free-form ticket category
    TicketType,
    "ticket_type",
    1,
    50
);

bounded_string!(
    /// Text recorded with an activity entry
    ActivityDescription,
    "activity_description",
    1,
    2000
);

bounded_string!(
    /// Body of a ticket message
    MessageText,
    "message",
    1,
    2000
);

bounded_string!(
    /// Caption of a ticket photo
    PhotoDescription,
    "photo_description",
    0,
    500
);

bounded_string!(
    /// Blob storage document holding a photo
    DocumentId,
    "document_id",
    1,
    200
);

bounded_string!(
    /// What a revision request asks the requestor to change
    RevisionSummary,
    "revision_summary",
    1,
    2000
);

bounded_string!(
    /// Search-index content hash
    IndexHash,
    "hash",
    1,
    200
);

closed_set!(
    /// Lifecycle status of a violation ticket
    TicketStatus, "status" {
        Draft => "Draft",
        Submitted => "Submitted",
        Assigned => "Assigned",
        Paid => "Paid",
        Closed => "Closed",
    }
);

closed_set!(
    /// Kind of entry in a ticket's activity log
    ActivityType, "activity_type" {
        Created => "Created",
        Updated => "Updated",
        Assigned => "Assigned",
        Submitted => "Submitted",
        Paid => "Paid",
        Closed => "Closed",
    }
);

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Draft
    }
}

/// Ticket priority, 1 (highest) to 5 (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: i64 = 1;
    pub const LOWEST: i64 = 5;

    pub fn try_new(raw: i64) -> Result<Self, InvalidValue> {
        let value = validate_number("priority", raw, Self::HIGHEST, Self::LOWEST)?;
        // in range 1..=5, fits in u8
        Ok(Self(value as u8))
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidValue> {
        Self::try_new(json_i64("priority", value)?)
    }

    pub fn value_of(&self) -> i64 {
        i64::from(self.0)
    }
}

/// New tickets start at the lowest priority
impl Default for Priority {
    fn default() -> Self {
        Self(Self::LOWEST as u8)
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidValue;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::try_new(raw)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.value_of()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fee charged for a violation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ServiceFee(f64);

impl ServiceFee {
    pub const MAX: f64 = 1_000_000.0;

    pub fn try_new(raw: f64) -> Result<Self, InvalidValue> {
        validate_number("service_fee", raw, 0.0, Self::MAX).map(Self)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidValue> {
        Self::try_new(json_f64("service_fee", value)?)
    }

    pub fn value_of(&self) -> f64 {
        self.0
    }
}

impl Default for ServiceFee {
    fn default() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f64> for ServiceFee {
    type Error = InvalidValue;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::try_new(raw)
    }
}

impl From<ServiceFee> for f64 {
    fn from(fee: ServiceFee) -> Self {
        fee.0
    }
}
