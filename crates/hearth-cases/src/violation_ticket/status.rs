//! Violation ticket status state machine
//!
//! ```text
//! Draft     -> Submitted
//! Submitted -> Draft, Assigned
//! Assigned  -> Submitted, Paid
//! Paid      -> Assigned, Closed
//! Closed    -> Assigned
//! ```
//!
//! Each accepted transition is recorded in the activity log with the activity
//! type mapped from the target status.

use super::value_objects::{ActivityType, TicketStatus};

/// Allowed successors of `from`
pub fn allowed_successors(from: TicketStatus) -> &'static [TicketStatus] {
    match from {
        TicketStatus::Draft => &[TicketStatus::Submitted],
        TicketStatus::Submitted => &[TicketStatus::Draft, TicketStatus::Assigned],
        TicketStatus::Assigned => &[TicketStatus::Submitted, TicketStatus::Paid],
        TicketStatus::Paid => &[TicketStatus::Assigned, TicketStatus::Closed],
        TicketStatus::Closed => &[TicketStatus::Assigned],
    }
}

/// Whether the transition table contains `from -> to`
pub fn is_allowed_transition(from: TicketStatus, to: TicketStatus) -> bool {
    allowed_successors(from).contains(&to)
}

/// Activity type recorded when a ticket moves into `status`
pub fn activity_type_for(status: TicketStatus) -> ActivityType {
    match status {
        TicketStatus::Submitted => ActivityType::Submitted,
        TicketStatus::Assigned => ActivityType::Assigned,
        TicketStatus::Paid => ActivityType::Paid,
        TicketStatus::Closed => ActivityType::Closed,
        _ => ActivityType::Updated,
    }
}
