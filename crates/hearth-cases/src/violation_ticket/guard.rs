//! Capability combinations that unlock each violation-ticket operation
//!
//! The combinations are fixed per operation and intentionally not derived from
//! one another; two predicates with overlapping terms stay separate.

use hearth_authorization::CasePermissions;

fn owns_as_creator(p: &CasePermissions) -> bool {
    p.can_create_tickets && p.is_editing_own_ticket
}

fn works_as_assignee(p: &CasePermissions) -> bool {
    p.can_work_on_tickets && p.is_editing_assigned_ticket
}

/// Property, service, title, description and ticket type
pub(crate) fn edit_details(p: &CasePermissions) -> bool {
    p.is_system_account || p.can_manage_tickets || owns_as_creator(p)
}

pub(crate) fn edit_assignment(p: &CasePermissions) -> bool {
    p.is_system_account || p.can_assign_tickets
}

/// Direct status writes bypass the transition table
pub(crate) fn edit_status_directly(p: &CasePermissions) -> bool {
    p.is_system_account
}

pub(crate) fn edit_priority(p: &CasePermissions) -> bool {
    p.is_system_account || owns_as_creator(p) || p.can_manage_tickets
}

/// Search-index bookkeeping: hash, last indexed, index failure date
pub(crate) fn edit_index_state(p: &CasePermissions) -> bool {
    p.is_system_account
        || owns_as_creator(p)
        || works_as_assignee(p)
        || p.can_manage_tickets
        || p.can_assign_tickets
}

/// Capability half of a status transition; the table check is separate
pub(crate) fn transition_status(p: &CasePermissions) -> bool {
    p.can_manage_tickets || p.can_assign_tickets || owns_as_creator(p) || works_as_assignee(p)
}

/// Status annotations, messages, photos and edits to those children
pub(crate) fn participate(p: &CasePermissions) -> bool {
    p.is_system_account || owns_as_creator(p) || works_as_assignee(p) || p.can_manage_tickets
}

/// Finance, revision requests, message visibility and deletion
pub(crate) fn manage(p: &CasePermissions) -> bool {
    p.is_system_account || p.can_manage_tickets
}

pub(crate) fn submit_revision(p: &CasePermissions) -> bool {
    p.is_system_account || owns_as_creator(p) || p.can_manage_tickets
}
