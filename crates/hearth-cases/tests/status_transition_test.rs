//! Status transition matrix
//!
//! Non-system actors need both an edge in the transition table and a
//! transition capability; system accounts move freely between any statuses.

mod support;

use hearth_authorization::CasePermissions;
use hearth_cases::violation_ticket::status::{activity_type_for, is_allowed_transition};
use hearth_cases::violation_ticket::value_objects::TicketStatus;
use hearth_core::{HearthError, MemberId};
use proptest::prelude::*;
use support::*;

/// Ticket sitting in `status`, acted on by `passport`
fn ticket_in(status: TicketStatus, passport: hearth_authorization::SharedPassport) -> Ticket {
    let mut ticket = new_ticket();
    ticket.set_status(status.value_of()).unwrap();
    as_actor(ticket, passport)
}

fn all_capabilities() -> CasePermissions {
    CasePermissions {
        is_system_account: false,
        ..CasePermissions::all_granted()
    }
}

fn arb_status() -> impl Strategy<Value = TicketStatus> {
    (0..TicketStatus::ALL.len()).prop_map(|index| TicketStatus::ALL[index])
}

fn arb_non_system_permissions() -> impl Strategy<Value = CasePermissions> {
    any::<[bool; 6]>().prop_map(|flags| CasePermissions {
        can_create_tickets: flags[0],
        can_manage_tickets: flags[1],
        can_assign_tickets: flags[2],
        can_work_on_tickets: flags[3],
        is_editing_own_ticket: flags[4],
        is_editing_assigned_ticket: flags[5],
        is_system_account: false,
    })
}

#[test]
fn fully_capable_staff_follows_the_table_exactly() {
    for from in TicketStatus::ALL {
        for to in TicketStatus::ALL {
            let mut ticket = ticket_in(*from, staff_passport(all_capabilities()));
            let result = ticket.request_add_status_transition(
                *to,
                "Moving along",
                &MemberId::new(ASSIGNEE),
            );

            if is_allowed_transition(*from, *to) {
                assert!(result.is_ok(), "{from} -> {to} should be allowed");
                assert_eq!(ticket.status(), *to);
                assert_eq!(ticket.activity_log().len(), 1);
            } else {
                assert!(
                    matches!(result, Err(HearthError::PermissionDenied { .. })),
                    "{from} -> {to} should be denied"
                );
                assert_eq!(ticket.status(), *from);
                assert!(ticket.activity_log().is_empty());
            }
        }
    }
}

#[test]
fn system_moves_between_any_statuses() {
    for from in TicketStatus::ALL {
        for to in TicketStatus::ALL {
            let mut ticket = ticket_in(*from, system());
            ticket
                .request_add_status_transition(*to, "Administrative move", &MemberId::new(REQUESTOR))
                .unwrap();
            assert_eq!(ticket.status(), *to);
            assert_eq!(ticket.activity_log()[0].activity_type(), activity_type_for(*to));
        }
    }
}

proptest! {
    #[test]
    fn outcome_is_table_and_capability(
        from in arb_status(),
        to in arb_status(),
        permissions in arb_non_system_permissions(),
    ) {
        let mut ticket = ticket_in(from, staff_passport(permissions));
        let result = ticket.request_add_status_transition(to, "Moving along", &MemberId::new(ASSIGNEE));

        let capable = permissions.can_manage_tickets
            || permissions.can_assign_tickets
            || (permissions.can_create_tickets && permissions.is_editing_own_ticket)
            || (permissions.can_work_on_tickets && permissions.is_editing_assigned_ticket);
        let expected = is_allowed_transition(from, to) && capable;

        prop_assert_eq!(result.is_ok(), expected);
        prop_assert_eq!(ticket.status(), if expected { to } else { from });
    }

    #[test]
    fn guest_never_transitions(from in arb_status(), to in arb_status()) {
        let mut ticket = ticket_in(from, guest());
        let result = ticket.request_add_status_transition(to, "Guest attempt", &MemberId::new(NEIGHBOUR));
        prop_assert!(result.is_err());
        prop_assert_eq!(ticket.status(), from);
    }
}
