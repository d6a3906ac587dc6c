//! Shared fixtures for case tests

#![allow(dead_code)]

use hearth_authorization::{
    CasePermissions, CommunityPermissions, CommunityRef, EndUserRef, EndUserRole, MemberRef,
    PassportFactory, RolePermissions, SharedPassport, StaffRole, StaffUserRef, SystemPermissions,
};
use hearth_cases::{InMemoryViolationTicketProps, ViolationTicket};
use hearth_core::{CommunityId, EndUserId, MemberId, RoleId, StaffUserId, TicketId};

pub const COMMUNITY: &str = "community-1";
pub const OTHER_COMMUNITY: &str = "community-2";
pub const REQUESTOR: &str = "member-requestor";
pub const ASSIGNEE: &str = "member-assignee";
pub const NEIGHBOUR: &str = "member-neighbour";

pub const TITLE: &str = "Broken fence";
pub const DESCRIPTION: &str = "Fence panel down on the north side";
pub const PENALTY: f64 = 100.0;

pub type Ticket = ViolationTicket<InMemoryViolationTicketProps>;

pub fn community(id: &str) -> CommunityRef {
    CommunityRef {
        id: CommunityId::new(id),
        name: format!("{id} HOA"),
    }
}

pub fn member_passport(member_id: &str, case: CasePermissions) -> SharedPassport {
    let member = MemberRef {
        id: MemberId::new(member_id),
        community_id: CommunityId::new(COMMUNITY),
        member_name: member_id.to_string(),
        role: EndUserRole {
            id: RoleId::new("role-resident"),
            community_id: CommunityId::new(COMMUNITY),
            role_name: "Resident".to_string(),
            is_default: true,
            permissions: RolePermissions {
                case,
                community: CommunityPermissions::default(),
            },
        },
    };
    let end_user = EndUserRef {
        id: EndUserId::new(format!("end-user-{member_id}")),
        display_name: member_id.to_string(),
    };
    PassportFactory::new().for_member(end_user, member, community(COMMUNITY))
}

/// Resident who may create tickets
pub fn creator(member_id: &str) -> SharedPassport {
    member_passport(
        member_id,
        CasePermissions {
            can_create_tickets: true,
            ..CasePermissions::default()
        },
    )
}

pub fn staff_passport(case: CasePermissions) -> SharedPassport {
    PassportFactory::new().for_staff_user(StaffUserRef {
        id: StaffUserId::new("staff-1"),
        display_name: "Casey".to_string(),
        role: Some(StaffRole {
            id: RoleId::new("role-staff"),
            role_name: "Staff".to_string(),
            permissions: RolePermissions {
                case,
                community: CommunityPermissions::default(),
            },
        }),
    })
}

pub fn manager() -> SharedPassport {
    staff_passport(CasePermissions {
        can_manage_tickets: true,
        ..CasePermissions::default()
    })
}

pub fn assigner() -> SharedPassport {
    staff_passport(CasePermissions {
        can_assign_tickets: true,
        ..CasePermissions::default()
    })
}

pub fn system() -> SharedPassport {
    PassportFactory::new().for_system(Some(SystemPermissions::system_account()))
}

pub fn guest() -> SharedPassport {
    PassportFactory::new().for_guest()
}

pub fn new_ticket() -> Ticket {
    ViolationTicket::get_new_instance(
        InMemoryViolationTicketProps::new(TicketId::generate(), chrono::Utc::now()),
        system(),
        TITLE,
        DESCRIPTION,
        CommunityId::new(COMMUNITY),
        MemberId::new(REQUESTOR),
        PENALTY,
    )
    .unwrap()
}

/// New ticket assigned to [`ASSIGNEE`]
pub fn assigned_ticket() -> Ticket {
    let mut ticket = new_ticket();
    ticket
        .set_assigned_to_id(Some(MemberId::new(ASSIGNEE)))
        .unwrap();
    ticket
}

/// Same stored state, acted on by another actor
pub fn as_actor(ticket: Ticket, passport: SharedPassport) -> Ticket {
    ViolationTicket::from_props(ticket.into_props(), passport)
}
