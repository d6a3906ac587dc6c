//! Visa behaviour per actor kind
//!
//! Properties checked here:
//! - guests and out-of-community members answer `false` for every predicate
//! - a member's derived spec never exposes staff capabilities
//! - instance-relative flags follow the bound ticket
//! - evaluation is referentially transparent
//! - system passports merge their partial spec over all-`false`

use assert_matches::assert_matches;
use hearth_authorization::{
    ActorKind, CaseBinding, CasePermissions, CasePermissionsOverride, CommunityPermissions,
    CommunityRef, EndUserRef, EndUserRole, HearthConfig, MemberRef, PassportFactory,
    RolePermissions, StaffRole, StaffUserRef, SystemPermissions,
};
use hearth_core::{
    CommunityId, EndUserId, HearthConfigFile, HearthError, MemberId, RoleId, StaffUserId,
};
use proptest::prelude::*;

fn community(id: &str) -> CommunityRef {
    CommunityRef {
        id: CommunityId::new(id),
        name: format!("{id} HOA"),
    }
}

fn member_in(community_id: &str, member_id: &str, case: CasePermissions) -> MemberRef {
    MemberRef {
        id: MemberId::new(member_id),
        community_id: CommunityId::new(community_id),
        member_name: member_id.to_string(),
        role: EndUserRole {
            id: RoleId::new("role-resident"),
            community_id: CommunityId::new(community_id),
            role_name: "Resident".to_string(),
            is_default: true,
            permissions: RolePermissions {
                case,
                community: CommunityPermissions {
                    can_edit_own_member_profile: true,
                    ..CommunityPermissions::default()
                },
            },
        },
    }
}

fn end_user() -> EndUserRef {
    EndUserRef {
        id: EndUserId::new("end-user-1"),
        display_name: "Jordan".to_string(),
    }
}

fn ticket(community_id: &str, requestor: &str, assignee: Option<&str>) -> CaseBinding {
    CaseBinding {
        community_id: CommunityId::new(community_id),
        requestor_id: MemberId::new(requestor),
        assigned_to_id: assignee.map(MemberId::new),
    }
}

fn arb_case_permissions() -> impl Strategy<Value = CasePermissions> {
    any::<[bool; 7]>().prop_map(|flags| CasePermissions {
        can_create_tickets: flags[0],
        can_manage_tickets: flags[1],
        can_assign_tickets: flags[2],
        can_work_on_tickets: flags[3],
        is_editing_own_ticket: flags[4],
        is_editing_assigned_ticket: flags[5],
        is_system_account: flags[6],
    })
}

/// Predicate over a single flag, selected by index
fn flag(spec: &CasePermissions, index: usize) -> bool {
    match index {
        0 => spec.can_create_tickets,
        1 => spec.can_manage_tickets,
        2 => spec.can_assign_tickets,
        3 => spec.can_work_on_tickets,
        4 => spec.is_editing_own_ticket,
        5 => spec.is_editing_assigned_ticket,
        _ => spec.is_system_account,
    }
}

#[test]
fn guest_denies_even_the_trivial_predicate() {
    let passport = PassportFactory::new().for_guest();
    let visa = passport
        .case()
        .for_violation_ticket(&ticket("community-1", "member-1", None));
    assert_eq!(passport.kind(), ActorKind::Guest);
    assert!(!visa.determine_if(&|_| true));
}

#[test]
fn member_facts_follow_the_bound_ticket() {
    let factory = PassportFactory::new();
    let member = member_in(
        "community-1",
        "member-1",
        CasePermissions {
            can_create_tickets: true,
            ..CasePermissions::default()
        },
    );
    let passport = factory.for_member(end_user(), member, community("community-1"));

    let own = passport
        .case()
        .for_violation_ticket(&ticket("community-1", "member-1", None));
    assert!(own.determine_if(&|p| p.can_create_tickets && p.is_editing_own_ticket));
    assert!(!own.determine_if(&|p| p.is_editing_assigned_ticket));

    let assigned = passport
        .case()
        .for_violation_ticket(&ticket("community-1", "member-2", Some("member-1")));
    assert!(!assigned.determine_if(&|p| p.is_editing_own_ticket));
    assert!(assigned.determine_if(&|p| p.is_editing_assigned_ticket));
}

#[test]
fn staff_user_defers_to_role() {
    let factory = PassportFactory::new();
    let with_role = factory.for_staff_user(StaffUserRef {
        id: StaffUserId::new("staff-1"),
        display_name: "Casey".to_string(),
        role: Some(StaffRole {
            id: RoleId::new("role-case-manager"),
            role_name: "Case Manager".to_string(),
            permissions: RolePermissions {
                case: CasePermissions {
                    can_manage_tickets: true,
                    can_assign_tickets: true,
                    ..CasePermissions::default()
                },
                community: CommunityPermissions::default(),
            },
        }),
    });
    let visa = with_role
        .case()
        .for_violation_ticket(&ticket("community-9", "member-1", None));
    assert!(visa.determine_if(&|p| p.can_manage_tickets && p.can_assign_tickets));
    assert!(!visa.determine_if(&|p| p.is_system_account));
    assert_eq!(with_role.actor_label(), "staff_user:staff-1");

    let without_role = factory.for_staff_user(StaffUserRef {
        id: StaffUserId::new("staff-2"),
        display_name: "Riley".to_string(),
        role: None,
    });
    let visa = without_role
        .case()
        .for_violation_ticket(&ticket("community-9", "member-1", None));
    assert!(!visa.determine_if(&|p| p.can_manage_tickets));
}

#[test]
fn system_partial_spec_merges_over_false() {
    let passport = PassportFactory::new().for_system(Some(SystemPermissions {
        case: CasePermissionsOverride {
            can_assign_tickets: Some(true),
            ..CasePermissionsOverride::default()
        },
        ..SystemPermissions::default()
    }));
    let visa = passport
        .case()
        .for_violation_ticket(&ticket("community-1", "member-1", None));
    assert!(visa.determine_if(&|p| p.can_assign_tickets));
    assert!(!visa.determine_if(&|p| p.can_manage_tickets || p.is_system_account));

    let bare = PassportFactory::new().for_system(None);
    let visa = bare
        .case()
        .for_violation_ticket(&ticket("community-1", "member-1", None));
    assert!(!visa.determine_if(&|p| p.is_system_account));
}

#[test]
fn system_profiles_come_from_configuration() {
    let config = HearthConfig::from_toml_str(
        "[system_profiles.provisioning.case]\nis_system_account = true\n",
    )
    .unwrap();
    let factory = PassportFactory::from_config(&config);
    assert_eq!(factory.system_profile_names().collect::<Vec<_>>(), vec!["provisioning"]);

    let passport = factory.for_system_profile("provisioning").unwrap();
    assert_eq!(passport.actor_label(), "system:provisioning");
    let visa = passport
        .case()
        .for_violation_ticket(&ticket("community-1", "member-1", None));
    assert!(visa.determine_if(&|p| p.is_system_account));

    assert_matches!(
        factory.for_system_profile("billing"),
        Err(HearthError::NotFound { .. })
    );
}

#[test]
fn member_community_visa_recognises_own_account() {
    let member = member_in("community-1", "member-1", CasePermissions::default());
    let other = member_in("community-1", "member-2", CasePermissions::default());
    let passport = PassportFactory::new().for_member(
        end_user(),
        member.clone(),
        community("community-1"),
    );

    let own = passport.community().for_member(&member);
    assert!(own.determine_if(&|p| p.can_edit_own_member_profile && p.is_editing_own_member_account));
    let theirs = passport.community().for_member(&other);
    assert!(!theirs.determine_if(&|p| p.is_editing_own_member_account));

    let elsewhere = passport.community().for_community(&community("community-2"));
    assert!(!elsewhere.determine_if(&|_| true));
}

proptest! {
    #[test]
    fn member_outside_ticket_community_always_denied(
        role in arb_case_permissions(),
        requestor_is_member in any::<bool>(),
        index in 0usize..8,
    ) {
        let member = member_in("community-1", "member-1", role);
        let passport = PassportFactory::new().for_member(end_user(), member, community("community-1"));
        let requestor = if requestor_is_member { "member-1" } else { "member-2" };
        let visa = passport.case().for_violation_ticket(&ticket("community-2", requestor, Some("member-1")));

        prop_assert!(!visa.determine_if(&|_| true));
        prop_assert!(!visa.determine_if(&|p| flag(p, index)));
        prop_assert!(!visa.determine_if(&|p| !flag(p, index)));
    }

    #[test]
    fn member_spec_never_exposes_staff_capabilities(
        role in arb_case_permissions(),
        assignee_is_member in any::<bool>(),
    ) {
        let member = member_in("community-1", "member-1", role);
        let passport = PassportFactory::new().for_member(end_user(), member, community("community-1"));
        let assignee = if assignee_is_member { Some("member-1") } else { None };
        let visa = passport.case().for_violation_ticket(&ticket("community-1", "member-1", assignee));

        let has_staff_permission = visa.determine_if(&|p| {
            p.can_manage_tickets || p.can_assign_tickets || p.can_work_on_tickets || p.is_system_account
        });
        prop_assert!(!has_staff_permission);
        prop_assert_eq!(visa.determine_if(&|p| p.can_create_tickets), role.can_create_tickets);
    }

    #[test]
    fn determine_if_is_referentially_transparent(
        role in arb_case_permissions(),
        index in 0usize..7,
    ) {
        let member = member_in("community-1", "member-1", role);
        let passport = PassportFactory::new().for_member(end_user(), member, community("community-1"));
        let visa = passport.case().for_violation_ticket(&ticket("community-1", "member-2", Some("member-1")));

        let first = visa.determine_if(&|p| flag(p, index));
        for _ in 0..3 {
            prop_assert_eq!(visa.determine_if(&|p| flag(p, index)), first);
        }
    }

    #[test]
    fn guest_denies_every_single_flag_predicate(index in 0usize..7, negate in any::<bool>()) {
        let passport = PassportFactory::new().for_guest();
        let visa = passport.case().for_violation_ticket(&ticket("community-1", "member-1", None));
        prop_assert!(!visa.determine_if(&|p| flag(p, index) != negate));
    }
}
