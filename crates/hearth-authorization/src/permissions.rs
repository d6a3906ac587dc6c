//! Permission specs
//!
//! A permission spec is a flat set of named boolean capabilities for one bounded
//! context. Unset flags are `false`. Every spec has a companion override type of
//! `Option<bool>` flags: the partial spec a System actor is constructed with,
//! merged over the all-`false` default.

use serde::{Deserialize, Serialize};

macro_rules! permission_spec {
    (
        $(#[$meta:meta])*
        $name:ident, $override_name:ident {
            $($(#[$fmeta:meta])* $flag:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $($(#[$fmeta])* pub $flag: bool,)+
        }

        #[doc = concat!("Partial [`", stringify!($name), "`]: `None` leaves the flag at its base value.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $override_name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $flag: Option<bool>,
            )+
        }

        impl $name {
            /// Names of every flag, in declaration order
            pub const FLAG_NAMES: &'static [&'static str] = &[$(stringify!($flag)),+];

            /// Every flag set
            pub fn all_granted() -> Self {
                Self { $($flag: true,)+ }
            }

            /// Overlay `overrides` on this spec
            pub fn apply(mut self, overrides: &$override_name) -> Self {
                $(
                    if let Some(value) = overrides.$flag {
                        self.$flag = value;
                    }
                )+
                self
            }

            /// Names of the flags that are set
            pub fn granted_flags(&self) -> Vec<&'static str> {
                let mut granted = Vec::new();
                $(
                    if self.$flag {
                        granted.push(stringify!($flag));
                    }
                )+
                granted
            }
        }

        impl $override_name {
            /// Merge over the all-`false` default
            pub fn merged_over_default(&self) -> $name {
                $name::default().apply(self)
            }

            /// `true` when no flag is overridden
            pub fn is_empty(&self) -> bool {
                true $(&& self.$flag.is_none())+
            }
        }
    };
}

permission_spec!(
    /// Capabilities over cases (violation tickets and service tickets)
    CasePermissions, CasePermissionsOverride {
        /// May open tickets
        can_create_tickets,
        /// May edit any ticket in the community
        can_manage_tickets,
        /// May set the assignee of a ticket
        can_assign_tickets,
        /// May work tickets assigned to them
        can_work_on_tickets,
        /// Actor is the ticket's requestor (instance-relative)
        is_editing_own_ticket,
        /// Actor is the ticket's assignee (instance-relative)
        is_editing_assigned_ticket,
        /// Trusted background service
        is_system_account,
    }
);

permission_spec!(
    /// Capabilities over a community and its members
    CommunityPermissions, CommunityPermissionsOverride {
        can_manage_roles,
        can_manage_community_settings,
        can_manage_site_content,
        can_manage_members,
        can_edit_own_member_profile,
        can_edit_own_member_accounts,
        /// Actor is the member being edited (instance-relative)
        is_editing_own_member_account,
        is_system_account,
    }
);

impl CasePermissions {
    /// Capabilities a plain member can never hold, whatever their role says
    pub fn without_staff_capabilities(self) -> Self {
        Self {
            can_manage_tickets: false,
            can_assign_tickets: false,
            can_work_on_tickets: false,
            is_system_account: false,
            ..self
        }
    }
}

/// The partial spec a System actor is constructed with, per bounded context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemPermissions {
    pub case: CasePermissionsOverride,
    pub community: CommunityPermissionsOverride,
}

impl SystemPermissions {
    /// System account across every context
    pub fn system_account() -> Self {
        Self {
            case: CasePermissionsOverride {
                is_system_account: Some(true),
                ..CasePermissionsOverride::default()
            },
            community: CommunityPermissionsOverride {
                is_system_account: Some(true),
                ..CommunityPermissionsOverride::default()
            },
        }
    }
}

/// Permission specs attached to a role, one per bounded context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePermissions {
    pub case: CasePermissions,
    pub community: CommunityPermissions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_default_to_false() {
        assert!(CasePermissions::default().granted_flags().is_empty());
        assert!(CasePermissionsOverride::default().is_empty());
        assert_eq!(
            CasePermissionsOverride::default().merged_over_default(),
            CasePermissions::default()
        );
    }

    #[test]
    fn override_only_touches_named_flags() {
        let overrides = CasePermissionsOverride {
            can_manage_tickets: Some(true),
            can_create_tickets: Some(false),
            ..CasePermissionsOverride::default()
        };
        let base = CasePermissions {
            can_create_tickets: true,
            can_work_on_tickets: true,
            ..CasePermissions::default()
        };
        let merged = base.apply(&overrides);
        assert!(merged.can_manage_tickets);
        assert!(!merged.can_create_tickets);
        assert!(merged.can_work_on_tickets);
    }

    #[test]
    fn staff_capabilities_are_stripped() {
        let stripped = CasePermissions::all_granted().without_staff_capabilities();
        assert_eq!(
            stripped.granted_flags(),
            vec![
                "can_create_tickets",
                "is_editing_own_ticket",
                "is_editing_assigned_ticket"
            ]
        );
    }

    #[test]
    fn overrides_parse_from_toml_with_snake_case_flags() {
        let parsed: SystemPermissions =
            toml::from_str("[case]\ncan_manage_tickets = true\n").unwrap();
        assert_eq!(parsed.case.can_manage_tickets, Some(true));
        assert!(parsed.community.is_empty());
        assert!(toml::from_str::<SystemPermissions>("[case]\ncan_fly = true\n").is_err());
    }

    #[test]
    fn flag_names_cover_every_flag() {
        assert_eq!(CasePermissions::FLAG_NAMES.len(), 7);
        assert_eq!(
            CasePermissions::all_granted().granted_flags().len(),
            CasePermissions::FLAG_NAMES.len()
        );
    }
}
