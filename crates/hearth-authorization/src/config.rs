//! Hearth configuration file
//!
//! ```toml
//! [logging]
//! filter = "hearth_cases=debug,info"
//!
//! [system_profiles.provisioning.case]
//! is_system_account = true
//!
//! [system_profiles.indexer.case]
//! can_work_on_tickets = true
//! ```

use crate::permissions::SystemPermissions;
use hearth_core::{ConfigValidation, ConfigValidator, HearthConfigFile, LoggingConfig, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration: logging plus named system permission profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HearthConfig {
    pub logging: LoggingConfig,
    pub system_profiles: BTreeMap<String, SystemPermissions>,
}

impl ConfigValidation for HearthConfig {
    fn validate(&self) -> Result<()> {
        let mut validator = ConfigValidator::for_section("system_profiles");
        for (name, profile) in &self.system_profiles {
            validator.custom(
                name,
                name.as_str(),
                |name: &str| !name.trim().is_empty() && !name.contains(char::is_whitespace),
                "profile names must be non-empty and contain no whitespace",
            );
            validator.custom(
                name,
                profile,
                |profile: &SystemPermissions| !(profile.case.is_empty() && profile.community.is_empty()),
                "profile grants nothing",
            );
        }
        validator.merge(self.logging.validator());
        validator.result()
    }
}

impl HearthConfigFile for HearthConfig {
    fn merge_with_env(&mut self) -> Result<()> {
        self.logging.merge_with_env();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[logging]
filter = "hearth_cases=debug,info"

[system_profiles.provisioning.case]
is_system_account = true

[system_profiles.indexer.case]
can_work_on_tickets = true
is_editing_assigned_ticket = true
"#;

    #[test]
    fn parses_named_profiles() {
        let config = HearthConfig::from_toml_str(SAMPLE).unwrap();
        config.validate().unwrap();
        assert_eq!(config.system_profiles.len(), 2);
        let indexer = config.system_profiles["indexer"].case.merged_over_default();
        assert!(indexer.can_work_on_tickets);
        assert!(!indexer.is_system_account);
    }

    #[test]
    fn empty_profile_fails_validation() {
        let config = HearthConfig::from_toml_str("[system_profiles.idle]\n").unwrap();
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("system_profiles.idle"));
    }

    #[test]
    fn logging_and_profile_failures_are_reported_together() {
        let config = HearthConfig::from_toml_str(
            "[logging]\nfilter = \" \"\n\n[system_profiles.idle]\n",
        )
        .unwrap();
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("logging.filter"));
        assert!(message.contains("system_profiles.idle"));
    }
}
