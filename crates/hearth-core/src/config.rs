//! Configuration loading and validation
//!
//! Configuration files are TOML. Loading layers defaults, then the file, then
//! `HEARTH_*` environment overrides, then validates the result. Sections that
//! belong to higher layers (system permission profiles, for instance) implement
//! [`ConfigValidation`] and are composed into a file type that implements
//! [`HearthConfigFile`].

use crate::errors::{HearthError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`LoggingConfig::filter`]
pub const LOG_FILTER_ENV: &str = "HEARTH_LOG_FILTER";

/// Trait for configuration validation
pub trait ConfigValidation {
    /// Validate this configuration
    fn validate(&self) -> Result<()>;
}

/// A complete, loadable configuration file
pub trait HearthConfigFile: DeserializeOwned + Default + ConfigValidation {
    /// Merge `HEARTH_*` environment variables over the loaded values
    fn merge_with_env(&mut self) -> Result<()>;

    /// Parse configuration from TOML text (no env merge, no validation)
    fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file (no env merge, no validation)
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HearthError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults, then the optional file, then the environment, then validation
    fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit ANSI colour codes
    pub ansi: bool,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: false,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    /// Apply `HEARTH_LOG_FILTER` if set
    pub fn merge_with_env(&mut self) {
        if let Ok(filter) = std::env::var(LOG_FILTER_ENV) {
            self.filter = filter;
        }
    }
}

impl LoggingConfig {
    /// Checks for this section, unresolved so a parent file can merge them
    pub fn validator(&self) -> ConfigValidator {
        let mut validator = ConfigValidator::for_section("logging");
        validator.custom(
            "filter",
            &self.filter,
            |filter| tracing_subscriber::EnvFilter::try_new(filter).is_ok(),
            "not a valid tracing filter directive",
        );
        validator.custom(
            "filter",
            &self.filter,
            |filter| !filter.trim().is_empty(),
            "must not be empty",
        );
        validator
    }
}

impl ConfigValidation for LoggingConfig {
    fn validate(&self) -> Result<()> {
        self.validator().result()
    }
}

/// Configuration validator that accumulates validation failures
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<String>,
    field_prefix: String,
}

impl ConfigValidator {
    /// Create a validator whose field names are prefixed with `section.`
    pub fn for_section(section: &str) -> Self {
        Self {
            errors: Vec::new(),
            field_prefix: section.to_string(),
        }
    }

    /// Validate using a custom predicate
    pub fn custom<T: ?Sized, F>(
        &mut self,
        field_name: &str,
        value: &T,
        predicate: F,
        message: &str,
    ) -> &mut Self
    where
        F: FnOnce(&T) -> bool,
    {
        if !predicate(value) {
            let field = self.full_field_name(field_name);
            self.errors.push(format!("Field '{field}': {message}"));
        }
        self
    }

    /// Merge errors from another validator
    pub fn merge(&mut self, other: ConfigValidator) {
        self.errors.extend(other.errors);
    }

    /// Every failure joined into one configuration error
    pub fn result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(HearthError::config(self.errors.join("; ")))
        }
    }

    fn full_field_name(&self, field_name: &str) -> String {
        if self.field_prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{}", self.field_prefix, field_name)
        }
    }
}
