//! Unified error system for Hearth
//!
//! Every crate in the workspace reports failures through [`HearthError`]. The two
//! kinds that originate in the domain core are [`HearthError::PermissionDenied`]
//! (a visa refused a guarded mutation) and [`HearthError::InvalidValue`] (a value
//! object rejected its raw input). Both are caller mistakes and are never retried.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a value object rejected its raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidValueKind {
    /// String shorter than the minimum length, or number below the minimum.
    TooShort,
    /// String longer than the maximum length, or number above the maximum.
    TooLong,
    /// Value is not a member of a closed enumeration.
    NotInSet,
    /// Raw input is not of the expected primitive type (including `null`).
    WrongType,
}

impl fmt::Display for InvalidValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvalidValueKind::TooShort => "too short",
            InvalidValueKind::TooLong => "too long",
            InvalidValueKind::NotInSet => "not in allowed set",
            InvalidValueKind::WrongType => "wrong type",
        };
        f.write_str(label)
    }
}

/// Value-object validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{field} is {kind}")]
pub struct InvalidValue {
    /// Name of the value object (or field) that failed validation
    pub field: String,
    /// Failure category
    pub kind: InvalidValueKind,
}

impl InvalidValue {
    pub fn new(field: impl Into<String>, kind: InvalidValueKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn too_short(field: impl Into<String>) -> Self {
        Self::new(field, InvalidValueKind::TooShort)
    }

    pub fn too_long(field: impl Into<String>) -> Self {
        Self::new(field, InvalidValueKind::TooLong)
    }

    pub fn not_in_set(field: impl Into<String>) -> Self {
        Self::new(field, InvalidValueKind::NotInSet)
    }

    pub fn wrong_type(field: impl Into<String>) -> Self {
        Self::new(field, InvalidValueKind::WrongType)
    }
}

/// Unified error type for all Hearth operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum HearthError {
    /// A visa refused a guarded operation
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// The guarded operation that was refused
        operation: String,
    },

    /// A value object rejected its input
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] InvalidValue),

    /// Entity not found
    #[error("Not found: {entity} {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that did not resolve
        id: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },

    /// Persistence collaborator failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl HearthError {
    /// Create a permission denied error for the named operation
    pub fn permission_denied(operation: impl Into<String>) -> Self {
        Self::PermissionDenied {
            operation: operation.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` for authorization failures.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Returns `true` for value-object validation failures.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }

    /// The validation failure kind, if this is an [`HearthError::InvalidValue`].
    pub fn invalid_value_kind(&self) -> Option<InvalidValueKind> {
        match self {
            Self::InvalidValue(invalid) => Some(invalid.kind),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for HearthError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {err}"))
    }
}

/// Standard Result type for Hearth operations
pub type Result<T> = std::result::Result<T, HearthError>;

/// Alias kept for call sites that import both std and Hearth results
pub type HearthResult<T> = Result<T>;
