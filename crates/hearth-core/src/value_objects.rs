//! Self-validating value objects
//!
//! A value object validates and normalises its raw input at construction and is
//! immutable afterwards. Construction is a smart constructor returning
//! `Result<Self, InvalidValue>`; a failed construction never produces a value,
//! so a setter that validates before writing leaves its field untouched.
//!
//! The helpers here carry the shared rules:
//! - strings are trimmed, then their length in characters is checked
//! - numbers are checked against an inclusive range
//! - enumerations are checked for membership in a closed set
//!
//! Raw input arriving as JSON (documents from the persistence layer) goes
//! through the `from_json` constructors, which report
//! [`InvalidValueKind::WrongType`](crate::InvalidValueKind::WrongType) for
//! `null` or a different primitive.

use crate::errors::InvalidValue;
use serde_json::Value;

/// Trim `raw` and check its character length lies in `[min, max]`.
pub fn validate_string(field: &str, raw: &str, min: usize, max: usize) -> Result<String, InvalidValue> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < min {
        return Err(InvalidValue::too_short(field));
    }
    if length > max {
        return Err(InvalidValue::too_long(field));
    }
    Ok(trimmed.to_string())
}

/// Check that `raw` lies in `[min, max]`.
pub fn validate_number<T>(field: &str, raw: T, min: T, max: T) -> Result<T, InvalidValue>
where
    T: PartialOrd + Copy,
{
    // NaN compares false both ways and would slip through the range checks
    if raw.partial_cmp(&raw).is_none() {
        return Err(InvalidValue::wrong_type(field));
    }
    if raw < min {
        return Err(InvalidValue::too_short(field));
    }
    if raw > max {
        return Err(InvalidValue::too_long(field));
    }
    Ok(raw)
}

/// Trim `raw` and check it is one of `allowed` (exact match after trimming).
pub fn validate_member<'a>(
    field: &str,
    raw: &str,
    allowed: &[&'a str],
) -> Result<&'a str, InvalidValue> {
    let trimmed = raw.trim();
    allowed
        .iter()
        .copied()
        .find(|candidate| *candidate == trimmed)
        .ok_or_else(|| InvalidValue::not_in_set(field))
}

/// Extract a string primitive from a JSON value.
pub fn json_str<'v>(field: &str, value: &'v Value) -> Result<&'v str, InvalidValue> {
    value.as_str().ok_or_else(|| InvalidValue::wrong_type(field))
}

/// Extract an integer primitive from a JSON value.
pub fn json_i64(field: &str, value: &Value) -> Result<i64, InvalidValue> {
    value.as_i64().ok_or_else(|| InvalidValue::wrong_type(field))
}

/// Extract a floating point primitive from a JSON value.
pub fn json_f64(field: &str, value: &Value) -> Result<f64, InvalidValue> {
    match value {
        Value::Number(number) => number.as_f64().ok_or_else(|| InvalidValue::wrong_type(field)),
        _ => Err(InvalidValue::wrong_type(field)),
    }
}

/// Declare a trimmed, length-bounded string value object.
///
/// The generated type has `try_new`, `from_json`, `value_of`, `Display`,
/// `TryFrom<&str>`/`TryFrom<String>` and transparent serde that re-validates on
/// deserialization.
#[macro_export]
macro_rules! bounded_string {
    ($(#[$meta:meta])* $name:ident, $field:literal, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Minimum length in characters after trimming
            pub const MIN_LENGTH: usize = $min;
            /// Maximum length in characters after trimming
            pub const MAX_LENGTH: usize = $max;

            pub fn try_new(raw: impl AsRef<str>) -> ::std::result::Result<Self, $crate::InvalidValue> {
                $crate::value_objects::validate_string($field, raw.as_ref(), $min, $max).map(Self)
            }

            pub fn from_json(value: &::serde_json::Value) -> ::std::result::Result<Self, $crate::InvalidValue> {
                Self::try_new($crate::value_objects::json_str($field, value)?)
            }

            /// The normalised primitive
            pub fn value_of(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::InvalidValue;

            fn try_from(raw: String) -> ::std::result::Result<Self, Self::Error> {
                Self::try_new(raw)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::InvalidValue;

            fn try_from(raw: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::try_new(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Declare a closed enumeration value object over string codes.
///
/// Parsing trims the input and rejects anything outside the listed codes with
/// `NotInSet`.
#[macro_export]
macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every member of the set, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn try_new(raw: impl AsRef<str>) -> ::std::result::Result<Self, $crate::InvalidValue> {
                let code = $crate::value_objects::validate_member($field, raw.as_ref(), &[$($code),+])?;
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err($crate::InvalidValue::not_in_set($field)),
                }
            }

            pub fn from_json(value: &::serde_json::Value) -> ::std::result::Result<Self, $crate::InvalidValue> {
                Self::try_new($crate::value_objects::json_str($field, value)?)
            }

            /// The string code for this member
            pub fn value_of(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.value_of())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::InvalidValue;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::try_new(raw)
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::InvalidValue;

            fn try_from(raw: String) -> ::std::result::Result<Self, Self::Error> {
                Self::try_new(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.value_of().to_string()
            }
        }
    };
}
