//! Hearth Core - foundation layer
//!
//! Pure building blocks shared by the authorization and case crates:
//!
//! - [`errors`]: the unified [`HearthError`] and value-object [`InvalidValue`]
//! - [`identifiers`]: opaque string identifiers for communities, members, tickets
//! - [`value_objects`]: smart-constructor helpers and the `bounded_string!` /
//!   `closed_set!` macros
//! - [`aggregate`]: soft-delete flag and integration-event outbox
//! - [`events`]: integration event records and the [`EventSink`] contract
//! - [`config`] / [`telemetry`]: TOML configuration and tracing setup
//!
//! Nothing in this crate performs I/O except configuration loading and the
//! tracing subscriber installation.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod events;
pub mod identifiers;
pub mod telemetry;
pub mod value_objects;

pub use aggregate::{Aggregate, AggregateRoot};
pub use config::{ConfigValidation, ConfigValidator, HearthConfigFile, LoggingConfig};
pub use errors::{HearthError, HearthResult, InvalidValue, InvalidValueKind, Result};
pub use events::{EventOutbox, EventSink, InMemoryEventSink, IntegrationEvent, IntegrationEventKind};
pub use identifiers::{
    CommunityId, EndUserId, EntityId, MemberId, PropertyId, RoleId, ServiceId, StaffUserId,
    TicketId,
};
pub use telemetry::init_tracing;
