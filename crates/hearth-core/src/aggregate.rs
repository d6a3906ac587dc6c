//! Aggregate root base
//!
//! [`AggregateRoot`] carries the two concerns every consistency boundary shares:
//! the soft-delete flag and the integration-event outbox. Concrete aggregates
//! embed one and expose it through the [`Aggregate`] trait so the unit of work
//! can drain events without knowing the aggregate's type.

use crate::events::{EventOutbox, IntegrationEvent, IntegrationEventKind};
use serde_json::Value;

/// Soft-delete flag plus pending integration events for one aggregate instance.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRoot {
    aggregate_type: &'static str,
    id: String,
    is_deleted: bool,
    outbox: EventOutbox,
}

impl AggregateRoot {
    pub fn new(aggregate_type: &'static str, id: impl Into<String>) -> Self {
        Self {
            aggregate_type,
            id: id.into(),
            is_deleted: false,
            outbox: EventOutbox::new(),
        }
    }

    pub fn aggregate_type(&self) -> &'static str {
        self.aggregate_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Append an event of `kind` for this aggregate.
    pub fn record(&mut self, kind: IntegrationEventKind, payload: Value) {
        self.outbox.push(IntegrationEvent::new(
            kind,
            self.aggregate_type,
            self.id.clone(),
            payload,
        ));
    }

    /// Set the soft-delete flag and record `Deleted`.
    ///
    /// Returns `false` (and records nothing) when the aggregate was already
    /// deleted.
    pub fn mark_deleted(&mut self, payload: Value) -> bool {
        if self.is_deleted {
            return false;
        }
        self.is_deleted = true;
        self.record(IntegrationEventKind::Deleted, payload);
        true
    }

    /// Save hook: records `Updated` only when `is_modified` and not deleted.
    ///
    /// Returns whether an event was recorded.
    pub fn on_save(&mut self, is_modified: bool, payload: Value) -> bool {
        if !is_modified || self.is_deleted {
            return false;
        }
        self.record(IntegrationEventKind::Updated, payload);
        true
    }

    pub fn outbox(&self) -> &EventOutbox {
        &self.outbox
    }

    pub fn take_events(&mut self) -> Vec<IntegrationEvent> {
        self.outbox.take()
    }
}

/// Access to the aggregate-root base of a concrete aggregate.
pub trait Aggregate {
    fn root(&self) -> &AggregateRoot;

    fn root_mut(&mut self) -> &mut AggregateRoot;

    fn is_deleted(&self) -> bool {
        self.root().is_deleted()
    }

    /// Events recorded since the last drain, oldest first.
    fn integration_events(&self) -> &[IntegrationEvent] {
        self.root().outbox().events()
    }

    /// Drain pending events; called by the unit of work after commit.
    fn take_integration_events(&mut self) -> Vec<IntegrationEvent> {
        self.root_mut().take_events()
    }
}
