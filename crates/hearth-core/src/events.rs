//! Integration events
//!
//! Aggregates append typed event records to an in-memory [`EventOutbox`]. The
//! core makes no delivery guarantee: the unit of work drains the outbox after a
//! successful commit and hands the batch to an [`EventSink`].

use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tokio::sync::Mutex;

/// Domain-significant facts an aggregate root announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationEventKind {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for IntegrationEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IntegrationEventKind::Created => "Created",
            IntegrationEventKind::Updated => "Updated",
            IntegrationEventKind::Deleted => "Deleted",
        };
        f.write_str(label)
    }
}

/// A fact record emitted by an aggregate for publication after a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationEvent {
    /// What happened
    pub kind: IntegrationEventKind,
    /// Aggregate family, e.g. `ViolationTicket`
    pub aggregate_type: String,
    /// Identity of the aggregate instance
    pub aggregate_id: String,
    /// Event body handed to subscribers
    pub payload: Value,
}

impl IntegrationEvent {
    pub fn new(
        kind: IntegrationEventKind,
        aggregate_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            kind,
            aggregate_type: aggregate_type.into(),
            aggregate_id: aggregate_id.into(),
            payload,
        }
    }

    /// Topic name used on the bus, e.g. `ViolationTicketCreated`
    pub fn name(&self) -> String {
        format!("{}{}", self.aggregate_type, self.kind)
    }
}

/// Ordered, per-aggregate list of events waiting for the unit of work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventOutbox {
    events: Vec<IntegrationEvent>,
}

impl EventOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: IntegrationEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[IntegrationEvent] {
        &self.events
    }

    /// Remove and return every pending event, oldest first.
    pub fn take(&mut self) -> Vec<IntegrationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events of `kind`.
    pub fn count_of(&self, kind: IntegrationEventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }
}

/// Publishing side of the (external) event bus.
///
/// Implementations are expected to deliver at least once; the core never
/// retries a failed publish.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish a committed batch of events in order.
    async fn publish(&self, events: Vec<IntegrationEvent>) -> Result<()>;
}

/// Sink that records every published event, for tests and local wiring.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    published: Mutex<Vec<IntegrationEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub async fn published(&self) -> Vec<IntegrationEvent> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn publish(&self, events: Vec<IntegrationEvent>) -> Result<()> {
        tracing::debug!(count = events.len(), "Publishing integration events");
        self.published.lock().await.extend(events);
        Ok(())
    }
}
