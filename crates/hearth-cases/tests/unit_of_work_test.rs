//! Transaction boundary: commit publishes, rollback discards

mod support;

use assert_matches::assert_matches;
use hearth_cases::violation_ticket::value_objects::TicketStatus;
use hearth_cases::{
    InMemoryUnitOfWork, ViolationTicketProps, ViolationTicketRepository, ViolationTicketUnitOfWork,
};
use async_trait::async_trait;
use hearth_core::{
    EventSink, HearthError, InMemoryEventSink, IntegrationEvent, IntegrationEventKind, MemberId,
    TicketId,
};
use std::sync::Arc;
use support::*;

fn unit_of_work() -> (InMemoryUnitOfWork, Arc<InMemoryEventSink>) {
    let sink = Arc::new(InMemoryEventSink::new());
    let uow = InMemoryUnitOfWork::new(sink.clone() as Arc<dyn EventSink>);
    (uow, sink)
}

async fn create_ticket(uow: &InMemoryUnitOfWork) -> TicketId {
    uow.with_transaction(creator(REQUESTOR), |repo| {
        let ticket = repo.get_new_instance(
            TITLE,
            DESCRIPTION,
            hearth_core::CommunityId::new(COMMUNITY),
            MemberId::new(REQUESTOR),
            PENALTY,
        )?;
        let ticket = repo.save(ticket)?;
        Ok(ticket.id().clone())
    })
    .await
    .unwrap()
}

fn kinds(events: &[IntegrationEvent]) -> Vec<IntegrationEventKind> {
    events.iter().map(|event| event.kind).collect()
}

#[tokio::test]
async fn commit_stores_ticket_and_publishes_created_only() {
    let (uow, sink) = unit_of_work();
    let id = create_ticket(&uow).await;

    let stored = uow.stored(&id).await.unwrap();
    assert_eq!(stored.status(), TicketStatus::Draft);
    assert_eq!(kinds(&sink.published().await), vec![IntegrationEventKind::Created]);
}

#[tokio::test]
async fn rollback_discards_mutations_and_events() {
    let (uow, sink) = unit_of_work();
    let id = create_ticket(&uow).await;

    let result: hearth_core::Result<()> = uow
        .with_transaction(manager(), |repo| {
            let mut ticket = repo.get_by_id(&id)?;
            ticket.set_priority(1)?;
            repo.save(ticket)?;
            // assignment needs the assign capability, so the whole transaction aborts
            let mut ticket = repo.get_by_id(&id)?;
            ticket.set_assigned_to_id(Some(MemberId::new(ASSIGNEE)))?;
            repo.save(ticket)?;
            Ok(())
        })
        .await;

    assert_matches!(result, Err(HearthError::PermissionDenied { .. }));
    let stored = uow.stored(&id).await.unwrap();
    assert_eq!(stored.priority().value_of(), 5);
    assert_eq!(kinds(&sink.published().await), vec![IntegrationEventKind::Created]);
}

#[tokio::test]
async fn modified_save_publishes_update() {
    let (uow, sink) = unit_of_work();
    let id = create_ticket(&uow).await;

    uow.with_transaction(creator(REQUESTOR), |repo| {
        let mut ticket = repo.get_by_id(&id)?;
        ticket.request_add_status_transition(
            TicketStatus::Submitted,
            "Ready for review",
            &MemberId::new(REQUESTOR),
        )?;
        repo.save(ticket)?;
        Ok(())
    })
    .await
    .unwrap();

    let stored = uow.stored(&id).await.unwrap();
    assert_eq!(stored.status(), TicketStatus::Submitted);
    assert!(!stored.is_modified());
    assert_eq!(
        kinds(&sink.published().await),
        vec![IntegrationEventKind::Created, IntegrationEventKind::Updated]
    );
}

#[tokio::test]
async fn unmodified_save_publishes_nothing() {
    let (uow, sink) = unit_of_work();
    let id = create_ticket(&uow).await;

    uow.with_transaction(manager(), |repo| {
        let ticket = repo.get_by_id(&id)?;
        repo.save(ticket)?;
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(sink.published().await.len(), 1);
}

#[tokio::test]
async fn deleted_ticket_is_removed_and_announced_once() {
    let (uow, sink) = unit_of_work();
    let id = create_ticket(&uow).await;

    uow.with_transaction(manager(), |repo| {
        let mut ticket = repo.get_by_id(&id)?;
        ticket.request_delete()?;
        ticket.request_delete()?;
        repo.save(ticket)?;
        Ok(())
    })
    .await
    .unwrap();

    assert!(uow.stored(&id).await.is_none());
    assert_eq!(uow.stored_count().await, 0);
    assert_eq!(
        kinds(&sink.published().await),
        vec![IntegrationEventKind::Created, IntegrationEventKind::Deleted]
    );

    let lookup = uow
        .with_transaction(manager(), |repo| repo.get_by_id(&id).map(|_| ()))
        .await;
    assert_matches!(lookup, Err(HearthError::NotFound { .. }));
}

/// Bus that refuses every batch
struct UnavailableSink;

#[async_trait]
impl EventSink for UnavailableSink {
    async fn publish(&self, _events: Vec<IntegrationEvent>) -> hearth_core::Result<()> {
        Err(HearthError::storage("bus down"))
    }
}

#[tokio::test]
async fn publish_failure_after_commit_still_reports_success() {
    let uow = InMemoryUnitOfWork::new(Arc::new(UnavailableSink) as Arc<dyn EventSink>);

    let id = create_ticket(&uow).await;

    assert!(uow.stored(&id).await.is_some());
    assert_eq!(uow.stored_count().await, 1);
}
