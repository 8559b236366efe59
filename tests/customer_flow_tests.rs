#![cfg(not(target_arch = "wasm32"))]

use custdesk::domain::customer::{CustomerField, CustomerId};
use custdesk::domain::navigation::{NavMailbox, NavPayload, Screen};
use custdesk::services::{ListPhase, ProfileController};
use custdesk::test_helpers::{StubSource, TestContext, sample_customers};
use chrono::Utc;
use std::sync::Arc;

fn ids(rows: &[custdesk::domain::customer::Customer]) -> Vec<u64> {
    rows.iter().map(|c| c.id.as_str().parse().unwrap()).collect()
}

#[tokio::test]
async fn test_pagination_walk_over_fifty_records() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(50));
    let mut list = ctx.list_controller();

    let ticket = list.enter(None).expect("empty store must fetch");
    assert!(list.fetch_with(ticket, &source).await);
    assert_eq!(ids(list.rows()), (1..=10).collect::<Vec<_>>());

    for _ in 0..3 {
        list.next_page();
    }
    assert_eq!(list.page(), 4);
    assert_eq!(ids(list.rows()), (31..=40).collect::<Vec<_>>());

    list.prev_page();
    assert_eq!(list.page(), 3);
    assert_eq!(ids(list.rows()), (21..=30).collect::<Vec<_>>());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_empty_cache_then_fetch_of_ten() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(10));
    let mut list = ctx.list_controller();

    let ticket = list.enter(None).unwrap();
    list.fetch_with(ticket, &source).await;

    assert_eq!(list.phase(), ListPhase::Ready);
    assert_eq!(list.page(), 1);
    assert_eq!(list.rows().len(), 10);
    assert_eq!(list.total_pages(), 1);
    // the fetch was mirrored into the cache slot
    assert_eq!(ctx.cache().load().len(), 10);
}

#[tokio::test]
async fn test_edit_save_return_skips_fetch_and_keeps_page() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(50));
    let mut mailbox = NavMailbox::new();
    let mut list = ctx.list_controller();

    let ticket = list.enter(mailbox.take(Screen::CustomerList)).unwrap();
    list.fetch_with(ticket, &source).await;
    list.next_page();
    list.next_page();
    assert_eq!(list.page(), 3);

    // list -> profile with record 27
    let record = list.rows().iter().find(|c| c.id == CustomerId::from(27u64)).cloned().unwrap();
    mailbox.send(list.request_edit(record));

    let mut profile = ProfileController::from_payload(ctx.store.clone(), mailbox.take(Screen::Profile));
    profile.edit(CustomerField::Email, "edited@example.com");
    let saved = profile.draft().cloned().unwrap();
    mailbox.send(profile.save().unwrap());

    // profile -> list
    assert!(list.enter(mailbox.take(Screen::CustomerList)).is_none());
    assert!(mailbox.is_empty());
    assert_eq!(source.calls(), 1);
    assert_eq!(list.page(), 3);

    let shown = list.rows().iter().find(|c| c.id == CustomerId::from(27u64)).unwrap();
    assert_eq!(shown, &saved);
    assert_eq!(shown.email, "edited@example.com");

    // re-entering later does not replay the signal, and does not fetch either
    // because the collection is populated
    assert!(list.enter(mailbox.take(Screen::CustomerList)).is_none());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_cancel_returns_without_writing() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(12));
    let mut list = ctx.list_controller();
    let ticket = list.enter(None).unwrap();
    list.fetch_with(ticket, &source).await;

    let record = list.rows()[0].clone();
    let mut profile = ProfileController::from_payload(ctx.store.clone(), Some(NavPayload::Edit(record.clone())));
    profile.edit(CustomerField::LastName, "Changed");
    assert_eq!(profile.cancel(), None);

    assert!(list.enter(None).is_none());
    assert_eq!(list.rows()[0], record);
}

#[tokio::test]
async fn test_delete_updates_store_slice_and_cache() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(20));
    let mut list = ctx.list_controller();
    let ticket = list.enter(None).unwrap();
    list.fetch_with(ticket, &source).await;

    let outcome = list.delete(&CustomerId::from(4u64), Utc::now());
    assert!(outcome.removed);
    assert_eq!(ctx.store.len(), 19);
    assert_eq!(list.rows().len(), 9);
    assert!(!ids(list.rows()).contains(&4));
    assert_eq!(ctx.cache().load().len(), 19);
    assert_eq!(list.status().text(), Some("User deleted (locally)"));

    let before = ctx.store.len();
    assert!(!list.delete(&CustomerId::from(400u64), Utc::now()).removed);
    assert_eq!(ctx.store.len(), before);
}

#[tokio::test]
async fn test_reload_uses_cache_without_fetch() {
    let backend = Arc::new(custdesk::repository::storage::MemoryStorage::new());

    {
        let ctx = TestContext::with_backend(backend.clone());
        let source = StubSource::with_batch(sample_customers(15));
        let mut list = ctx.list_controller();
        let ticket = list.enter(None).unwrap();
        list.fetch_with(ticket, &source).await;
        list.delete(&CustomerId::from(1u64), Utc::now());
    }

    let reloaded = TestContext::with_backend(backend);
    let mut list = reloaded.list_controller();
    assert!(list.enter(None).is_none());
    assert_eq!(reloaded.store.len(), 14);
    assert_eq!(ids(list.rows()).first(), Some(&2));
}

#[tokio::test]
async fn test_failed_fetch_keeps_prior_state() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(30));
    source.push_err("connection refused");
    let mut list = ctx.list_controller();

    let ticket = list.enter(None).unwrap();
    list.fetch_with(ticket, &source).await;
    list.next_page();

    let ticket = list.refresh();
    list.fetch_with(ticket, &source).await;

    assert_eq!(list.phase(), ListPhase::Ready);
    assert_eq!(ctx.store.len(), 30);
    assert_eq!(list.page(), 2);
    assert!(list.last_error().is_some());
}

#[tokio::test]
async fn test_refresh_after_paging_forces_page_one() {
    let ctx = TestContext::new_for_test();
    let source = StubSource::with_batch(sample_customers(50));
    source.push_ok(sample_customers(50).into_iter().rev().collect());
    let mut list = ctx.list_controller();

    let ticket = list.enter(None).unwrap();
    list.fetch_with(ticket, &source).await;
    list.next_page();
    list.next_page();

    let ticket = list.refresh();
    list.fetch_with(ticket, &source).await;
    assert_eq!(list.page(), 1);
    assert_eq!(ids(list.rows()), (41..=50).rev().collect::<Vec<_>>());
}
