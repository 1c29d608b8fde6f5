// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use rust_decimal::Decimal;
use smartspend::advice::MockBackend;
use smartspend::commands::transactions;
use smartspend::db::MemoryStorage;
use smartspend::models::TransactionType;

use common::{gateway, leaf, seeded, subcommand};

#[test]
fn list_limit_respected() {
    let storage = MemoryStorage::new();
    let tracker = seeded(&storage);
    let m = leaf(&["tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(tracker.snapshot(), &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[1].id, "2");
}

#[test]
fn list_filters_by_type_and_month() {
    let storage = MemoryStorage::new();
    let tracker = seeded(&storage);

    let m = leaf(&["tx", "list", "--type", "expense"]);
    let rows = transactions::query_rows(tracker.snapshot(), &m).unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
    assert_eq!(rows[0].signed_amount, "-50.000");

    // 2024 is a leap year, so the seeded "yesterday" is 29 February.
    let m = leaf(&["tx", "list", "--month", "2024-02"]);
    let rows = transactions::query_rows(tracker.snapshot(), &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-02-29");

    let m = leaf(&["tx", "list", "--category", "Lương"]);
    let rows = transactions::query_rows(tracker.snapshot(), &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].r#type, "INCOME");
}

#[test]
fn list_rejects_bad_month() {
    let storage = MemoryStorage::new();
    let tracker = seeded(&storage);
    let m = leaf(&["tx", "list", "--month", "March"]);
    assert!(transactions::query_rows(tracker.snapshot(), &m).is_err());
}

#[tokio::test]
async fn add_prepends_and_updates_views() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    let mock = MockBackend::new();
    let m = leaf(&["tx", "add", "--amount", "120000", "--description", "Ăn phở"]);

    let tx = transactions::add(&mut tracker, &gateway(&mock), &m).await.unwrap();
    assert_eq!(tx.id, "100");
    assert_eq!(tx.category, "Ăn uống");
    assert_eq!(tx.date, common::today());
    assert_eq!(tracker.snapshot()[0].id, "100");
    assert_eq!(
        tracker.dashboard().summary.total_expense,
        Decimal::new(370_000, 0)
    );
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn add_rejects_negative_amount() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    let m = leaf(&["tx", "add", "--amount=-5", "--description", "x"]);
    let err = transactions::add(&mut tracker, &gateway(&MockBackend::new()), &m).await;
    assert!(err.is_err());
    assert_eq!(tracker.snapshot().len(), 3);
}

#[tokio::test]
async fn suggestion_can_switch_type() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    let mock = MockBackend::new().with_category_reply("  Thưởng\n");
    let m = leaf(&["tx", "add", "--amount", "2000000", "--description", "Thưởng Tết", "--suggest"]);

    let tx = transactions::add(&mut tracker, &gateway(&mock), &m).await.unwrap();
    assert_eq!(tx.category, "Thưởng");
    assert_eq!(tx.r#type, TransactionType::Income);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn unknown_suggestion_is_ignored() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    let mock = MockBackend::new().with_category_reply("Crypto");
    let m = leaf(&["tx", "add", "--amount", "10", "--description", "coin", "--suggest"]);

    let tx = transactions::add(&mut tracker, &gateway(&mock), &m).await.unwrap();
    assert_eq!(tx.category, "Ăn uống");
    assert_eq!(tx.r#type, TransactionType::Expense);
}

#[tokio::test]
async fn rm_removes_and_persists() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    let m = subcommand(&["tx", "rm", "--id", "2"]);
    transactions::handle(&mut tracker, &gateway(&MockBackend::new()), &m)
        .await
        .unwrap();
    assert!(tracker.snapshot().iter().all(|t| t.id != "2"));

    let reopened = seeded(&storage);
    assert_eq!(reopened.snapshot().len(), 2);
}

#[tokio::test]
async fn sqlite_storage_round_trips_additions() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    smartspend::db::init_schema(&conn).unwrap();
    let storage = smartspend::db::SqliteStorage::new(&conn);
    let mut tracker = smartspend::tracker::Tracker::open_with_ids(
        &storage,
        common::today(),
        Box::new(smartspend::store::SequentialIds::starting_at(7)),
    )
    .unwrap();
    let m = leaf(&["tx", "add", "--type", "income", "--amount", "500000", "--description", "Bán đồ cũ", "--category", "Bán hàng"]);
    transactions::add(&mut tracker, &gateway(&MockBackend::new()), &m).await.unwrap();

    let reopened = smartspend::tracker::Tracker::open(&storage, common::today()).unwrap();
    assert_eq!(reopened.snapshot().len(), 4);
    assert_eq!(reopened.snapshot()[0].id, "7");
    assert_eq!(reopened.snapshot()[0].amount, Decimal::new(500_000, 0));
    assert_eq!(
        reopened.dashboard().summary.total_income,
        Decimal::new(15_500_000, 0)
    );
}
