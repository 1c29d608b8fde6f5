// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::Duration;
use rust_decimal::Decimal;
use smartspend::commands::doctor;
use smartspend::db::MemoryStorage;
use smartspend::models::{NewTransaction, TransactionType};

use common::{seeded, today};

#[test]
fn seed_data_is_clean() {
    let storage = MemoryStorage::new();
    let tracker = seeded(&storage);
    assert!(doctor::find_issues(tracker.snapshot(), tracker.reference_date()).is_empty());
}

#[test]
fn flags_case_variants_and_future_dates() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    tracker
        .add(
            NewTransaction::new(
                today() + Duration::days(3),
                Decimal::new(30_000, 0),
                "ăn uống",
                "Bánh mì",
                TransactionType::Expense,
            )
            .unwrap(),
        )
        .unwrap();

    let issues = doctor::find_issues(tracker.snapshot(), tracker.reference_date());
    let kinds: Vec<&str> = issues.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(kinds, vec!["unknown_category", "category_variants", "future_date"]);
    assert!(issues[2][1].starts_with("100 2024-03-04"));
}
