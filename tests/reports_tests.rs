// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use rust_decimal::Decimal;
use smartspend::commands::reports;
use smartspend::db::MemoryStorage;

use common::seeded;

#[test]
fn empty_history_renders_empty_states() {
    let storage = MemoryStorage::new();
    let mut tracker = seeded(&storage);
    for id in ["1", "2", "3"] {
        tracker.remove(id).unwrap();
    }
    let dash = tracker.dashboard();

    assert_eq!(reports::breakdown_view(dash), reports::NO_EXPENSES);
    assert_eq!(reports::recent_view(tracker.snapshot()), reports::NO_TRANSACTIONS);

    assert_eq!(dash.trend.len(), 6);
    assert!(dash
        .trend
        .iter()
        .all(|b| b.income_total.is_zero() && b.expense_total.is_zero()));
    let labels: Vec<&str> = dash.trend.iter().map(|b| b.month_label.as_str()).collect();
    assert_eq!(labels, vec!["10/2023", "11/2023", "12/2023", "1/2024", "2/2024", "3/2024"]);
    assert_eq!(dash.summary.balance, Decimal::ZERO);
}

#[test]
fn seeded_views_show_rows() {
    let storage = MemoryStorage::new();
    let tracker = seeded(&storage);
    let dash = tracker.dashboard();

    let breakdown = reports::breakdown_view(dash);
    assert!(breakdown.contains("Di chuyển"));
    assert!(breakdown.contains("200.000"));
    assert!(breakdown.contains("80%"));
    assert!(breakdown.contains("#0088FE"));

    let recent = reports::recent_view(tracker.snapshot());
    assert!(recent.contains("+15.000.000"));
    assert!(recent.contains("29/02/2024"));

    let summary = reports::summary_table(&dash.summary).to_string();
    assert!(summary.contains("14.750.000 ₫"));
}
