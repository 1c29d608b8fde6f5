// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::categories::is_known;
use crate::models::Transaction;
use crate::utils::pretty_table;

/// Issue rows as (kind, detail).
pub fn find_issues(snapshot: &[Transaction], today: NaiveDate) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Labels outside the canonical lists
    let unknown: BTreeSet<&str> = snapshot
        .iter()
        .map(|t| t.category.as_str())
        .filter(|c| !is_known(c))
        .collect();
    for c in &unknown {
        rows.push(vec!["unknown_category".into(), format!("'{}'", c)]);
    }

    // 2) Labels that only differ by case or surrounding/inner whitespace.
    // These are grouped separately by the category breakdown.
    let mut variants: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for t in snapshot {
        let key = t
            .category
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        variants.entry(key).or_default().insert(t.category.as_str());
    }
    for labels in variants.values().filter(|v| v.len() > 1) {
        let shown: Vec<String> = labels.iter().map(|l| format!("'{}'", l)).collect();
        rows.push(vec!["category_variants".into(), shown.join(", ")]);
    }

    // 3) Dates after the reference date
    for t in snapshot.iter().filter(|t| t.date > today) {
        rows.push(vec![
            "future_date".into(),
            format!("{} {} ({})", t.id, t.date, t.description),
        ]);
    }

    rows
}

pub fn handle(snapshot: &[Transaction], today: NaiveDate) {
    let rows = find_issues(snapshot, today);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use rust_decimal::Decimal;

    fn tx(id: &str, date: NaiveDate, cat: &str) -> Transaction {
        Transaction {
            id: id.into(),
            date,
            amount: Decimal::ONE,
            category: cat.into(),
            description: "d".into(),
            r#type: TransactionType::Expense,
        }
    }

    #[test]
    fn clean_snapshot_has_no_issues() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let txs = vec![tx("1", today, "Ăn uống"), tx("2", today, "Lương")];
        assert!(find_issues(&txs, today).is_empty());
    }

    #[test]
    fn reports_unknown_variants_and_future() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let txs = vec![
            tx("1", today, "Ăn uống"),
            tx("2", today, "ăn  uống"),
            tx("3", NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(), "Ăn uống"),
        ];
        let kinds: Vec<String> = find_issues(&txs, today)
            .into_iter()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(kinds, vec!["unknown_category", "category_variants", "future_date"]);
    }
}
