// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction snapshot.
//!
//! Every function here is pure and total: empty input yields zero/empty
//! output, never an error. Views are recomputed from scratch on each
//! snapshot change; there is no incremental state.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::categories::PALETTE;
use crate::models::{
    CategoryBreakdown, CategoryTotal, MonthlyBucket, MonthlyTrend, SummaryData, Transaction,
    TransactionType,
};

/// Number of calendar months covered by the trend chart, including the reference month.
pub const TREND_MONTHS: u32 = 6;

pub fn compute_summary(transactions: &[Transaction]) -> SummaryData {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => income = saturating_add(income, t.amount),
            TransactionType::Expense => expense = saturating_add(expense, t.amount),
        }
    }
    SummaryData {
        total_income: income,
        total_expense: expense,
        balance: income - expense,
    }
}

/// Expense totals per category label, largest first.
///
/// Labels are compared byte-for-byte, so `"Ăn uống"` and `"ăn uống "` are two
/// groups. Ties keep first-appearance order. Colors follow output position.
pub fn compute_category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Decimal)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        match index.get(t.category.as_str()).copied() {
            Some(i) => groups[i].1 = saturating_add(groups[i].1, t.amount),
            None => {
                index.insert(t.category.as_str(), groups.len());
                groups.push((t.category.as_str(), t.amount));
            }
        }
    }
    // sort_by is stable, which gives the first-appearance tie break
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .enumerate()
        .map(|(i, (category, total))| CategoryTotal {
            category: category.to_string(),
            total_amount: total,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

/// Six month buckets ending at the month of `reference`, oldest first.
pub fn compute_monthly_trend(transactions: &[Transaction], reference: NaiveDate) -> MonthlyTrend {
    let last = month_ordinal(reference.year(), reference.month());
    let first = last - (TREND_MONTHS as i64 - 1);
    let mut buckets: MonthlyTrend = (first..=last)
        .map(|ord| {
            let (year, month) = from_month_ordinal(ord);
            MonthlyBucket {
                month,
                year,
                month_label: format!("{}/{}", month, year),
                income_total: Decimal::ZERO,
                expense_total: Decimal::ZERO,
            }
        })
        .collect();

    for t in transactions {
        let ord = month_ordinal(t.date.year(), t.date.month());
        if ord < first || ord > last {
            continue;
        }
        let bucket = &mut buckets[(ord - first) as usize];
        match t.r#type {
            TransactionType::Income => {
                bucket.income_total = saturating_add(bucket.income_total, t.amount)
            }
            TransactionType::Expense => {
                bucket.expense_total = saturating_add(bucket.expense_total, t.amount)
            }
        }
    }
    buckets
}

/// Amounts are non-negative, so an overflowing sum clamps at `Decimal::MAX`.
fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

fn month_ordinal(year: i32, month: u32) -> i64 {
    year as i64 * 12 + (month as i64 - 1)
}

fn from_month_ordinal(ord: i64) -> (i32, u32) {
    (ord.div_euclid(12) as i32, ord.rem_euclid(12) as u32 + 1)
}

/// All derived views for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub reference_date: NaiveDate,
    pub summary: SummaryData,
    pub breakdown: CategoryBreakdown,
    pub trend: MonthlyTrend,
}

impl Dashboard {
    pub fn compute(transactions: &[Transaction], reference_date: NaiveDate) -> Self {
        tracing::debug!(
            count = transactions.len(),
            %reference_date,
            "recomputing derived views"
        );
        Self {
            reference_date,
            summary: compute_summary(transactions),
            breakdown: compute_category_breakdown(transactions),
            trend: compute_monthly_trend(transactions, reference_date),
        }
    }

    /// Share of total expense for a breakdown entry, rounded to a whole percent.
    pub fn expense_share(&self, entry: &CategoryTotal) -> Decimal {
        if self.summary.total_expense.is_zero() {
            return Decimal::ZERO;
        }
        (entry.total_amount / self.summary.total_expense * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
