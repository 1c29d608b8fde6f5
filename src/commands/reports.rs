// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::Table;

use crate::analytics::Dashboard;
use crate::models::{SummaryData, Transaction};
use crate::tracker::Tracker;
use crate::utils::{fmt_number, fmt_vnd, maybe_print_json, pretty_table};

const RECENT_ROWS: usize = 5;

pub fn handle(tracker: &Tracker<'_>, m: &clap::ArgMatches) -> Result<()> {
    let dash = tracker.dashboard();
    match m.subcommand() {
        Some(("summary", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash.summary)? {
                println!("{}", summary_table(&dash.summary));
            }
        }
        Some(("categories", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash.breakdown)? {
                println!("{}", breakdown_view(dash));
            }
        }
        Some(("trend", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash.trend)? {
                println!("{}", trend_table(dash));
            }
        }
        _ => {}
    }
    Ok(())
}

/// The dashboard tab: cards, trend, expense structure and latest entries.
pub fn overview(tracker: &Tracker<'_>, m: &clap::ArgMatches) -> Result<()> {
    let dash = tracker.dashboard();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), dash)? {
        return Ok(());
    }
    println!("Tổng quan tài chính (as of {})", dash.reference_date);
    println!("{}", summary_table(&dash.summary));
    println!("\nBiến động Thu/Chi");
    println!("{}", trend_table(dash));
    println!("\nCơ cấu chi tiêu");
    println!("{}", breakdown_view(dash));
    println!("\nGiao dịch gần đây");
    println!("{}", recent_view(tracker.snapshot()));
    Ok(())
}

pub fn summary_table(s: &SummaryData) -> Table {
    pretty_table(
        &["Tổng thu nhập", "Tổng chi tiêu", "Số dư"],
        vec![vec![
            fmt_vnd(s.total_income),
            fmt_vnd(s.total_expense),
            fmt_vnd(s.balance),
        ]],
    )
}

pub fn trend_table(dash: &Dashboard) -> Table {
    let rows = dash
        .trend
        .iter()
        .map(|b| {
            vec![
                b.month_label.clone(),
                fmt_number(b.income_total),
                fmt_number(b.expense_total),
            ]
        })
        .collect();
    pretty_table(&["Tháng", "Thu", "Chi"], rows)
}

pub const NO_EXPENSES: &str = "Chưa có dữ liệu chi tiêu";
pub const NO_TRANSACTIONS: &str = "Chưa có giao dịch nào.";

/// Expense structure table, or the empty-state line.
pub fn breakdown_view(dash: &Dashboard) -> String {
    if dash.breakdown.is_empty() {
        return NO_EXPENSES.to_string();
    }
    let rows = dash
        .breakdown
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_number(c.total_amount),
                format!("{}%", dash.expense_share(c)),
                c.color.to_string(),
            ]
        })
        .collect();
    pretty_table(&["Danh mục", "Số tiền", "Tỷ lệ", "Màu"], rows).to_string()
}

/// The newest few transactions, or the empty-state line.
pub fn recent_view(snapshot: &[Transaction]) -> String {
    if snapshot.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }
    let rows = snapshot
        .iter()
        .take(RECENT_ROWS)
        .map(|t| {
            let sign = if t.is_income() { "+" } else { "-" };
            vec![
                t.description.clone(),
                t.category.clone(),
                t.date.format("%d/%m/%Y").to_string(),
                format!("{}{}", sign, fmt_number(t.amount)),
            ]
        })
        .collect();
    pretty_table(&["Mô tả", "Danh mục", "Ngày", "Số tiền"], rows).to_string()
}
