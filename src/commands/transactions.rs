// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;

use crate::advice::AdviceGateway;
use crate::categories::{classify_suggestion, default_category};
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::tracker::Tracker;
use crate::utils::{fmt_number, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table};

pub async fn handle(
    tracker: &mut Tracker<'_>,
    gateway: &AdviceGateway,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let tx = add(tracker, gateway, sub).await?;
            println!(
                "Recorded {} {} on {} '{}' [{}] (id: {})",
                tx.r#type,
                fmt_number(tx.amount),
                tx.date,
                tx.description,
                tx.category,
                tx.id
            );
        }
        Some(("list", sub)) => list(tracker, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            match tracker.remove(id)? {
                Some(tx) => println!("Removed '{}' ({})", tx.description, tx.id),
                None => println!("No transaction with id '{}'", id),
            }
        }
        _ => {}
    }
    Ok(())
}

pub async fn add(
    tracker: &mut Tracker<'_>,
    gateway: &AdviceGateway,
    sub: &clap::ArgMatches,
) -> Result<Transaction> {
    let mut kind: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => tracker.reference_date(),
    };

    let mut category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_category(kind).to_string());

    if sub.get_flag("suggest") {
        let suggested = gateway.request_category_suggestion(&description).await;
        match classify_suggestion(&suggested) {
            Some((label, suggested_kind)) => {
                if suggested_kind != kind {
                    println!("Suggested category '{}' switches type to {}", label, suggested_kind);
                }
                category = label.to_string();
                kind = suggested_kind;
            }
            None if suggested.is_empty() => {}
            None => println!("Ignoring unknown suggested category '{}'", suggested),
        }
    }

    let new = NewTransaction::new(date, amount, category, description, kind)?;
    Ok(tracker.add(new)?)
}

fn list(tracker: &Tracker<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker.snapshot(), sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions yet. Add one with `smartspend tx add`.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.signed_amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub signed_amount: String,
    pub category: String,
    pub description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let sign = if t.is_income() { "+" } else { "-" };
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            amount: t.amount.normalize().to_string(),
            signed_amount: format!("{}{}", sign, fmt_number(t.amount)),
            category: t.category.clone(),
            description: t.description.clone(),
        }
    }
}

/// Filters the snapshot by the `tx list` flags, keeping store order.
pub fn query_rows(snapshot: &[Transaction], sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let kind = match sub.get_one::<String>("type") {
        Some(t) => Some(t.parse::<TransactionType>()?),
        None => None,
    };
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(snapshot
        .iter()
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .filter(|t| category.is_none_or(|c| &t.category == c))
        .filter(|t| month.is_none_or(|(y, m)| t.date.year() == y && t.date.month() == m))
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
