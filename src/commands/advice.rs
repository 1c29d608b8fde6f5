// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::advice::{AdviceGateway, AdviceSlot, recent_for_advice};
use crate::categories::classify_suggestion;
use crate::models::AdviceResult;
use crate::tracker::Tracker;
use crate::utils::maybe_print_json;

/// Runs one advice request through the slot and returns what it ends up holding.
pub async fn advise(tracker: &Tracker<'_>, gateway: &AdviceGateway) -> Result<AdviceResult> {
    let slot = AdviceSlot::new();
    let recent = recent_for_advice(tracker.snapshot()).to_vec();
    slot.spawn_request(gateway.clone(), recent)
        .await
        .context("advice task panicked")?;
    slot.latest()
        .map(|entry| entry.result)
        .context("advice slot empty after request finished")
}

pub async fn handle_advise(
    tracker: &Tracker<'_>,
    gateway: &AdviceGateway,
    m: &clap::ArgMatches,
) -> Result<()> {
    eprintln!("Đang phân tích dữ liệu ({})...", gateway.model());
    let advice = advise(tracker, gateway).await?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &advice)? {
        return Ok(());
    }
    println!("Sức khỏe tài chính: {}", advice.sentiment.label());
    println!();
    println!("{}", advice.summary);
    println!();
    for (i, tip) in advice.tips.iter().enumerate() {
        println!("{}. {}", i + 1, tip);
    }
    Ok(())
}

pub async fn handle_suggest(gateway: &AdviceGateway, m: &clap::ArgMatches) -> Result<()> {
    let description = m.get_one::<String>("description").unwrap();
    let suggested = gateway.request_category_suggestion(description).await;
    match classify_suggestion(&suggested) {
        Some((label, kind)) => println!("{} ({})", label, kind),
        None if suggested.is_empty() => println!("(no suggestion for an empty description)"),
        None => println!("'{}' is not a known category; ignored", suggested),
    }
    Ok(())
}
