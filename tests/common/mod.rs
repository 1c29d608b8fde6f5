// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use clap::ArgMatches;

use smartspend::advice::{AdviceGateway, MockBackend};
use smartspend::cli;
use smartspend::db::MemoryStorage;
use smartspend::store::SequentialIds;
use smartspend::tracker::Tracker;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// A tracker over the seed data with ids counting up from 100.
pub fn seeded(storage: &MemoryStorage) -> Tracker<'_> {
    Tracker::open_with_ids(storage, today(), Box::new(SequentialIds::starting_at(100))).unwrap()
}

pub fn gateway(mock: &MockBackend) -> AdviceGateway {
    AdviceGateway::new(Arc::new(mock.clone()))
}

/// Walks the subcommand chain down to the innermost matches.
pub fn leaf(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["smartspend"];
    argv.extend_from_slice(args);
    let mut m = cli::build_cli().get_matches_from(argv);
    while let Some((_, sub)) = m.subcommand() {
        m = sub.clone();
    }
    m
}

/// Matches of the top-level subcommand, as `main` hands them to a handler.
pub fn subcommand(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["smartspend"];
    argv.extend_from_slice(args);
    let m = cli::build_cli().get_matches_from(argv);
    match m.subcommand() {
        Some((_, sub)) => sub.clone(),
        None => panic!("no subcommand in {:?}", args),
    }
}
