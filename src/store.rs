// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::db::Storage;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionType, validate_amount};

pub const SNAPSHOT_KEY: &str = "transactions";
pub const CORRUPT_SNAPSHOT_KEY: &str = "transactions.corrupt";

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Millisecond timestamps, forced strictly increasing within the process.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: i64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Counts up from a starting value.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seeded,
}

/// Ordered transactions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStore {
    items: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(items: Vec<Transaction>) -> Self {
        Self { items }
    }

    /// Reads the persisted snapshot, falling back to the seed collection when
    /// nothing is stored, the blob cannot be parsed, or a record breaks the
    /// amount/id invariants. A rejected blob is copied to `CORRUPT_SNAPSHOT_KEY`
    /// first.
    pub fn load(storage: &dyn Storage, today: NaiveDate) -> Result<(Self, LoadSource)> {
        let Some(raw) = storage.read(SNAPSHOT_KEY)? else {
            debug!("no persisted snapshot, using seed data");
            return Ok((Self::new(seed_transactions(today)), LoadSource::Seeded));
        };
        let parsed = serde_json::from_str::<Vec<Transaction>>(&raw)
            .map_err(Error::from)
            .and_then(|items| check_records(&items).map(|_| items));
        match parsed {
            Ok(items) => {
                debug!(count = items.len(), "loaded persisted snapshot");
                Ok((Self::new(items), LoadSource::Persisted))
            }
            Err(e) => {
                warn!(error = %e, "persisted snapshot is malformed, using seed data");
                storage.write(CORRUPT_SNAPSHOT_KEY, &raw)?;
                Ok((Self::new(seed_transactions(today)), LoadSource::Seeded))
            }
        }
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        let blob = serde_json::to_string(&self.items)?;
        storage.write(SNAPSHOT_KEY, &blob)?;
        debug!(count = self.items.len(), "snapshot persisted");
        Ok(())
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|t| t.id == id)
    }

    /// Assigns an id not already in the store and prepends the record.
    pub fn add(&mut self, new: NewTransaction, ids: &mut dyn IdGenerator) -> Transaction {
        let mut id = ids.next_id();
        while self.contains(&id) {
            id = ids.next_id();
        }
        let tx = new.with_id(id);
        info!(id = %tx.id, kind = %tx.r#type, amount = %tx.amount, "transaction added");
        self.items.insert(0, tx.clone());
        tx
    }

    /// Deletes by id. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        let tx = self.items.remove(pos);
        info!(id = %tx.id, "transaction removed");
        Some(tx)
    }
}

/// Amounts in range and ids unique.
fn check_records(items: &[Transaction]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for t in items {
        validate_amount(t.amount)?;
        if !seen.insert(t.id.as_str()) {
            return Err(Error::InvalidData(format!("duplicate transaction id '{}'", t.id)));
        }
    }
    Ok(())
}

/// First-run data so the dashboard is not empty.
pub fn seed_transactions(today: NaiveDate) -> Vec<Transaction> {
    let yesterday = today - Duration::days(1);
    vec![
        Transaction {
            id: "1".into(),
            date: today,
            amount: Decimal::new(15_000_000, 0),
            category: "Lương".into(),
            description: "Lương tháng này".into(),
            r#type: TransactionType::Income,
        },
        Transaction {
            id: "2".into(),
            date: today,
            amount: Decimal::new(50_000, 0),
            category: "Ăn uống".into(),
            description: "Cà phê sáng".into(),
            r#type: TransactionType::Expense,
        },
        Transaction {
            id: "3".into(),
            date: yesterday,
            amount: Decimal::new(200_000, 0),
            category: "Di chuyển".into(),
            description: "Đổ xăng xe máy".into(),
            r#type: TransactionType::Expense,
        },
    ]
}
