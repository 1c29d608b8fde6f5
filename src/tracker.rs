// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ties the store to persistence and derived views.
//!
//! Every mutation goes through here, and every mutation is followed by a
//! save of the whole snapshot and a fresh `Dashboard`.

use chrono::NaiveDate;

use crate::analytics::Dashboard;
use crate::db::Storage;
use crate::error::Result;
use crate::models::{NewTransaction, Transaction};
use crate::store::{IdGenerator, LoadSource, TimestampIds, TransactionStore};

pub struct Tracker<'s> {
    storage: &'s dyn Storage,
    store: TransactionStore,
    ids: Box<dyn IdGenerator>,
    reference_date: NaiveDate,
    dashboard: Dashboard,
}

impl<'s> Tracker<'s> {
    /// Loads the snapshot (seeding on first run) and computes the initial views.
    /// A seeded collection is written back immediately.
    pub fn open(storage: &'s dyn Storage, reference_date: NaiveDate) -> Result<Self> {
        Self::open_with_ids(storage, reference_date, Box::new(TimestampIds::new()))
    }

    pub fn open_with_ids(
        storage: &'s dyn Storage,
        reference_date: NaiveDate,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self> {
        let (store, source) = TransactionStore::load(storage, reference_date)?;
        if source == LoadSource::Seeded {
            store.save(storage)?;
        }
        let dashboard = Dashboard::compute(store.snapshot(), reference_date);
        Ok(Self {
            storage,
            store,
            ids,
            reference_date,
            dashboard,
        })
    }

    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let tx = self.store.add(new, self.ids.as_mut());
        self.after_mutation()?;
        Ok(tx)
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<Transaction>> {
        let removed = self.store.remove(id);
        self.after_mutation()?;
        Ok(removed)
    }

    fn after_mutation(&mut self) -> Result<()> {
        self.store.save(self.storage)?;
        self.dashboard = Dashboard::compute(self.store.snapshot(), self.reference_date);
        Ok(())
    }

    pub fn snapshot(&self) -> &[Transaction] {
        self.store.snapshot()
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}
