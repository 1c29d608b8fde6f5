// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The advisor view's "latest result" slot.
//!
//! Requests run in background tasks and write into the slot when they
//! finish. Whatever finishes last wins, even if it was issued first; the
//! ticket on the stored entry says which request produced it.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::AdviceGateway;
use crate::models::{AdviceResult, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub ticket: u64,
    pub result: AdviceResult,
}

#[derive(Clone)]
pub struct AdviceSlot {
    latest: Arc<watch::Sender<Option<SlotEntry>>>,
    next_ticket: Arc<AtomicU64>,
    in_flight: Arc<AtomicUsize>,
}

impl Default for AdviceSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl AdviceSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            latest: Arc::new(tx),
            next_ticket: Arc::new(AtomicU64::new(1)),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Starts a request without waiting for it. Must be called inside a
    /// tokio runtime. The handle resolves to the request's ticket.
    pub fn spawn_request(
        &self,
        gateway: AdviceGateway,
        transactions: Vec<Transaction>,
    ) -> JoinHandle<u64> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst);
        let guard = InFlight::enter(Arc::clone(&self.in_flight));
        let latest = Arc::clone(&self.latest);
        debug!(ticket, count = transactions.len(), "advice request started");
        tokio::spawn(async move {
            let result = gateway.request_advice(&transactions).await;
            // Subscribers woken by the send must already see the request as done.
            drop(guard);
            latest.send_replace(Some(SlotEntry { ticket, result }));
            debug!(ticket, "advice request finished");
            ticket
        })
    }

    pub fn latest(&self) -> Option<SlotEntry> {
        self.latest.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SlotEntry>> {
        self.latest.subscribe()
    }
}

/// Counts a request as in flight until dropped, including on panic or abort.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
