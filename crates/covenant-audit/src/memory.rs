//! In-memory, hash-chained implementation of `GateSink`.
//!
//! `InMemoryGateSink` keeps every emitted event in a `Vec` behind a `Mutex`,
//! chained with SHA-256 so later tampering is detectable. Tests use it to
//! assert on exactly what the gate emitted; the demo uses it to print the
//! trail after a run.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use covenant_contracts::event::GateEvent;
use covenant_core::traits::GateSink;

use crate::{
    chain::{hash_record, verify_chain},
    record::{GateRecord, GateTrail},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct ChainState {
    /// All records appended so far.
    pub(crate) records: Vec<GateRecord>,

    /// `this_hash` of the last record, or `GENESIS_HASH` before the first.
    pub(crate) last_hash: String,
}

// ── Public sink ───────────────────────────────────────────────────────────────

/// An append-only gate sink backed by a SHA-256 hash chain.
///
/// `emit()` holds the lock only while appending, never across a review or
/// an action, so concurrent invocations serialize only on the append itself.
pub struct InMemoryGateSink {
    pub(crate) state: Mutex<ChainState>,
}

impl InMemoryGateSink {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ChainState {
                records: Vec::new(),
                last_hash: GateRecord::GENESIS_HASH.to_string(),
            }),
        }
    }

    // A panic elsewhere while holding the lock leaves the chain intact, so
    // recover the guard instead of propagating the poison.
    fn lock(&self) -> MutexGuard<'_, ChainState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The recorded events, in emission order.
    pub fn events(&self) -> Vec<GateEvent> {
        self.lock().records.iter().map(|r| r.event.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot every record written so far.
    pub fn export_log(&self) -> GateTrail {
        let state = self.lock();
        GateTrail {
            records: state.records.clone(),
            exported_at: Utc::now(),
            terminal_hash: state
                .records
                .last()
                .map(|r| r.this_hash.clone())
                .unwrap_or_default(),
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        verify_chain(&self.lock().records)
    }
}

impl Default for InMemoryGateSink {
    fn default() -> Self {
        Self::new()
    }
}

impl GateSink for InMemoryGateSink {
    fn emit(&self, event: &GateEvent) {
        let mut state = self.lock();

        let sequence = state.records.len() as u64;
        let prev_hash = std::mem::take(&mut state.last_hash);
        let this_hash = hash_record(sequence, event, &prev_hash);

        state.records.push(GateRecord {
            sequence,
            event: event.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.last_hash = this_hash;
    }
}
