//! Chained record and exported trail types.
//!
//! `GateRecord` is a single entry in the hash chain: it wraps a `GateEvent`
//! with a sequence number and the SHA-256 hashes that make tampering
//! detectable. `GateTrail` is the snapshot produced by `export_log()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use covenant_contracts::event::GateEvent;

/// A single entry in the SHA-256 hash chain of gate events.
///
/// Each record commits to the previous one via `prev_hash`. Modifying any
/// field, including those of the embedded `event`, invalidates `this_hash`
/// and is caught by `verify_chain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRecord {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The event as the gate emitted it.
    pub event: GateEvent,

    /// Hash (hex) of the previous record, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// Hash (hex) over (sequence, prev_hash, canonical JSON of event).
    pub this_hash: String,
}

impl GateRecord {
    /// The `prev_hash` of the first record in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// Snapshot of a sink's chain at export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateTrail {
    /// All records in chain order.
    pub records: Vec<GateRecord>,

    /// Wall-clock time (UTC) of the export.
    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last record; empty if nothing was recorded.
    pub terminal_hash: String,
}
