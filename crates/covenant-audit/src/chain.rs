//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   3. canonical JSON of the event (serde_json, no pretty-printing)

use sha2::{Digest, Sha256};

use covenant_contracts::event::GateEvent;

use crate::record::GateRecord;

/// Compute the SHA-256 hash for one gate record.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `event` cannot be serialized to JSON, which cannot happen for
/// `GateEvent`: it has no maps and no non-string keys.
pub fn hash_record(sequence: u64, event: &GateEvent, prev_hash: &str) -> String {
    let event_json =
        serde_json::to_vec(event).expect("GateEvent must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&event_json);

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a chain of gate records.
///
/// Valid when every record's `prev_hash` equals the previous record's
/// `this_hash` (or `GENESIS_HASH` for the first), every `sequence` equals its
/// position, and every `this_hash` matches the recomputed value. An empty
/// chain is valid.
pub fn verify_chain(records: &[GateRecord]) -> bool {
    let mut expected_prev: &str = GateRecord::GENESIS_HASH;

    for (position, record) in records.iter().enumerate() {
        if record.sequence != position as u64 || record.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_record(record.sequence, &record.event, &record.prev_hash);
        if record.this_hash != recomputed {
            return false;
        }

        expected_prev = record.this_hash.as_str();
    }

    true
}
