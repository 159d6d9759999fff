//! # covenant-audit
//!
//! Observability sinks for the COVENANT audit gate.
//!
//! ## Overview
//!
//! The gate reports every interception and outcome to an injected
//! [`GateSink`](covenant_core::traits::GateSink). This crate provides three:
//!
//! - [`TracingSink`]: structured `tracing` records
//! - [`InMemoryGateSink`]: append-only trail where each record links to the
//!   previous one by SHA-256 hash, so tampering is caught by [`verify_chain`]
//! - [`FanoutSink`]: forwards to several sinks in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use covenant_audit::{FanoutSink, InMemoryGateSink, TracingSink};
//!
//! let trail = Arc::new(InMemoryGateSink::new());
//! let sink = FanoutSink::default().with(Arc::new(TracingSink)).with(trail.clone());
//! // ... run the gate ...
//! assert!(trail.verify_integrity());
//! ```

pub mod chain;
pub mod memory;
pub mod record;
pub mod sink;

pub use chain::{hash_record, verify_chain};
pub use memory::InMemoryGateSink;
pub use record::{GateRecord, GateTrail};
pub use sink::{FanoutSink, TracingSink};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use covenant_contracts::{
        event::{GateEvent, GateEventKind},
        intent::{Intent, InvocationId, ReviewVerdict},
    };
    use covenant_core::{traits::GateSink, AuditGate};

    use super::{FanoutSink, GateRecord, InMemoryGateSink, TracingSink};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn event(text: &str, kind: GateEventKind) -> GateEvent {
        GateEvent::now(InvocationId::new(), &Intent::new(text), kind)
    }

    fn harm_gate(sink: Arc<dyn GateSink>) -> AuditGate {
        AuditGate::new(
            Arc::new(|intent: &Intent| {
                ReviewVerdict::from(!intent.as_str().to_lowercase().contains("harm"))
            }),
            sink,
        )
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_hash_chain_integrity() {
        let sink = InMemoryGateSink::new();
        sink.emit(&event("a", GateEventKind::Intercepted));
        sink.emit(&event("a", GateEventKind::Approved));
        sink.emit(&event("b", GateEventKind::Intercepted));

        assert_eq!(sink.len(), 3);
        assert!(sink.verify_integrity(), "chain must be valid after sequential emits");
    }

    #[test]
    fn test_tamper_detection() {
        let sink = InMemoryGateSink::new();
        sink.emit(&event("harm", GateEventKind::Intercepted));
        sink.emit(&event(
            "harm",
            GateEventKind::Blocked { reason: "harm".to_string() },
        ));

        // Rewrite history: pretend the block was an approval.
        {
            let mut state = sink.state.lock().unwrap();
            state.records[1].event.kind = GateEventKind::Approved;
        }

        assert!(!sink.verify_integrity(), "chain must detect a rewritten outcome");
    }

    #[test]
    fn test_reordering_detected() {
        let sink = InMemoryGateSink::new();
        sink.emit(&event("a", GateEventKind::Intercepted));
        sink.emit(&event("a", GateEventKind::Approved));

        let mut trail = sink.export_log();
        trail.records.swap(0, 1);
        assert!(!super::verify_chain(&trail.records));
    }

    #[test]
    fn test_genesis_and_sequence() {
        let sink = InMemoryGateSink::new();
        for name in ["a", "b", "c"] {
            sink.emit(&event(name, GateEventKind::Intercepted));
        }

        let trail = sink.export_log();
        assert_eq!(trail.records[0].prev_hash, GateRecord::GENESIS_HASH);
        for (idx, record) in trail.records.iter().enumerate() {
            assert_eq!(record.sequence, idx as u64);
        }
        assert_eq!(trail.terminal_hash, trail.records[2].this_hash);
    }

    #[test]
    fn test_verify_empty() {
        let sink = InMemoryGateSink::default();
        assert!(sink.is_empty());
        assert!(sink.verify_integrity());
        assert!(super::verify_chain(&[]));
        assert_eq!(sink.export_log().terminal_hash, "");
    }

    /// Each invocation leaves exactly two records: intercepted, then outcome.
    #[test]
    fn test_gate_emits_two_events_per_invocation() {
        let sink = Arc::new(InMemoryGateSink::new());
        let gate = harm_gate(sink.clone());

        assert_eq!(gate.invoke("optimize_database_query", || "done"), Ok("done"));
        assert!(gate.invoke("execute risky transaction with harm", || "done").is_err());

        let events = sink.events();
        let labels: Vec<&str> = events.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["intercepted", "approved", "intercepted", "blocked"]);
        assert_eq!(events[2].intent.as_str(), "execute risky transaction with harm");
        assert!(sink.verify_integrity());
    }

    #[test]
    fn test_fanout_reaches_every_sink() {
        let first = Arc::new(InMemoryGateSink::new());
        let second = Arc::new(InMemoryGateSink::new());
        let fanout = FanoutSink::new(vec![first.clone() as Arc<dyn GateSink>])
            .with(Arc::new(TracingSink))
            .with(second.clone());

        let gate = harm_gate(Arc::new(fanout));
        gate.invoke_undeclared(|| ()).unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(second.events()[0].intent.as_str(), "unknown_intent");
    }

    #[test]
    fn test_concurrent_emits_keep_chain_valid() {
        let sink = Arc::new(InMemoryGateSink::new());
        let gate = harm_gate(sink.clone());

        std::thread::scope(|scope| {
            for i in 0..10 {
                let gate = &gate;
                scope.spawn(move || {
                    let _ = gate.invoke(format!("task-{i}"), || i);
                });
            }
        });

        assert_eq!(sink.len(), 20);
        assert!(sink.verify_integrity());
    }
}
