//! Forwarding sinks: structured logging and fan-out.

use std::sync::Arc;

use tracing::{error, info};

use covenant_contracts::event::{GateEvent, GateEventKind};
use covenant_core::traits::GateSink;

/// Writes each gate event as a `tracing` record.
///
/// Interceptions and approvals log at `info`, blocks at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl GateSink for TracingSink {
    fn emit(&self, event: &GateEvent) {
        match &event.kind {
            GateEventKind::Intercepted => info!(
                invocation_id = %event.invocation_id,
                intent = %event.intent,
                "audit: intercepting task"
            ),
            GateEventKind::Approved => info!(
                invocation_id = %event.invocation_id,
                intent = %event.intent,
                "approved: intent passed review"
            ),
            GateEventKind::Blocked { reason } => error!(
                invocation_id = %event.invocation_id,
                intent = %event.intent,
                reason = %reason,
                "blocked: intent violates policy"
            ),
        }
    }
}

/// Forwards every event to each inner sink, in order.
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn GateSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn GateSink>>) -> Self {
        Self { sinks }
    }

    /// Append another sink; returns `self` for chaining.
    pub fn with(mut self, sink: Arc<dyn GateSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl GateSink for FanoutSink {
    fn emit(&self, event: &GateEvent) {
        for sink in &self.sinks {
            sink.emit(event);
        }
    }
}
