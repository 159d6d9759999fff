//! Gate observability records.
//!
//! Every invocation of the audit gate produces exactly two `GateEvent`s, in
//! order: one `Intercepted`, then one of `Approved` or `Blocked`. Sinks
//! receive them as they happen; the gate never reads them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::{Intent, InvocationId};

/// What happened at this point of the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateEventKind {
    /// The gate received the call and is about to review the intent.
    Intercepted,

    /// The intent was accepted; the action runs next.
    Approved,

    /// The intent was rejected; the action will not run.
    Blocked {
        /// The reviewer's explanation.
        reason: String,
    },
}

/// A single observability record emitted by the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateEvent {
    /// The invocation this event belongs to.
    pub invocation_id: InvocationId,
    /// The intent as the gate resolved it (after defaulting).
    pub intent: Intent,
    pub kind: GateEventKind,
    /// Wall-clock time the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl GateEvent {
    /// Stamp a new event with the current time.
    pub fn now(invocation_id: InvocationId, intent: &Intent, kind: GateEventKind) -> Self {
        Self {
            invocation_id,
            intent: intent.clone(),
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Short lower-case label for the event kind.
    pub fn label(&self) -> &'static str {
        match self.kind {
            GateEventKind::Intercepted => "intercepted",
            GateEventKind::Approved => "approved",
            GateEventKind::Blocked { .. } => "blocked",
        }
    }
}
