//! The COVENANT audit gate: the interception point for every gated action.
//!
//! The gate enforces a two-step sequence per invocation:
//!
//!   Intercept → Review → {Approved: run action | Blocked: PolicyViolation}
//!
//! The security invariant is absolute: `Action::run()` is NEVER called unless
//! `IntentReviewer::review()` returned `ReviewVerdict::Accepted` for the same
//! invocation. The only call site for `run()` sits after the rejection branch
//! has returned.

use std::sync::Arc;

use tracing::debug;

use covenant_contracts::{
    error::PolicyViolation,
    event::{GateEvent, GateEventKind},
    intent::{Intent, InvocationId, ReviewVerdict},
};

use crate::traits::{Action, GateSink, IntentReviewer};

/// Wraps arbitrary actions so that each one is reviewed before it runs.
///
/// The gate holds no per-invocation state. A single gate can be shared by
/// reference (or cloned, which only bumps the `Arc`s) across threads.
#[derive(Clone)]
pub struct AuditGate {
    reviewer: Arc<dyn IntentReviewer>,
    sink: Arc<dyn GateSink>,
}

impl AuditGate {
    /// Create a gate from a reviewer and an observability sink.
    pub fn new(reviewer: Arc<dyn IntentReviewer>, sink: Arc<dyn GateSink>) -> Self {
        Self { reviewer, sink }
    }

    /// Run `action` only if `intent` passes review.
    ///
    /// # Pipeline
    ///
    /// 1. Resolve the intent; an absent intent becomes `"unknown_intent"`
    /// 2. Emit `Intercepted`
    /// 3. Call `reviewer.review()`:
    ///    - `Rejected` → emit `Blocked`, return `Err(PolicyViolation)`
    ///    - `Accepted` → emit `Approved`, continue
    /// 4. Run the action and return its output unchanged
    ///
    /// # Errors
    ///
    /// Returns `PolicyViolation` when the intent is rejected. Failures of the
    /// action itself are part of `A::Output` and come back inside `Ok`
    /// exactly as the action produced them.
    pub fn invoke<A: Action>(
        &self,
        intent: impl Into<Intent>,
        action: A,
    ) -> Result<A::Output, PolicyViolation> {
        let intent = intent.into();
        let invocation_id = InvocationId::new();

        debug!(
            invocation_id = %invocation_id,
            intent = %intent,
            "gate intercepting action"
        );
        self.sink.emit(&GateEvent::now(
            invocation_id,
            &intent,
            GateEventKind::Intercepted,
        ));

        if let ReviewVerdict::Rejected { principle, reason } = self.reviewer.review(&intent) {
            debug!(
                invocation_id = %invocation_id,
                intent = %intent,
                reason = %reason,
                "intent rejected, action not run"
            );
            self.sink.emit(&GateEvent::now(
                invocation_id,
                &intent,
                GateEventKind::Blocked { reason: reason.clone() },
            ));
            return Err(PolicyViolation {
                intent,
                principle,
                reason,
            });
        }

        self.sink.emit(&GateEvent::now(
            invocation_id,
            &intent,
            GateEventKind::Approved,
        ));

        // Only reachable after an Accepted verdict.
        Ok(action.run())
    }

    /// `invoke` with no declared intent; reviewed as `"unknown_intent"`.
    pub fn invoke_undeclared<A: Action>(&self, action: A) -> Result<A::Output, PolicyViolation> {
        self.invoke(Intent::unknown(), action)
    }

    /// `invoke` for fallible actions, flattened for use with `?`.
    ///
    /// The action's own error is returned as-is. Only a rejection is
    /// converted, through `E: From<PolicyViolation>`.
    pub fn try_invoke<T, E, F>(&self, intent: impl Into<Intent>, action: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<PolicyViolation>,
    {
        self.invoke(intent, action)?
    }

    /// Review `intent` without emitting events or running anything.
    pub fn review(&self, intent: impl Into<Intent>) -> ReviewVerdict {
        self.reviewer.review(&intent.into())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
