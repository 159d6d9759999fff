//! Trait definitions for the COVENANT gate.
//!
//! These three traits define the trust boundary:
//!
//! - `Action`         — untrusted work owned by the caller
//! - `IntentReviewer` — trusted predicate (consulted before the action runs)
//! - `GateSink`       — observer (receives every interception and outcome)
//!
//! The gate wires them together. An `Action` is never run unless the
//! reviewer accepted its intent in the same invocation.

use covenant_contracts::{
    event::GateEvent,
    intent::{Intent, ReviewVerdict},
};

/// A unit of work with side effects, owned by the caller.
///
/// Any `FnOnce() -> R` closure is an action; arguments are captured by the
/// closure. Callable objects implement the trait directly. The gate consumes
/// the action for the duration of one invocation and never stores it.
pub trait Action {
    /// Whatever the action returns, including a `Result` if it can fail.
    type Output;

    /// Run the action. Called by the gate only after approval.
    fn run(self) -> Self::Output;
}

impl<F, R> Action for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    fn run(self) -> R {
        self()
    }
}

/// The intent reviewer: decides whether a declared intent may proceed.
///
/// Implementations are **trusted** and must hold no shared mutable state, so
/// the gate can consult them from any number of threads at once. A reviewer
/// that needs I/O must finish it before returning; the verdict is always
/// produced synchronously for the invocation it serves.
pub trait IntentReviewer: Send + Sync {
    /// Review `intent` and return the verdict.
    fn review(&self, intent: &Intent) -> ReviewVerdict;
}

impl<F> IntentReviewer for F
where
    F: Fn(&Intent) -> ReviewVerdict + Send + Sync,
{
    fn review(&self, intent: &Intent) -> ReviewVerdict {
        self(intent)
    }
}

/// Receiver for gate observability events.
///
/// Emission is fire-and-forget: there is no return value, so a sink has no
/// way to influence the accept/reject decision.
pub trait GateSink: Send + Sync {
    /// Record one event. Called twice per invocation, in order.
    fn emit(&self, event: &GateEvent);
}
