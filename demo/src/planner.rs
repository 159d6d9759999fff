//! The planner agent: free to decide what to do, gated on what it executes.

use covenant_contracts::error::CovenantResult;
use covenant_core::AuditGate;

/// An agent whose every task goes through the audit gate.
pub struct PlannerAgent {
    name: String,
    gate: AuditGate,
}

impl PlannerAgent {
    pub fn new(name: impl Into<String>, gate: AuditGate) -> Self {
        Self {
            name: name.into(),
            gate,
        }
    }

    /// Execute `payload` under the declared `intent`.
    ///
    /// Returns the action line printed for the task. A refused task comes
    /// back as `CovenantError::PolicyViolation` and prints nothing.
    pub fn execute_task(&self, intent: &str, payload: &str) -> CovenantResult<String> {
        let line = self.gate.invoke(intent, || {
            let line = format!("{} is executing task: {}", self.name, payload);
            println!("  ACTION: {line}");
            line
        })?;
        Ok(line)
    }
}
