//! # covenant-core
//!
//! The audit gate for COVENANT-governed actions.
//!
//! This crate provides:
//! - The three seams (`IntentReviewer`, `GateSink`, `Action`)
//! - The `AuditGate` that interposes review before every action
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use covenant_core::AuditGate;
//!
//! let gate = AuditGate::new(Arc::new(reviewer), Arc::new(sink));
//! let out = gate.invoke("optimize_database_query", || "done")?;
//! ```

pub mod gate;
pub mod traits;

pub use gate::AuditGate;
pub use traits::{Action, GateSink, IntentReviewer};
