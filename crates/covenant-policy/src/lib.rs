//! # covenant-policy
//!
//! The principle catalog and the default intent reviewer for COVENANT.
//!
//! ## Overview
//!
//! [`PolicyCatalog`] maps each principle of the closed set to its mandate
//! text. [`KeywordReviewer`] implements the
//! [`IntentReviewer`](covenant_core::traits::IntentReviewer) trait with a
//! conjunction of independent keyword checks; the stock configuration rejects
//! any intent mentioning "harm" or "waste".
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use covenant_core::AuditGate;
//! use covenant_policy::KeywordReviewer;
//!
//! let gate = AuditGate::new(Arc::new(KeywordReviewer::default()), sink);
//! ```
//!
//! ## Custom checks
//!
//! Checks can be loaded from TOML. Each `[[checks]]` table names the
//! principle it enforces and the terms that trip it.

pub mod catalog;
pub mod check;
pub mod reviewer;

pub use catalog::PolicyCatalog;
pub use check::{KeywordCheck, ReviewConfig};
pub use reviewer::{AcceptAll, KeywordReviewer};

// ── Tests ─────────────────────────────────────────────────────────────────────
