//! Error types for the COVENANT gate.
//!
//! The gate itself produces exactly one failure, `PolicyViolation`. Errors
//! raised by a gated action are never converted into these types by the
//! gate; they travel back to the caller untouched.

use thiserror::Error;

use crate::{intent::Intent, principle::PrincipleId};

/// The reviewer rejected the declared intent, so the action never ran.
///
/// A violation is final: the gate does not retry or recover from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("action rejected by policy enforcer: {intent} ({reason})")]
pub struct PolicyViolation {
    /// The offending intent text.
    pub intent: Intent,
    /// The principle the failing check enforces, when known.
    pub principle: Option<PrincipleId>,
    /// The reviewer's explanation.
    pub reason: String,
}

/// The unified error type for the COVENANT crates.
#[derive(Debug, Error)]
pub enum CovenantError {
    /// An intent was rejected at the audit gate.
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),

    /// A principle identifier outside the closed set was looked up.
    ///
    /// The set is fixed at compile time, so this is a programming error.
    #[error("unknown principle '{id}'")]
    UnknownPrinciple { id: String },

    /// Reviewer configuration is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the COVENANT crates.
pub type CovenantResult<T> = Result<T, CovenantError>;
