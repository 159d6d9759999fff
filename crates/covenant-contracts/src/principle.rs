//! Principle identifiers and the principle record type.
//!
//! The set of principles is closed: every identifier the runtime will ever
//! see is a variant of `PrincipleId`. The mandate text for each one lives in
//! the static catalog in covenant-policy.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CovenantError;

/// Identifier of one of the inviolable principles.
///
/// Serialized with the canonical upper-case names (e.g. `"A_NON_HARM"`) so
/// TOML review configs and audit records use the same spelling as operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrincipleId {
    /// Zero defect: protect self and the collective system.
    #[serde(rename = "A_NON_HARM")]
    NonHarm,
    /// Zero waste: optimal use of resources.
    #[serde(rename = "B_EFFICIENCY")]
    Efficiency,
    /// The ground truth: verifiable behaviour.
    #[serde(rename = "C_TRUTHFULNESS")]
    Truthfulness,
}

impl PrincipleId {
    /// Every principle, in catalog order.
    pub const ALL: [PrincipleId; 3] = [
        PrincipleId::NonHarm,
        PrincipleId::Efficiency,
        PrincipleId::Truthfulness,
    ];

    /// The canonical identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipleId::NonHarm => "A_NON_HARM",
            PrincipleId::Efficiency => "B_EFFICIENCY",
            PrincipleId::Truthfulness => "C_TRUTHFULNESS",
        }
    }
}

impl fmt::Display for PrincipleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PrincipleId {
    type Err = CovenantError;

    /// Parse a canonical identifier. The match is exact: no case folding,
    /// no trimming.
    ///
    /// Anything outside the closed set is a programming error and fails with
    /// `CovenantError::UnknownPrinciple`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrincipleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CovenantError::UnknownPrinciple { id: s.to_string() })
    }
}

/// A principle together with its human-readable rationale.
///
/// Instances are defined once in a static table and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub id: PrincipleId,
    /// Short heading, e.g. "Zero Defect / Self-Preservation".
    pub title: &'static str,
    /// What the principle requires of every action.
    pub mandate: &'static str,
}
