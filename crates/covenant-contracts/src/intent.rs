//! Intent and verdict types.
//!
//! These are the transient values that flow through a single gate
//! invocation: the caller declares an `Intent`, the reviewer answers with a
//! `ReviewVerdict`, and both are gone once the invocation returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::principle::PrincipleId;

/// Free-text description of the purpose of an about-to-run action.
///
/// Example: Intent("optimize_database_query")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent(String);

impl Intent {
    /// Placeholder used when the caller declares no intent at all.
    pub const UNKNOWN: &'static str = "unknown_intent";

    /// Construct an intent from caller-supplied text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The sentinel intent for callers that declared nothing.
    ///
    /// It is reviewed like any other text; it is not rejected for being absent.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is the `unknown_intent` sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Intent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Intent {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for Intent {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<Option<&str>> for Intent {
    fn from(text: Option<&str>) -> Self {
        text.map(Intent::new).unwrap_or_default()
    }
}

impl From<Option<String>> for Intent {
    fn from(text: Option<String>) -> Self {
        text.map(Intent).unwrap_or_default()
    }
}

/// Outcome of reviewing an `Intent`.
///
/// Boolean-equivalent: only `Accepted` lets the gate run the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewVerdict {
    /// No disqualifying signal was found.
    Accepted,

    /// The intent tripped at least one check.
    Rejected {
        /// The principle the failing check enforces, if the reviewer names one.
        principle: Option<PrincipleId>,
        /// Human-readable explanation, carried into the block event and the violation.
        reason: String,
    },
}

impl ReviewVerdict {
    /// Build a rejection with no associated principle.
    pub fn rejected(reason: impl Into<String>) -> Self {
        ReviewVerdict::Rejected {
            principle: None,
            reason: reason.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ReviewVerdict::Accepted)
    }
}

impl From<bool> for ReviewVerdict {
    /// `true` accepts; `false` rejects with a generic reason.
    fn from(accepted: bool) -> Self {
        if accepted {
            ReviewVerdict::Accepted
        } else {
            ReviewVerdict::rejected("intent rejected by reviewer")
        }
    }
}

/// Unique identifier for one gate invocation.
///
/// Both events of an invocation carry the same id so sinks can pair them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(pub uuid::Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
