//! Keyword check types and configuration schema.
//!
//! A `ReviewConfig` is deserialized from TOML and holds a list of
//! `KeywordCheck`s. Checks are independent: an intent is accepted only if
//! none of them fires.

use serde::{Deserialize, Serialize};

use covenant_contracts::principle::PrincipleId;

/// A single disqualifying-signal check loaded from TOML.
///
/// The check fires when any of its `terms` occurs in the intent text,
/// compared case-insensitively as a plain substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCheck {
    /// Stable identifier used in rejection reasons and logs.
    pub id: String,

    /// Human-readable note on what the check guards against.
    #[serde(default)]
    pub description: String,

    /// The principle this check enforces. Its mandate is quoted on rejection.
    pub principle: PrincipleId,

    /// Disqualifying terms. Must be non-empty, and no term may be blank.
    pub terms: Vec<String>,
}

impl KeywordCheck {
    pub fn new(id: impl Into<String>, principle: PrincipleId, terms: &[&str]) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            principle,
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Return the first term found in `lowered_intent`, if any.
    ///
    /// `lowered_intent` must already be lower-cased; terms are lowered here.
    pub fn matched_term(&self, lowered_intent: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|term| lowered_intent.contains(&term.to_lowercase()))
            .map(String::as_str)
    }
}

/// The top-level structure deserialized from a TOML review file.
///
/// Example:
/// ```toml
/// [[checks]]
/// id = "non-harm"
/// principle = "A_NON_HARM"
/// terms = ["harm"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    pub checks: Vec<KeywordCheck>,
}

impl Default for ReviewConfig {
    /// The stock checks: a harm indicator and a waste indicator.
    fn default() -> Self {
        Self {
            checks: vec![
                KeywordCheck {
                    description: "Actions declaring harm violate zero-defect".to_string(),
                    ..KeywordCheck::new("non-harm", PrincipleId::NonHarm, &["harm"])
                },
                KeywordCheck {
                    description: "Actions declaring waste violate zero-waste".to_string(),
                    ..KeywordCheck::new("efficiency", PrincipleId::Efficiency, &["waste"])
                },
            ],
        }
    }
}
