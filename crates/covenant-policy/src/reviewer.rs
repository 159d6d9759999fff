//! Keyword-driven intent reviewer.
//!
//! `KeywordReviewer` holds a validated `ReviewConfig` and implements the
//! `IntentReviewer` trait from covenant-core.
//!
//! Review algorithm:
//!
//! 1. Lower-case the intent once.
//! 2. Test every check in declaration order.
//! 3. The first check with a matching term rejects, quoting the check id,
//!    the term, and the principle's mandate from the catalog.
//! 4. If no check fires → `Accepted`.

use std::path::Path;

use tracing::{debug, warn};

use covenant_contracts::{
    error::{CovenantError, CovenantResult},
    intent::{Intent, ReviewVerdict},
};
use covenant_core::traits::IntentReviewer;

use crate::{catalog::PolicyCatalog, check::ReviewConfig};

/// An `IntentReviewer` that rejects intents containing disqualifying terms.
///
/// `KeywordReviewer::default()` carries the stock harm and waste checks.
/// Construct via `from_toml_str` or `from_file` to supply your own.
///
/// ```rust,ignore
/// use covenant_policy::KeywordReviewer;
///
/// let reviewer = KeywordReviewer::from_file(Path::new("policies/review.toml"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordReviewer {
    config: ReviewConfig,
}

impl KeywordReviewer {
    /// Build a reviewer from an already-parsed config.
    ///
    /// Returns `CovenantError::ConfigError` if a check has no terms or a
    /// blank term, since an empty substring would match every intent.
    pub fn new(config: ReviewConfig) -> CovenantResult<Self> {
        for check in &config.checks {
            if check.terms.is_empty() {
                return Err(CovenantError::ConfigError {
                    reason: format!("check '{}' has no terms", check.id),
                });
            }
            if check.terms.iter().any(|t| t.trim().is_empty()) {
                return Err(CovenantError::ConfigError {
                    reason: format!("check '{}' contains a blank term", check.id),
                });
            }
        }
        Ok(Self { config })
    }

    /// Parse `s` as TOML and build a `KeywordReviewer`.
    ///
    /// Returns `CovenantError::ConfigError` if the TOML is malformed, names a
    /// principle outside the closed set, or fails validation.
    pub fn from_toml_str(s: &str) -> CovenantResult<Self> {
        let config: ReviewConfig = toml::from_str(s).map_err(|e| CovenantError::ConfigError {
            reason: format!("failed to parse review TOML: {}", e),
        })?;
        Self::new(config)
    }

    /// Read the file at `path` and parse it as TOML review configuration.
    pub fn from_file(path: &Path) -> CovenantResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CovenantError::ConfigError {
            reason: format!("failed to read review file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }
}

impl IntentReviewer for KeywordReviewer {
    fn review(&self, intent: &Intent) -> ReviewVerdict {
        let lowered = intent.as_str().to_lowercase();

        for check in &self.config.checks {
            let Some(term) = check.matched_term(&lowered) else {
                continue;
            };

            warn!(
                check_id = %check.id,
                principle = %check.principle,
                term = %term,
                intent = %intent,
                "intent tripped keyword check"
            );

            return ReviewVerdict::Rejected {
                principle: Some(check.principle),
                reason: format!(
                    "intent '{}' violates {} via check '{}' (matched '{}'): {}",
                    intent,
                    check.principle,
                    check.id,
                    term,
                    PolicyCatalog::mandate(check.principle)
                ),
            };
        }

        debug!(intent = %intent, checks = self.config.checks.len(), "intent accepted");
        ReviewVerdict::Accepted
    }
}

/// An `IntentReviewer` that accepts everything.
///
/// For hosts that want the gate's observability without any filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl IntentReviewer for AcceptAll {
    fn review(&self, _intent: &Intent) -> ReviewVerdict {
        ReviewVerdict::Accepted
    }
}
