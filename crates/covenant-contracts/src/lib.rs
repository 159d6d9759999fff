//! # covenant-contracts
//!
//! Shared types and error contracts for the COVENANT audit gate.
//!
//! Every crate in the workspace imports from here. No enforcement logic lives
//! in this crate, only data definitions and error types.

pub mod error;
pub mod event;
pub mod intent;
pub mod principle;

#[cfg(test)]
mod tests {
    use super::*;
    use error::{CovenantError, PolicyViolation};
    use event::{GateEvent, GateEventKind};
    use intent::{Intent, InvocationId, ReviewVerdict};
    use principle::PrincipleId;

    // ── Intent ───────────────────────────────────────────────────────────────

    #[test]
    fn intent_defaults_to_unknown_sentinel() {
        assert_eq!(Intent::default().as_str(), "unknown_intent");
        assert!(Intent::default().is_unknown());

        let absent: Option<&str> = None;
        assert_eq!(Intent::from(absent), Intent::unknown());

        let absent_owned: Option<String> = None;
        assert!(Intent::from(absent_owned).is_unknown());
    }

    #[test]
    fn intent_from_present_option_keeps_text() {
        let intent = Intent::from(Some("optimize_database_query"));
        assert_eq!(intent.as_str(), "optimize_database_query");
        assert!(!intent.is_unknown());
    }

    // ── ReviewVerdict ────────────────────────────────────────────────────────

    #[test]
    fn verdict_is_boolean_equivalent() {
        assert!(ReviewVerdict::Accepted.is_accepted());
        assert!(!ReviewVerdict::rejected("nope").is_accepted());
        assert_eq!(ReviewVerdict::from(true), ReviewVerdict::Accepted);
        assert!(!ReviewVerdict::from(false).is_accepted());
    }

    #[test]
    fn rejected_verdict_round_trips() {
        let original = ReviewVerdict::Rejected {
            principle: Some(PrincipleId::NonHarm),
            reason: "intent mentions 'harm'".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("A_NON_HARM"), "principle should use canonical id: {json}");
        let decoded: ReviewVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── PrincipleId ──────────────────────────────────────────────────────────

    #[test]
    fn principle_id_parses_canonical_names() {
        assert_eq!("A_NON_HARM".parse::<PrincipleId>().unwrap(), PrincipleId::NonHarm);
        assert_eq!("B_EFFICIENCY".parse::<PrincipleId>().unwrap(), PrincipleId::Efficiency);
        assert_eq!(
            "C_TRUTHFULNESS".parse::<PrincipleId>().unwrap(),
            PrincipleId::Truthfulness
        );
    }

    #[test]
    fn principle_id_rejects_unknown_names() {
        match "D_OBEDIENCE".parse::<PrincipleId>() {
            Err(CovenantError::UnknownPrinciple { id }) => assert_eq!(id, "D_OBEDIENCE"),
            other => panic!("expected UnknownPrinciple, got {:?}", other),
        }
    }

    /// Only the exact canonical spelling is part of the closed set.
    #[test]
    fn principle_id_rejects_case_and_padding_variants() {
        for variant in [
            "a_non_harm",
            "b_efficiency",
            "c_Truthfulness",
            " B_EFFICIENCY\n",
            "A_NON_HARM ",
        ] {
            match variant.parse::<PrincipleId>() {
                Err(CovenantError::UnknownPrinciple { id }) => assert_eq!(id, variant),
                other => panic!("expected UnknownPrinciple for {variant:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn principle_id_display_matches_as_str() {
        for id in PrincipleId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    // ── GateEvent ────────────────────────────────────────────────────────────

    #[test]
    fn blocked_event_serializes_reason() {
        let event = GateEvent::now(
            InvocationId::new(),
            &Intent::new("waste cycles"),
            GateEventKind::Blocked { reason: "waste".to_string() },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["kind"], "blocked");
        assert_eq!(json["kind"]["reason"], "waste");
        assert_eq!(event.label(), "blocked");
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn policy_violation_display_carries_intent() {
        let violation = PolicyViolation {
            intent: Intent::new("execute risky transaction with harm"),
            principle: Some(PrincipleId::NonHarm),
            reason: "matched 'harm'".to_string(),
        };
        let msg = CovenantError::from(violation).to_string();
        assert!(msg.contains("rejected by policy enforcer"));
        assert!(msg.contains("execute risky transaction with harm"));
    }

    #[test]
    fn config_error_display() {
        let err = CovenantError::ConfigError {
            reason: "check 'x' has no terms".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("no terms"));
    }
}
