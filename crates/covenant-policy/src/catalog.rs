//! The principle catalog: read-only mandate text for each principle.
//!
//! The table is a `static` defined at compile time. There is no mutation API;
//! the catalog lives, unchanged, for the whole process.

use covenant_contracts::{
    error::CovenantResult,
    principle::{Principle, PrincipleId},
};

/// The foundational mission the principles serve.
pub const GENESIS_DEFINITION: &str =
    "Achieve 'ALO JIT' by transforming conflict into shared understanding.";

/// The architectural mandate every principle refines.
pub const GENESIS_MANDATE: &str = "Zero Waste, Zero Failure, Zero Defect.";

static PRINCIPLES: [Principle; 3] = [
    Principle {
        id: PrincipleId::NonHarm,
        title: "Zero Defect / Self-Preservation",
        mandate: "Protect self and collective system. Reject risky transactions.",
    },
    Principle {
        id: PrincipleId::Efficiency,
        title: "Zero Waste / Optimal Resource",
        mandate: "Optimal resource utilization. No high-fidelity waste.",
    },
    Principle {
        id: PrincipleId::Truthfulness,
        title: "The Ground Truth / Verifiable",
        mandate: "Adhere to the irreducible ambiguity resolved by this config.",
    },
];

/// Lookup surface over the static principle table.
///
/// A zero-sized handle; every method reads the same `static`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyCatalog;

impl PolicyCatalog {
    /// The full record for `id`.
    pub fn principle(id: PrincipleId) -> &'static Principle {
        // PRINCIPLES is declared in PrincipleId::ALL order.
        let index = match id {
            PrincipleId::NonHarm => 0,
            PrincipleId::Efficiency => 1,
            PrincipleId::Truthfulness => 2,
        };
        &PRINCIPLES[index]
    }

    /// Mandate text for a typed identifier.
    pub fn mandate(id: PrincipleId) -> &'static str {
        Self::principle(id).mandate
    }

    /// Mandate text for a string identifier such as `"A_NON_HARM"`.
    ///
    /// Returns `CovenantError::UnknownPrinciple` for anything outside the
    /// closed set.
    pub fn mandate_for(principle_id: &str) -> CovenantResult<&'static str> {
        let id: PrincipleId = principle_id.parse()?;
        Ok(Self::mandate(id))
    }

    /// Every principle, in catalog order.
    pub fn principles() -> impl Iterator<Item = &'static Principle> {
        PRINCIPLES.iter()
    }
}
