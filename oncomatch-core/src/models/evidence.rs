use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::AlterationError;
use crate::models::alteration::Alteration;
use crate::models::oncogenicity::Oncogenicity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvidenceType {
    MutationEffect,
    Oncogenic,
    Other,
}

impl FromStr for EvidenceType {
    type Err = AlterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MUTATION_EFFECT" => Ok(EvidenceType::MutationEffect),
            "ONCOGENIC" => Ok(EvidenceType::Oncogenic),
            "OTHER" => Ok(EvidenceType::Other),
            _ => Err(AlterationError::UnknownEvidenceType(s.to_string())),
        }
    }
}

impl Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvidenceType::MutationEffect => "MUTATION_EFFECT",
            EvidenceType::Oncogenic => "ONCOGENIC",
            EvidenceType::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}

///
/// A curated statement about one or more alterations.
///
/// `known_effect` carries the oncogenicity for ONCOGENIC evidence and the
/// biological effect (e.g. "Likely Gain-of-function") for MUTATION_EFFECT evidence.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evidence {
    pub id: u64,
    pub evidence_type: EvidenceType,
    pub known_effect: Option<String>,
    pub alterations: Vec<Alteration>,
}

impl Evidence {
    pub fn new(
        id: u64,
        evidence_type: EvidenceType,
        known_effect: Option<&str>,
        alterations: Vec<Alteration>,
    ) -> Self {
        Evidence {
            id,
            evidence_type,
            known_effect: known_effect.map(str::to_string),
            alterations,
        }
    }

    pub fn oncogenicity(&self) -> Option<Oncogenicity> {
        match self.evidence_type {
            EvidenceType::Oncogenic => self.known_effect.as_deref().and_then(Oncogenicity::from_effect),
            _ => None,
        }
    }

    ///
    /// The effect as used to name the function buckets: lower case with
    /// "likely" and every space removed, e.g. "Likely Loss-of-function" becomes
    /// "loss-of-function".
    ///
    pub fn normalized_effect(&self) -> Option<String> {
        let effect = self.known_effect.as_deref()?;
        let normalized = effect.to_lowercase().replace("likely", "").replace(' ', "");
        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }

    pub fn references(&self, alteration: &Alteration) -> bool {
        self.alterations.contains(alteration)
    }
}
