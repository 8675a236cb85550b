use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::AlterationError;

///
/// Curated or inferred call on whether an alteration drives cancer.
///
/// Variants are declared strongest first, so the derived `Ord` ranks
/// `Oncogenic` lowest; use [`Oncogenicity::strongest`] to pick the leading call.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Oncogenicity {
    Oncogenic,
    LikelyOncogenic,
    Resistance,
    LikelyNeutral,
    Inconclusive,
    Unknown,
}

impl Oncogenicity {
    ///
    /// Parse the free-text effect of an ONCOGENIC evidence. Unrecognised text
    /// yields `None`.
    ///
    pub fn from_effect(effect: &str) -> Option<Oncogenicity> {
        effect.parse().ok()
    }

    pub fn is_oncogenic(&self) -> bool {
        matches!(
            self,
            Oncogenicity::Oncogenic | Oncogenicity::LikelyOncogenic | Oncogenicity::Resistance
        )
    }

    /// Anything that says more than "we do not know".
    pub fn is_important(&self) -> bool {
        !matches!(self, Oncogenicity::Unknown | Oncogenicity::Inconclusive)
    }

    pub fn strongest<I: IntoIterator<Item = Oncogenicity>>(calls: I) -> Option<Oncogenicity> {
        calls.into_iter().min()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Oncogenicity::Oncogenic => "Oncogenic",
            Oncogenicity::LikelyOncogenic => "Likely Oncogenic",
            Oncogenicity::Resistance => "Resistance",
            Oncogenicity::LikelyNeutral => "Likely Neutral",
            Oncogenicity::Inconclusive => "Inconclusive",
            Oncogenicity::Unknown => "Unknown",
        }
    }
}

/// Any important call is present in `calls`.
pub fn has_important_oncogenicity(calls: &[Oncogenicity]) -> bool {
    calls.iter().any(Oncogenicity::is_important)
}

/// Any call in `calls` is oncogenic-like.
pub fn has_oncogenic(calls: &[Oncogenicity]) -> bool {
    calls.iter().any(Oncogenicity::is_oncogenic)
}

impl FromStr for Oncogenicity {
    type Err = AlterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oncogenic" | "yes" => Ok(Oncogenicity::Oncogenic),
            "likely oncogenic" | "likely" => Ok(Oncogenicity::LikelyOncogenic),
            "resistance" => Ok(Oncogenicity::Resistance),
            "likely neutral" => Ok(Oncogenicity::LikelyNeutral),
            "inconclusive" => Ok(Oncogenicity::Inconclusive),
            "unknown" => Ok(Oncogenicity::Unknown),
            _ => Err(AlterationError::UnknownOncogenicity(s.to_string())),
        }
    }
}

impl Display for Oncogenicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Oncogenic", Some(Oncogenicity::Oncogenic))]
    #[case("likely oncogenic", Some(Oncogenicity::LikelyOncogenic))]
    #[case(" Likely Neutral ", Some(Oncogenicity::LikelyNeutral))]
    #[case("Gain-of-function", None)]
    fn test_from_effect(#[case] effect: &str, #[case] expected: Option<Oncogenicity>) {
        assert_eq!(Oncogenicity::from_effect(effect), expected);
    }

    #[rstest]
    fn test_grades() {
        assert_eq!(Oncogenicity::Resistance.is_oncogenic(), true);
        assert_eq!(Oncogenicity::LikelyNeutral.is_oncogenic(), false);
        assert_eq!(Oncogenicity::LikelyNeutral.is_important(), true);
        assert_eq!(Oncogenicity::Inconclusive.is_important(), false);
        assert_eq!(has_important_oncogenicity(&[Oncogenicity::Unknown]), false);
        assert_eq!(
            has_oncogenic(&[Oncogenicity::Unknown, Oncogenicity::LikelyOncogenic]),
            true
        );
    }

    #[rstest]
    fn test_strongest() {
        let calls = vec![Oncogenicity::LikelyNeutral, Oncogenicity::LikelyOncogenic];
        assert_eq!(Oncogenicity::strongest(calls), Some(Oncogenicity::LikelyOncogenic));
        assert_eq!(Oncogenicity::strongest(Vec::new()), None);
    }
}
