use std::fmt::{self, Display};

use crate::consts::*;
use crate::naming::remove_exclusion;

///
/// Umbrella terms that denote a computed membership set rather than one change.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalBucket {
    OncogenicMutations,
    TruncatingMutations,
    Fusions,
    GainOfFunctionMutations,
    LossOfFunctionMutations,
    SwitchOfFunctionMutations,
    Vus,
}

impl CategoricalBucket {
    pub const ALL: [CategoricalBucket; 7] = [
        CategoricalBucket::OncogenicMutations,
        CategoricalBucket::TruncatingMutations,
        CategoricalBucket::Fusions,
        CategoricalBucket::GainOfFunctionMutations,
        CategoricalBucket::LossOfFunctionMutations,
        CategoricalBucket::SwitchOfFunctionMutations,
        CategoricalBucket::Vus,
    ];

    ///
    /// Parse an alteration name into a bucket. Any exclusion clause is stripped
    /// first and the comparison ignores case.
    ///
    pub fn from_name(name: &str) -> Option<CategoricalBucket> {
        let base = remove_exclusion(name);
        CategoricalBucket::ALL
            .into_iter()
            .find(|bucket| bucket.name().eq_ignore_ascii_case(base.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CategoricalBucket::OncogenicMutations => ONCOGENIC_MUTATIONS,
            CategoricalBucket::TruncatingMutations => TRUNCATING_MUTATIONS,
            CategoricalBucket::Fusions => FUSIONS,
            CategoricalBucket::GainOfFunctionMutations => GAIN_OF_FUNCTION_MUTATIONS,
            CategoricalBucket::LossOfFunctionMutations => LOSS_OF_FUNCTION_MUTATIONS,
            CategoricalBucket::SwitchOfFunctionMutations => SWITCH_OF_FUNCTION_MUTATIONS,
            CategoricalBucket::Vus => VUS,
        }
    }

    ///
    /// The MUTATION_EFFECT label a function bucket collects, e.g. `gain-of-function`.
    ///
    pub fn effect_label(&self) -> Option<&'static str> {
        match self {
            CategoricalBucket::GainOfFunctionMutations => Some("gain-of-function"),
            CategoricalBucket::LossOfFunctionMutations => Some("loss-of-function"),
            CategoricalBucket::SwitchOfFunctionMutations => Some("switch-of-function"),
            CategoricalBucket::OncogenicMutations
            | CategoricalBucket::TruncatingMutations
            | CategoricalBucket::Fusions
            | CategoricalBucket::Vus => None,
        }
    }
}

impl Display for CategoricalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Oncogenic Mutations", Some(CategoricalBucket::OncogenicMutations))]
    #[case("oncogenic mutations {excluding V600E}", Some(CategoricalBucket::OncogenicMutations))]
    #[case("Truncating Mutations", Some(CategoricalBucket::TruncatingMutations))]
    #[case("FUSIONS", Some(CategoricalBucket::Fusions))]
    #[case("Gain-of-function Mutations", Some(CategoricalBucket::GainOfFunctionMutations))]
    #[case("vus", Some(CategoricalBucket::Vus))]
    #[case("V600E", None)]
    #[case("Oncogenic Mutation", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<CategoricalBucket>) {
        assert_eq!(CategoricalBucket::from_name(name), expected);
    }

    #[rstest]
    fn test_effect_label() {
        assert_eq!(
            CategoricalBucket::LossOfFunctionMutations.effect_label(),
            Some("loss-of-function")
        );
        assert_eq!(CategoricalBucket::Fusions.effect_label(), None);
    }
}
