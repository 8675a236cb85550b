use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::AlterationError;

/// Genome build an alteration is curated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceGenome {
    GRCh37,
    GRCh38,
}

impl FromStr for ReferenceGenome {
    type Err = AlterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grch37" | "hg19" => Ok(ReferenceGenome::GRCh37),
            "grch38" | "hg38" => Ok(ReferenceGenome::GRCh38),
            _ => Err(AlterationError::UnknownReferenceGenome(s.to_string())),
        }
    }
}

impl Display for ReferenceGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReferenceGenome::GRCh37 => "GRCh37",
            ReferenceGenome::GRCh38 => "GRCh38",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("GRCh37", ReferenceGenome::GRCh37)]
    #[case("grch38", ReferenceGenome::GRCh38)]
    #[case("hg19", ReferenceGenome::GRCh37)]
    #[case(" HG38 ", ReferenceGenome::GRCh38)]
    fn test_parse(#[case] input: &str, #[case] expected: ReferenceGenome) {
        assert_eq!(input.parse::<ReferenceGenome>(), Ok(expected));
    }

    #[rstest]
    fn test_parse_unknown() {
        let result = "mm10".parse::<ReferenceGenome>();
        assert_eq!(
            result,
            Err(AlterationError::UnknownReferenceGenome("mm10".to_string()))
        );
    }
}
