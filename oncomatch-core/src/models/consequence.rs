use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use fxhash::FxHashMap;

use crate::consts::*;

///
/// Molecular consequence of an alteration on the protein, e.g. `missense_variant`.
///
/// Identity is the term. `any` stands for every consequence in range queries,
/// `NA` never takes part in matching.
///
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantConsequence {
    pub term: String,
    pub is_generally_truncating: bool,
    pub description: String,
}

impl VariantConsequence {
    pub fn new(term: &str, is_generally_truncating: bool, description: &str) -> Self {
        VariantConsequence {
            term: term.to_string(),
            is_generally_truncating,
            description: description.to_string(),
        }
    }

    pub fn is(&self, term: &str) -> bool {
        self.term == term
    }

    pub fn is_na(&self) -> bool {
        self.term.eq_ignore_ascii_case(NA)
    }

    pub fn is_splice_site(&self) -> bool {
        SPLICE_SITE_VARIANTS.contains(&self.term.as_str())
    }
}

impl PartialEq for VariantConsequence {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for VariantConsequence {}

impl Hash for VariantConsequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}

impl Display for VariantConsequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)
    }
}

///
/// Decide whether a catalogue entry's consequence is compatible with a query consequence.
///
/// Splice-site terms form one group, a catalogue-side `any` accepts every query
/// consequence, and `NA` is never related to anything.
///
pub fn consequence_related(catalogue: &VariantConsequence, query: &VariantConsequence) -> bool {
    if catalogue.is_na() || query.is_na() {
        return false;
    }
    if catalogue.is_splice_site() {
        return query.is_splice_site();
    }
    catalogue.is(ANY) || catalogue == query
}

///
/// Lookup table of the consequence terms the classifier and the resolver know about.
///
#[derive(Debug, Clone)]
pub struct ConsequenceVocabulary {
    terms: FxHashMap<String, VariantConsequence>,
}

impl ConsequenceVocabulary {
    pub fn new(consequences: Vec<VariantConsequence>) -> Self {
        let terms = consequences
            .into_iter()
            .map(|c| (c.term.to_lowercase(), c))
            .collect();
        ConsequenceVocabulary { terms }
    }

    ///
    /// Find a consequence by its term, case-insensitively. The legacy
    /// `inframe_*` spellings resolve to their `in_frame_*` entries.
    ///
    pub fn by_term(&self, term: &str) -> Option<&VariantConsequence> {
        let key = match term.to_lowercase().as_str() {
            "inframe_deletion" => IN_FRAME_DELETION.to_string(),
            "inframe_insertion" => IN_FRAME_INSERTION.to_string(),
            other => other.to_string(),
        };
        self.terms.get(&key)
    }

    ///
    /// Like [`ConsequenceVocabulary::by_term`], but falls back to `NA` for unknown terms.
    ///
    pub fn by_term_or_na(&self, term: &str) -> VariantConsequence {
        self.by_term(term)
            .cloned()
            .unwrap_or_else(|| VariantConsequence::new(NA, false, "Not applicable"))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for ConsequenceVocabulary {
    fn default() -> Self {
        ConsequenceVocabulary::new(vec![
            VariantConsequence::new(ANY, false, "Any consequence at the position"),
            VariantConsequence::new(FEATURE_TRUNCATION, true, "Truncation of the protein"),
            VariantConsequence::new(FRAMESHIFT_VARIANT, true, "Frameshift"),
            VariantConsequence::new(FUSION, false, "Gene fusion"),
            VariantConsequence::new(IN_FRAME_DELETION, false, "In-frame deletion"),
            VariantConsequence::new(IN_FRAME_INSERTION, false, "In-frame insertion"),
            VariantConsequence::new(MISSENSE_VARIANT, false, "Amino acid substitution"),
            VariantConsequence::new(NON_TRUNCATING_VARIANT, false, "Any non-truncating change"),
            VariantConsequence::new(SPLICE_REGION_VARIANT, true, "Splice region"),
            VariantConsequence::new(SPLICE_DONOR_VARIANT, true, "Splice donor site"),
            VariantConsequence::new(SPLICE_ACCEPTOR_VARIANT, true, "Splice acceptor site"),
            VariantConsequence::new(START_LOST, true, "Start codon lost"),
            VariantConsequence::new(STOP_GAINED, true, "Premature stop codon"),
            VariantConsequence::new(STOP_LOST, false, "Stop codon lost"),
            VariantConsequence::new(SYNONYMOUS_VARIANT, false, "Silent change"),
            VariantConsequence::new(NA, false, "Not applicable"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vocabulary() -> ConsequenceVocabulary {
        ConsequenceVocabulary::default()
    }

    #[rstest]
    fn test_lookup_aliases(vocabulary: ConsequenceVocabulary) {
        let a = vocabulary.by_term("inframe_deletion").unwrap();
        let b = vocabulary.by_term(IN_FRAME_DELETION).unwrap();
        assert_eq!(a, b);
        assert_eq!(vocabulary.by_term("MISSENSE_VARIANT").is_some(), true);
        assert_eq!(vocabulary.by_term("made_up").is_none(), true);
        assert_eq!(vocabulary.by_term_or_na("made_up").is_na(), true);
    }

    #[rstest]
    #[case(MISSENSE_VARIANT, MISSENSE_VARIANT, true)]
    #[case(MISSENSE_VARIANT, IN_FRAME_DELETION, false)]
    #[case(SPLICE_DONOR_VARIANT, SPLICE_REGION_VARIANT, true)]
    #[case(SPLICE_DONOR_VARIANT, MISSENSE_VARIANT, false)]
    #[case(ANY, MISSENSE_VARIANT, true)]
    #[case(MISSENSE_VARIANT, ANY, false)]
    #[case(NA, NA, false)]
    #[case(ANY, NA, false)]
    fn test_consequence_related(
        vocabulary: ConsequenceVocabulary,
        #[case] catalogue: &str,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        let catalogue = vocabulary.by_term(catalogue).unwrap();
        let query = vocabulary.by_term(query).unwrap();
        assert_eq!(consequence_related(catalogue, query), expected);
    }

    #[rstest]
    fn test_truncating_flags(vocabulary: ConsequenceVocabulary) {
        assert_eq!(vocabulary.by_term(STOP_GAINED).unwrap().is_generally_truncating, true);
        assert_eq!(vocabulary.by_term(FRAMESHIFT_VARIANT).unwrap().is_generally_truncating, true);
        assert_eq!(vocabulary.by_term(MISSENSE_VARIANT).unwrap().is_generally_truncating, false);
        assert_eq!(vocabulary.len(), 16);
    }
}
