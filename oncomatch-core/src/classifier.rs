//! Consequence classification of raw protein changes.
//!
//! Catalogue rows arrive classified; queries usually do not. [`ProteinChangeClassifier`]
//! reads the protein change (`V600E`, `E746_A750del`, `R213*`, `Truncating Mutations`)
//! and attaches the consequence, the protein range and the residues it names.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::*;
use crate::models::{Alteration, CategoricalBucket, ConsequenceVocabulary, VariantConsequence};
use crate::naming::{looks_like_fusion, remove_exclusion};

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z*])?(\d+)_([A-Z*])?(\d+)(.*)$").expect("range pattern is a valid regex")
});

static SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z*])?(\d+)(.*)$").expect("single residue pattern is a valid regex")
});

/// Names that carry no protein position at all.
const POSITIONLESS_NAMES: [&str; 6] = [
    "amplification",
    "deletion",
    "gain",
    "loss",
    "wildtype",
    "overexpression",
];

///
/// What a protein change says about itself.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinChange {
    pub consequence: &'static str,
    pub start: i32,
    pub end: i32,
    pub ref_residues: Option<String>,
    pub variant_residues: Option<String>,
}

impl ProteinChange {
    fn positionless(consequence: &'static str) -> Self {
        ProteinChange {
            consequence,
            start: POSITION_BOUNDARY_START,
            end: POSITION_BOUNDARY_END,
            ref_residues: None,
            variant_residues: None,
        }
    }

    fn at(consequence: &'static str, start: i32, end: i32) -> Self {
        ProteinChange {
            consequence,
            start,
            end,
            ref_residues: None,
            variant_residues: None,
        }
    }
}

///
/// Parse a protein change. Never fails: text that cannot be read is `NA` over the
/// whole protein.
///
pub fn parse_protein_change(text: &str) -> ProteinChange {
    let text = remove_exclusion(text);
    let text = text.strip_prefix("p.").unwrap_or(text).trim();
    let lower = text.to_lowercase();

    if let Some(bucket) = CategoricalBucket::from_name(text) {
        return match bucket {
            CategoricalBucket::TruncatingMutations => ProteinChange::positionless(FEATURE_TRUNCATION),
            CategoricalBucket::Fusions => ProteinChange::positionless(FUSION),
            CategoricalBucket::OncogenicMutations
            | CategoricalBucket::GainOfFunctionMutations
            | CategoricalBucket::LossOfFunctionMutations
            | CategoricalBucket::SwitchOfFunctionMutations
            | CategoricalBucket::Vus => ProteinChange::positionless(NA),
        };
    }
    if POSITIONLESS_NAMES.contains(&lower.as_str()) {
        return ProteinChange::positionless(NA);
    }
    if looks_like_fusion(text) {
        return ProteinChange::positionless(FUSION);
    }

    if let Some(caps) = RANGE_PATTERN.captures(text) {
        if let (Ok(start), Ok(end)) = (caps[2].parse::<i32>(), caps[4].parse::<i32>()) {
            let suffix = caps[5].to_lowercase();
            let mut change = ProteinChange::at(range_consequence(&suffix, start, end), start, end);
            if let (Some(first), Some(last)) = (caps.get(1), caps.get(3)) {
                if end - start == 1 {
                    change.ref_residues = Some(format!("{}{}", first.as_str(), last.as_str()));
                }
            }
            return change;
        }
    }

    if let Some(caps) = SINGLE_PATTERN.captures(text) {
        if let Ok(position) = caps[2].parse::<i32>() {
            let reference = caps.get(1).map(|m| m.as_str());
            let rest = &caps[3];
            let mut change = ProteinChange::at(NA, position, position);
            change.ref_residues = reference.map(str::to_string);
            match single_residue(rest) {
                Some(variant) => {
                    change.consequence = substitution_consequence(reference, variant, position);
                    change.variant_residues = Some(variant.to_string());
                }
                None => change.consequence = suffix_consequence(&rest.to_lowercase(), position),
            }
            return change;
        }
    }

    ProteinChange::positionless(NA)
}

fn single_residue(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() || c == '*' || c == '=' => Some(rest),
        _ => None,
    }
}

fn substitution_consequence(reference: Option<&str>, variant: &str, position: i32) -> &'static str {
    match reference {
        Some("*") if variant != "*" => STOP_LOST,
        _ if variant == "*" => STOP_GAINED,
        Some(reference) if variant == "=" || variant == reference => SYNONYMOUS_VARIANT,
        _ if variant == "=" => SYNONYMOUS_VARIANT,
        Some("M") if position == 1 => START_LOST,
        _ => MISSENSE_VARIANT,
    }
}

fn suffix_consequence(suffix: &str, position: i32) -> &'static str {
    if suffix.is_empty() {
        NA
    } else if suffix == "?" {
        if position == 1 { START_LOST } else { NA }
    } else if suffix.contains("fs") {
        FRAMESHIFT_VARIANT
    } else if suffix.contains("splice") {
        SPLICE_REGION_VARIANT
    } else if suffix.starts_with("delins") {
        MISSENSE_VARIANT
    } else if suffix.starts_with("del") {
        IN_FRAME_DELETION
    } else if suffix.starts_with("ins") || suffix.starts_with("dup") {
        IN_FRAME_INSERTION
    } else {
        keyword_consequence(suffix)
    }
}

fn range_consequence(suffix: &str, start: i32, end: i32) -> &'static str {
    if let Some(inserted) = suffix
        .strip_prefix("delins")
        .or_else(|| suffix.strip_prefix("indel"))
    {
        let deleted = usize::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(0);
        let inserted = inserted.chars().filter(|c| c.is_ascii_alphabetic()).count();
        return match inserted.cmp(&deleted) {
            std::cmp::Ordering::Greater => IN_FRAME_INSERTION,
            std::cmp::Ordering::Less => IN_FRAME_DELETION,
            std::cmp::Ordering::Equal => MISSENSE_VARIANT,
        };
    }
    if suffix.contains("fs") {
        FRAMESHIFT_VARIANT
    } else if suffix.contains("splice") {
        SPLICE_REGION_VARIANT
    } else if suffix.starts_with("del") {
        IN_FRAME_DELETION
    } else if suffix.starts_with("ins") || suffix.starts_with("dup") {
        IN_FRAME_INSERTION
    } else {
        keyword_consequence(suffix)
    }
}

fn keyword_consequence(suffix: &str) -> &'static str {
    match suffix.trim() {
        "trunc" => FEATURE_TRUNCATION,
        "mut" => ANY,
        "mis" => MISSENSE_VARIANT,
        "nontrunc" | "non-truncating" => NON_TRUNCATING_VARIANT,
        _ => NA,
    }
}

///
/// Assigns consequences to raw alteration text.
///
pub trait ConsequenceClassifier: Send + Sync {
    fn classify(&self, text: &str) -> VariantConsequence;

    fn consequence_by_term(&self, term: &str) -> Option<VariantConsequence>;

    ///
    /// Attach a consequence to `alteration` when it has none, and fill in the
    /// positions and residues its raw name implies where they are missing.
    ///
    fn annotate(&self, alteration: &mut Alteration);
}

///
/// [`ConsequenceClassifier`] reading protein change notation against a vocabulary.
///
#[derive(Debug, Clone, Default)]
pub struct ProteinChangeClassifier {
    vocabulary: ConsequenceVocabulary,
}

impl ProteinChangeClassifier {
    pub fn new(vocabulary: ConsequenceVocabulary) -> Self {
        ProteinChangeClassifier { vocabulary }
    }

    pub fn vocabulary(&self) -> &ConsequenceVocabulary {
        &self.vocabulary
    }
}

impl ConsequenceClassifier for ProteinChangeClassifier {
    fn classify(&self, text: &str) -> VariantConsequence {
        self.vocabulary
            .by_term_or_na(parse_protein_change(text).consequence)
    }

    fn consequence_by_term(&self, term: &str) -> Option<VariantConsequence> {
        self.vocabulary.by_term(term).cloned()
    }

    fn annotate(&self, alteration: &mut Alteration) {
        let change = parse_protein_change(&alteration.alteration);
        if alteration.consequence.is_none() {
            alteration.consequence = Some(self.vocabulary.by_term_or_na(change.consequence));
        }
        if alteration.protein_start.is_none() || alteration.protein_end.is_none() {
            alteration.protein_start = Some(change.start);
            alteration.protein_end = Some(change.end);
        }
        if alteration.ref_residues.is_none() {
            alteration.ref_residues = change.ref_residues;
        }
        if alteration.variant_residues.is_none() {
            alteration.variant_residues = change.variant_residues;
        }
    }
}
