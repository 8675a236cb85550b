//! Naming rules for curated alteration names.
//!
//! Three concerns live here:
//!
//! - **Abbreviations**: short domain names such as `KD` and their spelled-out form.
//! - **Exclusion clauses**: `Oncogenic Mutations {excluding V600E; V600K}` names a base
//!   term and the sub-alterations carved out of it. `(excluding V600E, V600K)` is
//!   accepted too. A clause that cannot be read is treated as absent.
//! - **Fusions**: `EML4-ALK Fusion` style names and their partner genes.

use std::sync::LazyLock;

use fxhash::FxHashMap;
use regex::Regex;

static EXCLUSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(.*?)\s*(?:\{\s*exclud(?:e|ing)\b([^{}]*)\}|\(\s*exclud(?:e|ing)\b([^()]*)\))\s*$",
    )
    .expect("exclusion pattern is a valid regex")
});

static FUSION_PARTNERS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Z][A-Z0-9.]*)-([A-Z][A-Z0-9.]*)(?:\s+fusion)?$")
        .expect("fusion pattern is a valid regex")
});

///
/// A parsed exclusion clause: the base term and the excluded names in the order
/// they were written.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionClause<'a> {
    pub base: &'a str,
    pub excluded: Vec<&'a str>,
}

///
/// Parse the exclusion clause of `text`, if it carries a readable one.
///
/// Both a non-empty base and at least one excluded name are required; anything
/// else returns `None`.
///
pub fn parse_exclusion(text: &str) -> Option<ExclusionClause<'_>> {
    let caps = EXCLUSION_PATTERN.captures(text.trim())?;
    let base = caps.get(1)?.as_str().trim();
    let list = caps.get(2).or_else(|| caps.get(3))?.as_str();

    let excluded: Vec<&str> = list
        .split([';', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if base.is_empty() || excluded.is_empty() {
        return None;
    }
    Some(ExclusionClause { base, excluded })
}

pub fn has_exclusion(text: &str) -> bool {
    parse_exclusion(text).is_some()
}

///
/// The name without its exclusion clause. Names without a readable clause are
/// returned trimmed but otherwise unchanged.
///
pub fn remove_exclusion(text: &str) -> &str {
    match parse_exclusion(text) {
        Some(clause) => clause.base,
        None => text.trim(),
    }
}

pub fn parse_excluded(text: &str) -> Vec<String> {
    parse_exclusion(text)
        .map(|clause| clause.excluded.into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

///
/// True for names that describe a fusion: they mention "fusion" or have the
/// `GENEA-GENEB` partner form.
///
pub fn looks_like_fusion(text: &str) -> bool {
    text.to_lowercase().contains("fusion") || FUSION_PARTNERS_PATTERN.is_match(text.trim())
}

pub fn fusion_partners(text: &str) -> Option<(String, String)> {
    let caps = FUSION_PARTNERS_PATTERN.captures(text.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

///
/// Names under which the same fusion may be curated with the partners swapped,
/// e.g. `ALK-EML4 Fusion` and `ALK-EML4` for `EML4-ALK Fusion`.
///
pub fn reverse_fusion_names(text: &str) -> Vec<String> {
    match fusion_partners(text) {
        Some((five_prime, three_prime)) => vec![
            format!("{}-{} Fusion", three_prime, five_prime),
            format!("{}-{}", three_prime, five_prime),
        ],
        None => Vec::new(),
    }
}

///
/// Case-insensitive table from abbreviations to their full names.
///
#[derive(Debug, Clone)]
pub struct Abbreviations {
    table: FxHashMap<String, String>,
}

impl Abbreviations {
    pub fn empty() -> Self {
        Abbreviations {
            table: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, abbreviation: &str, full_name: &str) {
        self.table
            .insert(abbreviation.trim().to_uppercase(), full_name.trim().to_string());
    }

    pub fn has_abbreviation(&self, text: &str) -> bool {
        self.table.contains_key(&text.trim().to_uppercase())
    }

    pub fn full_name(&self, text: &str) -> Option<&str> {
        self.table
            .get(&text.trim().to_uppercase())
            .map(String::as_str)
    }

    ///
    /// Expand `text` when it is a known abbreviation, otherwise return it as is.
    ///
    pub fn expand<'a>(&'a self, text: &'a str) -> &'a str {
        self.full_name(text).unwrap_or(text)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        let mut abbreviations = Abbreviations::empty();
        for (abbreviation, full_name) in [
            ("ITD", "Internal Tandem Duplication"),
            ("KD", "Kinase Domain"),
            ("TKD", "Tyrosine Kinase Domain"),
            ("ECD", "Extracellular Domain"),
            ("JMD", "Juxtamembrane Domain"),
            ("TMD", "Transmembrane Domain"),
            ("LBD", "Ligand Binding Domain"),
        ] {
            abbreviations.insert(abbreviation, full_name);
        }
        abbreviations
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for Abbreviations {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (abbreviation, full_name) in iter {
            self.insert(abbreviation.as_ref(), full_name.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Oncogenic Mutations {excluding V600E}", "Oncogenic Mutations", vec!["V600E"])]
    #[case("Oncogenic Mutations {Excluding V600E; V600K}", "Oncogenic Mutations", vec!["V600E", "V600K"])]
    #[case("Truncating Mutations (excluding R213*, Q331*)", "Truncating Mutations", vec!["R213*", "Q331*"])]
    #[case("V600 {exclude V600E}", "V600", vec!["V600E"])]
    fn test_parse_exclusion(
        #[case] text: &str,
        #[case] base: &str,
        #[case] excluded: Vec<&str>,
    ) {
        let clause = parse_exclusion(text).unwrap();
        assert_eq!(clause.base, base);
        assert_eq!(clause.excluded, excluded);
        assert_eq!(has_exclusion(text), true);
    }

    #[rstest]
    #[case("Oncogenic Mutations")]
    #[case("Oncogenic Mutations {excluding}")]
    #[case("Oncogenic Mutations {excluding V600E")]
    #[case("{excluding V600E}")]
    #[case("Oncogenic Mutations {excluding ; }")]
    #[case("Oncogenic Mutations {excluding V600E)")]
    fn test_malformed_or_absent_clause(#[case] text: &str) {
        assert_eq!(parse_exclusion(text), None);
        assert_eq!(has_exclusion(text), false);
        assert_eq!(parse_excluded(text).is_empty(), true);
        assert_eq!(remove_exclusion(text), text.trim());
    }

    #[rstest]
    fn test_remove_exclusion() {
        assert_eq!(
            remove_exclusion("Oncogenic Mutations {excluding V600E}"),
            "Oncogenic Mutations"
        );
        assert_eq!(remove_exclusion(" V600E "), "V600E");
    }

    #[rstest]
    #[case("EML4-ALK Fusion", true)]
    #[case("EML4-ALK", true)]
    #[case("Fusions", true)]
    #[case("BCR-ABL1 fusion", true)]
    #[case("Gain-of-function Mutations", false)]
    #[case("V600E", false)]
    #[case("762_823ins", false)]
    fn test_looks_like_fusion(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(looks_like_fusion(text), expected);
    }

    #[rstest]
    fn test_reverse_fusion_names() {
        assert_eq!(
            reverse_fusion_names("EML4-ALK Fusion"),
            vec!["ALK-EML4 Fusion".to_string(), "ALK-EML4".to_string()]
        );
        assert_eq!(reverse_fusion_names("Fusions").is_empty(), true);
    }

    #[rstest]
    fn test_abbreviations() {
        let mut abbreviations = Abbreviations::default();
        assert_eq!(abbreviations.has_abbreviation("kd"), true);
        assert_eq!(abbreviations.full_name("KD"), Some("Kinase Domain"));
        assert_eq!(abbreviations.expand("V600E"), "V600E");

        abbreviations.extend([("CTD", "C-terminal Domain")]);
        assert_eq!(abbreviations.expand("ctd"), "C-terminal Domain");
    }
}
