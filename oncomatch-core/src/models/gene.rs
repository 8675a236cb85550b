use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

///
/// A gene as curated in the knowledge base.
///
/// Identity is the Entrez id; the oncogene and tumor suppressor flags are
/// independent and either may be unknown.
///
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    pub entrez_gene_id: i32,
    pub hugo_symbol: String,
    pub is_oncogene: Option<bool>,
    pub is_tumor_suppressor: Option<bool>,
}

impl Gene {
    pub fn new(entrez_gene_id: i32, hugo_symbol: &str) -> Self {
        Gene {
            entrez_gene_id,
            hugo_symbol: hugo_symbol.to_string(),
            is_oncogene: None,
            is_tumor_suppressor: None,
        }
    }

    pub fn with_roles(mut self, is_oncogene: bool, is_tumor_suppressor: bool) -> Self {
        self.is_oncogene = Some(is_oncogene);
        self.is_tumor_suppressor = Some(is_tumor_suppressor);
        self
    }

    ///
    /// True only when the gene is known to be an oncogene and known not to be
    /// a tumor suppressor. Unknown flags never qualify.
    ///
    pub fn is_pure_oncogene(&self) -> bool {
        matches!(
            (self.is_oncogene, self.is_tumor_suppressor),
            (Some(true), Some(false))
        )
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Self) -> bool {
        self.entrez_gene_id == other.entrez_gene_id
    }
}

impl Eq for Gene {}

impl Hash for Gene {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entrez_gene_id.hash(state);
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hugo_symbol, self.entrez_gene_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Some(true), Some(false), true)]
    #[case(Some(true), Some(true), false)]
    #[case(Some(false), Some(false), false)]
    #[case(Some(true), None, false)]
    #[case(None, None, false)]
    fn test_is_pure_oncogene(
        #[case] oncogene: Option<bool>,
        #[case] tsg: Option<bool>,
        #[case] expected: bool,
    ) {
        let mut gene = Gene::new(673, "BRAF");
        gene.is_oncogene = oncogene;
        gene.is_tumor_suppressor = tsg;
        assert_eq!(gene.is_pure_oncogene(), expected);
    }

    #[rstest]
    fn test_equality_by_entrez_id() {
        let a = Gene::new(1956, "EGFR");
        let b = Gene::new(1956, "egfr").with_roles(true, false);
        assert_eq!(a, b);
    }
}
