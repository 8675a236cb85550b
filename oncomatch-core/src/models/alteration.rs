use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::consts::{MISSENSE_VARIANT, POSITION_BOUNDARY_START};
use crate::errors::AlterationError;
use crate::models::consequence::VariantConsequence;
use crate::models::gene::Gene;
use crate::models::reference_genome::ReferenceGenome;

/// Broad class of an alteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlterationType {
    #[default]
    Mutation,
    Fusion,
    StructuralVariant,
    CopyNumberAlteration,
    Unknown,
}

impl FromStr for AlterationType {
    type Err = AlterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MUTATION" => Ok(AlterationType::Mutation),
            "FUSION" => Ok(AlterationType::Fusion),
            "STRUCTURAL_VARIANT" => Ok(AlterationType::StructuralVariant),
            "COPY_NUMBER_ALTERATION" => Ok(AlterationType::CopyNumberAlteration),
            "UNKNOWN" => Ok(AlterationType::Unknown),
            _ => Err(AlterationError::UnknownAlterationType(s.to_string())),
        }
    }
}

impl Display for AlterationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlterationType::Mutation => "MUTATION",
            AlterationType::Fusion => "FUSION",
            AlterationType::StructuralVariant => "STRUCTURAL_VARIANT",
            AlterationType::CopyNumberAlteration => "COPY_NUMBER_ALTERATION",
            AlterationType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

///
/// A specific or categorical change of a gene, either a catalogue row or a query
/// built ad hoc from user input.
///
/// Equality and hashing use [`Alteration::key`]: gene, raw name and the genome
/// builds. The catalogue row id and display name are not part of it.
///
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alteration {
    pub id: Option<u64>,
    pub gene: Gene,
    pub alteration: String,
    pub name: String,
    pub alteration_type: AlterationType,
    pub consequence: Option<VariantConsequence>,
    pub protein_start: Option<i32>,
    pub protein_end: Option<i32>,
    pub ref_residues: Option<String>,
    pub variant_residues: Option<String>,
    pub reference_genomes: BTreeSet<ReferenceGenome>,
}

/// Deduplication key of an [`Alteration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlterationKey {
    pub entrez_gene_id: i32,
    pub alteration: String,
    pub reference_genomes: BTreeSet<ReferenceGenome>,
}

impl Alteration {
    ///
    /// Build an unclassified alteration for `gene` from its raw protein change.
    /// The display name defaults to the raw name.
    ///
    pub fn new(gene: Gene, alteration: &str) -> Self {
        Alteration {
            id: None,
            gene,
            alteration: alteration.to_string(),
            name: alteration.to_string(),
            alteration_type: AlterationType::Mutation,
            consequence: None,
            protein_start: None,
            protein_end: None,
            ref_residues: None,
            variant_residues: None,
            reference_genomes: BTreeSet::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_type(mut self, alteration_type: AlterationType) -> Self {
        self.alteration_type = alteration_type;
        self
    }

    pub fn with_consequence(mut self, consequence: VariantConsequence) -> Self {
        self.consequence = Some(consequence);
        self
    }

    pub fn with_position(mut self, start: i32, end: i32) -> Self {
        self.protein_start = Some(start);
        self.protein_end = Some(end);
        self
    }

    pub fn with_residues(mut self, reference: Option<&str>, variant: Option<&str>) -> Self {
        self.ref_residues = reference.map(str::to_string);
        self.variant_residues = variant.map(str::to_string);
        self
    }

    pub fn with_genomes<I: IntoIterator<Item = ReferenceGenome>>(mut self, genomes: I) -> Self {
        self.reference_genomes = genomes.into_iter().collect();
        self
    }

    pub fn key(&self) -> AlterationKey {
        AlterationKey {
            entrez_gene_id: self.gene.entrez_gene_id,
            alteration: self.alteration.clone(),
            reference_genomes: self.reference_genomes.clone(),
        }
    }

    ///
    /// True when the alteration applies under `genome`. An unspecified genome or
    /// an empty build set always applies.
    ///
    pub fn is_valid_for(&self, genome: Option<ReferenceGenome>) -> bool {
        match genome {
            None => true,
            Some(genome) => {
                self.reference_genomes.is_empty() || self.reference_genomes.contains(&genome)
            }
        }
    }

    pub fn consequence_is(&self, term: &str) -> bool {
        self.consequence.as_ref().is_some_and(|c| c.is(term))
    }

    pub fn is_generally_truncating(&self) -> bool {
        self.consequence
            .as_ref()
            .is_some_and(|c| c.is_generally_truncating)
    }

    /// Both positions present and equal.
    pub fn is_single_residue(&self) -> bool {
        matches!((self.protein_start, self.protein_end), (Some(s), Some(e)) if s == e)
    }

    ///
    /// A single-residue alteration that names the reference residue but no
    /// substitution, e.g. `V600`. It stands for every change at that residue.
    ///
    pub fn is_positioned(&self) -> bool {
        self.is_single_residue()
            && self.ref_residues.as_ref().is_some_and(|r| r.chars().count() == 1)
            && self.variant_residues.as_ref().is_none_or(|v| v.is_empty())
            && self
                .consequence
                .as_ref()
                .is_some_and(|c| c.is_na() || c.is(MISSENSE_VARIANT))
    }

    /// Start is the `-1` sentinel.
    pub fn has_sentinel_start(&self) -> bool {
        self.protein_start == Some(POSITION_BOUNDARY_START)
    }
}

impl PartialEq for Alteration {
    fn eq(&self, other: &Self) -> bool {
        self.gene == other.gene
            && self.alteration == other.alteration
            && self.reference_genomes == other.reference_genomes
    }
}

impl Eq for Alteration {}

impl Hash for Alteration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gene.hash(state);
        self.alteration.hash(state);
        self.reference_genomes.hash(state);
    }
}

impl Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gene.hugo_symbol, self.alteration)
    }
}
