//! Collaborators the resolver reads from.
//!
//! Each trait covers one narrow concern. [`crate::memory::KnowledgeBase`] implements
//! all of them in memory; a service backed by a database would implement them over
//! its own store and cache.

use oncomatch_core::models::{
    Alteration, Catalogue, Evidence, EvidenceType, Gene, Oncogenicity, ReferenceGenome,
};

///
/// Source of per-gene catalogue snapshots.
///
/// A returned [`Catalogue`] never changes. Writers call [`CatalogueProvider::invalidate`]
/// after creating or editing an alteration so that the next call builds a fresh one.
///
pub trait CatalogueProvider: Send + Sync {
    /// Alterations of `gene` valid under `genome`, or all of them when `genome` is `None`.
    fn alterations_for_gene(&self, gene: &Gene, genome: Option<ReferenceGenome>) -> Catalogue;

    fn invalidate(&self, gene: &Gene);

    /// Alterations of all `genes`, concatenated in the order the genes are given.
    fn alterations_for_genes(
        &self,
        genes: &[Gene],
        genome: Option<ReferenceGenome>,
    ) -> Vec<Alteration> {
        genes
            .iter()
            .flat_map(|gene| self.alterations_for_gene(gene, genome).as_slice().to_vec())
            .collect()
    }
}

pub trait EvidenceProvider: Send + Sync {
    /// Evidence of the given types referencing any of `alterations`.
    fn evidence_for_alterations(
        &self,
        alterations: &[Alteration],
        types: &[EvidenceType],
    ) -> Vec<Evidence>;

    fn evidence_for_gene(&self, gene: &Gene, types: &[EvidenceType]) -> Vec<Evidence>;
}

pub trait OncogenicityProvider: Send + Sync {
    /// Every curated oncogenicity call on `alteration`; empty when uncurated.
    fn curated_oncogenicities(&self, alteration: &Alteration) -> Vec<Oncogenicity>;

    fn is_hotspot(&self, alteration: &Alteration) -> bool;

    /// The variants of unknown significance curated for `gene`.
    fn vus_alterations(&self, gene: &Gene) -> Vec<Alteration>;
}

pub trait GeneProvider: Send + Sync {
    fn gene_by_symbol(&self, symbol: &str) -> Option<Gene>;
}

///
/// Catalogue rows of `gene` that no evidence references. The curation layer
/// deletes these when it cleans up a gene.
///
pub fn orphaned_alterations(
    catalogues: &dyn CatalogueProvider,
    evidence: &dyn EvidenceProvider,
    gene: &Gene,
) -> Vec<Alteration> {
    let evidence = evidence.evidence_for_gene(
        gene,
        &[EvidenceType::MutationEffect, EvidenceType::Oncogenic, EvidenceType::Other],
    );
    catalogues
        .alterations_for_gene(gene, None)
        .iter()
        .filter(|alt| !evidence.iter().any(|e| e.references(alt)))
        .cloned()
        .collect()
}
