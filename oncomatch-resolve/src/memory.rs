use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fxhash::{FxHashMap, FxHashSet};
use log::debug;

use oncomatch_core::classifier::{ConsequenceClassifier, ProteinChangeClassifier};
use oncomatch_core::models::{
    Alteration, AlterationKey, Catalogue, Evidence, EvidenceType, Gene, Oncogenicity,
    ReferenceGenome,
};

use crate::providers::{
    CatalogueProvider, EvidenceProvider, GeneProvider, OncogenicityProvider, orphaned_alterations,
};

type SnapshotKey = (i32, Option<ReferenceGenome>);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

///
/// In-memory curated knowledge: genes, alterations, evidence, hotspots and VUS lists.
///
/// Implements every provider trait. Catalogue snapshots are built on first request
/// per gene and genome and dropped whenever an alteration or evidence of that gene
/// is written, so readers holding an older snapshot keep a consistent view.
///
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    genes: RwLock<FxHashMap<i32, Gene>>,
    alterations: RwLock<Vec<Alteration>>,
    evidence: RwLock<Vec<Evidence>>,
    hotspots: RwLock<FxHashSet<AlterationKey>>,
    vus: RwLock<FxHashMap<i32, Vec<Alteration>>>,
    snapshots: RwLock<FxHashMap<SnapshotKey, Catalogue>>,
    classifier: ProteinChangeClassifier,
    next_id: AtomicU64,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: ProteinChangeClassifier) -> Self {
        KnowledgeBase {
            classifier,
            ..Default::default()
        }
    }

    pub fn add_gene(&self, gene: Gene) {
        write(&self.genes).insert(gene.entrez_gene_id, gene);
    }

    ///
    /// Store an alteration, replacing any stored one with the same key. Missing
    /// consequence, positions and residues are filled in from the raw name and a
    /// row id is assigned when absent.
    ///
    /// Returns the stored row.
    ///
    pub fn save_alteration(&self, alteration: Alteration) -> Alteration {
        let mut alteration = alteration;
        self.classifier.annotate(&mut alteration);
        if alteration.id.is_none() {
            alteration.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        }

        {
            let mut alterations = write(&self.alterations);
            match alterations.iter_mut().find(|stored| **stored == alteration) {
                Some(stored) => *stored = alteration.clone(),
                None => alterations.push(alteration.clone()),
            }
        }
        write(&self.genes)
            .entry(alteration.gene.entrez_gene_id)
            .or_insert_with(|| alteration.gene.clone());

        self.invalidate(&alteration.gene);
        alteration
    }

    pub fn add_evidence(&self, evidence: Evidence) {
        let genes: FxHashSet<Gene> = evidence
            .alterations
            .iter()
            .map(|alt| alt.gene.clone())
            .collect();
        write(&self.evidence).push(evidence);
        for gene in genes.iter() {
            self.invalidate(gene);
        }
    }

    pub fn mark_hotspot(&self, alteration: &Alteration) {
        write(&self.hotspots).insert(alteration.key());
    }

    pub fn set_vus(&self, gene: &Gene, alterations: Vec<Alteration>) {
        write(&self.vus).insert(gene.entrez_gene_id, alterations);
    }

    ///
    /// Delete the [orphaned alterations](crate::providers::orphaned_alterations) of
    /// `gene`. Returns how many were removed.
    ///
    pub fn remove_orphaned_alterations(&self, gene: &Gene) -> usize {
        let orphaned: FxHashSet<AlterationKey> = orphaned_alterations(self, self, gene)
            .iter()
            .map(Alteration::key)
            .collect();
        if orphaned.is_empty() {
            return 0;
        }

        write(&self.alterations).retain(|alt| !orphaned.contains(&alt.key()));
        self.invalidate(gene);
        orphaned.len()
    }
}

impl CatalogueProvider for KnowledgeBase {
    fn alterations_for_gene(&self, gene: &Gene, genome: Option<ReferenceGenome>) -> Catalogue {
        let key = (gene.entrez_gene_id, genome);
        if let Some(snapshot) = read(&self.snapshots).get(&key) {
            return snapshot.clone();
        }

        // Built under the snapshot lock so an invalidation cannot slip in
        // between reading the rows and caching them.
        let mut snapshots = write(&self.snapshots);
        if let Some(snapshot) = snapshots.get(&key) {
            return snapshot.clone();
        }
        let snapshot = Catalogue::new(
            read(&self.alterations)
                .iter()
                .filter(|alt| alt.gene == *gene && alt.is_valid_for(genome))
                .cloned()
                .collect(),
        );
        snapshots.insert(key, snapshot.clone());
        snapshot
    }

    fn invalidate(&self, gene: &Gene) {
        let mut snapshots = write(&self.snapshots);
        let before = snapshots.len();
        snapshots.retain(|(entrez_gene_id, _), _| *entrez_gene_id != gene.entrez_gene_id);
        if snapshots.len() != before {
            debug!("Dropped catalogue snapshots of {}", gene.hugo_symbol);
        }
    }
}

impl EvidenceProvider for KnowledgeBase {
    fn evidence_for_alterations(
        &self,
        alterations: &[Alteration],
        types: &[EvidenceType],
    ) -> Vec<Evidence> {
        let keys: FxHashSet<AlterationKey> = alterations.iter().map(Alteration::key).collect();
        read(&self.evidence)
            .iter()
            .filter(|evidence| types.contains(&evidence.evidence_type))
            .filter(|evidence| evidence.alterations.iter().any(|alt| keys.contains(&alt.key())))
            .cloned()
            .collect()
    }

    fn evidence_for_gene(&self, gene: &Gene, types: &[EvidenceType]) -> Vec<Evidence> {
        read(&self.evidence)
            .iter()
            .filter(|evidence| types.contains(&evidence.evidence_type))
            .filter(|evidence| evidence.alterations.iter().any(|alt| alt.gene == *gene))
            .cloned()
            .collect()
    }
}

impl OncogenicityProvider for KnowledgeBase {
    fn curated_oncogenicities(&self, alteration: &Alteration) -> Vec<Oncogenicity> {
        read(&self.evidence)
            .iter()
            .filter(|evidence| evidence.references(alteration))
            .filter_map(Evidence::oncogenicity)
            .collect()
    }

    fn is_hotspot(&self, alteration: &Alteration) -> bool {
        read(&self.hotspots).contains(&alteration.key())
    }

    fn vus_alterations(&self, gene: &Gene) -> Vec<Alteration> {
        read(&self.vus)
            .get(&gene.entrez_gene_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl GeneProvider for KnowledgeBase {
    fn gene_by_symbol(&self, symbol: &str) -> Option<Gene> {
        read(&self.genes)
            .values()
            .find(|gene| gene.hugo_symbol.eq_ignore_ascii_case(symbol.trim()))
            .cloned()
    }
}
