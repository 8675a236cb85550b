use std::sync::{Arc, LazyLock};

use log::{debug, trace};
use regex::Regex;

use oncomatch_core::classifier::{ConsequenceClassifier, ProteinChangeClassifier};
use oncomatch_core::consts::*;
use oncomatch_core::models::{
    Alteration, AlterationSet, AlterationType, Catalogue, CategoricalBucket, EvidenceType, Gene,
    Oncogenicity, Query, ReferenceGenome, VariantConsequence,
};
use oncomatch_core::naming::{Abbreviations, looks_like_fusion, reverse_fusion_names};

use crate::config::{ResolverConfig, ResolverConfigResult};
use crate::exclusion::{drop_members_excluding, names_for_exclusion};
use crate::matchers::{
    IndexedCatalogue, allele_alterations, find_alteration, find_exactly_matched_alteration,
    find_mutations_by_consequence_and_position, positioned_alterations,
    range_alterations_including,
};
use crate::providers::{
    CatalogueProvider, EvidenceProvider, GeneProvider, OncogenicityProvider, orphaned_alterations,
};

static EGFR_VIV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^vIV(a|b|c)?$").expect("vIV pattern is a valid regex"));

///
/// Resolves an alteration query into the ordered set of catalogue alterations
/// relevant to it.
///
/// The resolver holds no catalogue state of its own: every call works on the
/// snapshot it is given, or the one its [`CatalogueProvider`] returns.
///
pub struct Resolver {
    pub(crate) catalogues: Arc<dyn CatalogueProvider>,
    pub(crate) evidence: Arc<dyn EvidenceProvider>,
    pub(crate) oncogenicity: Arc<dyn OncogenicityProvider>,
    pub(crate) genes: Arc<dyn GeneProvider>,
    pub(crate) classifier: Arc<dyn ConsequenceClassifier>,
    pub(crate) abbreviations: Abbreviations,
    reference_genome: Option<ReferenceGenome>,
    include_alternative_allele: bool,
}

impl Resolver {
    pub fn new(
        catalogues: Arc<dyn CatalogueProvider>,
        evidence: Arc<dyn EvidenceProvider>,
        oncogenicity: Arc<dyn OncogenicityProvider>,
        genes: Arc<dyn GeneProvider>,
    ) -> Self {
        Resolver {
            catalogues,
            evidence,
            oncogenicity,
            genes,
            classifier: Arc::new(ProteinChangeClassifier::default()),
            abbreviations: Abbreviations::default(),
            reference_genome: None,
            include_alternative_allele: true,
        }
    }

    ///
    /// A resolver reading everything from one source, such as a
    /// [`KnowledgeBase`](crate::memory::KnowledgeBase).
    ///
    pub fn from_knowledge_base<K>(knowledge_base: Arc<K>) -> Self
    where
        K: CatalogueProvider + EvidenceProvider + OncogenicityProvider + GeneProvider + 'static,
    {
        Resolver::new(
            knowledge_base.clone(),
            knowledge_base.clone(),
            knowledge_base.clone(),
            knowledge_base,
        )
    }

    ///
    /// Like [`Resolver::from_knowledge_base`], with the defaults and extra
    /// abbreviations of `config`.
    ///
    pub fn from_config<K>(config: &ResolverConfig, knowledge_base: Arc<K>) -> ResolverConfigResult<Self>
    where
        K: CatalogueProvider + EvidenceProvider + OncogenicityProvider + GeneProvider + 'static,
    {
        let mut resolver = Resolver::from_knowledge_base(knowledge_base);
        resolver.reference_genome = config.reference_genome()?;
        resolver.include_alternative_allele = config.include_alternative_allele;
        resolver.abbreviations.extend(config.abbreviations.iter());
        Ok(resolver)
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn ConsequenceClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_abbreviations(mut self, abbreviations: Abbreviations) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    pub fn classifier(&self) -> &dyn ConsequenceClassifier {
        self.classifier.as_ref()
    }

    pub fn abbreviations(&self) -> &Abbreviations {
        &self.abbreviations
    }

    pub fn reference_genome(&self) -> Option<ReferenceGenome> {
        self.reference_genome
    }

    ///
    /// Find all alterations relevant to `query` in `catalogue`.
    ///
    /// The order of the result is priority order: the exact match first, then
    /// positional and range matches, then the umbrella entries that apply. A
    /// query without a consequence is classified in place first.
    ///
    pub fn find_relevant_alterations(
        &self,
        genome: Option<ReferenceGenome>,
        query: &mut Alteration,
        catalogue: &Catalogue,
        include_alternative_allele: bool,
    ) -> AlterationSet {
        let mut relevant = AlterationSet::new();
        let mut add_truncating = false;
        let mut add_deletion = false;

        self.classifier.annotate(query);
        if query.consequence_is(SYNONYMOUS_VARIANT) {
            debug!("{} is synonymous, nothing is relevant", query);
            return relevant;
        }

        let indexed = IndexedCatalogue::new(catalogue);

        let matched = find_exactly_matched_alteration(genome, query, &indexed, &self.abbreviations)
            .or_else(|| {
                if looks_like_fusion(&query.alteration) {
                    self.find_reverse_fusion(genome, query, catalogue)
                } else {
                    None
                }
            });

        let mut alteration = match matched {
            Some(matched) => {
                relevant.insert(matched.clone());
                let curated = self.oncogenicity.curated_oncogenicities(matched);
                if let Some(call) = Oncogenicity::strongest(curated) {
                    if !call.is_oncogenic() {
                        debug!("{} is curated as {}, skipping expansion", matched, call);
                        return relevant;
                    }
                }
                matched.clone()
            }
            None => query.clone(),
        };
        self.classifier.annotate(&mut alteration);

        let Some(consequence) = alteration.consequence.clone() else {
            return relevant;
        };
        let start = alteration.protein_start.unwrap_or(POSITION_BOUNDARY_START);
        let end = alteration.protein_end.unwrap_or(POSITION_BOUNDARY_END);
        let gene = self.gene_with_roles(&alteration.gene);
        let range_hits = |term: &str| match self.classifier.consequence_by_term(term) {
            Some(consequence) => find_mutations_by_consequence_and_position(
                &gene,
                genome,
                &consequence,
                start,
                end,
                &indexed,
            ),
            None => Vec::new(),
        };

        let is_egfr = self.is_gene(&gene, EGFR);
        if is_egfr
            && (alteration.alteration == EGFR_CTD
                || EGFR_VIV_PATTERN.is_match(alteration.alteration.trim()))
        {
            if let Some(ctd) = find_alteration(genome, EGFR_CTD, catalogue, &self.abbreviations) {
                relevant.insert(ctd.clone());
            }
        }

        if is_fusion(&alteration, &consequence) {
            let fusions = bucket_entries(genome, catalogue, CategoricalBucket::Fusions);
            if fusions.is_empty() {
                debug!("No Fusions entry for {}, falling back to truncating mutations", gene);
                add_truncating = true;
            } else {
                relevant.extend(fusions);
            }
        }

        if consequence.is(MISSENSE_VARIANT) && !alteration.is_positioned() {
            let mut widened: Vec<&Alteration> = Vec::new();
            if include_alternative_allele {
                relevant.extend(allele_alterations(genome, &alteration, &indexed));
                widened.extend(range_alterations_including(genome, &alteration, &indexed));
            }
            widened.extend(positioned_alterations(genome, &alteration, catalogue));
            relevant.extend(widened);
        } else {
            relevant.extend(find_mutations_by_consequence_and_position(
                &gene,
                genome,
                &consequence,
                start,
                end,
                &indexed,
            ));
        }

        if consequence.is_generally_truncating {
            add_truncating = true;
        } else {
            relevant.extend(range_hits(NON_TRUNCATING_VARIANT));
        }

        relevant.extend(range_hits(ANY));

        if gene.is_pure_oncogene() && consequence.is_generally_truncating {
            relevant.retain(|alt| {
                alt.is_generally_truncating() || alt.is_single_residue() || alt.has_sentinel_start()
            });
        }

        if alteration.alteration.trim().eq_ignore_ascii_case(DELETION) {
            add_deletion = true;
            add_truncating = true;
        }
        if add_deletion {
            if let Some(deletion) = find_alteration(genome, DELETION, catalogue, &self.abbreviations) {
                debug!("{} has a curated Deletion, truncating mutations do not apply", gene);
                relevant.insert(deletion.clone());
                add_truncating = false;
            }
        }

        if add_truncating {
            relevant.extend(range_hits(FEATURE_TRUNCATION));
        }

        if self.add_oncogenic_mutations(&alteration, &relevant) {
            let oncogenic = bucket_entries(genome, catalogue, CategoricalBucket::OncogenicMutations);
            if !oncogenic.is_empty() {
                debug!("Adding Oncogenic Mutations for {}", alteration);
                relevant.extend(oncogenic);
            }
        }

        let mut effects: Vec<String> = Vec::new();
        for evidence in self
            .evidence
            .evidence_for_alterations(relevant.as_slice(), &[EvidenceType::MutationEffect])
        {
            if let Some(effect) = evidence.normalized_effect() {
                if !effects.contains(&effect) {
                    effects.push(effect);
                }
            }
        }
        for effect in effects {
            let name = format!("{} mutations", effect);
            if let Some(found) = find_alteration(genome, &name, catalogue, &self.abbreviations) {
                relevant.insert(found.clone());
            }
        }

        if is_egfr && alteration.alteration == EGFR_INS_FQEA {
            relevant.retain(|alt| alt.alteration != EGFR_762_823_INS);
        }

        if !self.add_oncogenic_mutations(&alteration, &relevant)
            && self.add_vus(&alteration, matched.is_some())
        {
            if let Some(vus) = find_alteration(genome, VUS, catalogue, &self.abbreviations) {
                relevant.insert(vus.clone());
            }
        }

        let alleles = allele_alterations(genome, &alteration, &indexed);
        let names = names_for_exclusion(&alteration, matched.is_none(), &relevant, &alleles);
        drop_members_excluding(&mut relevant, &names);

        trace!("{} relevant alterations for {}", relevant.len(), alteration);
        relevant
    }

    ///
    /// [`Resolver::find_relevant_alterations`] over the catalogue the
    /// [`CatalogueProvider`] holds for the query's gene.
    ///
    pub fn find_relevant_alterations_for_gene(
        &self,
        genome: Option<ReferenceGenome>,
        query: &mut Alteration,
        include_alternative_allele: bool,
    ) -> AlterationSet {
        let catalogue = self.catalogues.alterations_for_gene(&query.gene, genome);
        self.find_relevant_alterations(genome, query, &catalogue, include_alternative_allele)
    }

    /// Resolve with the configured genome and allele setting.
    pub fn resolve_with_defaults(&self, query: &mut Alteration) -> AlterationSet {
        self.find_relevant_alterations_for_gene(
            self.reference_genome,
            query,
            self.include_alternative_allele,
        )
    }

    ///
    /// Build the alteration a client [`Query`] describes. `None` when the query
    /// names no alteration or an unknown gene.
    ///
    pub fn alteration_from_query(&self, query: &Query) -> Option<Alteration> {
        let text = query.alteration.as_deref()?;
        let gene = self
            .genes
            .gene_by_symbol(query.hugo_symbol.as_deref()?)
            .filter(|gene| query.entrez_gene_id.is_none_or(|id| id == gene.entrez_gene_id))?;

        let mut alteration = Alteration::new(gene, text);
        if let Some(alteration_type) = query
            .alteration_type
            .as_deref()
            .and_then(|t| t.parse::<AlterationType>().ok())
        {
            alteration.alteration_type = alteration_type;
        }
        alteration.consequence = query
            .consequence
            .as_deref()
            .and_then(|term| self.classifier.consequence_by_term(term));
        if let (Some(start), Some(end)) = (query.protein_start, query.protein_end) {
            alteration = alteration.with_position(start, end);
        }
        Some(alteration)
    }

    /// Resolve a client [`Query`]; unknown genes resolve to nothing.
    pub fn resolve_query(
        &self,
        genome: Option<ReferenceGenome>,
        query: &Query,
        include_alternative_allele: bool,
    ) -> AlterationSet {
        match self.alteration_from_query(query) {
            Some(mut alteration) => self.find_relevant_alterations_for_gene(
                genome,
                &mut alteration,
                include_alternative_allele,
            ),
            None => {
                debug!("Nothing to resolve for query {}", query.query_id());
                AlterationSet::new()
            }
        }
    }

    ///
    /// Catalogue rows of several genes, concatenated in the order the genes are
    /// given.
    ///
    pub fn alterations_for_genes(
        &self,
        genome: Option<ReferenceGenome>,
        genes: &[Gene],
    ) -> Vec<Alteration> {
        self.catalogues.alterations_for_genes(genes, genome)
    }

    /// Catalogue rows of `gene` that no evidence references.
    pub fn orphaned_alterations(&self, gene: &Gene) -> Vec<Alteration> {
        orphaned_alterations(self.catalogues.as_ref(), self.evidence.as_ref(), gene)
    }

    fn find_reverse_fusion<'a>(
        &self,
        genome: Option<ReferenceGenome>,
        query: &Alteration,
        catalogue: &'a Catalogue,
    ) -> Option<&'a Alteration> {
        reverse_fusion_names(&query.alteration)
            .iter()
            .find_map(|name| find_alteration(genome, name, catalogue, &self.abbreviations))
    }

    fn add_vus(&self, alteration: &Alteration, curated: bool) -> bool {
        !curated
            || self
                .oncogenicity
                .vus_alterations(&alteration.gene)
                .contains(alteration)
    }

    fn is_gene(&self, gene: &Gene, symbol: &str) -> bool {
        gene.hugo_symbol.eq_ignore_ascii_case(symbol)
            || self
                .genes
                .gene_by_symbol(symbol)
                .is_some_and(|known| known == *gene)
    }

    /// The curated gene record when the query's gene carries no roles.
    fn gene_with_roles(&self, gene: &Gene) -> Gene {
        if gene.is_oncogene.is_some() || gene.is_tumor_suppressor.is_some() {
            return gene.clone();
        }
        self.genes
            .gene_by_symbol(&gene.hugo_symbol)
            .filter(|known| known == gene)
            .unwrap_or_else(|| gene.clone())
    }
}

fn is_fusion(alteration: &Alteration, consequence: &VariantConsequence) -> bool {
    alteration.alteration.to_lowercase().contains("fusion")
        || alteration.alteration_type == AlterationType::Fusion
        || (alteration.alteration_type == AlterationType::StructuralVariant
            && consequence.is(FUSION))
}

///
/// Catalogue entries naming `bucket`, with or without an exclusion clause, in
/// catalogue order.
///
pub(crate) fn bucket_entries(
    genome: Option<ReferenceGenome>,
    catalogue: &Catalogue,
    bucket: CategoricalBucket,
) -> Vec<&Alteration> {
    catalogue
        .valid_for(genome)
        .filter(|alt| CategoricalBucket::from_name(&alt.alteration) == Some(bucket))
        .collect()
}
