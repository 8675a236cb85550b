use oncomatch_core::models::{
    Alteration, AlterationSet, Catalogue, CategoricalBucket, Evidence, EvidenceType,
    ReferenceGenome,
};

use crate::exclusion::expanded_exclusions;
use crate::resolver::Resolver;

/// `Likely Gain-of-function` reads as `gain-of-function`.
fn effect_matches(evidence: &Evidence, label: &str) -> bool {
    evidence
        .known_effect
        .as_deref()
        .is_some_and(|effect| effect.to_lowercase().replace("likely", "").trim() == label)
}

impl Resolver {
    ///
    /// Expand an umbrella term such as `Oncogenic Mutations` or
    /// `Truncating Mutations {excluding R213*}` into its concrete members.
    ///
    /// Evidence-backed buckets keep evidence order; catalogue-backed ones keep
    /// catalogue order. Excluded names are removed last, a single-residue
    /// exclusion taking every missense allele at its residue with it. Names that
    /// are not umbrella terms expand to nothing.
    ///
    pub fn relevant_alterations_for_categorical(
        &self,
        genome: Option<ReferenceGenome>,
        query: &Alteration,
        catalogue: &Catalogue,
    ) -> AlterationSet {
        let Some(bucket) = CategoricalBucket::from_name(&query.alteration) else {
            return AlterationSet::new();
        };
        let gene = &query.gene;

        let mut members: AlterationSet = match bucket {
            CategoricalBucket::OncogenicMutations => self
                .evidence
                .evidence_for_gene(gene, &[EvidenceType::Oncogenic])
                .into_iter()
                .filter(|evidence| evidence.oncogenicity().is_some_and(|call| call.is_oncogenic()))
                .flat_map(|evidence| evidence.alterations)
                .filter(|alt| alt.gene == *gene && alt.is_valid_for(genome))
                .collect(),
            CategoricalBucket::GainOfFunctionMutations
            | CategoricalBucket::LossOfFunctionMutations
            | CategoricalBucket::SwitchOfFunctionMutations => {
                let label = bucket.effect_label().unwrap_or_default();
                self.evidence
                    .evidence_for_gene(gene, &[EvidenceType::MutationEffect])
                    .into_iter()
                    .filter(|evidence| effect_matches(evidence, label))
                    .flat_map(|evidence| evidence.alterations)
                    .filter(|alt| alt.gene == *gene && alt.is_valid_for(genome))
                    .collect()
            }
            CategoricalBucket::TruncatingMutations => catalogue
                .valid_for(genome)
                .filter(|alt| alt.is_generally_truncating())
                .cloned()
                .collect(),
            CategoricalBucket::Fusions => catalogue
                .valid_for(genome)
                .filter(|alt| alt.alteration.to_lowercase().contains("fusion"))
                .cloned()
                .collect(),
            CategoricalBucket::Vus => self
                .oncogenicity
                .vus_alterations(gene)
                .into_iter()
                .filter(|alt| alt.is_valid_for(genome))
                .collect(),
        };

        let excluded = expanded_exclusions(
            genome,
            &query.alteration,
            query,
            catalogue,
            self.classifier.as_ref(),
        );
        if !excluded.is_empty() {
            members.retain(|alt| !excluded.contains(&alt.alteration.to_lowercase()));
        }
        members
    }
}
