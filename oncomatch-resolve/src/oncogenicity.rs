use fxhash::FxHashSet;

use oncomatch_core::consts::AMPLIFICATION;
use oncomatch_core::models::oncogenicity::{has_important_oncogenicity, has_oncogenic};
use oncomatch_core::models::{Alteration, AlterationKey, AlterationSet, Oncogenicity};

use crate::resolver::Resolver;

impl Resolver {
    ///
    /// Whether the "Oncogenic Mutations" bucket applies to `exact`.
    ///
    /// A curated call on `exact` decides on its own. Without one a hotspot
    /// qualifies, and otherwise a single oncogenic-like call among the non-VUS
    /// members of `relevant` is enough. Amplifications never qualify.
    ///
    pub fn add_oncogenic_mutations(&self, exact: &Alteration, relevant: &AlterationSet) -> bool {
        if exact.alteration.trim().eq_ignore_ascii_case(AMPLIFICATION) {
            return false;
        }

        let curated = self.oncogenicity.curated_oncogenicities(exact);
        if has_important_oncogenicity(&curated) {
            return has_oncogenic(&curated);
        }
        if self.oncogenicity.is_hotspot(exact) {
            return true;
        }

        let vus: FxHashSet<AlterationKey> = self
            .oncogenicity
            .vus_alterations(&exact.gene)
            .iter()
            .map(Alteration::key)
            .collect();
        relevant
            .iter()
            .filter(|alt| !vus.contains(&alt.key()))
            .any(|alt| {
                Oncogenicity::strongest(self.oncogenicity.curated_oncogenicities(alt))
                    .is_some_and(|call| call.is_oncogenic())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    use oncomatch_core::consts::*;
    use oncomatch_core::models::{ConsequenceVocabulary, Evidence, EvidenceType, Gene};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use crate::memory::KnowledgeBase;

    #[fixture]
    fn kras() -> Gene {
        Gene::new(3845, "KRAS").with_roles(true, false)
    }

    fn missense(gene: &Gene, name: &str, position: i32) -> Alteration {
        Alteration::new(gene.clone(), name)
            .with_consequence(ConsequenceVocabulary::default().by_term_or_na(MISSENSE_VARIANT))
            .with_position(position, position)
    }

    fn curate(kb: &KnowledgeBase, alteration: &Alteration, effect: &str) {
        let saved = kb.save_alteration(alteration.clone());
        kb.add_evidence(Evidence::new(1, EvidenceType::Oncogenic, Some(effect), vec![saved]));
    }

    #[rstest]
    #[case("Oncogenic", true)]
    #[case("Likely Neutral", false)]
    fn test_curated_call_decides(kras: Gene, #[case] effect: &str, #[case] expected: bool) {
        let kb = Arc::new(KnowledgeBase::new());
        let g12d = missense(&kras, "G12D", 12);
        curate(&kb, &g12d, effect);
        kb.mark_hotspot(&g12d);

        let resolver = Resolver::from_knowledge_base(kb);
        assert_eq!(
            resolver.add_oncogenic_mutations(&g12d, &AlterationSet::new()),
            expected
        );
    }

    #[rstest]
    fn test_hotspot_without_curation(kras: Gene) {
        let kb = Arc::new(KnowledgeBase::new());
        let g12w = missense(&kras, "G12W", 12);
        kb.mark_hotspot(&g12w);

        let resolver = Resolver::from_knowledge_base(kb);
        assert_eq!(resolver.add_oncogenic_mutations(&g12w, &AlterationSet::new()), true);
    }

    #[rstest]
    fn test_any_relevant_member_oncogenic(kras: Gene) {
        let kb = Arc::new(KnowledgeBase::new());
        let g12 = Alteration::new(kras.clone(), "G12");
        curate(&kb, &g12, "Likely Oncogenic");
        let g12w = missense(&kras, "G12W", 12);

        let resolver = Resolver::from_knowledge_base(kb.clone());
        let relevant: AlterationSet = vec![g12.clone()].into_iter().collect();
        assert_eq!(resolver.add_oncogenic_mutations(&g12w, &relevant), true);

        kb.set_vus(&kras, vec![g12]);
        assert_eq!(resolver.add_oncogenic_mutations(&g12w, &relevant), false);
    }

    #[rstest]
    fn test_never_for_amplification(kras: Gene) {
        let kb = Arc::new(KnowledgeBase::new());
        let amplification = Alteration::new(kras, AMPLIFICATION);
        curate(&kb, &amplification, "Oncogenic");

        let resolver = Resolver::from_knowledge_base(kb);
        assert_eq!(
            resolver.add_oncogenic_mutations(&amplification, &AlterationSet::new()),
            false
        );
    }

    #[rstest]
    fn test_no_information(kras: Gene) {
        let resolver = Resolver::from_knowledge_base(Arc::new(KnowledgeBase::new()));
        let g12w = missense(&kras, "G12W", 12);
        assert_eq!(resolver.add_oncogenic_mutations(&g12w, &AlterationSet::new()), false);
    }

    #[rstest]
    fn test_inconclusive_is_not_decisive(kras: Gene) {
        let kb = Arc::new(KnowledgeBase::new());
        let g12w = missense(&kras, "G12W", 12);
        curate(&kb, &g12w, "Inconclusive");
        kb.mark_hotspot(&g12w);

        let resolver = Resolver::from_knowledge_base(kb);
        assert_eq!(resolver.add_oncogenic_mutations(&g12w, &AlterationSet::new()), true);
    }
}
