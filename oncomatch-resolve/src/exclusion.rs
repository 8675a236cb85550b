use fxhash::FxHashSet;
use log::debug;

use oncomatch_core::classifier::ConsequenceClassifier;
use oncomatch_core::consts::{IN_FRAME_DELETION, IN_FRAME_INSERTION};
use oncomatch_core::models::{Alteration, AlterationSet, Catalogue, ReferenceGenome};
use oncomatch_core::naming::parse_exclusion;

use crate::matchers::all_missense_alleles;

///
/// Lower-cased names an exclusion clause is checked against after resolving
/// `alteration`.
///
/// These are the resolved members plus the query itself when it had no exact
/// match, minus the query's allele family. In-frame deletions and insertions
/// only ever answer for their own name.
///
pub fn names_for_exclusion(
    alteration: &Alteration,
    unmatched: bool,
    relevant: &AlterationSet,
    alleles: &[&Alteration],
) -> FxHashSet<String> {
    if alteration.consequence_is(IN_FRAME_DELETION) || alteration.consequence_is(IN_FRAME_INSERTION)
    {
        return [alteration.alteration.to_lowercase()].into_iter().collect();
    }

    relevant
        .iter()
        .chain(unmatched.then_some(alteration))
        .filter(|alt| !alleles.contains(alt))
        .map(|alt| alt.alteration.to_lowercase())
        .collect()
}

///
/// Drop every member whose exclusion clause names one of `names`. Names are
/// compared case-insensitively; `names` must already be lower case.
///
pub fn drop_members_excluding(relevant: &mut AlterationSet, names: &FxHashSet<String>) {
    relevant.retain(|alt| match parse_exclusion(&alt.alteration) {
        Some(clause) => {
            let excluded = clause
                .excluded
                .iter()
                .any(|name| names.contains(&name.to_lowercase()));
            if excluded {
                debug!("Excluding {} from the relevant alterations", alt);
            }
            !excluded
        }
        None => true,
    });
}

///
/// The lower-cased names excluded by the clause of `text`, widened so that a
/// single-residue name also excludes every missense allele curated at that
/// residue: `Oncogenic Mutations {excluding V600}` drops `V600E` and `V600K`.
///
pub fn expanded_exclusions(
    genome: Option<ReferenceGenome>,
    text: &str,
    alteration: &Alteration,
    catalogue: &Catalogue,
    classifier: &dyn ConsequenceClassifier,
) -> FxHashSet<String> {
    let Some(clause) = parse_exclusion(text) else {
        return FxHashSet::default();
    };

    let mut names = FxHashSet::default();
    for name in clause.excluded {
        let mut excluded = Alteration::new(alteration.gene.clone(), name);
        classifier.annotate(&mut excluded);
        if let Some(position) = excluded.protein_start.filter(|_| excluded.is_single_residue()) {
            names.extend(
                all_missense_alleles(genome, position, catalogue)
                    .into_iter()
                    .map(|alt| alt.alteration.to_lowercase()),
            );
        }
        names.insert(name.to_lowercase());
    }
    names
}
