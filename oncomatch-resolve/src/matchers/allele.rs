use oncomatch_core::consts::MISSENSE_VARIANT;
use oncomatch_core::models::{Alteration, Catalogue, ReferenceGenome};

use crate::matchers::range::{
    IndexedCatalogue, find_mutations_by_consequence_and_position,
    find_mutations_by_consequence_and_position_on_same_position,
};

fn first_residue(residues: &str) -> Option<char> {
    residues.chars().next()
}

///
/// The other missense alleles curated at the query's residue: `V600K` and
/// `V600D` for `V600E`. The query itself and positioned rows such as `V600` are
/// left out.
///
pub fn allele_alterations<'a>(
    genome: Option<ReferenceGenome>,
    query: &Alteration,
    catalogue: &IndexedCatalogue<'a>,
) -> Vec<&'a Alteration> {
    let Some(consequence) = query.consequence.as_ref().filter(|c| c.is(MISSENSE_VARIANT)) else {
        return Vec::new();
    };
    let (Some(start), Some(end)) = (query.protein_start, query.protein_end) else {
        return Vec::new();
    };
    if start != end {
        return Vec::new();
    }

    find_mutations_by_consequence_and_position_on_same_position(
        &query.gene,
        genome,
        consequence,
        start,
        end,
        query.ref_residues.as_deref(),
        catalogue,
    )
    .into_iter()
    .filter(|alt| *alt != query && !alt.is_positioned())
    .collect()
}

///
/// Multi-residue rows of the query's consequence that cover its position with
/// the same reference residue there.
///
/// A row's reference string is read at the query's offset from the row start.
/// If the offset falls outside the string, the row is dropped. Rows or queries
/// without reference residues are kept on overlap alone.
///
pub fn range_alterations_including<'a>(
    genome: Option<ReferenceGenome>,
    query: &Alteration,
    catalogue: &IndexedCatalogue<'a>,
) -> Vec<&'a Alteration> {
    let Some(consequence) = query.consequence.as_ref() else {
        return Vec::new();
    };
    let (Some(start), Some(end)) = (query.protein_start, query.protein_end) else {
        return Vec::new();
    };

    find_mutations_by_consequence_and_position(&query.gene, genome, consequence, start, end, catalogue)
        .into_iter()
        .filter(|alt| !alt.is_single_residue())
        .filter(|alt| {
            match (
                alt.ref_residues.as_deref(),
                query.ref_residues.as_deref().and_then(first_residue),
                alt.protein_start,
            ) {
                (Some(range_residues), Some(residue), Some(range_start)) => {
                    let offset = (range_start - start).unsigned_abs() as usize;
                    range_residues.chars().nth(offset) == Some(residue)
                }
                _ => true,
            }
        })
        .collect()
}

///
/// Positioned rows at the query's residue, e.g. `V600` for `V600E`. When both
/// name a reference residue they must agree.
///
pub fn positioned_alterations<'a>(
    genome: Option<ReferenceGenome>,
    query: &Alteration,
    catalogue: &'a Catalogue,
) -> Vec<&'a Alteration> {
    let Some(position) = query.protein_start.filter(|_| query.is_single_residue()) else {
        return Vec::new();
    };

    catalogue
        .valid_for(genome)
        .filter(|alt| alt.gene == query.gene && alt.is_positioned())
        .filter(|alt| alt.protein_start == Some(position) && *alt != query)
        .filter(|alt| match (alt.ref_residues.as_deref(), query.ref_residues.as_deref()) {
            (Some(row), Some(asked)) => first_residue(row) == first_residue(asked),
            _ => true,
        })
        .collect()
}

///
/// Every missense single-residue row at `position`.
///
pub fn all_missense_alleles(
    genome: Option<ReferenceGenome>,
    position: i32,
    catalogue: &Catalogue,
) -> Vec<&Alteration> {
    catalogue
        .valid_for(genome)
        .filter(|alt| alt.consequence_is(MISSENSE_VARIANT))
        .filter(|alt| alt.is_single_residue() && alt.protein_start == Some(position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use oncomatch_core::consts::*;
    use oncomatch_core::models::{ConsequenceVocabulary, Gene};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vocabulary() -> ConsequenceVocabulary {
        ConsequenceVocabulary::default()
    }

    #[fixture]
    fn braf() -> Gene {
        Gene::new(673, "BRAF")
    }

    fn missense(gene: &Gene, name: &str, position: i32, reference: &str, variant: &str) -> Alteration {
        Alteration::new(gene.clone(), name)
            .with_consequence(ConsequenceVocabulary::default().by_term_or_na(MISSENSE_VARIANT))
            .with_position(position, position)
            .with_residues(Some(reference), Some(variant))
    }

    #[fixture]
    fn catalogue(braf: Gene, vocabulary: ConsequenceVocabulary) -> Catalogue {
        Catalogue::new(vec![
            missense(&braf, "V600E", 600, "V", "E"),
            missense(&braf, "V600K", 600, "V", "K"),
            missense(&braf, "K601E", 601, "K", "E"),
            Alteration::new(braf.clone(), "V600")
                .with_consequence(vocabulary.by_term_or_na(NA))
                .with_position(600, 600)
                .with_residues(Some("V"), None),
            Alteration::new(braf.clone(), "T599_K601mis")
                .with_consequence(vocabulary.by_term_or_na(MISSENSE_VARIANT))
                .with_position(599, 601)
                .with_residues(Some("TVK"), None),
            Alteration::new(braf.clone(), "A598_K601mis")
                .with_consequence(vocabulary.by_term_or_na(MISSENSE_VARIANT))
                .with_position(598, 601)
                .with_residues(Some("ATKK"), None),
            Alteration::new(braf, "595_605mis")
                .with_consequence(vocabulary.by_term_or_na(MISSENSE_VARIANT))
                .with_position(595, 605),
        ])
    }

    fn names(found: Vec<&Alteration>) -> Vec<&str> {
        found.into_iter().map(|alt| alt.alteration.as_str()).collect()
    }

    #[rstest]
    fn test_allele_family_leaves_out_query(braf: Gene, catalogue: Catalogue) {
        let indexed = IndexedCatalogue::new(&catalogue);
        let query = missense(&braf, "V600E", 600, "V", "E");
        assert_eq!(names(allele_alterations(None, &query, &indexed)), vec!["V600K"]);
    }

    #[rstest]
    fn test_range_inclusion_by_reference_residue(braf: Gene, catalogue: Catalogue) {
        let indexed = IndexedCatalogue::new(&catalogue);
        let query = missense(&braf, "V600E", 600, "V", "E");

        // TVK has V at offset 1; ATKK has K at offset 2
        assert_eq!(
            names(range_alterations_including(None, &query, &indexed)),
            vec!["T599_K601mis", "595_605mis"]
        );
    }

    #[rstest]
    fn test_range_inclusion_out_of_range_offset(braf: Gene, vocabulary: ConsequenceVocabulary) {
        let catalogue = Catalogue::new(vec![
            Alteration::new(braf.clone(), "590_610mis")
                .with_consequence(vocabulary.by_term_or_na(MISSENSE_VARIANT))
                .with_position(590, 610)
                .with_residues(Some("AB"), None),
        ]);
        let indexed = IndexedCatalogue::new(&catalogue);
        let query = missense(&braf, "V600E", 600, "V", "E");
        assert_eq!(range_alterations_including(None, &query, &indexed).is_empty(), true);
    }

    #[rstest]
    fn test_positioned(braf: Gene, catalogue: Catalogue) {
        let query = missense(&braf, "V600E", 600, "V", "E");
        assert_eq!(names(positioned_alterations(None, &query, &catalogue)), vec!["V600"]);

        let wrong_residue = missense(&braf, "A600E", 600, "A", "E");
        assert_eq!(positioned_alterations(None, &wrong_residue, &catalogue).is_empty(), true);
    }

    #[rstest]
    fn test_all_missense_alleles(catalogue: Catalogue) {
        assert_eq!(
            names(all_missense_alleles(None, 600, &catalogue)),
            vec!["V600E", "V600K"]
        );
    }
}
