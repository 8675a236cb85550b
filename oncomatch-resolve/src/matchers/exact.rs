use oncomatch_core::consts::IN_FRAME_DELETION;
use oncomatch_core::models::{Alteration, Catalogue, ReferenceGenome, consequence_related};
use oncomatch_core::naming::Abbreviations;

use crate::matchers::range::{IndexedCatalogue, find_mutations_by_consequence_and_position};

///
/// Find the catalogue row named `text`, ignoring case.
///
/// Raw names are tried first, display names second. When neither matches and
/// `text` is a known abbreviation the lookup is repeated with its full name.
///
pub fn find_alteration<'a>(
    genome: Option<ReferenceGenome>,
    text: &str,
    catalogue: &'a Catalogue,
    abbreviations: &Abbreviations,
) -> Option<&'a Alteration> {
    let text = text.trim();
    if let Some(found) = catalogue
        .valid_for(genome)
        .find(|alt| alt.alteration.eq_ignore_ascii_case(text))
    {
        return Some(found);
    }
    if let Some(found) = catalogue
        .valid_for(genome)
        .find(|alt| alt.name.eq_ignore_ascii_case(text))
    {
        return Some(found);
    }

    match abbreviations.full_name(text) {
        Some(full_name) if !full_name.eq_ignore_ascii_case(text) => {
            find_alteration(genome, full_name, catalogue, abbreviations)
        }
        _ => None,
    }
}

///
/// Find the row whose raw name is `text` and whose display name is `name`.
///
pub fn find_alteration_with_name<'a>(
    genome: Option<ReferenceGenome>,
    text: &str,
    name: &str,
    catalogue: &'a Catalogue,
) -> Option<&'a Alteration> {
    catalogue.valid_for(genome).find(|alt| {
        alt.alteration.eq_ignore_ascii_case(text.trim()) && alt.name.eq_ignore_ascii_case(name.trim())
    })
}

///
/// The catalogue row the query names, provided its consequence agrees.
///
/// A name match is accepted when either consequence is missing or `NA`, and
/// otherwise only when the catalogue consequence is related to the query's. An
/// in-frame deletion query without a name match falls back to the closest
/// in-frame deletion row overlapping its range, so `E746_A750del` finds a row
/// curated as `E746_A750delELREA` and the other way around.
///
pub fn find_exactly_matched_alteration<'a>(
    genome: Option<ReferenceGenome>,
    query: &Alteration,
    catalogue: &IndexedCatalogue<'a>,
    abbreviations: &Abbreviations,
) -> Option<&'a Alteration> {
    match find_alteration(genome, &query.alteration, catalogue.catalogue(), abbreviations) {
        Some(matched) => match (&matched.consequence, &query.consequence) {
            (Some(row), Some(asked)) if !row.is_na() && !asked.is_na() => {
                consequence_related(row, asked).then_some(matched)
            }
            _ => Some(matched),
        },
        None => {
            let consequence = query.consequence.as_ref().filter(|c| c.is(IN_FRAME_DELETION))?;
            let (start, end) = query.protein_start.zip(query.protein_end)?;
            find_mutations_by_consequence_and_position(
                &query.gene,
                genome,
                consequence,
                start,
                end,
                catalogue,
            )
            .into_iter()
            .next()
        }
    }
}
