use oncomatch_core::models::{
    Alteration, Catalogue, Gene, ReferenceGenome, VariantConsequence, consequence_related,
};
use oncomatch_ranges::{Closeness, ProteinRange, RangeIndex, RangeLookup};

///
/// A catalogue snapshot with its positioned rows indexed by protein range.
///
/// Built once per resolution and shared by every range lookup of that call.
///
#[derive(Debug, Clone)]
pub struct IndexedCatalogue<'a> {
    catalogue: &'a Catalogue,
    index: RangeIndex<i32, usize>,
}

impl<'a> IndexedCatalogue<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        let ranges = catalogue
            .iter()
            .enumerate()
            .filter_map(|(i, alt)| match (alt.protein_start, alt.protein_end) {
                (Some(start), Some(end)) => Some(ProteinRange::new(start, end, i)),
                _ => None,
            })
            .collect();

        IndexedCatalogue {
            catalogue,
            index: RangeIndex::build(ranges),
        }
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Rows whose range matches `[start, end]` under the unbounded-query rule.
    fn rows_for_query(&self, start: i32, end: i32) -> impl Iterator<Item = &'a Alteration> + '_ {
        let rows = self.catalogue.as_slice();
        self.index
            .find_for_query(start, end)
            .into_iter()
            .filter_map(move |range| rows.get(range.val))
    }
}

fn closeness(alteration: &Alteration, start: i32, end: i32) -> Closeness<i32> {
    Closeness::between(
        (
            alteration.protein_start.unwrap_or(start),
            alteration.protein_end.unwrap_or(end),
        ),
        (start, end),
    )
}

///
/// Catalogue rows of `gene` valid under `genome` whose consequence is related to
/// `consequence` and whose range matches `[start, end]`.
///
/// A bounded query matches every overlapping row; a query reaching a protein
/// boundary only matches rows containing it. `NA` never matches. Results come
/// closest first by midpoint, then by start (see [`Closeness`]), then by raw name.
///
pub fn find_mutations_by_consequence_and_position<'a>(
    gene: &Gene,
    genome: Option<ReferenceGenome>,
    consequence: &VariantConsequence,
    start: i32,
    end: i32,
    catalogue: &IndexedCatalogue<'a>,
) -> Vec<&'a Alteration> {
    if consequence.is_na() {
        return Vec::new();
    }

    let mut found: Vec<&Alteration> = catalogue
        .rows_for_query(start, end)
        .filter(|alt| alt.gene == *gene && alt.is_valid_for(genome))
        .filter(|alt| {
            alt.consequence
                .as_ref()
                .is_some_and(|c| consequence_related(c, consequence))
        })
        .collect();

    found.sort_by(|a, b| {
        closeness(a, start, end)
            .cmp(&closeness(b, start, end))
            .then_with(|| a.alteration.cmp(&b.alteration))
    });
    found.dedup_by(|a, b| a == b);
    found
}

///
/// Like [`find_mutations_by_consequence_and_position`], restricted to single-residue
/// rows inside `[start, end]`. When both the row and `ref_residue` name a reference
/// residue they must be identical. Results keep catalogue order.
///
pub fn find_mutations_by_consequence_and_position_on_same_position<'a>(
    gene: &Gene,
    genome: Option<ReferenceGenome>,
    consequence: &VariantConsequence,
    start: i32,
    end: i32,
    ref_residue: Option<&str>,
    catalogue: &IndexedCatalogue<'a>,
) -> Vec<&'a Alteration> {
    catalogue
        .catalogue()
        .iter()
        .filter(|alt| alt.gene == *gene && alt.is_valid_for(genome))
        .filter(|alt| {
            alt.consequence
                .as_ref()
                .is_some_and(|c| consequence_related(c, consequence))
        })
        .filter(|alt| match (alt.protein_start, alt.protein_end) {
            (Some(s), Some(e)) => s == e && s >= start && s <= end,
            _ => false,
        })
        .filter(|alt| match (alt.ref_residues.as_deref(), ref_residue) {
            (Some(row), Some(query)) => row == query,
            _ => true,
        })
        .collect()
}
