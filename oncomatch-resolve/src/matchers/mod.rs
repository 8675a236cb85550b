//! Catalogue lookups by name, by consequence and range, and by allele.

pub mod allele;
pub mod exact;
pub mod range;

// re-export for cleaner imports
pub use self::allele::{
    all_missense_alleles, allele_alterations, positioned_alterations, range_alterations_including,
};
pub use self::exact::{find_alteration, find_alteration_with_name, find_exactly_matched_alteration};
pub use self::range::{
    IndexedCatalogue, find_mutations_by_consequence_and_position,
    find_mutations_by_consequence_and_position_on_same_position,
};
