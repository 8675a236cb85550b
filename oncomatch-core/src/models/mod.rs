pub mod alteration;
pub mod alteration_set;
pub mod catalogue;
pub mod categorical;
pub mod consequence;
pub mod evidence;
pub mod gene;
pub mod oncogenicity;
pub mod query;
pub mod reference_genome;

// re-export for cleaner imports
pub use self::alteration::{Alteration, AlterationKey, AlterationType};
pub use self::alteration_set::AlterationSet;
pub use self::catalogue::Catalogue;
pub use self::categorical::CategoricalBucket;
pub use self::consequence::{ConsequenceVocabulary, VariantConsequence, consequence_related};
pub use self::evidence::{Evidence, EvidenceType};
pub use self::gene::Gene;
pub use self::oncogenicity::Oncogenicity;
pub use self::query::Query;
pub use self::reference_genome::ReferenceGenome;
