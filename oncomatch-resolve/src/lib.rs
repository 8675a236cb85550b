//! # Relevant alteration resolution
//!
//! Given one alteration of a gene, find every curated alteration whose knowledge
//! applies to it: the exact entry, positional and range entries, the allele family
//! and the umbrella terms (`Oncogenic Mutations`, `Truncating Mutations`,
//! `Fusions`, the function buckets), minus whatever an exclusion clause carves out.
//!
//! Curated data comes in through the narrow traits of [`providers`].
//! [`memory::KnowledgeBase`] implements all of them in memory.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oncomatch_core::models::{Alteration, Gene};
//! use oncomatch_resolve::{KnowledgeBase, Resolver};
//!
//! let braf = Gene::new(673, "BRAF").with_roles(true, false);
//! let kb = Arc::new(KnowledgeBase::new());
//! for name in ["V600E", "V600K", "V600"] {
//!     kb.save_alteration(Alteration::new(braf.clone(), name));
//! }
//!
//! let resolver = Resolver::from_knowledge_base(kb);
//! let mut query = Alteration::new(braf, "V600E");
//! let relevant = resolver.find_relevant_alterations_for_gene(None, &mut query, true);
//!
//! assert_eq!(relevant.names(), vec!["V600E", "V600K", "V600"]);
//! ```
pub mod categorical;
pub mod config;
pub mod exclusion;
pub mod matchers;
pub mod memory;
pub mod oncogenicity;
pub mod providers;
pub mod resolver;

// re-export for cleaner imports
pub use self::config::{ResolverConfig, ResolverConfigError};
pub use self::memory::KnowledgeBase;
pub use self::providers::{CatalogueProvider, EvidenceProvider, GeneProvider, OncogenicityProvider};
pub use self::resolver::Resolver;
