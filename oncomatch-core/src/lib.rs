//! # Core models and naming rules for oncomatch
//!
//! This crate holds the value types every other oncomatch crate is built on: genes,
//! alterations, consequences, evidence and oncogenicity calls. It also carries the
//! naming rules curated alteration names follow (exclusion clauses, fusion names,
//! abbreviations) and the classifier that attaches a consequence to a raw protein
//! change.
//!
//! ## Examples
//!
//! ```rust
//! use oncomatch_core::classifier::{ConsequenceClassifier, ProteinChangeClassifier};
//! use oncomatch_core::models::{Alteration, Gene};
//!
//! let classifier = ProteinChangeClassifier::default();
//! let mut alteration = Alteration::new(Gene::new(673, "BRAF"), "V600E");
//! classifier.annotate(&mut alteration);
//!
//! assert!(alteration.consequence_is("missense_variant"));
//! assert_eq!(alteration.protein_start, Some(600));
//! ```
pub mod classifier;
pub mod consts;
pub mod errors;
pub mod models;
pub mod naming;

// re-export for cleaner imports
pub use self::classifier::{ConsequenceClassifier, ProteinChangeClassifier};
pub use self::errors::AlterationError;
pub use self::naming::Abbreviations;
