//! Protein range overlap queries.
//!
//! Catalogue entries cover inclusive ranges of protein residues: `600-600` for a point
//! change, `746-750` for an in-frame deletion, `-1-100000` for umbrella terms that
//! apply to the whole protein. This crate indexes such ranges and answers the two
//! questions the resolver asks of them: which entries touch a query range, and in
//! what order of closeness to the query they should be reported.
//!
//! ## Quick Start
//!
//! ```rust
//! use oncomatch_ranges::{ProteinRange, RangeIndex, RangeLookup};
//!
//! let index = RangeIndex::build(vec![
//!     ProteinRange::new(600, 600, "V600E"),
//!     ProteinRange::new(599, 601, "T599_K601del"),
//!     ProteinRange::new(-1, 100_000, "Oncogenic Mutations"),
//! ]);
//!
//! // a bounded query returns everything it touches
//! assert_eq!(index.find_for_query(600, 600).len(), 3);
//!
//! // a query over the whole protein only returns entries containing it
//! let umbrella = index.find_for_query(-1, 100_000);
//! assert_eq!(umbrella.len(), 1);
//! assert_eq!(umbrella[0].val, "Oncogenic Mutations");
//! ```

/// Range closeness ordering.
pub mod closeness;

/// Inclusive protein range.
pub mod interval;

/// Augmented range list.
///
/// See [`RangeIndex`] for details.
pub mod range_index;

/// Lookup trait shared by range structures.
pub mod traits;

// re-exports
pub use self::closeness::{Closeness, sort_by_closeness};
pub use self::interval::{ProteinRange, is_unbounded_query};
pub use self::range_index::RangeIndex;
pub use self::traits::RangeLookup;
