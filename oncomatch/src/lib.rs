#[cfg(feature = "core")]
#[doc(inline)]
pub use oncomatch_core as core;

#[cfg(feature = "ranges")]
#[doc(inline)]
pub use oncomatch_ranges as ranges;

#[cfg(feature = "resolve")]
#[doc(inline)]
pub use oncomatch_resolve as resolve;
