use num_traits::{PrimInt, Signed};

use crate::interval::ProteinRange;

pub trait RangeLookup<I, T>: Send + Sync
where
    I: PrimInt + Signed + Send + Sync,
    T: Clone + Send + Sync,
{
    fn build(ranges: Vec<ProteinRange<I, T>>) -> Self
    where
        Self: Sized;

    /// Every stored range sharing at least one residue with `[start, end]`.
    fn find(&self, start: I, end: I) -> Vec<ProteinRange<I, T>>;

    /// Every stored range covering all of `[start, end]`.
    fn find_containing(&self, start: I, end: I) -> Vec<ProteinRange<I, T>> {
        self.find(start, end)
            .into_iter()
            .filter(|range| range.contains(start, end))
            .collect()
    }
}
