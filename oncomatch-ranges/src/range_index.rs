use std::mem::swap;

use num_traits::{PrimInt, Signed};

use crate::interval::{ProteinRange, is_unbounded_query};
use crate::traits::RangeLookup;

/// Sub-lists are split off once this many following ranges end before the current one.
const MINIMUM_COVERAGE_LENGTH: usize = 10;

///
/// An augmented list of inclusive protein ranges.
///
/// Ranges are sorted by start and every position carries the largest end seen so far,
/// so a query walks back from the last start at or before its end and stops as soon as
/// no earlier range can reach it. Ranges that would force long walks (many shorter
/// ranges nested under them) are moved into further sub-lists, the way an Augmented
/// Interval List decomposes high-coverage regions.
///
/// # Examples
///
/// ```
/// use oncomatch_ranges::{ProteinRange, RangeIndex, RangeLookup};
///
/// let index = RangeIndex::build(vec![
///     ProteinRange::new(746, 750, "E746_A750del"),
///     ProteinRange::new(747, 749, "L747_E749del"),
///     ProteinRange::new(858, 858, "L858R"),
/// ]);
///
/// assert_eq!(index.find(750, 760).len(), 1);
/// assert_eq!(index.find_containing(747, 749).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIndex<I, T>
where
    I: PrimInt + Signed + Send + Sync,
    T: Clone + Send + Sync,
{
    starts: Vec<I>,
    ends: Vec<I>,
    max_ends: Vec<I>,
    header_list: Vec<usize>,
    stored_ranges: Vec<ProteinRange<I, T>>,
}

/// Scratch space for [`RangeIndex::decompose`].
#[derive(Debug)]
struct Decomposition<I, T>
where
    I: PrimInt + Signed,
{
    starts: Vec<I>,
    ends: Vec<I>,
    max_ends: Vec<I>,
    stored_ranges: Vec<ProteinRange<I, T>>,
    /// Ranges left for the next sub-list.
    remaining: Vec<ProteinRange<I, T>>,
}

impl<I, T> Decomposition<I, T>
where
    I: PrimInt + Signed,
{
    fn with_capacity(cap: usize) -> Self {
        Decomposition {
            starts: Vec::with_capacity(cap),
            ends: Vec::with_capacity(cap),
            max_ends: Vec::with_capacity(cap),
            stored_ranges: Vec::with_capacity(cap),
            remaining: Vec::with_capacity(cap),
        }
    }

    fn clear(&mut self) {
        self.starts.clear();
        self.ends.clear();
        self.max_ends.clear();
        self.stored_ranges.clear();
        self.remaining.clear();
    }
}

impl<I, T> RangeLookup<I, T> for RangeIndex<I, T>
where
    I: PrimInt + Signed + Send + Sync,
    T: Clone + Send + Sync,
{
    fn build(ranges: Vec<ProteinRange<I, T>>) -> Self {
        let mut ranges = ranges;
        ranges.sort_by_key(|range| range.start);

        let mut starts = Vec::with_capacity(ranges.len());
        let mut ends = Vec::with_capacity(ranges.len());
        let mut max_ends = Vec::with_capacity(ranges.len());
        let mut stored_ranges = Vec::with_capacity(ranges.len());
        let mut scratch = Decomposition::with_capacity(ranges.len());

        let mut header_list = vec![0];

        loop {
            Self::decompose(&ranges, &mut scratch);

            starts.append(&mut scratch.starts);
            ends.append(&mut scratch.ends);
            max_ends.append(&mut scratch.max_ends);
            stored_ranges.append(&mut scratch.stored_ranges);
            swap(&mut ranges, &mut scratch.remaining);

            if ranges.is_empty() {
                break;
            }
            header_list.push(starts.len());
        }

        RangeIndex {
            starts,
            ends,
            max_ends,
            header_list,
            stored_ranges,
        }
    }

    fn find(&self, start: I, end: I) -> Vec<ProteinRange<I, T>> {
        let mut results = Vec::new();
        for (lo, hi) in self.sub_lists() {
            Self::query_slice(
                start,
                end,
                &self.starts[lo..hi],
                &self.ends[lo..hi],
                &self.max_ends[lo..hi],
                &self.stored_ranges[lo..hi],
                &mut results,
            );
        }
        results
    }
}

impl<I, T> RangeIndex<I, T>
where
    I: PrimInt + Signed + Send + Sync,
    T: Clone + Send + Sync,
{
    fn decompose(ranges: &[ProteinRange<I, T>], scratch: &mut Decomposition<I, T>) {
        scratch.clear();

        for (index, range) in ranges.iter().enumerate() {
            let covered = ranges
                .iter()
                .skip(index + 1)
                .take(MINIMUM_COVERAGE_LENGTH * 2 - 1)
                .filter(|next| range.end > next.end)
                .count();

            if covered >= MINIMUM_COVERAGE_LENGTH {
                scratch.remaining.push(range.clone());
            } else {
                scratch.starts.push(range.start);
                scratch.ends.push(range.end);
                scratch.stored_ranges.push(range.clone());
            }
        }

        let mut max = I::min_value();
        for end in scratch.ends.iter() {
            max = max.max(*end);
            scratch.max_ends.push(max);
        }
    }

    /// `[lo, hi)` bounds of every sub-list.
    fn sub_lists(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.header_list.iter().enumerate().map(|(i, &lo)| {
            let hi = self
                .header_list
                .get(i + 1)
                .copied()
                .unwrap_or(self.starts.len());
            (lo, hi)
        })
    }

    fn query_slice(
        start: I,
        end: I,
        starts: &[I],
        ends: &[I],
        max_ends: &[I],
        stored_ranges: &[ProteinRange<I, T>],
        results: &mut Vec<ProteinRange<I, T>>,
    ) {
        let mut i = starts.partition_point(|&x| x <= end);

        while i > 0 {
            i -= 1;
            // both ends inclusive
            if start > ends[i] {
                if start > max_ends[i] {
                    return;
                }
            } else {
                results.push(stored_ranges[i].clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

impl<T> RangeIndex<i32, T>
where
    T: Clone + Send + Sync,
{
    ///
    /// Ranges matching a resolver query: everything overlapping a bounded query, and
    /// only the ranges containing an unbounded one.
    ///
    pub fn find_for_query(&self, start: i32, end: i32) -> Vec<ProteinRange<i32, T>> {
        if is_unbounded_query(start, end) {
            self.find_containing(start, end)
        } else {
            self.find(start, end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ranges() -> Vec<ProteinRange<i32, &'static str>> {
        vec![
            ProteinRange::new(600, 600, "V600E"),
            ProteinRange::new(600, 600, "V600K"),
            ProteinRange::new(599, 601, "T599_K601mut"),
            ProteinRange::new(464, 469, "G464_G469mut"),
            ProteinRange::new(-1, 100_000, "Oncogenic Mutations"),
            ProteinRange::new(-1, 100_000, "Truncating Mutations"),
        ]
    }

    fn sorted_vals(found: Vec<ProteinRange<i32, &'static str>>) -> Vec<&'static str> {
        let mut vals: Vec<&str> = found.into_iter().map(|range| range.val).collect();
        vals.sort();
        vals
    }

    #[rstest]
    fn test_build(ranges: Vec<ProteinRange<i32, &'static str>>) {
        let index = RangeIndex::build(ranges);
        assert_eq!(index.len(), 6);
        assert_eq!(index.is_empty(), false);
    }

    #[rstest]
    fn test_find_is_inclusive(ranges: Vec<ProteinRange<i32, &'static str>>) {
        let index = RangeIndex::build(ranges);
        assert_eq!(
            sorted_vals(index.find(601, 605)),
            vec!["Oncogenic Mutations", "T599_K601mut", "Truncating Mutations"]
        );
        assert_eq!(
            sorted_vals(index.find(469, 469)),
            vec!["G464_G469mut", "Oncogenic Mutations", "Truncating Mutations"]
        );
    }

    #[rstest]
    fn test_find_for_query(ranges: Vec<ProteinRange<i32, &'static str>>) {
        let index = RangeIndex::build(ranges);
        assert_eq!(index.find_for_query(600, 600).len(), 5);
        assert_eq!(
            sorted_vals(index.find_for_query(-1, 100_000)),
            vec!["Oncogenic Mutations", "Truncating Mutations"]
        );
        assert_eq!(index.find_for_query(-1, 700).len(), 2);
    }

    #[rstest]
    fn test_empty_index() {
        let index: RangeIndex<i32, usize> = RangeIndex::build(vec![]);
        assert_eq!(index.is_empty(), true);
        assert_eq!(index.find(1, 100).is_empty(), true);
    }

    #[rstest]
    fn test_decomposed_sub_lists_are_queried() {
        // one long range covering many short ones is pushed into a second sub-list
        let mut ranges = vec![ProteinRange::new(1, 1000, 0usize)];
        ranges.extend((1..=30).map(|i| ProteinRange::new(i * 10, i * 10 + 1, i as usize)));
        let index = RangeIndex::build(ranges);

        assert_eq!(index.header_list.len() > 1, true);
        assert_eq!(index.find(995, 999).len(), 1);
        assert_eq!(index.find(100, 100).len(), 2);
        assert_eq!(index.find_containing(5, 500).len(), 1);
    }
}
