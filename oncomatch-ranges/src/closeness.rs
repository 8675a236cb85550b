use num_traits::{PrimInt, Signed};

use crate::interval::ProteinRange;

///
/// How close a candidate range is to a query range. Orders by the distance between
/// the two midpoints, then by candidate start, smallest first.
///
/// Midpoints are kept doubled so odd-width ranges compare exactly. Sums and
/// differences saturate, so ranges near the integer limits still order sensibly.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Closeness<I>
where
    I: PrimInt + Signed,
{
    midpoint_distance: I,
    start: I,
}

impl<I> Closeness<I>
where
    I: PrimInt + Signed,
{
    pub fn between(candidate: (I, I), query: (I, I)) -> Self {
        let (start, end) = candidate;
        let candidate_mid = start.saturating_add(end);
        let query_mid = query.0.saturating_add(query.1);
        let midpoint_distance = if candidate_mid >= query_mid {
            candidate_mid.saturating_sub(query_mid)
        } else {
            query_mid.saturating_sub(candidate_mid)
        };
        Closeness {
            midpoint_distance,
            start,
        }
    }
}

///
/// Stable sort of `ranges` by [`Closeness`] to `[start, end]`.
///
pub fn sort_by_closeness<I, T>(ranges: &mut [ProteinRange<I, T>], start: I, end: I)
where
    I: PrimInt + Signed,
{
    ranges.sort_by_key(|range| Closeness::between((range.start, range.end), (start, end)));
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_sort_by_closeness() {
        let mut ranges = vec![
            ProteinRange::new(-1, 100_000, "Oncogenic Mutations"),
            ProteinRange::new(599, 601, "T599_K601mut"),
            ProteinRange::new(590, 610, "590_610mut"),
            ProteinRange::new(600, 604, "V600_604mut"),
            ProteinRange::new(596, 600, "596_V600mut"),
        ];
        sort_by_closeness(&mut ranges, 600, 600);

        let order: Vec<&str> = ranges.iter().map(|range| range.val).collect();
        assert_eq!(
            order,
            vec![
                "590_610mut",
                "T599_K601mut",
                "596_V600mut",
                "V600_604mut",
                "Oncogenic Mutations"
            ]
        );
    }

    #[rstest]
    #[case((600, 600), (600, 600), (600, 600), true)]
    #[case((590, 610), (599, 601), (600, 600), true)]
    #[case((599, 601), (590, 610), (600, 600), false)]
    #[case((596, 600), (600, 604), (600, 600), true)]
    #[case((600, 600), (590, 600), (600, 600), true)]
    fn test_closeness_order(
        #[case] a: (i32, i32),
        #[case] b: (i32, i32),
        #[case] query: (i32, i32),
        #[case] a_first: bool,
    ) {
        assert_eq!(
            Closeness::between(a, query) <= Closeness::between(b, query),
            a_first
        );
    }

    #[rstest]
    fn test_closeness_near_integer_limits() {
        let far = Closeness::between((0, i32::MAX), (0, 0));
        let near = Closeness::between((0, 10), (0, 0));
        assert_eq!(near < far, true);

        let below = Closeness::between((i32::MIN, -1), (i32::MAX, i32::MAX));
        assert_eq!(below > far, false);
    }
}
