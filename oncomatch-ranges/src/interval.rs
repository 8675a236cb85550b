use num_traits::{PrimInt, Signed};

use oncomatch_core::consts::{POSITION_BOUNDARY_END, POSITION_BOUNDARY_START};

///
/// An inclusive range of protein residues carrying a value, usually the index of a
/// catalogue entry.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinRange<I, T>
where
    I: PrimInt + Signed,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> ProteinRange<I, T>
where
    I: PrimInt + Signed,
{
    pub fn new(start: I, end: I, val: T) -> Self {
        ProteinRange { start, end, val }
    }

    /// Number of residues covered.
    pub fn width(&self) -> I {
        self.end.saturating_sub(self.start).saturating_add(I::one())
    }

    pub fn overlaps(&self, start: I, end: I) -> bool {
        self.start <= end && self.end >= start
    }

    pub fn contains(&self, start: I, end: I) -> bool {
        self.start <= start && self.end >= end
    }

    pub fn is_single_residue(&self) -> bool {
        self.start == self.end
    }
}

///
/// True when a query reaches one of the protein boundaries. Such queries stand for
/// the whole protein, so candidates must contain them rather than merely overlap.
///
pub fn is_unbounded_query(start: i32, end: i32) -> bool {
    start <= POSITION_BOUNDARY_START || end >= POSITION_BOUNDARY_END
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case((746, 750), (750, 760), true)]
    #[case((746, 750), (751, 760), false)]
    #[case((600, 600), (600, 600), true)]
    #[case((600, 600), (599, 599), false)]
    fn test_overlaps(#[case] range: (i32, i32), #[case] query: (i32, i32), #[case] expected: bool) {
        let range = ProteinRange::new(range.0, range.1, ());
        assert_eq!(range.overlaps(query.0, query.1), expected);
    }

    #[rstest]
    fn test_width_and_containment() {
        let range = ProteinRange::new(746, 750, ());
        assert_eq!(range.width(), 5);
        assert_eq!(range.contains(747, 749), true);
        assert_eq!(range.contains(745, 749), false);
        assert_eq!(range.is_single_residue(), false);
    }

    #[rstest]
    #[case(-1, 100_000, true)]
    #[case(-1, 600, true)]
    #[case(1, 100_000, true)]
    #[case(600, 600, false)]
    fn test_is_unbounded_query(#[case] start: i32, #[case] end: i32, #[case] expected: bool) {
        assert_eq!(is_unbounded_query(start, end), expected);
    }
}
