use std::ops::Range;

/// Range intersection testing for flash regions.
pub trait MemoryRange {
    /// Returns true if `self` contains `range` fully.
    fn contains_range(&self, range: &Range<u64>) -> bool;

    /// Returns true if `self` and `range` share at least one address.
    fn intersects_range(&self, range: &Range<u64>) -> bool;
}

impl MemoryRange for Range<u64> {
    fn contains_range(&self, range: &Range<u64>) -> bool {
        // An empty range is contained nowhere.
        !range.is_empty() && range.start >= self.start && range.end <= self.end
    }

    fn intersects_range(&self, range: &Range<u64>) -> bool {
        !self.is_empty() && !range.is_empty() && self.start < range.end && range.start < self.end
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_equal_range() {
        assert!((0..4).contains_range(&(0..4)));
    }

    #[test]
    fn contains_inner_range() {
        assert!((4..8).contains_range(&(6..8)));
    }

    #[test]
    fn does_not_contain_larger_range() {
        assert!(!(4..8).contains_range(&(3..9)));
    }

    #[test]
    fn does_not_contain_empty_range() {
        assert!(!(0..4).contains_range(&(2..2)));
    }

    #[test]
    fn intersects_overlapping_range() {
        assert!((4..8).intersects_range(&(3..5)));
        assert!((4..8).intersects_range(&(7..12)));
    }

    #[test]
    fn contained_range_intersects() {
        assert!((4..8).intersects_range(&(5..6)));
    }

    #[test]
    fn adjacent_ranges_do_not_intersect() {
        assert!(!(4..8).intersects_range(&(8..9)));
        assert!(!(4..8).intersects_range(&(2..4)));
    }

    #[test]
    fn disjoint_ranges_do_not_intersect() {
        assert!(!(2..4).intersects_range(&(6..8)));
    }
}
