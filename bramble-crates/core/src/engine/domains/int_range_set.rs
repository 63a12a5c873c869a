use std::fmt::Display;

use super::range_algorithms;
use super::range_algorithms::RangeRead;
use super::range_algorithms::RangeStorage;

/// A (non-reversible) set of integers stored as sorted, disjoint, non-adjacent ranges.
///
/// The ranges are kept in a flattened vector `[l0, u0, l1, u1, ...]`; lookups use binary search.
/// Besides describing initial domains, the set is the working type of the set algebra in
/// [`super::set_algebra`], which propagators use to reason about derived domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntRangeSet {
    elements: Vec<i32>,
    size: u64,
}

impl IntRangeSet {
    pub fn new() -> IntRangeSet {
        IntRangeSet::default()
    }

    /// The set `[lower, upper]`; empty when `lower > upper`.
    pub fn from_range(lower: i32, upper: i32) -> IntRangeSet {
        let mut set = IntRangeSet::new();
        let _ = set.add_between(lower, upper);
        set
    }

    pub fn from_values(values: impl IntoIterator<Item = i32>) -> IntRangeSet {
        let mut set = IntRangeSet::new();
        for value in values {
            let _ = set.add(value);
        }
        set
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn num_ranges(&self) -> usize {
        self.elements.len() / 2
    }

    /// The smallest member; [`i32::MAX`] for the empty set.
    pub fn first(&self) -> i32 {
        self.elements.first().copied().unwrap_or(i32::MAX)
    }

    /// The largest member; [`i32::MIN`] for the empty set.
    pub fn last(&self) -> i32 {
        self.elements.last().copied().unwrap_or(i32::MIN)
    }

    pub fn contains(&self, value: i32) -> bool {
        range_algorithms::contains(self, value)
    }

    pub fn next_value(&self, value: i32) -> i32 {
        range_algorithms::next_value(self, value)
    }

    pub fn previous_value(&self, value: i32) -> i32 {
        range_algorithms::previous_value(self, value)
    }

    pub fn add(&mut self, value: i32) -> bool {
        range_algorithms::add_between(self, value, value)
    }

    pub fn add_between(&mut self, lower: i32, upper: i32) -> bool {
        range_algorithms::add_between(self, lower, upper)
    }

    pub fn remove(&mut self, value: i32) -> bool {
        range_algorithms::remove_between(self, value, value)
    }

    pub fn remove_between(&mut self, lower: i32, upper: i32) -> bool {
        range_algorithms::remove_between(self, lower, upper)
    }

    /// Keep only the members in `[lower, upper]`.
    pub fn retain_between(&mut self, lower: i32, upper: i32) -> bool {
        let mut changed = false;
        if lower > i32::MIN {
            changed |= self.remove_between(i32::MIN, lower - 1);
        }
        if upper < i32::MAX {
            changed |= self.remove_between(upper + 1, i32::MAX);
        }
        changed
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.size = 0;
    }

    /// The maximal ranges of the set in ascending order.
    pub fn ranges(&self) -> impl DoubleEndedIterator<Item = (i32, i32)> + '_ {
        self.elements.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// The members of the set in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.ranges().flat_map(|(lower, upper)| lower..=upper)
    }
}

impl RangeRead for IntRangeSet {
    fn range_count(&self) -> usize {
        self.elements.len() / 2
    }

    fn lower_at(&self, index: usize) -> i32 {
        self.elements[2 * index]
    }

    fn upper_at(&self, index: usize) -> i32 {
        self.elements[2 * index + 1]
    }

    fn cardinality(&self) -> u64 {
        self.size
    }
}

impl RangeStorage for IntRangeSet {
    fn set_lower_at(&mut self, index: usize, value: i32) {
        self.elements[2 * index] = value;
    }

    fn set_upper_at(&mut self, index: usize, value: i32) {
        self.elements[2 * index + 1] = value;
    }

    fn set_cardinality(&mut self, size: u64) {
        self.size = size;
    }

    fn insert_range(&mut self, index: usize, lower: i32, upper: i32) {
        let _ = self
            .elements
            .splice(2 * index..2 * index, [lower, upper]);
    }

    fn delete_ranges(&mut self, from: usize, to: usize) {
        let _ = self.elements.drain(2 * from..2 * (to + 1));
    }
}

impl Display for IntRangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (lower, upper)) in self.ranges().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            if lower == upper {
                write!(f, "{lower}")?;
            } else {
                write!(f, "{lower}..{upper}")?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::IntRangeSet;

    fn ranges(set: &IntRangeSet) -> Vec<(i32, i32)> {
        set.ranges().collect()
    }

    #[test]
    fn adjacent_additions_are_merged() {
        let mut set = IntRangeSet::new();
        let _ = set.add_between(1, 3);
        let _ = set.add_between(7, 9);
        let _ = set.add(4);
        let _ = set.add_between(5, 6);

        assert_eq!(ranges(&set), vec![(1, 9)]);
        assert_eq!(set.size(), 9);
    }

    #[test]
    fn addition_spanning_several_ranges_merges_them() {
        let mut set = IntRangeSet::from_values([0, 2, 4, 6, 10]);
        assert!(set.add_between(1, 5));

        assert_eq!(ranges(&set), vec![(0, 6), (10, 10)]);
        assert_eq!(set.size(), 8);
    }

    #[test]
    fn adding_contained_values_reports_no_change() {
        let mut set = IntRangeSet::from_range(0, 10);
        assert!(!set.add_between(2, 5));
        assert_eq!(set.size(), 11);
    }

    #[test]
    fn removal_splits_a_range() {
        let mut set = IntRangeSet::from_range(0, 10);
        assert!(set.remove_between(3, 5));

        assert_eq!(ranges(&set), vec![(0, 2), (6, 10)]);
        assert_eq!(set.size(), 8);
    }

    #[test]
    fn removal_shrinks_either_end() {
        let mut set = IntRangeSet::from_range(0, 10);
        assert!(set.remove_between(-5, 2));
        assert!(set.remove_between(9, 20));

        assert_eq!(ranges(&set), vec![(3, 8)]);
        assert_eq!(set.size(), 6);
    }

    #[test]
    fn removal_deletes_a_whole_range() {
        let mut set = IntRangeSet::from_values([1, 2, 5, 6, 9]);
        assert!(set.remove_between(4, 7));

        assert_eq!(ranges(&set), vec![(1, 2), (9, 9)]);
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn removal_across_several_ranges() {
        let mut set = IntRangeSet::from_values([0, 1, 2, 4, 5, 7, 8, 9]);
        assert!(set.remove_between(1, 8));

        assert_eq!(ranges(&set), vec![(0, 0), (9, 9)]);
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn removal_in_a_hole_changes_nothing() {
        let mut set = IntRangeSet::from_values([0, 1, 5, 6]);
        assert!(!set.remove_between(2, 4));
        assert_eq!(set.size(), 4);
    }

    #[test]
    fn next_and_previous_value_skip_holes() {
        let set = IntRangeSet::from_values([1, 2, 5, 9]);

        assert_eq!(set.next_value(-10), 1);
        assert_eq!(set.next_value(2), 5);
        assert_eq!(set.next_value(3), 5);
        assert_eq!(set.next_value(9), i32::MAX);
        assert_eq!(set.previous_value(5), 2);
        assert_eq!(set.previous_value(7), 5);
        assert_eq!(set.previous_value(1), i32::MIN);
    }

    #[test]
    fn retain_between_intersects_with_a_range() {
        let mut set = IntRangeSet::from_values([-4, -1, 0, 3, 8]);
        assert!(set.retain_between(-1, 3));

        assert_eq!(set.values().collect::<Vec<_>>(), vec![-1, 0, 3]);
    }

    #[test]
    fn display_lists_ranges() {
        let set = IntRangeSet::from_values([1, 2, 3, 7]);
        assert_eq!(set.to_string(), "{1..3,7}");
    }
}
