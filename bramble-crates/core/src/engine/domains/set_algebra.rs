//! Set algebra over [`IntRangeSet`]s.
//!
//! All operations work range by range, never value by value, and produce a fresh set. Sums and
//! differences which fall outside of the `i32` range are clamped to it.

use super::IntRangeSet;

fn clamp(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// The union `a ∪ b`.
pub fn union(a: &IntRangeSet, b: &IntRangeSet) -> IntRangeSet {
    let mut result = a.clone();
    for (lower, upper) in b.ranges() {
        let _ = result.add_between(lower, upper);
    }
    result
}

/// The intersection `a ∩ b`.
pub fn intersection(a: &IntRangeSet, b: &IntRangeSet) -> IntRangeSet {
    let mut result = IntRangeSet::new();
    let mut a_ranges = a.ranges().peekable();
    let mut b_ranges = b.ranges().peekable();

    while let (Some(&(a_lower, a_upper)), Some(&(b_lower, b_upper))) =
        (a_ranges.peek(), b_ranges.peek())
    {
        let lower = a_lower.max(b_lower);
        let upper = a_upper.min(b_upper);
        if lower <= upper {
            let _ = result.add_between(lower, upper);
        }
        if a_upper < b_upper {
            let _ = a_ranges.next();
        } else {
            let _ = b_ranges.next();
        }
    }
    result
}

/// The complement of `set` within `[lower, upper]`.
pub fn complement(set: &IntRangeSet, lower: i32, upper: i32) -> IntRangeSet {
    let mut result = IntRangeSet::from_range(lower, upper);
    for (range_lower, range_upper) in set.ranges() {
        let _ = result.remove_between(range_lower, range_upper);
    }
    result
}

/// The Minkowski sum `{x + y | x ∈ a, y ∈ b}`.
pub fn plus(a: &IntRangeSet, b: &IntRangeSet) -> IntRangeSet {
    let mut result = IntRangeSet::new();
    for (a_lower, a_upper) in a.ranges() {
        for (b_lower, b_upper) in b.ranges() {
            let _ = result.add_between(
                clamp(a_lower as i64 + b_lower as i64),
                clamp(a_upper as i64 + b_upper as i64),
            );
        }
    }
    result
}

/// The Minkowski difference `{x - y | x ∈ a, y ∈ b}`.
pub fn minus(a: &IntRangeSet, b: &IntRangeSet) -> IntRangeSet {
    let mut result = IntRangeSet::new();
    for (a_lower, a_upper) in a.ranges() {
        for (b_lower, b_upper) in b.ranges() {
            let _ = result.add_between(
                clamp(a_lower as i64 - b_upper as i64),
                clamp(a_upper as i64 - b_lower as i64),
            );
        }
    }
    result
}

/// `{x + c | x ∈ set, c ∈ [lower, upper]}`.
pub fn plus_range(set: &IntRangeSet, lower: i32, upper: i32) -> IntRangeSet {
    plus(set, &IntRangeSet::from_range(lower, upper))
}

/// `{x - c | x ∈ set, c ∈ [lower, upper]}`.
pub fn minus_range(set: &IntRangeSet, lower: i32, upper: i32) -> IntRangeSet {
    minus(set, &IntRangeSet::from_range(lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &IntRangeSet) -> Vec<i32> {
        set.values().collect()
    }

    #[test]
    fn union_merges_touching_ranges() {
        let a = IntRangeSet::from_values([1, 2, 8]);
        let b = IntRangeSet::from_values([3, 4, 10]);

        let result = union(&a, &b);
        assert_eq!(result.ranges().collect::<Vec<_>>(), vec![(1, 4), (8, 8), (10, 10)]);
    }

    #[test]
    fn intersection_of_interleaved_ranges() {
        let a = IntRangeSet::from_values([0, 1, 2, 3, 7, 8, 9]);
        let b = IntRangeSet::from_values([2, 3, 4, 5, 6, 7]);

        assert_eq!(values(&intersection(&a, &b)), vec![2, 3, 7]);
    }

    #[test]
    fn complement_within_bounds() {
        let set = IntRangeSet::from_values([-1, 2, 3]);
        assert_eq!(values(&complement(&set, -2, 4)), vec![-2, 0, 1, 4]);
    }

    #[test]
    fn minkowski_sum_of_two_sets() {
        let a = IntRangeSet::from_values([0, 10]);
        let b = IntRangeSet::from_values([1, 2]);

        assert_eq!(values(&plus(&a, &b)), vec![1, 2, 11, 12]);
    }

    #[test]
    fn minkowski_difference_of_two_sets() {
        let a = IntRangeSet::from_values([5, 6]);
        let b = IntRangeSet::from_values([0, 4]);

        assert_eq!(values(&minus(&a, &b)), vec![1, 2, 5, 6]);
    }

    #[test]
    fn shifting_by_a_range() {
        let set = IntRangeSet::from_values([0, 5]);

        assert_eq!(values(&plus_range(&set, 1, 2)), vec![1, 2, 6, 7]);
        assert_eq!(values(&minus_range(&set, 0, 1)), vec![-1, 0, 4, 5]);
    }

    #[test]
    fn sums_are_clamped() {
        let a = IntRangeSet::from_values([i32::MAX]);
        let b = IntRangeSet::from_values([1]);

        assert_eq!(values(&plus(&a, &b)), vec![i32::MAX]);
    }
}
