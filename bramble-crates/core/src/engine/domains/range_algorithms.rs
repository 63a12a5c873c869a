//! Algorithms over a sorted sequence of disjoint, non-adjacent `[lower, upper]` ranges.
//!
//! They are written against [`RangeRead`] / [`RangeStorage`] so that the same code maintains
//! both the plain [`super::IntRangeSet`] and the reversible range-list domain, whose endpoints
//! live in the reversible store.

/// Read access to a range sequence.
pub(crate) trait RangeRead {
    fn range_count(&self) -> usize;
    fn lower_at(&self, index: usize) -> i32;
    fn upper_at(&self, index: usize) -> i32;
    fn cardinality(&self) -> u64;
}

/// Write access to a range sequence; the algorithms below keep the ranges sorted, disjoint and
/// non-adjacent, and keep [`RangeRead::cardinality`] equal to the sum of the range widths.
pub(crate) trait RangeStorage: RangeRead {
    fn set_lower_at(&mut self, index: usize, value: i32);
    fn set_upper_at(&mut self, index: usize, value: i32);
    fn set_cardinality(&mut self, size: u64);
    /// Insert `[lower, upper]` at `index`, shifting the ranges at `index..` one place right.
    fn insert_range(&mut self, index: usize, lower: i32, upper: i32);
    /// Delete the ranges `from..=to`, shifting the following ranges left.
    fn delete_ranges(&mut self, from: usize, to: usize);
}

fn partition_point(ranges: &impl RangeRead, predicate: impl Fn(usize) -> bool) -> usize {
    let mut low = 0;
    let mut high = ranges.range_count();
    while low < high {
        let middle = low + (high - low) / 2;
        if predicate(middle) {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

/// `Ok(index)` of the range containing `value`, or `Err(index)` of the first range above it.
pub(crate) fn find_range(ranges: &impl RangeRead, value: i32) -> Result<usize, usize> {
    let index = partition_point(&*ranges, |index| ranges.upper_at(index) < value);
    if index < ranges.range_count() && ranges.lower_at(index) <= value {
        Ok(index)
    } else {
        Err(index)
    }
}

pub(crate) fn contains(ranges: &impl RangeRead, value: i32) -> bool {
    find_range(ranges, value).is_ok()
}

/// The smallest member strictly greater than `value`, or [`i32::MAX`] if there is none.
pub(crate) fn next_value(ranges: &impl RangeRead, value: i32) -> i32 {
    let num_ranges = ranges.range_count();
    match find_range(ranges, value) {
        Ok(index) if value < ranges.upper_at(index) => value + 1,
        Ok(index) if index + 1 < num_ranges => ranges.lower_at(index + 1),
        Err(index) if index < num_ranges => ranges.lower_at(index),
        _ => i32::MAX,
    }
}

/// The largest member strictly smaller than `value`, or [`i32::MIN`] if there is none.
pub(crate) fn previous_value(ranges: &impl RangeRead, value: i32) -> i32 {
    match find_range(ranges, value) {
        Ok(index) if value > ranges.lower_at(index) => value - 1,
        Ok(index) | Err(index) if index > 0 => ranges.upper_at(index - 1),
        _ => i32::MIN,
    }
}

/// Remove `[lower, upper]`, returning whether any member was removed.
///
/// The removal either deletes whole ranges, shrinks a range at one end, splits one range in two,
/// or does a combination of these across several ranges.
pub(crate) fn remove_between(ranges: &mut impl RangeStorage, lower: i32, upper: i32) -> bool {
    if lower > upper {
        return false;
    }

    let first = partition_point(&*ranges, |index| ranges.upper_at(index) < lower);
    if first == ranges.range_count() || ranges.lower_at(first) > upper {
        return false;
    }
    let last = partition_point(&*ranges, |index| ranges.lower_at(index) <= upper) - 1;

    let removed: u64 = (first..=last)
        .map(|index| {
            let overlap_upper = ranges.upper_at(index).min(upper) as i64;
            let overlap_lower = ranges.lower_at(index).max(lower) as i64;
            (overlap_upper - overlap_lower + 1) as u64
        })
        .sum();

    if first == last {
        let range_lower = ranges.lower_at(first);
        let range_upper = ranges.upper_at(first);

        if lower <= range_lower && upper >= range_upper {
            ranges.delete_ranges(first, first);
        } else if lower > range_lower && upper < range_upper {
            ranges.set_upper_at(first, lower - 1);
            ranges.insert_range(first + 1, upper + 1, range_upper);
        } else if lower <= range_lower {
            ranges.set_lower_at(first, upper + 1);
        } else {
            ranges.set_upper_at(first, lower - 1);
        }
    } else {
        let first_deleted = if lower > ranges.lower_at(first) {
            ranges.set_upper_at(first, lower - 1);
            first + 1
        } else {
            first
        };
        let last_deleted = if upper < ranges.upper_at(last) {
            ranges.set_lower_at(last, upper + 1);
            last - 1
        } else {
            last
        };
        if first_deleted <= last_deleted {
            ranges.delete_ranges(first_deleted, last_deleted);
        }
    }

    ranges.set_cardinality(ranges.cardinality() - removed);
    true
}

/// Add `[lower, upper]`, merging with every overlapping or adjacent range. Returns whether any
/// member was added.
pub(crate) fn add_between(ranges: &mut impl RangeStorage, lower: i32, upper: i32) -> bool {
    if lower > upper {
        return false;
    }

    let touching_lower = lower as i64 - 1;
    let touching_upper = upper as i64 + 1;
    let first = partition_point(&*ranges, |index| {
        (ranges.upper_at(index) as i64) < touching_lower
    });
    let end = partition_point(&*ranges, |index| {
        ranges.lower_at(index) as i64 <= touching_upper
    });

    if first >= end {
        ranges.insert_range(first, lower, upper);
        let added = (upper as i64 - lower as i64 + 1) as u64;
        ranges.set_cardinality(ranges.cardinality() + added);
        return true;
    }

    let new_lower = lower.min(ranges.lower_at(first));
    let new_upper = upper.max(ranges.upper_at(end - 1));
    let covered: u64 = (first..end)
        .map(|index| (ranges.upper_at(index) as i64 - ranges.lower_at(index) as i64 + 1) as u64)
        .sum();
    let added = (new_upper as i64 - new_lower as i64 + 1) as u64 - covered;
    if added == 0 {
        return false;
    }

    ranges.set_lower_at(first, new_lower);
    ranges.set_upper_at(first, new_upper);
    if end - 1 > first {
        ranges.delete_ranges(first + 1, end - 1);
    }
    ranges.set_cardinality(ranges.cardinality() + added);
    true
}
