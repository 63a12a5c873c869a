use super::range_algorithms;
use super::range_algorithms::RangeRead;
use super::range_algorithms::RangeStorage;
use super::IntRangeSet;
use super::ReversibleDomain;
use crate::basic_types::EmptyDomain;
use crate::bramble_assert_simple;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;

/// An enumerated domain stored as a sorted list of disjoint, non-adjacent ranges.
///
/// The endpoints `[l0, u0, l1, u1, ...]` live in reversible cells together with the number of
/// ranges and the cardinality. Only the first `2 * num_ranges` endpoint cells are meaningful;
/// cells beyond that are spare capacity, allocated when a removal first splits a range.
#[derive(Debug, Clone)]
pub(crate) struct RangeListDomain {
    endpoints: Vec<ReversibleInt>,
    num_ranges: ReversibleInt,
    size: ReversibleInt,
}

impl RangeListDomain {
    pub(crate) fn new(store: &mut ReversibleStore, values: &IntRangeSet) -> Self {
        bramble_assert_simple!(!values.is_empty(), "cannot create an empty domain");

        let endpoints = values
            .ranges()
            .flat_map(|(lower, upper)| [lower, upper])
            .map(|endpoint| store.new_int(endpoint as i64))
            .collect::<Vec<_>>();

        RangeListDomain {
            num_ranges: store.new_int(values.num_ranges() as i64),
            size: store.new_int(values.size() as i64),
            endpoints,
        }
    }

    fn view<'a>(&'a self, store: &'a ReversibleStore) -> RangeListView<'a> {
        RangeListView {
            domain: self,
            store,
        }
    }
}

struct RangeListView<'a> {
    domain: &'a RangeListDomain,
    store: &'a ReversibleStore,
}

impl RangeRead for RangeListView<'_> {
    fn range_count(&self) -> usize {
        self.store.get(self.domain.num_ranges) as usize
    }

    fn lower_at(&self, index: usize) -> i32 {
        self.store.get(self.domain.endpoints[2 * index]) as i32
    }

    fn upper_at(&self, index: usize) -> i32 {
        self.store.get(self.domain.endpoints[2 * index + 1]) as i32
    }

    fn cardinality(&self) -> u64 {
        self.store.get(self.domain.size) as u64
    }
}

struct RangeListEditor<'a> {
    domain: &'a mut RangeListDomain,
    store: &'a mut ReversibleStore,
}

impl RangeListEditor<'_> {
    fn endpoint(&self, position: usize) -> i64 {
        self.store.get(self.domain.endpoints[position])
    }

    fn set_endpoint(&mut self, position: usize, value: i64) {
        self.store.set(self.domain.endpoints[position], value);
    }
}

impl RangeRead for RangeListEditor<'_> {
    fn range_count(&self) -> usize {
        self.store.get(self.domain.num_ranges) as usize
    }

    fn lower_at(&self, index: usize) -> i32 {
        self.endpoint(2 * index) as i32
    }

    fn upper_at(&self, index: usize) -> i32 {
        self.endpoint(2 * index + 1) as i32
    }

    fn cardinality(&self) -> u64 {
        self.store.get(self.domain.size) as u64
    }
}

impl RangeStorage for RangeListEditor<'_> {
    fn set_lower_at(&mut self, index: usize, value: i32) {
        self.set_endpoint(2 * index, value as i64);
    }

    fn set_upper_at(&mut self, index: usize, value: i32) {
        self.set_endpoint(2 * index + 1, value as i64);
    }

    fn set_cardinality(&mut self, size: u64) {
        self.store.set(self.domain.size, size as i64);
    }

    fn insert_range(&mut self, index: usize, lower: i32, upper: i32) {
        let num_ranges = self.range_count();
        while self.domain.endpoints.len() < 2 * (num_ranges + 1) {
            let cell = self.store.new_int(0);
            self.domain.endpoints.push(cell);
        }

        for position in (2 * index..2 * num_ranges).rev() {
            let value = self.endpoint(position);
            self.set_endpoint(position + 2, value);
        }
        self.set_lower_at(index, lower);
        self.set_upper_at(index, upper);
        self.store
            .set(self.domain.num_ranges, (num_ranges + 1) as i64);
    }

    fn delete_ranges(&mut self, from: usize, to: usize) {
        let num_ranges = self.range_count();
        let removed = to - from + 1;

        for position in 2 * (to + 1)..2 * num_ranges {
            let value = self.endpoint(position);
            self.set_endpoint(position - 2 * removed, value);
        }
        self.store
            .set(self.domain.num_ranges, (num_ranges - removed) as i64);
    }
}

impl ReversibleDomain for RangeListDomain {
    fn contains(&self, store: &ReversibleStore, value: i32) -> bool {
        range_algorithms::contains(&self.view(store), value)
    }

    fn first(&self, store: &ReversibleStore) -> i32 {
        self.view(store).lower_at(0)
    }

    fn last(&self, store: &ReversibleStore) -> i32 {
        let view = self.view(store);
        view.upper_at(view.range_count() - 1)
    }

    fn size(&self, store: &ReversibleStore) -> u64 {
        store.get(self.size) as u64
    }

    fn next_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        range_algorithms::next_value(&self.view(store), value)
    }

    fn previous_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        range_algorithms::previous_value(&self.view(store), value)
    }

    fn range_end(&self, store: &ReversibleStore, value: i32) -> i32 {
        let view = self.view(store);
        match range_algorithms::find_range(&view, value) {
            Ok(index) => view.upper_at(index),
            Err(_) => value,
        }
    }

    fn range_start(&self, store: &ReversibleStore, value: i32) -> i32 {
        let view = self.view(store);
        match range_algorithms::find_range(&view, value) {
            Ok(index) => view.lower_at(index),
            Err(_) => value,
        }
    }

    fn is_enumerated(&self) -> bool {
        true
    }

    fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        if lower > upper {
            return Ok(false);
        }
        if lower <= self.first(store) && upper >= self.last(store) {
            return Err(EmptyDomain);
        }

        let mut editor = RangeListEditor {
            domain: self,
            store,
        };
        Ok(range_algorithms::remove_between(&mut editor, lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(domain: &RangeListDomain, store: &ReversibleStore) -> Vec<(i32, i32)> {
        let view = domain.view(store);
        (0..view.range_count())
            .map(|index| (view.lower_at(index), view.upper_at(index)))
            .collect()
    }

    fn create(store: &mut ReversibleStore, values: &[(i32, i32)]) -> RangeListDomain {
        let mut set = IntRangeSet::new();
        for &(lower, upper) in values {
            let _ = set.add_between(lower, upper);
        }
        RangeListDomain::new(store, &set)
    }

    #[test]
    fn removing_the_inside_splits_a_range() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 10)]);

        assert_eq!(domain.remove_interval(&mut store, 3, 5), Ok(true));
        assert_eq!(ranges(&domain, &store), vec![(0, 2), (6, 10)]);
        assert_eq!(domain.size(&store), 8);
    }

    #[test]
    fn removing_an_end_shrinks_a_range() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 4), (8, 10)]);

        assert_eq!(domain.remove_interval(&mut store, 3, 6), Ok(true));
        assert_eq!(ranges(&domain, &store), vec![(0, 2), (8, 10)]);
        assert_eq!(domain.remove_interval(&mut store, 8, 8), Ok(true));
        assert_eq!(ranges(&domain, &store), vec![(0, 2), (9, 10)]);
    }

    #[test]
    fn covering_a_range_deletes_it() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 1), (4, 5), (8, 9)]);

        assert_eq!(domain.remove_interval(&mut store, 3, 6), Ok(true));
        assert_eq!(ranges(&domain, &store), vec![(0, 1), (8, 9)]);
        assert_eq!(domain.size(&store), 4);
    }

    #[test]
    fn removal_across_several_ranges() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 3), (5, 6), (8, 9), (12, 15)]);

        assert_eq!(domain.remove_interval(&mut store, 2, 13), Ok(true));
        assert_eq!(ranges(&domain, &store), vec![(0, 1), (14, 15)]);
        assert_eq!(domain.size(&store), 4);
    }

    #[test]
    fn removing_a_gap_reports_no_change() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 1), (5, 6)]);

        assert_eq!(domain.remove_interval(&mut store, 2, 4), Ok(false));
        assert_eq!(domain.remove_interval(&mut store, 20, 30), Ok(false));
    }

    #[test]
    fn splits_inside_a_world_are_undone() {
        let mut store = ReversibleStore::default();
        let mut domain = create(&mut store, &[(0, 10)]);

        store.push_world();
        let _ = domain.remove_interval(&mut store, 2, 2);
        let _ = domain.remove_interval(&mut store, 5, 6);
        assert_eq!(ranges(&domain, &store), vec![(0, 1), (3, 4), (7, 10)]);
        store.pop_world();

        assert_eq!(ranges(&domain, &store), vec![(0, 10)]);
        assert_eq!(domain.size(&store), 11);
    }
}
