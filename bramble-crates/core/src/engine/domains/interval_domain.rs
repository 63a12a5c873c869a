use super::ReversibleDomain;
use crate::basic_types::EmptyDomain;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;

/// A domain `[lb, ub]` without holes; only its bounds can move.
#[derive(Debug, Clone)]
pub(crate) struct IntervalDomain {
    lower_bound: ReversibleInt,
    upper_bound: ReversibleInt,
}

impl IntervalDomain {
    pub(crate) fn new(store: &mut ReversibleStore, lower_bound: i32, upper_bound: i32) -> Self {
        IntervalDomain {
            lower_bound: store.new_int(lower_bound as i64),
            upper_bound: store.new_int(upper_bound as i64),
        }
    }
}

impl ReversibleDomain for IntervalDomain {
    fn contains(&self, store: &ReversibleStore, value: i32) -> bool {
        self.first(store) <= value && value <= self.last(store)
    }

    fn first(&self, store: &ReversibleStore) -> i32 {
        store.get(self.lower_bound) as i32
    }

    fn last(&self, store: &ReversibleStore) -> i32 {
        store.get(self.upper_bound) as i32
    }

    fn size(&self, store: &ReversibleStore) -> u64 {
        (store.get(self.upper_bound) - store.get(self.lower_bound) + 1) as u64
    }

    fn next_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        let (first, last) = (self.first(store), self.last(store));
        if value < first {
            first
        } else if value < last {
            value + 1
        } else {
            i32::MAX
        }
    }

    fn previous_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        let (first, last) = (self.first(store), self.last(store));
        if value > last {
            last
        } else if value > first {
            value - 1
        } else {
            i32::MIN
        }
    }

    fn range_end(&self, store: &ReversibleStore, _value: i32) -> i32 {
        self.last(store)
    }

    fn range_start(&self, store: &ReversibleStore, _value: i32) -> i32 {
        self.first(store)
    }

    fn is_enumerated(&self) -> bool {
        false
    }

    fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        let (first, last) = (self.first(store), self.last(store));
        if lower > upper || upper < first || lower > last {
            return Ok(false);
        }
        if lower <= first && upper >= last {
            return Err(EmptyDomain);
        }

        if lower <= first {
            store.set(self.lower_bound, upper as i64 + 1);
            Ok(true)
        } else if upper >= last {
            store.set(self.upper_bound, lower as i64 - 1);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
