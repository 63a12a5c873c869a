use super::set_algebra;
use super::BitsetDomain;
use super::IntRangeSet;
use super::IntervalDomain;
use super::RangeListDomain;
use super::ReversibleDomain;
use crate::basic_types::EmptyDomain;
use crate::engine::reversible::ReversibleStore;

/// The representation chosen for a variable's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Only the bounds are stored; removing an inner value has no effect.
    Interval,
    /// Sorted list of maximal ranges.
    RangeList,
    /// Bit vector with an offset; suited to small, dense value sets.
    Bitset,
}

/// The domain of a single variable, in one of the supported representations.
#[derive(Debug, Clone)]
pub(crate) enum IntegerDomain {
    Interval(IntervalDomain),
    RangeList(RangeListDomain),
    Bitset(BitsetDomain),
}

macro_rules! dispatch {
    ($self:expr, $domain:ident => $body:expr) => {
        match $self {
            IntegerDomain::Interval($domain) => $body,
            IntegerDomain::RangeList($domain) => $body,
            IntegerDomain::Bitset($domain) => $body,
        }
    };
}

impl IntegerDomain {
    pub(crate) fn new(store: &mut ReversibleStore, kind: DomainKind, values: &IntRangeSet) -> Self {
        match kind {
            DomainKind::Interval => {
                IntegerDomain::Interval(IntervalDomain::new(store, values.first(), values.last()))
            }
            DomainKind::RangeList => IntegerDomain::RangeList(RangeListDomain::new(store, values)),
            DomainKind::Bitset => IntegerDomain::Bitset(BitsetDomain::new(store, values)),
        }
    }

    pub(crate) fn kind(&self) -> DomainKind {
        match self {
            IntegerDomain::Interval(_) => DomainKind::Interval,
            IntegerDomain::RangeList(_) => DomainKind::RangeList,
            IntegerDomain::Bitset(_) => DomainKind::Bitset,
        }
    }

    /// Fix the domain to `value`.
    pub(crate) fn instantiate(
        &mut self,
        store: &mut ReversibleStore,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        if !self.contains(store, value) {
            return Err(EmptyDomain);
        }
        let lower_changed = self.update_lower_bound(store, value)?;
        let upper_changed = self.update_upper_bound(store, value)?;
        Ok(lower_changed || upper_changed)
    }

    /// Remove every member which is not in `values`.
    pub(crate) fn retain(
        &mut self,
        store: &mut ReversibleStore,
        values: &IntRangeSet,
    ) -> Result<bool, EmptyDomain> {
        let (first, last) = (self.first(store), self.last(store));
        if set_algebra::intersection(&self.snapshot(store), values).is_empty() {
            return Err(EmptyDomain);
        }

        let mut changed = false;
        let mut previous_upper = first as i64 - 1;
        for (lower, upper) in values.ranges() {
            if lower as i64 > previous_upper + 1 {
                changed |= self.remove_interval(store, (previous_upper + 1) as i32, lower - 1)?;
            }
            previous_upper = upper as i64;
        }
        if previous_upper < last as i64 {
            changed |= self.remove_interval(store, (previous_upper + 1) as i32, last)?;
        }
        Ok(changed)
    }

    /// A copy of the current contents as a plain set.
    pub(crate) fn snapshot(&self, store: &ReversibleStore) -> IntRangeSet {
        let mut set = IntRangeSet::new();
        let mut lower = self.first(store);
        let last = self.last(store);
        loop {
            let upper = self.range_end(store, lower);
            let _ = set.add_between(lower, upper);
            if upper >= last {
                break;
            }
            lower = self.next_value(store, upper);
        }
        set
    }
}

impl ReversibleDomain for IntegerDomain {
    fn contains(&self, store: &ReversibleStore, value: i32) -> bool {
        dispatch!(self, domain => domain.contains(store, value))
    }

    fn first(&self, store: &ReversibleStore) -> i32 {
        dispatch!(self, domain => domain.first(store))
    }

    fn last(&self, store: &ReversibleStore) -> i32 {
        dispatch!(self, domain => domain.last(store))
    }

    fn size(&self, store: &ReversibleStore) -> u64 {
        dispatch!(self, domain => domain.size(store))
    }

    fn next_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        dispatch!(self, domain => domain.next_value(store, value))
    }

    fn previous_value(&self, store: &ReversibleStore, value: i32) -> i32 {
        dispatch!(self, domain => domain.previous_value(store, value))
    }

    fn range_end(&self, store: &ReversibleStore, value: i32) -> i32 {
        dispatch!(self, domain => domain.range_end(store, value))
    }

    fn range_start(&self, store: &ReversibleStore, value: i32) -> i32 {
        dispatch!(self, domain => domain.range_start(store, value))
    }

    fn is_enumerated(&self) -> bool {
        dispatch!(self, domain => domain.is_enumerated())
    }

    fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        dispatch!(self, domain => domain.remove_interval(store, lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [DomainKind; 2] = [DomainKind::RangeList, DomainKind::Bitset];

    fn domain(store: &mut ReversibleStore, kind: DomainKind, values: &[i32]) -> IntegerDomain {
        IntegerDomain::new(store, kind, &IntRangeSet::from_values(values.iter().copied()))
    }

    #[test]
    fn popping_restores_holes_bounds_and_size() {
        for kind in KINDS {
            let mut store = ReversibleStore::default();
            let mut domain = domain(&mut store, kind, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
            let before = domain.snapshot(&store);

            store.push_world();
            assert_eq!(domain.remove_value(&mut store, 4), Ok(true));
            assert_eq!(domain.remove_interval(&mut store, 6, 7), Ok(true));
            assert_eq!(domain.update_lower_bound(&mut store, 2), Ok(true));
            assert_eq!(
                domain.snapshot(&store).values().collect::<Vec<_>>(),
                vec![2, 3, 5, 8, 9]
            );
            assert_eq!(domain.size(&store), 5);

            store.pop_world();
            assert_eq!(domain.snapshot(&store), before);
            assert_eq!(domain.size(&store), 10);
        }
    }

    #[test]
    fn emptying_fails_without_modifying() {
        for kind in KINDS {
            let mut store = ReversibleStore::default();
            let mut domain = domain(&mut store, kind, &[3, 5]);

            assert_eq!(domain.remove_interval(&mut store, 0, 10), Err(EmptyDomain));
            assert_eq!(domain.size(&store), 2);

            assert_eq!(domain.remove_value(&mut store, 3), Ok(true));
            assert_eq!(domain.remove_value(&mut store, 5), Err(EmptyDomain));
            assert_eq!(domain.first(&store), 5);
        }
    }

    #[test]
    fn navigation_skips_holes() {
        for kind in KINDS {
            let mut store = ReversibleStore::default();
            let domain = domain(&mut store, kind, &[-3, -2, 4, 70, 71, 72]);

            assert_eq!(domain.next_value(&store, -2), 4);
            assert_eq!(domain.next_value(&store, 4), 70);
            assert_eq!(domain.next_value(&store, 72), i32::MAX);
            assert_eq!(domain.previous_value(&store, 70), 4);
            assert_eq!(domain.previous_value(&store, -3), i32::MIN);
            assert_eq!(domain.range_end(&store, 70), 72);
            assert_eq!(domain.range_start(&store, 71), 70);
            assert!(!domain.contains(&store, 0));
        }
    }

    #[test]
    fn bounds_follow_removals_at_the_ends() {
        for kind in KINDS {
            let mut store = ReversibleStore::default();
            let mut domain = domain(&mut store, kind, &[1, 2, 5, 8, 9]);

            assert_eq!(domain.remove_interval(&mut store, 0, 3), Ok(true));
            assert_eq!(domain.first(&store), 5);
            assert_eq!(domain.remove_interval(&mut store, 6, 100), Ok(true));
            assert_eq!(domain.last(&store), 5);
            assert_eq!(domain.size(&store), 1);
        }
    }

    #[test]
    fn interval_domains_ignore_inner_removals() {
        let mut store = ReversibleStore::default();
        let mut domain = IntegerDomain::new(
            &mut store,
            DomainKind::Interval,
            &IntRangeSet::from_range(0, 5),
        );

        assert_eq!(domain.remove_value(&mut store, 3), Ok(false));
        assert_eq!(domain.remove_value(&mut store, 0), Ok(true));
        assert_eq!(domain.first(&store), 1);
        assert_eq!(domain.size(&store), 5);
    }

    #[test]
    fn retain_keeps_only_the_given_values() {
        for kind in KINDS {
            let mut store = ReversibleStore::default();
            let mut domain = domain(&mut store, kind, &[0, 1, 2, 3, 4, 5, 6]);

            let changed = domain.retain(&mut store, &IntRangeSet::from_values([1, 2, 5, 9]));
            assert_eq!(changed, Ok(true));
            assert_eq!(
                domain.snapshot(&store).values().collect::<Vec<_>>(),
                vec![1, 2, 5]
            );

            let disjoint = domain.retain(&mut store, &IntRangeSet::from_values([3, 4]));
            assert_eq!(disjoint, Err(EmptyDomain));
        }
    }

    #[test]
    fn instantiate_fixes_the_domain() {
        let mut store = ReversibleStore::default();
        let mut domain = domain(&mut store, DomainKind::RangeList, &[1, 3, 5]);

        assert_eq!(domain.instantiate(&mut store, 4), Err(EmptyDomain));
        assert_eq!(domain.instantiate(&mut store, 3), Ok(true));
        assert_eq!(domain.size(&store), 1);
        assert_eq!(domain.first(&store), 3);
    }
}
