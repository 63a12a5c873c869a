use super::IntegerDomain;
use super::ReversibleDomain;
use crate::engine::reversible::ReversibleStore;

/// Iterates over the members of a domain, from the smallest to the largest or the reverse.
///
/// The iterator walks the live representation, so it does not allocate.
#[derive(Debug, Clone)]
pub struct DomainValues<'a> {
    domain: &'a IntegerDomain,
    store: &'a ReversibleStore,
    next: Option<i32>,
    ascending: bool,
}

impl<'a> DomainValues<'a> {
    pub(crate) fn ascending(domain: &'a IntegerDomain, store: &'a ReversibleStore) -> Self {
        DomainValues {
            domain,
            store,
            next: Some(domain.first(store)),
            ascending: true,
        }
    }

    pub(crate) fn descending(domain: &'a IntegerDomain, store: &'a ReversibleStore) -> Self {
        DomainValues {
            domain,
            store,
            next: Some(domain.last(store)),
            ascending: false,
        }
    }
}

impl Iterator for DomainValues<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let current = self.next?;
        self.next = if self.ascending {
            Some(self.domain.next_value(self.store, current)).filter(|&value| value != i32::MAX)
        } else {
            Some(self.domain.previous_value(self.store, current))
                .filter(|&value| value != i32::MIN)
        };
        Some(current)
    }
}

/// Iterates over the maximal runs `(lower, upper)` of a domain.
///
/// An interval domain yields its bounds as a single run.
#[derive(Debug, Clone)]
pub struct DomainRanges<'a> {
    domain: &'a IntegerDomain,
    store: &'a ReversibleStore,
    next: Option<i32>,
    ascending: bool,
}

impl<'a> DomainRanges<'a> {
    pub(crate) fn ascending(domain: &'a IntegerDomain, store: &'a ReversibleStore) -> Self {
        DomainRanges {
            domain,
            store,
            next: Some(domain.first(store)),
            ascending: true,
        }
    }

    pub(crate) fn descending(domain: &'a IntegerDomain, store: &'a ReversibleStore) -> Self {
        DomainRanges {
            domain,
            store,
            next: Some(domain.last(store)),
            ascending: false,
        }
    }
}

impl Iterator for DomainRanges<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        let current = self.next?;
        if self.ascending {
            let upper = self.domain.range_end(self.store, current);
            self.next =
                Some(self.domain.next_value(self.store, upper)).filter(|&value| value != i32::MAX);
            Some((current, upper))
        } else {
            let lower = self.domain.range_start(self.store, current);
            self.next = Some(self.domain.previous_value(self.store, lower))
                .filter(|&value| value != i32::MIN);
            Some((lower, current))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domains::DomainKind;
    use crate::engine::domains::IntRangeSet;

    #[test]
    fn values_and_ranges_in_both_directions() {
        let mut store = ReversibleStore::default();
        let values = IntRangeSet::from_values([1, 2, 3, 7, 9, 10]);
        for kind in [DomainKind::RangeList, DomainKind::Bitset] {
            let domain = IntegerDomain::new(&mut store, kind, &values);

            assert_eq!(
                DomainValues::ascending(&domain, &store).collect::<Vec<_>>(),
                vec![1, 2, 3, 7, 9, 10]
            );
            assert_eq!(
                DomainValues::descending(&domain, &store).collect::<Vec<_>>(),
                vec![10, 9, 7, 3, 2, 1]
            );
            assert_eq!(
                DomainRanges::ascending(&domain, &store).collect::<Vec<_>>(),
                vec![(1, 3), (7, 7), (9, 10)]
            );
            assert_eq!(
                DomainRanges::descending(&domain, &store).collect::<Vec<_>>(),
                vec![(9, 10), (7, 7), (1, 3)]
            );
        }
    }

    #[test]
    fn interval_yields_one_run() {
        let mut store = ReversibleStore::default();
        let domain = IntegerDomain::new(
            &mut store,
            DomainKind::Interval,
            &IntRangeSet::from_range(-2, 2),
        );

        assert_eq!(
            DomainRanges::ascending(&domain, &store).collect::<Vec<_>>(),
            vec![(-2, 2)]
        );
        assert_eq!(DomainValues::ascending(&domain, &store).count(), 5);
    }
}
