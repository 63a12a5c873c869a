use crate::basic_types::Contradiction;
use crate::basic_types::EmptyDomain;
use crate::bramble_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::domains::DomainKind;
use crate::engine::domains::DomainRanges;
use crate::engine::domains::DomainValues;
use crate::engine::domains::IntRangeSet;
use crate::engine::domains::IntegerDomain;
use crate::engine::domains::ReversibleDomain;
use crate::engine::notifications::DomainEvents;
use crate::engine::reversible::ReversibleStore;
use crate::engine::variables::DomainId;

/// The domains of all variables, together with the events caused by changes to them which the
/// engine has not yet dispatched.
#[derive(Debug, Default, Clone)]
pub(crate) struct Assignments {
    domains: KeyedVec<DomainId, IntegerDomain>,
    events: Vec<(DomainId, DomainEvents)>,
}

impl Assignments {
    pub(crate) fn grow(
        &mut self,
        store: &mut ReversibleStore,
        kind: DomainKind,
        values: &IntRangeSet,
    ) -> DomainId {
        bramble_assert_simple!(!values.is_empty(), "a variable needs a non-empty domain");
        self.domains.push(IntegerDomain::new(store, kind, values))
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn domain_ids(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub(crate) fn domain(&self, domain: DomainId) -> &IntegerDomain {
        &self.domains[domain]
    }

    pub(crate) fn lower_bound(&self, store: &ReversibleStore, domain: DomainId) -> i32 {
        self.domains[domain].first(store)
    }

    pub(crate) fn upper_bound(&self, store: &ReversibleStore, domain: DomainId) -> i32 {
        self.domains[domain].last(store)
    }

    pub(crate) fn size(&self, store: &ReversibleStore, domain: DomainId) -> u64 {
        self.domains[domain].size(store)
    }

    pub(crate) fn remove_value(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| inner.remove_value(store, value))
    }

    pub(crate) fn remove_interval(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        lower: i32,
        upper: i32,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| {
            inner.remove_interval(store, lower, upper)
        })
    }

    pub(crate) fn update_lower_bound(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| {
            inner.update_lower_bound(store, value)
        })
    }

    pub(crate) fn update_upper_bound(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| {
            inner.update_upper_bound(store, value)
        })
    }

    pub(crate) fn instantiate(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| inner.instantiate(store, value))
    }

    /// Remove every member of `values`; fails if that would remove every member.
    pub(crate) fn remove_values(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        values: &IntRangeSet,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| {
            let (first, last) = (inner.first(store), inner.last(store));
            let remaining = inner
                .snapshot(store)
                .values()
                .any(|value| !values.contains(value));
            if !remaining {
                return Err(EmptyDomain);
            }

            let mut changed = false;
            for (lower, upper) in values.ranges() {
                if upper < first || lower > last {
                    continue;
                }
                changed |= inner.remove_interval(store, lower, upper)?;
            }
            Ok(changed)
        })
    }

    pub(crate) fn retain_values(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        values: &IntRangeSet,
    ) -> Result<bool, Contradiction> {
        self.modify(store, domain, |inner, store| inner.retain(store, values))
    }

    /// Apply `operation` to the domain and record the events it caused.
    ///
    /// A composite operation may fail after having removed some values; those removals still
    /// produce events, and are undone together with the rest of the node on backtracking.
    fn modify(
        &mut self,
        store: &mut ReversibleStore,
        domain: DomainId,
        operation: impl FnOnce(&mut IntegerDomain, &mut ReversibleStore) -> Result<bool, EmptyDomain>,
    ) -> Result<bool, Contradiction> {
        let inner = &mut self.domains[domain];
        let before = (inner.first(store), inner.last(store), inner.size(store));

        let result = operation(inner, store);

        let after = (inner.first(store), inner.last(store), inner.size(store));
        if after != before {
            self.events
                .push((domain, DomainEvents::between(before, after)));
        }

        result.map_err(Contradiction::empty_domain(domain))
    }

    pub(crate) fn drain_events(&mut self) -> std::vec::Drain<'_, (DomainId, DomainEvents)> {
        self.events.drain(..)
    }

    pub(crate) fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}

/// A read-only view on the domains of a solver.
#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    pub(crate) assignments: &'a Assignments,
    pub(crate) store: &'a ReversibleStore,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(assignments: &'a Assignments, store: &'a ReversibleStore) -> Self {
        Domains { assignments, store }
    }
}

impl ReadDomains for Domains<'_> {
    fn domains(&self) -> Domains<'_> {
        *self
    }
}

/// Read access to domains, shared by every context handed to propagators and branchers.
pub trait ReadDomains {
    fn domains(&self) -> Domains<'_>;

    fn lower_bound(&self, domain: DomainId) -> i32 {
        let domains = self.domains();
        domains.assignments.lower_bound(domains.store, domain)
    }

    fn upper_bound(&self, domain: DomainId) -> i32 {
        let domains = self.domains();
        domains.assignments.upper_bound(domains.store, domain)
    }

    /// The number of values in the domain. For a bounds-only variable this counts the values
    /// between the bounds.
    fn size(&self, domain: DomainId) -> u64 {
        let domains = self.domains();
        domains.assignments.size(domains.store, domain)
    }

    fn contains(&self, domain: DomainId, value: i32) -> bool {
        let domains = self.domains();
        domains
            .assignments
            .domain(domain)
            .contains(domains.store, value)
    }

    fn is_fixed(&self, domain: DomainId) -> bool {
        self.lower_bound(domain) == self.upper_bound(domain)
    }

    /// The value of a fixed variable.
    fn value(&self, domain: DomainId) -> Option<i32> {
        self.is_fixed(domain).then(|| self.lower_bound(domain))
    }

    /// The smallest member strictly greater than `value`, or [`i32::MAX`].
    fn next_value(&self, domain: DomainId, value: i32) -> i32 {
        let domains = self.domains();
        domains
            .assignments
            .domain(domain)
            .next_value(domains.store, value)
    }

    /// The largest member strictly smaller than `value`, or [`i32::MIN`].
    fn previous_value(&self, domain: DomainId, value: i32) -> i32 {
        let domains = self.domains();
        domains
            .assignments
            .domain(domain)
            .previous_value(domains.store, value)
    }

    fn kind(&self, domain: DomainId) -> DomainKind {
        self.domains().assignments.domain(domain).kind()
    }

    /// Whether the domain can have holes.
    fn is_enumerated(&self, domain: DomainId) -> bool {
        self.domains().assignments.domain(domain).is_enumerated()
    }

    fn values(&self, domain: DomainId) -> DomainValues<'_> {
        let domains = self.domains();
        DomainValues::ascending(domains.assignments.domain(domain), domains.store)
    }

    fn values_descending(&self, domain: DomainId) -> DomainValues<'_> {
        let domains = self.domains();
        DomainValues::descending(domains.assignments.domain(domain), domains.store)
    }

    fn ranges(&self, domain: DomainId) -> DomainRanges<'_> {
        let domains = self.domains();
        DomainRanges::ascending(domains.assignments.domain(domain), domains.store)
    }

    fn ranges_descending(&self, domain: DomainId) -> DomainRanges<'_> {
        let domains = self.domains();
        DomainRanges::descending(domains.assignments.domain(domain), domains.store)
    }

    /// A copy of the domain as a plain set.
    fn snapshot(&self, domain: DomainId) -> IntRangeSet {
        let domains = self.domains();
        domains.assignments.domain(domain).snapshot(domains.store)
    }

    fn domain_ids(&self) -> Vec<DomainId> {
        self.domains().assignments.domain_ids().collect()
    }

    fn num_domains(&self) -> usize {
        self.domains().assignments.num_domains()
    }
}
