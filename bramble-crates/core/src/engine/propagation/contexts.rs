use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::domains::IntRangeSet;
use crate::engine::propagation::PropagatorId;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// The interface through which a propagator inspects and shrinks domains.
///
/// Every mutation returns whether the domain changed, or a [`Contradiction`] when it would have
/// become empty; in the latter case the domain is left as it was.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a mut Assignments,
    store: &'a mut ReversibleStore,
    propagator_id: PropagatorId,
    passive: &'a mut bool,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(
        assignments: &'a mut Assignments,
        store: &'a mut ReversibleStore,
        propagator_id: PropagatorId,
        passive: &'a mut bool,
    ) -> Self {
        PropagationContext {
            assignments,
            store,
            propagator_id,
            passive,
        }
    }

    pub fn propagator_id(&self) -> PropagatorId {
        self.propagator_id
    }

    /// The contradiction to return when the propagator finds its constraint violated without
    /// emptying a domain.
    pub fn inconsistency(&self) -> Contradiction {
        Contradiction::Inconsistency(self.propagator_id)
    }

    /// Declare that the constraint holds for every remaining assignment, so the propagator need
    /// not be called again until the search backtracks above this point.
    ///
    /// Only takes effect when the current call returns successfully.
    pub fn set_passive(&mut self) {
        *self.passive = true;
    }

    pub fn remove_value(&mut self, domain: DomainId, value: i32) -> Result<bool, Contradiction> {
        self.assignments.remove_value(self.store, domain, value)
    }

    pub fn remove_interval(
        &mut self,
        domain: DomainId,
        lower: i32,
        upper: i32,
    ) -> Result<bool, Contradiction> {
        self.assignments
            .remove_interval(self.store, domain, lower, upper)
    }

    pub fn update_lower_bound(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.assignments
            .update_lower_bound(self.store, domain, value)
    }

    pub fn update_upper_bound(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.assignments
            .update_upper_bound(self.store, domain, value)
    }

    pub fn instantiate_to(&mut self, domain: DomainId, value: i32) -> Result<bool, Contradiction> {
        self.assignments.instantiate(self.store, domain, value)
    }

    pub fn remove_values(
        &mut self,
        domain: DomainId,
        values: &IntRangeSet,
    ) -> Result<bool, Contradiction> {
        self.assignments.remove_values(self.store, domain, values)
    }

    pub fn remove_all_values_but(
        &mut self,
        domain: DomainId,
        values: &IntRangeSet,
    ) -> Result<bool, Contradiction> {
        self.assignments.retain_values(self.store, domain, values)
    }

    pub fn reversible_value(&self, cell: ReversibleInt) -> i64 {
        self.store.get(cell)
    }

    pub fn set_reversible_value(&mut self, cell: ReversibleInt, value: i64) {
        self.store.set(cell, value);
    }

    /// Fail with an inconsistency unless `condition` holds.
    pub fn check(&self, condition: bool) -> PropagationStatus {
        if condition {
            Ok(())
        } else {
            Err(self.inconsistency())
        }
    }
}

impl ReadDomains for PropagationContext<'_> {
    fn domains(&self) -> Domains<'_> {
        Domains::new(self.assignments, self.store)
    }
}
