//! A thin wrapper around the engine state for setting up propagator scenarios in unit tests.
use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatus;
use crate::engine::domains::DomainKind;
use crate::engine::domains::IntRangeSet;
use crate::engine::propagation::Entailment;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;
use crate::engine::State;

#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    pub(crate) state: State,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower: i32, upper: i32) -> DomainId {
        self.state
            .new_domain(DomainKind::RangeList, &IntRangeSet::from_range(lower, upper))
    }

    pub(crate) fn new_interval_variable(&mut self, lower: i32, upper: i32) -> DomainId {
        self.state
            .new_domain(DomainKind::Interval, &IntRangeSet::from_range(lower, upper))
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> DomainId {
        self.state.new_domain(
            DomainKind::RangeList,
            &IntRangeSet::from_values(values.iter().copied()),
        )
    }

    /// Add the propagator in a constraint of its own and propagate to a fixpoint.
    pub(crate) fn new_propagator<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, Contradiction> {
        let constraint = self.state.new_constraint();
        let id = self.state.add_propagator(constructor, constraint);
        self.state.propagate_propagator(id)?;
        self.state.propagate_to_fixpoint()?;
        Ok(id)
    }

    pub(crate) fn lower_bound(&self, variable: DomainId) -> i32 {
        self.state.domains().lower_bound(variable)
    }

    pub(crate) fn upper_bound(&self, variable: DomainId) -> i32 {
        self.state.domains().upper_bound(variable)
    }

    pub(crate) fn contains(&self, variable: DomainId, value: i32) -> bool {
        self.state.domains().contains(variable, value)
    }

    pub(crate) fn values(&self, variable: DomainId) -> Vec<i32> {
        self.state.domains().values(variable).collect()
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        variable: DomainId,
        bound: i32,
    ) -> Result<bool, Contradiction> {
        self.state
            .assignments
            .update_lower_bound(&mut self.state.store, variable, bound)
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        variable: DomainId,
        bound: i32,
    ) -> Result<bool, Contradiction> {
        self.state
            .assignments
            .update_upper_bound(&mut self.state.store, variable, bound)
    }

    pub(crate) fn remove(&mut self, variable: DomainId, value: i32) -> Result<bool, Contradiction> {
        self.state
            .assignments
            .remove_value(&mut self.state.store, variable, value)
    }

    pub(crate) fn instantiate(
        &mut self,
        variable: DomainId,
        value: i32,
    ) -> Result<bool, Contradiction> {
        self.state
            .assignments
            .instantiate(&mut self.state.store, variable, value)
    }

    /// Wake up the propagators watching the changed variables and run them to a fixpoint.
    pub(crate) fn propagate(&mut self) -> PropagationStatus {
        self.state.propagate_to_fixpoint()
    }

    /// Drop the pending events and run every propagator through its full filtering instead.
    pub(crate) fn propagate_from_scratch(&mut self) -> PropagationStatus {
        self.state.initial_propagation()
    }

    pub(crate) fn is_entailed(&self, propagator: PropagatorId) -> Entailment {
        self.state.propagators[propagator].is_entailed(self.state.domains())
    }

    pub(crate) fn push_world(&mut self) {
        self.state.push_world();
    }

    pub(crate) fn pop_world_to(&mut self, world: usize) {
        self.state.pop_world_to(world);
    }
}
