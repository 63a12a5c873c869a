use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::propagation::PropagatorId;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;

/// Identifies a posted constraint.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ConstraintId(u32);

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

/// The propagators of one constraint. The first `active` entries of `propagators` are the ones
/// that still need to run; the others have been made passive.
#[derive(Debug, Clone)]
struct ConstraintGroup {
    propagators: Vec<PropagatorId>,
    active: ReversibleInt,
}

/// The runtime side of the posted constraints.
///
/// Making a propagator passive swaps it with the last active propagator of its group and
/// decrements the reversible cursor. Only the cursor is trailed: the swaps permute the active
/// prefix among itself, so restoring the cursor restores the set of active propagators even
/// though their order may differ.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConstraintStore {
    groups: KeyedVec<ConstraintId, ConstraintGroup>,
    owner: KeyedVec<PropagatorId, ConstraintId>,
    position: KeyedVec<PropagatorId, usize>,
}

impl ConstraintStore {
    pub(crate) fn new_constraint(&mut self, store: &mut ReversibleStore) -> ConstraintId {
        self.groups.push(ConstraintGroup {
            propagators: Vec::new(),
            active: store.new_int(0),
        })
    }

    pub(crate) fn num_constraints(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        self.groups.keys()
    }

    /// Append a propagator to a constraint as an active propagator. Only done at the root.
    pub(crate) fn add_propagator(
        &mut self,
        store: &mut ReversibleStore,
        constraint: ConstraintId,
        propagator: PropagatorId,
    ) {
        let group = &mut self.groups[constraint];
        let num_active = store.get(group.active) as usize;
        group.propagators.push(propagator);
        let last = group.propagators.len() - 1;
        group.propagators.swap(num_active, last);
        if let Some(&moved) = group.propagators.get(last) {
            self.position.accomodate(moved, 0);
            self.position[moved] = last;
        }
        store.set(group.active, num_active as i64 + 1);

        self.owner.accomodate(propagator, constraint);
        self.owner[propagator] = constraint;
        self.position.accomodate(propagator, 0);
        self.position[propagator] = num_active;
    }

    pub(crate) fn propagators(&self, constraint: ConstraintId) -> &[PropagatorId] {
        &self.groups[constraint].propagators
    }

    pub(crate) fn owner(&self, propagator: PropagatorId) -> ConstraintId {
        self.owner[propagator]
    }

    pub(crate) fn is_active(&self, store: &ReversibleStore, propagator: PropagatorId) -> bool {
        let group = &self.groups[self.owner[propagator]];
        self.position[propagator] < store.get(group.active) as usize
    }

    pub(crate) fn num_active(&self, store: &ReversibleStore, constraint: ConstraintId) -> usize {
        store.get(self.groups[constraint].active) as usize
    }

    pub(crate) fn make_passive(&mut self, store: &mut ReversibleStore, propagator: PropagatorId) {
        if !self.is_active(store, propagator) {
            return;
        }
        let group = &mut self.groups[self.owner[propagator]];
        let last_active = store.get(group.active) as usize - 1;
        let position = self.position[propagator];
        let other = group.propagators[last_active];

        group.propagators.swap(position, last_active);
        self.position[other] = position;
        self.position[propagator] = last_active;
        store.set(group.active, last_active as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(num_propagators: u32) -> (ReversibleStore, ConstraintStore, ConstraintId) {
        let mut store = ReversibleStore::default();
        let mut constraints = ConstraintStore::default();
        let constraint = constraints.new_constraint(&mut store);
        for id in 0..num_propagators {
            constraints.add_propagator(&mut store, constraint, PropagatorId(id));
        }
        (store, constraints, constraint)
    }

    #[test]
    fn passive_propagators_are_restored_on_backtrack() {
        let (mut store, mut constraints, constraint) = store_with(3);

        store.push_world();
        constraints.make_passive(&mut store, PropagatorId(0));
        assert!(!constraints.is_active(&store, PropagatorId(0)));
        assert!(constraints.is_active(&store, PropagatorId(2)));

        store.push_world();
        constraints.make_passive(&mut store, PropagatorId(2));
        assert_eq!(constraints.num_active(&store, constraint), 1);

        store.pop_world();
        assert!(constraints.is_active(&store, PropagatorId(2)));
        assert!(!constraints.is_active(&store, PropagatorId(0)));

        store.pop_world();
        assert!((0..3).all(|id| constraints.is_active(&store, PropagatorId(id))));
    }

    #[test]
    fn making_a_passive_propagator_passive_again_has_no_effect() {
        let (mut store, mut constraints, constraint) = store_with(2);

        constraints.make_passive(&mut store, PropagatorId(1));
        constraints.make_passive(&mut store, PropagatorId(1));

        assert_eq!(constraints.num_active(&store, constraint), 1);
        assert!(constraints.is_active(&store, PropagatorId(0)));
    }
}
