use std::ops::Index;
use std::ops::IndexMut;

use super::Propagator;
use super::PropagatorId;
use crate::containers::KeyedVec;

/// Owns the propagators of a solver, indexed by their [`PropagatorId`].
#[derive(Debug, Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
}

impl PropagatorStore {
    /// The id the next propagator will get.
    pub(crate) fn next_id(&self) -> PropagatorId {
        PropagatorId(self.propagators.len() as u32)
    }

    pub(crate) fn push(&mut self, propagator: Box<dyn Propagator>) -> PropagatorId {
        self.propagators.push(propagator)
    }

    pub(crate) fn len(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = PropagatorId> {
        self.propagators.keys()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &dyn Propagator> {
        self.propagators.iter().map(|propagator| propagator.as_ref())
    }

    pub(crate) fn as_propagator<P: Propagator>(&self, id: PropagatorId) -> Option<&P> {
        self.propagators
            .get(id)
            .and_then(|propagator| propagator.downcast_ref::<P>())
    }
}

impl Index<PropagatorId> for PropagatorStore {
    type Output = dyn Propagator;

    fn index(&self, index: PropagatorId) -> &Self::Output {
        self.propagators[index].as_ref()
    }
}

impl IndexMut<PropagatorId> for PropagatorStore {
    fn index_mut(&mut self, index: PropagatorId) -> &mut Self::Output {
        self.propagators[index].as_mut()
    }
}
