use super::LocalId;
use super::Propagator;
use super::PropagatorId;
use crate::engine::notifications::DomainEvents;
use crate::engine::notifications::WatchList;
use crate::engine::notifications::Watcher;
use crate::engine::reversible::ReversibleInt;
use crate::engine::reversible::ReversibleStore;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::Domains;
use crate::engine::ReadDomains;

/// A propagator constructor creates a fully initialised instance of a [`Propagator`].
///
/// The constructor is responsible for subscribing the propagator to its variables and for
/// allocating the reversible cells the propagator keeps its state in.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator;

    /// Create the propagator instance from `Self`.
    fn create(self, context: PropagatorConstructorContext<'_>) -> Self::PropagatorImpl;
}

/// The communication point between the solver and a propagator that is being constructed.
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    assignments: &'a Assignments,
    store: &'a mut ReversibleStore,
    watch_list: &'a mut WatchList,
    propagator_id: PropagatorId,
}

impl<'a> PropagatorConstructorContext<'a> {
    pub(crate) fn new(
        assignments: &'a Assignments,
        store: &'a mut ReversibleStore,
        watch_list: &'a mut WatchList,
        propagator_id: PropagatorId,
    ) -> Self {
        PropagatorConstructorContext {
            assignments,
            store,
            watch_list,
            propagator_id,
        }
    }

    pub fn propagator_id(&self) -> PropagatorId {
        self.propagator_id
    }

    /// Subscribe the propagator to changes of `domain`.
    ///
    /// The [`LocalId`] is handed back to [`Propagator::propagate_event`] and
    /// [`Propagator::propagation_mask`] to identify the variable, so every variable must get a
    /// distinct one.
    pub fn register(&mut self, domain: DomainId, local_id: LocalId) {
        self.watch_list.watch(
            domain,
            Watcher {
                propagator: self.propagator_id,
                local_id,
                mask: DomainEvents::NONE,
            },
        );
    }

    /// Allocate a reversible cell for the state of the propagator.
    pub fn new_reversible(&mut self, initial_value: i64) -> ReversibleInt {
        self.store.new_int(initial_value)
    }
}

impl ReadDomains for PropagatorConstructorContext<'_> {
    fn domains(&self) -> Domains<'_> {
        Domains::new(self.assignments, self.store)
    }
}
