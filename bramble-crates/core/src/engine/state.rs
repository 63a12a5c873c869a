use log::trace;

use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::bramble_assert_eq_simple;
use crate::containers::KeyedVec;
use crate::create_statistics_struct;
use crate::engine::constraint_store::ConstraintId;
use crate::engine::constraint_store::ConstraintStore;
use crate::engine::domains::DomainKind;
use crate::engine::domains::IntRangeSet;
use crate::engine::notifications::DomainEvents;
use crate::engine::notifications::WatchList;
use crate::engine::notifications::Watcher;
use crate::engine::propagation::DuplicationContext;
use crate::engine::propagation::Entailment;
use crate::engine::propagation::LocalId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::PropagatorId;
use crate::engine::propagation::PropagatorStore;
use crate::engine::reversible::ReversibleStore;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::Domains;
use crate::engine::PropagatorQueue;
use crate::engine::ReadDomains;
use crate::statistics::log_statistic;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Counters kept by the propagation engine.
    pub(crate) EngineStatistics {
        /// The number of propagator calls.
        num_propagations: u64,
        /// The number of calls that went through the single-event entry point.
        num_incremental_propagations: u64,
    }
);

/// The model and the propagation engine: domains, propagators, their subscriptions and the
/// queue of awake propagators.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) store: ReversibleStore,
    pub(crate) assignments: Assignments,
    pub(crate) watch_list: WatchList,
    pub(crate) propagators: PropagatorStore,
    pub(crate) constraints: ConstraintStore,
    pub(crate) statistics: EngineStatistics,
    queue: PropagatorQueue,
    /// The events each propagator has been woken up with since it last ran.
    pending: KeyedVec<PropagatorId, Vec<(LocalId, DomainEvents)>>,
}

impl State {
    pub(crate) fn domains(&self) -> Domains<'_> {
        Domains::new(&self.assignments, &self.store)
    }

    pub(crate) fn new_domain(&mut self, kind: DomainKind, values: &IntRangeSet) -> DomainId {
        self.watch_list.grow();
        self.assignments.grow(&mut self.store, kind, values)
    }

    pub(crate) fn new_constraint(&mut self) -> ConstraintId {
        self.constraints.new_constraint(&mut self.store)
    }

    /// Construct a propagator and add it to `constraint`. The propagator is not run.
    pub(crate) fn add_propagator<Constructor: PropagatorConstructor>(
        &mut self,
        constructor: Constructor,
        constraint: ConstraintId,
    ) -> PropagatorId {
        let id = self.propagators.next_id();
        let context = PropagatorConstructorContext::new(
            &self.assignments,
            &mut self.store,
            &mut self.watch_list,
            id,
        );
        let propagator = constructor.create(context);
        self.insert_propagator(Box::new(propagator), constraint)
    }

    /// Add an already constructed propagator whose subscriptions have been registered.
    pub(crate) fn insert_propagator(
        &mut self,
        propagator: Box<dyn Propagator>,
        constraint: ConstraintId,
    ) -> PropagatorId {
        let id = self.propagators.next_id();
        self.watch_list
            .set_masks(id, |local_id| propagator.propagation_mask(local_id));

        let pushed = self.propagators.push(propagator);
        bramble_assert_eq_simple!(pushed, id);

        self.pending.accomodate(id, Vec::new());
        self.constraints.add_propagator(&mut self.store, constraint, id);
        id
    }

    pub(crate) fn world_index(&self) -> usize {
        self.store.world_index()
    }

    pub(crate) fn push_world(&mut self) {
        self.store.push_world();
    }

    pub(crate) fn pop_world_to(&mut self, world: usize) {
        self.store.pop_world_to(world);
        self.flush();
    }

    /// Run a single propagator from scratch, without reaching a fixpoint.
    pub(crate) fn propagate_propagator(&mut self, id: PropagatorId) -> PropagationStatus {
        if !self.constraints.is_active(&self.store, id) {
            return Ok(());
        }
        self.call_propagator(id, true).inspect_err(|_| self.flush())
    }

    /// Call every active propagator from scratch, cheapest first, reaching a fixpoint after
    /// each call.
    pub(crate) fn initial_propagation(&mut self) -> PropagationStatus {
        self.assignments.clear_events();

        let mut order = self.propagators.ids().collect::<Vec<_>>();
        order.sort_by_key(|&id| (self.propagators[id].priority(), id));

        for id in order {
            self.propagate_propagator(id)?;
            self.propagate_to_fixpoint()?;
        }
        Ok(())
    }

    /// Dispatch the pending domain events and run awake propagators until nothing changes.
    ///
    /// On a contradiction the queue and every pending event are discarded before returning.
    pub(crate) fn propagate_to_fixpoint(&mut self) -> PropagationStatus {
        loop {
            self.notify_watchers();

            let Some(id) = self.queue.pop() else {
                return Ok(());
            };
            if !self.constraints.is_active(&self.store, id) {
                self.pending[id].clear();
                continue;
            }

            if let Err(contradiction) = self.call_propagator(id, false) {
                self.flush();
                return Err(contradiction);
            }
        }
    }

    /// Whether `constraint` holds on the current domains.
    pub(crate) fn entailment(&self, constraint: ConstraintId) -> Entailment {
        self.constraints
            .propagators(constraint)
            .iter()
            .fold(Entailment::True, |entailment, &id| {
                entailment.and(self.propagators[id].is_entailed(self.domains()))
            })
    }

    /// Whether no constraint is violated by the current domains.
    pub(crate) fn no_constraint_is_violated(&self) -> bool {
        self.constraints
            .constraint_ids()
            .all(|constraint| self.entailment(constraint) != Entailment::False)
    }

    /// Build an equivalent state holding the current domains, with a fresh trail.
    ///
    /// Variables, constraints and propagators keep their ids. Fails when a propagator does not
    /// support duplication.
    pub(crate) fn duplicate(&self) -> Result<State, SolverError> {
        let mut copy = State::default();
        let mut domain_table = KeyedVec::default();
        for domain in self.assignments.domain_ids() {
            let kind = self.domains().kind(domain);
            let duplicate = copy.new_domain(kind, &self.domains().snapshot(domain));
            let _ = domain_table.push(duplicate);
        }
        for _ in self.constraints.constraint_ids() {
            let _ = copy.new_constraint();
        }

        for id in self.propagators.ids() {
            let mut context =
                DuplicationContext::new(&domain_table, &self.store, &mut copy.store);
            let propagator = self.propagators[id].duplicate(&mut context)?;

            for (domain, watcher) in self.watch_list.iter() {
                if watcher.propagator == id {
                    copy.watch_list.watch(
                        domain_table[domain],
                        Watcher {
                            mask: DomainEvents::NONE,
                            ..watcher
                        },
                    );
                }
            }
            let duplicate = copy.insert_propagator(propagator, self.constraints.owner(id));
            bramble_assert_eq_simple!(duplicate, id);
        }
        Ok(copy)
    }

    pub(crate) fn log_statistics(&self) {
        log_statistic("variables", self.assignments.num_domains());
        log_statistic("constraints", self.constraints.num_constraints());
        log_statistic("propagators", self.propagators.len());
        self.statistics.log(StatisticLogger::new("engine"));
        for (index, propagator) in self.propagators.iter().enumerate() {
            propagator.log_statistics(StatisticLogger::new(format!(
                "{}_number_{index}",
                propagator.name()
            )));
        }
    }

    fn notify_watchers(&mut self) {
        for (domain, events) in self.assignments.drain_events() {
            for watcher in self.watch_list.watchers(domain) {
                let triggered = events.intersection(watcher.mask);
                if triggered.is_empty()
                    || !self.constraints.is_active(&self.store, watcher.propagator)
                {
                    continue;
                }

                let pending = &mut self.pending[watcher.propagator];
                match pending
                    .iter_mut()
                    .find(|(local_id, _)| *local_id == watcher.local_id)
                {
                    Some((_, events)) => *events = events.union(triggered),
                    None => pending.push((watcher.local_id, triggered)),
                }

                let priority = self.propagators[watcher.propagator].priority();
                self.queue.enqueue_propagator(watcher.propagator, priority);
            }
        }
    }

    fn call_propagator(&mut self, id: PropagatorId, from_scratch: bool) -> PropagationStatus {
        let mut events = std::mem::take(&mut self.pending[id]);
        trace!("propagating {} ({id})", self.propagators[id].name());

        self.statistics.num_propagations += 1;
        let mut passive = false;
        let context =
            PropagationContext::new(&mut self.assignments, &mut self.store, id, &mut passive);
        let result = match events.as_slice() {
            [(local_id, triggered)] if !from_scratch => {
                self.statistics.num_incremental_propagations += 1;
                self.propagators[id].propagate_event(context, *local_id, *triggered)
            }
            _ => self.propagators[id].propagate(context),
        };

        events.clear();
        self.pending[id] = events;

        if result.is_ok() && passive {
            self.constraints.make_passive(&mut self.store, id);
        }
        result
    }

    fn flush(&mut self) {
        self.queue.clear();
        self.assignments.clear_events();
        for pending in self.pending.iter_mut() {
            pending.clear();
        }
    }
}
