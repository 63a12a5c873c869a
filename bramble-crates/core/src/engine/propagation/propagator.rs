use downcast_rs::impl_downcast;
use downcast_rs::Downcast;

use super::DuplicationContext;
use super::LocalId;
use super::PropagationContext;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SolverError;
use crate::engine::notifications::DomainEvents;
use crate::engine::Domains;
#[cfg(doc)]
use crate::engine::propagation::PropagatorConstructorContext;
use crate::statistics::StatisticLogger;

impl_downcast!(Propagator);

/// A propagator removes values from domains which cannot be part of any solution, or reports
/// that its constraint cannot be satisfied.
///
/// The required functions are [`Propagator::name`], [`Propagator::propagate`] and
/// [`Propagator::is_entailed`]. Propagators subscribe to variables while they are constructed
/// (see [`PropagatorConstructorContext::register`]) and are woken up when one of those variables
/// changes in a way that intersects [`Propagator::propagation_mask`].
///
/// A propagator may only shrink domains, update the reversible cells it owns, and declare itself
/// passive through [`PropagationContext::set_passive`]. Any other state must be derivable from
/// the domains, since it is not restored on backtracking.
pub trait Propagator: Downcast {
    /// Return the name of the propagator, used for logging.
    fn name(&self) -> &str;

    /// The events on the variable registered as `local_id` that should wake this propagator up.
    ///
    /// This is queried once, after the propagator has been constructed. By default every change
    /// is of interest.
    fn propagation_mask(&self, _local_id: LocalId) -> DomainEvents {
        DomainEvents::ANY_INT
    }

    /// Filter the domains from scratch.
    ///
    /// Called once when the propagator is posted, at the start of every search (and after every
    /// restart), and whenever several of its variables changed since it last ran. Propagators are
    /// not required to reach a fixpoint on their own; the engine calls them again as long as
    /// their variables keep changing.
    fn propagate(&mut self, context: PropagationContext) -> PropagationStatus;

    /// Filter the domains after a single variable changed.
    ///
    /// Must prune exactly what [`Propagator::propagate`] would; by default it calls it.
    fn propagate_event(
        &mut self,
        context: PropagationContext,
        _local_id: LocalId,
        _events: DomainEvents,
    ) -> PropagationStatus {
        self.propagate(context)
    }

    /// Used to order the propagators in the queue; cheap propagators should have a higher
    /// priority.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Whether the constraint is satisfied by every assignment of the current domains, violated
    /// by every one, or neither.
    fn is_entailed(&self, domains: Domains<'_>) -> Entailment;

    /// Create an equivalent propagator for a duplicated solver.
    fn duplicate(
        &self,
        _context: &mut DuplicationContext<'_>,
    ) -> Result<Box<dyn Propagator>, SolverError> {
        Err(SolverError::UnsupportedOperation {
            propagator: self.name().to_owned(),
            operation: "duplicate",
        })
    }

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// The priority of a propagator; propagators with a lower number are run first.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}

impl Priority {
    pub(crate) const NUM_LEVELS: u32 = 4;
}

/// The three-valued answer of [`Propagator::is_entailed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entailment {
    True,
    False,
    Undefined,
}

impl Entailment {
    /// Combine the entailment of two propagators of the same constraint.
    pub fn and(self, other: Entailment) -> Entailment {
        match (self, other) {
            (Entailment::False, _) | (_, Entailment::False) => Entailment::False,
            (Entailment::True, Entailment::True) => Entailment::True,
            _ => Entailment::Undefined,
        }
    }
}

impl std::fmt::Debug for dyn Propagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
