use log::debug;

use super::OptimisationDirection;
use crate::basic_types::Contradiction;
use crate::basic_types::Solution;
use crate::bramble_assert_simple;
use crate::engine::State;
use crate::variables::DomainId;

/// Requires the objective to be strictly better than a previously found value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ObjectiveCut {
    objective: DomainId,
    direction: OptimisationDirection,
    best: i32,
}

impl ObjectiveCut {
    /// Tighten the bound of the objective in the current world.
    ///
    /// When no value can improve on `best` this is a contradiction on the objective.
    pub(crate) fn apply(&self, state: &mut State) -> Result<bool, Contradiction> {
        let State {
            assignments, store, ..
        } = state;
        match self.direction {
            OptimisationDirection::Minimise => match self.best.checked_sub(1) {
                Some(bound) => assignments.update_upper_bound(store, self.objective, bound),
                None => Err(Contradiction::EmptyDomain(self.objective)),
            },
            OptimisationDirection::Maximise => match self.best.checked_add(1) {
                Some(bound) => assignments.update_lower_bound(store, self.objective, bound),
                None => Err(Contradiction::EmptyDomain(self.objective)),
            },
        }
    }
}

/// Tracks the best objective value of an optimisation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectiveManager {
    objective: DomainId,
    direction: OptimisationDirection,
    best: Option<i32>,
}

impl ObjectiveManager {
    pub(crate) fn new(direction: OptimisationDirection, objective: DomainId) -> Self {
        ObjectiveManager {
            objective,
            direction,
            best: None,
        }
    }

    pub(crate) fn best(&self) -> Option<i32> {
        self.best
    }

    /// The cut every node must satisfy, once a first solution has been found.
    pub(crate) fn cut(&self) -> Option<ObjectiveCut> {
        self.best.map(|best| ObjectiveCut {
            objective: self.objective,
            direction: self.direction,
            best,
        })
    }

    /// Record a solution found under the current cut.
    pub(crate) fn on_solution(&mut self, solution: &Solution) {
        let value = solution.value(self.objective);
        if let Some(best) = self.best {
            bramble_assert_simple!(
                self.direction.improves(value, best),
                "the objective value {value} does not improve on {best}"
            );
        }
        debug!("New best objective value {value}");
        self.best = Some(value);
    }
}
