//! Contains the structures which turn the search into an optimisation procedure.
//!
//! When optimising, every node of the search tree must improve on the best solution found so
//! far; this is enforced by an [`ObjectiveCut`] applied before the propagation of each node.
//! Solutions are kept in a [`SolutionPool`].
mod objective_manager;
mod solution_pool;

pub(crate) use objective_manager::ObjectiveCut;
pub(crate) use objective_manager::ObjectiveManager;
pub use solution_pool::SolutionPool;
pub use solution_pool::SolutionPoolCapacity;

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}

impl OptimisationDirection {
    /// Whether `value` is strictly better than `other` in this direction.
    pub fn improves(self, value: i32, other: i32) -> bool {
        match self {
            OptimisationDirection::Maximise => value > other,
            OptimisationDirection::Minimise => value < other,
        }
    }
}
