mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! Every solve call has its own result type:
    //! - [`Solver::find_solution`] returns a [`SatisfactionResult`]
    //! - [`Solver::next_solution`] returns an [`IteratedSolution`]
    //! - [`Solver::find_all_solutions`] returns an [`EnumerationResult`]
    //! - [`Solver::find_optimal_solution`] returns an [`OptimisationResult`]
    pub use crate::api::outputs::EnumerationResult;
    pub use crate::api::outputs::IteratedSolution;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
    pub use crate::optimisation::SolutionPool;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Integer variables are created through the [`Solver`] (for example with
    //! [`Solver::new_bounded_variable`]) and referred to by a [`DomainId`].
    pub use crate::engine::variables::DomainId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod domains {
    //! Read access to the domains of variables, and plain sets of integers.
    //!
    //! Propagators and branchers see the domains through [`ReadDomains`]. Sets of values are
    //! described by an [`IntRangeSet`], which supports the operations in [`set_algebra`].
    pub use crate::engine::domains::set_algebra;
    pub use crate::engine::domains::DomainKind;
    pub use crate::engine::domains::DomainRanges;
    pub use crate::engine::domains::DomainValues;
    pub use crate::engine::domains::IntRangeSet;
    pub use crate::engine::Domains;
    pub use crate::engine::ReadDomains;
}

pub mod reversible {
    //! The checkpoint/restore memory underlying every piece of backtrackable state.
    pub use crate::engine::reversible::ReversibleInt;
    pub use crate::engine::reversible::ReversibleStore;
}

pub mod propagation {
    //! Contains the interface for writing propagators.
    //!
    //! A propagator is constructed by a [`PropagatorConstructor`] and added to the solver with
    //! [`Solver::add_propagator`]. It is woken up by the [`DomainEvents`] in its
    //! [`Propagator::propagation_mask`] and shrinks domains through a [`PropagationContext`].
    pub use crate::basic_types::Contradiction;
    pub use crate::basic_types::PropagationStatus;
    pub use crate::engine::notifications::DomainEvent;
    pub use crate::engine::notifications::DomainEvents;
    pub use crate::engine::propagation::DuplicationContext;
    pub use crate::engine::propagation::Entailment;
    pub use crate::engine::propagation::LocalId;
    pub use crate::engine::propagation::Priority;
    pub use crate::engine::propagation::PropagationContext;
    pub use crate::engine::propagation::Propagator;
    pub use crate::engine::propagation::PropagatorConstructor;
    pub use crate::engine::propagation::PropagatorConstructorContext;
    pub use crate::engine::propagation::PropagatorId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The way the search restores nodes when it backtracks
    //! - The restart strategy of the solver
    //! - The number of solutions that are kept
    //! - The seed of the random choices made during search
    pub use crate::api::solver::SolverOptions;
    pub use crate::basic_types::sequence_generators::SequenceGeneratorType;
    pub use crate::engine::BacktrackingDiscipline;
    pub use crate::engine::RestartOptions;
    pub use crate::optimisation::SolutionPoolCapacity;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction/optimisation problem is unknown.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the [`Solver`] during
    //! the search process. It indicates when the [`Solver`] should stop, even if no definitive
    //! conclusions have been made.
    //!
    //! The most common example would be [`TimeBudget`], which terminates the [`Solver`] whenever
    //! the time budget is exceeded.
    pub use crate::engine::termination::*;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod monitoring {
    //! Callbacks which observe the search without influencing it.
    pub use crate::engine::SearchMonitor;
    pub use crate::engine::SolverStatistics;
}
