//! The solving kernel: reversible memory, domains, the propagation engine and the search.
mod assignments;
pub(crate) mod constraint_store;
pub mod domains;
pub mod notifications;
pub mod propagation;
mod propagator_queue;
pub mod reversible;
pub(crate) mod search;
mod solver_statistics;
mod state;
pub mod termination;
#[cfg(test)]
pub(crate) mod test_solver;
pub mod variables;

pub(crate) use assignments::Assignments;
pub use assignments::Domains;
pub use assignments::ReadDomains;
pub(crate) use propagator_queue::PropagatorQueue;
pub use search::BacktrackingDiscipline;
pub use search::RestartOptions;
pub use search::SearchMonitor;
pub use solver_statistics::SolverStatistics;
pub(crate) use state::State;
