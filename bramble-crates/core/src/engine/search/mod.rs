//! The depth-first branch-and-propagate search and its configuration.
mod restart_strategy;
mod search_loop;
mod search_monitor;

pub use restart_strategy::RestartOptions;
pub(crate) use restart_strategy::RestartStrategy;
pub use search_loop::BacktrackingDiscipline;
pub(crate) use search_loop::SearchEnvironment;
pub(crate) use search_loop::SearchLoop;
pub(crate) use search_loop::SearchOutcome;
pub use search_monitor::SearchMonitor;
