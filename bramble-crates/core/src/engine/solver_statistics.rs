use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters describing the work done by a solver since it was created.
    pub SolverStatistics {
        /// The number of nodes opened by the search.
        num_nodes: u64,
        /// The number of decisions made; every decision opens a left branch.
        num_decisions: u64,
        /// The number of branches whose propagation failed.
        num_failures: u64,
        num_restarts: u64,
        num_solutions: u64,
        /// The number of propagator calls.
        num_propagations: u64,
        /// The number of times the search went back up the tree to take a right branch.
        num_backtracks: u64,
        /// The number of decisions re-applied to restore a node under recomputation.
        num_replayed_decisions: u64,
        /// The largest number of decisions on the path from the root to a node.
        max_depth: u64,
        /// Wall-clock time spent inside the solve calls, in milliseconds.
        time_spent_in_solver: u64,
    }
);
