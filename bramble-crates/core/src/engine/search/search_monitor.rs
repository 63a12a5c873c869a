use crate::basic_types::Solution;

/// Observes the search tree as it is explored.
///
/// Every callback has an empty default, so a monitor only implements what it is interested in.
/// Monitors may not influence the search; see [`crate::branching::Brancher`] and
/// [`crate::termination::TerminationCondition`] for that.
pub trait SearchMonitor {
    /// A node at `depth` decisions below the root is about to be branched on.
    fn on_open_node(&mut self, _depth: usize) {}

    fn on_solution(&mut self, _solution: &Solution) {}

    /// Propagation failed `depth` decisions below the root.
    fn on_failure(&mut self, _depth: usize) {}

    fn on_restart(&mut self) {}
}

impl SearchMonitor for Vec<Box<dyn SearchMonitor>> {
    fn on_open_node(&mut self, depth: usize) {
        self.iter_mut()
            .for_each(|monitor| monitor.on_open_node(depth));
    }

    fn on_solution(&mut self, solution: &Solution) {
        self.iter_mut()
            .for_each(|monitor| monitor.on_solution(solution));
    }

    fn on_failure(&mut self, depth: usize) {
        self.iter_mut().for_each(|monitor| monitor.on_failure(depth));
    }

    fn on_restart(&mut self) {
        self.iter_mut().for_each(|monitor| monitor.on_restart());
    }
}
