use std::collections::VecDeque;

use crate::basic_types::Solution;

/// How many solutions a [`SolutionPool`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolutionPoolCapacity {
    /// Only the most recent solution.
    #[default]
    LastOne,
    /// Every solution.
    All,
    /// The `n` most recent solutions. The most recent one stays available through
    /// [`SolutionPool::best`] even when `n` is zero.
    Bounded(usize),
}

/// The solutions found by the solver, oldest first.
///
/// Solutions of an optimisation are found in order of improving objective value, so the most
/// recent solution is also the best one.
#[derive(Debug, Clone, Default)]
pub struct SolutionPool {
    capacity: SolutionPoolCapacity,
    solutions: VecDeque<Solution>,
    /// Kept apart from `solutions` so that eviction never loses it.
    last: Option<Solution>,
    num_recorded: u64,
}

impl SolutionPool {
    pub fn new(capacity: SolutionPoolCapacity) -> Self {
        SolutionPool {
            capacity,
            solutions: VecDeque::new(),
            last: None,
            num_recorded: 0,
        }
    }

    /// Record a solution, evicting the oldest ones beyond the capacity.
    pub fn add(&mut self, solution: Solution) {
        self.num_recorded += 1;
        self.solutions.push_back(solution.clone());
        self.last = Some(solution);

        let limit = match self.capacity {
            SolutionPoolCapacity::LastOne => 1,
            SolutionPoolCapacity::All => usize::MAX,
            SolutionPoolCapacity::Bounded(limit) => limit,
        };
        while self.solutions.len() > limit {
            let _ = self.solutions.pop_front();
        }
    }

    /// The most recent solution.
    pub fn best(&self) -> Option<&Solution> {
        self.last.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Solution> + '_ {
        self.solutions.iter()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// The number of solutions recorded since the pool was last cleared, including the evicted
    /// ones.
    pub fn num_recorded(&self) -> u64 {
        self.num_recorded
    }

    pub fn clear(&mut self) {
        self.solutions.clear();
        self.last = None;
        self.num_recorded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    fn solutions(count: i32) -> Vec<Solution> {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, count);
        (0..count)
            .map(|value| {
                solver.state.push_world();
                let _ = solver.instantiate(x, value).expect("value is in the domain");
                let solution = Solution::from_domains(solver.state.domains());
                solver.state.pop_world_to(0);
                solution
            })
            .collect()
    }

    #[test]
    fn last_one_keeps_the_most_recent_solution() {
        let all = solutions(3);
        let mut pool = SolutionPool::default();
        for solution in all.iter().cloned() {
            pool.add(solution);
        }

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.num_recorded(), 3);
        assert_eq!(pool.best(), Some(&all[2]));
    }

    #[test]
    fn bounded_pools_evict_the_oldest_solutions() {
        let all = solutions(4);
        let mut pool = SolutionPool::new(SolutionPoolCapacity::Bounded(2));
        for solution in all.iter().cloned() {
            pool.add(solution);
        }

        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![&all[2], &all[3]]);
        assert_eq!(pool.best(), Some(&all[3]));
    }

    #[test]
    fn an_empty_window_still_knows_the_best_solution() {
        let all = solutions(3);
        let mut pool = SolutionPool::new(SolutionPoolCapacity::Bounded(0));
        for solution in all.iter().cloned() {
            pool.add(solution);
        }

        assert!(pool.is_empty());
        assert_eq!(pool.num_recorded(), 3);
        assert_eq!(pool.best(), Some(&all[2]));
    }

    #[test]
    fn unbounded_pools_keep_everything_until_cleared() {
        let all = solutions(4);
        let mut pool = SolutionPool::new(SolutionPoolCapacity::All);
        for solution in all.iter().cloned() {
            pool.add(solution);
        }
        assert_eq!(pool.len(), 4);

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.num_recorded(), 0);
        assert_eq!(pool.best(), None);
    }
}
