use crate::basic_types::Solution;

/// The outcome of [`Solver::find_solution`](crate::Solver::find_solution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found; more can be requested through
    /// [`Solver::next_solution`](crate::Solver::next_solution).
    Satisfiable(Solution),
    Unsatisfiable,
    /// The termination condition triggered before a conclusion was reached.
    Unknown,
}

/// The outcome of [`Solver::next_solution`](crate::Solver::next_solution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IteratedSolution {
    /// A new solution was identified.
    Solution(Solution),
    /// No more solutions exist.
    Finished,
    /// The solver was terminated during search.
    Unknown,
}

/// The outcome of [`Solver::find_all_solutions`](crate::Solver::find_all_solutions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationResult {
    /// The number of solutions found by this call.
    pub num_solutions: u64,
    /// Whether the search space was explored completely, so that no other solution exists.
    pub complete: bool,
}

/// The outcome of
/// [`Solver::find_optimal_solution`](crate::Solver::find_optimal_solution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimisationResult {
    /// The solution is proven to be optimal.
    Optimal(Solution),
    /// The best solution found before the termination condition triggered.
    Satisfiable(Solution),
    Unsatisfiable,
    Unknown,
}

impl OptimisationResult {
    /// The best solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            OptimisationResult::Optimal(solution) | OptimisationResult::Satisfiable(solution) => {
                Some(solution)
            }
            OptimisationResult::Unsatisfiable | OptimisationResult::Unknown => None,
        }
    }
}
