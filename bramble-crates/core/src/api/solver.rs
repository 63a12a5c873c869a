use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::results::EnumerationResult;
use super::results::IteratedSolution;
use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Contradiction;
use crate::basic_types::Solution;
use crate::basic_types::SolveCall;
use crate::basic_types::SolverError;
use crate::bramble_assert_simple;
use crate::branching::value_selection::InDomainMin;
use crate::branching::variable_selection::FirstFail;
use crate::branching::Brancher;
use crate::branching::IndependentVariableValueBrancher;
use crate::constraints::Constraint;
use crate::constraints::ConstraintPoster;
use crate::containers::StorageKey;
use crate::engine::constraint_store::ConstraintId;
use crate::engine::domains::DomainKind;
use crate::engine::domains::IntRangeSet;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::search::RestartStrategy;
use crate::engine::search::SearchEnvironment;
use crate::engine::search::SearchLoop;
use crate::engine::search::SearchOutcome;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::VariableNames;
use crate::engine::BacktrackingDiscipline;
use crate::engine::Domains;
use crate::engine::ReadDomains;
use crate::engine::RestartOptions;
use crate::engine::SearchMonitor;
use crate::engine::SolverStatistics;
use crate::engine::State;
use crate::optimisation::ObjectiveManager;
use crate::optimisation::OptimisationDirection;
use crate::optimisation::SolutionPool;
use crate::optimisation::SolutionPoolCapacity;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The options which configure a [`Solver`].
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// How the search restores a node when it backtracks to it.
    pub backtracking: BacktrackingDiscipline,
    /// When the search abandons its tree and starts again from the root.
    pub restart_options: RestartOptions,
    /// The seed of the random generator handed to branchers.
    pub random_seed: u64,
    /// How many solutions the solver keeps.
    pub solution_pool: SolutionPoolCapacity,
    /// The prefix of the names under which the search statistics are logged.
    pub statistics_prefix: &'static str,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            backtracking: BacktrackingDiscipline::default(),
            restart_options: RestartOptions::default(),
            random_seed: 42,
            solution_pool: SolutionPoolCapacity::default(),
            statistics_prefix: "",
        }
    }
}

/// The brancher returned by [`Solver::default_brancher`].
pub type DefaultBrancher = IndependentVariableValueBrancher<DomainId, FirstFail, InDomainMin>;

/// Which solve calls have been made since the solver was created or last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolveState {
    Idle,
    /// After `find_solution`; further solutions can be requested.
    Enumerating { last: SolveCall, exhausted: bool },
    /// After a call which consumes the whole search.
    Completed(SolveCall),
}

impl SolveState {
    fn last_call(self) -> Option<SolveCall> {
        match self {
            SolveState::Idle => None,
            SolveState::Enumerating { last, .. } => Some(last),
            SolveState::Completed(call) => Some(call),
        }
    }
}

/// The main interaction point which allows the creation of variables, the addition of
/// constraints, and solving problems.
///
/// # Creating Variables
/// ```rust
/// # use bramble_core::Solver;
/// let mut solver = Solver::default();
///
/// // A variable with every value in [0, 10]
/// let x = solver.new_bounded_variable(0, 10);
///
/// // A variable with the values 0, 3 and 5 only
/// let y = solver.new_named_sparse_variable(vec![0, 3, 5], "y");
///
/// assert_eq!(solver.upper_bound(x), 10);
/// assert_eq!(solver.variable_name(y), Some("y"));
/// ```
///
/// # Solving
/// The solve calls follow a fixed grammar: `find_solution` followed by any number of
/// `next_solution` calls, or a single `find_all_solutions`, or a single
/// `find_optimal_solution`. Any other sequence is reported as a
/// [`SolverError::IllegalCallSequence`]; [`Solver::reset`] starts over.
///
/// ```rust
/// # use bramble_core::constraints;
/// # use bramble_core::results::SatisfactionResult;
/// # use bramble_core::termination::Indefinite;
/// # use bramble_core::Solver;
/// let mut solver = Solver::default();
/// let x = solver.new_bounded_variable(0, 2);
/// let y = solver.new_bounded_variable(0, 2);
/// solver
///     .add_constraint(constraints::binary_less_than(x, y))
///     .post()
///     .expect("the constraint is satisfiable");
///
/// let mut brancher = solver.default_brancher();
/// let result = solver
///     .find_solution(&mut brancher, &mut Indefinite)
///     .expect("the first solve call is always legal");
///
/// let SatisfactionResult::Satisfiable(solution) = result else {
///     panic!("x < y has a solution");
/// };
/// assert!(solution.value(x) < solution.value(y));
/// ```
pub struct Solver {
    state: State,
    search: SearchLoop,
    options: SolverOptions,
    random: SmallRng,
    variable_names: VariableNames,
    monitors: Vec<Box<dyn SearchMonitor>>,
    statistics: SolverStatistics,
    solutions: SolutionPool,
    objective: Option<ObjectiveManager>,
    solve_state: SolveState,
    /// Set once propagation at the root failed; the model has no solution.
    infeasible_root: bool,
    /// The constraint that propagators are added to while a constraint is being posted.
    posting_group: Option<ConstraintId>,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("state", &self.state)
            .field("search", &self.search)
            .field("options", &self.options)
            .field("statistics", &self.statistics)
            .field("solve_state", &self.solve_state)
            .field("infeasible_root", &self.infeasible_root)
            .finish_non_exhaustive()
    }
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            state: State::default(),
            search: SearchLoop::new(
                options.backtracking,
                RestartStrategy::new(options.restart_options),
            ),
            options,
            random: SmallRng::seed_from_u64(options.random_seed),
            variable_names: VariableNames::default(),
            monitors: vec![],
            statistics: SolverStatistics::default(),
            solutions: SolutionPool::new(options.solution_pool),
            objective: None,
            solve_state: SolveState::Idle,
            infeasible_root: false,
            posting_group: None,
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Add a monitor which is notified of the nodes, failures, solutions and restarts of every
    /// subsequent search.
    pub fn add_search_monitor(&mut self, monitor: impl SearchMonitor + 'static) {
        self.monitors.push(Box::new(monitor));
    }

    /// The statistics gathered over every search since the solver was created.
    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            num_propagations: self.state.statistics.num_propagations,
            ..self.statistics
        }
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }
        self.statistics()
            .log(StatisticLogger::new(self.options.statistics_prefix));
        self.state.log_statistics();
        log_statistic_postfix();
    }

    /// Logs the statistics currently present in the solver with the provided objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }
}

/// Functions to create and retrieve integer variables.
impl Solver {
    /// Create a new integer variable with every value in `[lower_bound, upper_bound]`.
    pub fn new_bounded_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.new_domain(
            DomainKind::RangeList,
            IntRangeSet::from_range(lower_bound, upper_bound),
            None,
        )
    }

    /// Create a new named integer variable with every value in `[lower_bound, upper_bound]`.
    pub fn new_named_bounded_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.new_domain(
            DomainKind::RangeList,
            IntRangeSet::from_range(lower_bound, upper_bound),
            Some(name.into()),
        )
    }

    /// Create a new integer variable which only keeps track of its bounds; removing a value
    /// strictly between the bounds has no effect on it.
    pub fn new_interval_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.new_domain(
            DomainKind::Interval,
            IntRangeSet::from_range(lower_bound, upper_bound),
            None,
        )
    }

    /// Create a new integer variable which has a domain of predefined values. Duplicates are
    /// ignored.
    pub fn new_sparse_variable(&mut self, values: impl Into<Vec<i32>>) -> DomainId {
        self.new_domain(
            DomainKind::RangeList,
            IntRangeSet::from_values(values.into()),
            None,
        )
    }

    /// Create a new named integer variable which has a domain of predefined values.
    pub fn new_named_sparse_variable(
        &mut self,
        values: impl Into<Vec<i32>>,
        name: impl Into<String>,
    ) -> DomainId {
        self.new_domain(
            DomainKind::RangeList,
            IntRangeSet::from_values(values.into()),
            Some(name.into()),
        )
    }

    /// Create a new integer variable whose domain is stored as a bit vector, which pays off for
    /// small domains with many holes.
    pub fn new_bitset_variable(&mut self, values: impl Into<Vec<i32>>) -> DomainId {
        self.new_domain(
            DomainKind::Bitset,
            IntRangeSet::from_values(values.into()),
            None,
        )
    }

    fn new_domain(
        &mut self,
        kind: DomainKind,
        values: IntRangeSet,
        name: Option<String>,
    ) -> DomainId {
        bramble_assert_simple!(!values.is_empty(), "a variable needs at least one value");
        bramble_assert_simple!(
            self.solve_state == SolveState::Idle,
            "variables can only be created before solving"
        );

        let domain = self.state.new_domain(kind, &values);
        if let Some(name) = name {
            self.variable_names.add_integer(domain, name);
        }
        domain
    }

    pub fn variable_name(&self, variable: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(variable)
    }

    pub fn num_variables(&self) -> usize {
        self.state.assignments.num_domains()
    }

    /// The domains in the current node of the search. While idle this is the root, after
    /// [`Solver::find_solution`] the node of the solution, and after
    /// [`Solver::find_optimal_solution`] the best solution.
    pub fn domains(&self) -> Domains<'_> {
        self.state.domains()
    }

    /// Get the lower-bound of the given variable in the current node.
    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.domains().lower_bound(variable)
    }

    /// Get the upper-bound of the given variable in the current node.
    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.domains().upper_bound(variable)
    }

    /// The value of the given variable if it is fixed in the current node.
    pub fn value(&self, variable: DomainId) -> Option<i32> {
        self.domains().value(variable)
    }

    pub fn is_fixed(&self, variable: DomainId) -> bool {
        self.domains().is_fixed(variable)
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which adds the
    /// constraint once [`ConstraintPoster::post`] is called.
    ///
    /// If [`ConstraintPoster::post`] is not called, the constraint _is not_ added to the solver.
    /// In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use bramble_core::constraints;
    /// # use bramble_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_variable(0, 3);
    /// let b = solver.new_bounded_variable(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::binary_equals(a, b))
    ///     .post()
    ///     .expect("a = b is satisfiable");
    /// ```
    pub fn add_constraint<ConstraintImpl>(
        &mut self,
        constraint: ConstraintImpl,
    ) -> ConstraintPoster<'_, ConstraintImpl> {
        ConstraintPoster::new(self, constraint)
    }

    /// Post a new propagator to the solver and propagate the root to a fixpoint.
    ///
    /// If the propagation finds the model unsatisfiable, a [`ConstraintOperationError`] is
    /// returned; subsequent calls then always return an error and do not modify the solver.
    /// Outside of [`Solver::add_constraint`], every propagator forms a constraint of its own.
    pub fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<(), ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        self.check_posting()?;

        let constraint = match self.posting_group {
            Some(constraint) => constraint,
            None => self.state.new_constraint(),
        };
        let propagator = self.state.add_propagator(constructor, constraint);

        let result = self
            .state
            .propagate_propagator(propagator)
            .and_then(|_| self.state.propagate_to_fixpoint());
        self.record_root_result(result)
    }

    /// Post every propagator of `constraint` into one constraint group.
    pub(crate) fn post_constraint(
        &mut self,
        constraint: impl Constraint,
    ) -> Result<(), ConstraintOperationError> {
        self.check_posting()?;

        let group = self.state.new_constraint();
        let enclosing = self.posting_group.replace(group);
        let result = constraint.post(self);
        self.posting_group = enclosing;
        result
    }

    /// Remove every value outside of `values` from the root domain of `variable`.
    pub(crate) fn retain_root_values(
        &mut self,
        variable: DomainId,
        values: &IntRangeSet,
    ) -> Result<(), ConstraintOperationError> {
        self.restrict_root_domain(|state| {
            state
                .assignments
                .retain_values(&mut state.store, variable, values)
        })
    }

    /// Remove `values` from the root domain of `variable`.
    pub(crate) fn remove_root_values(
        &mut self,
        variable: DomainId,
        values: &IntRangeSet,
    ) -> Result<(), ConstraintOperationError> {
        self.restrict_root_domain(|state| {
            state
                .assignments
                .remove_values(&mut state.store, variable, values)
        })
    }

    fn restrict_root_domain(
        &mut self,
        restrict: impl FnOnce(&mut State) -> Result<bool, Contradiction>,
    ) -> Result<(), ConstraintOperationError> {
        self.check_posting()?;
        let result = restrict(&mut self.state).and_then(|_| self.state.propagate_to_fixpoint());
        self.record_root_result(result)
    }

    fn check_posting(&self) -> Result<(), ConstraintOperationError> {
        if self.solve_state != SolveState::Idle {
            return Err(ConstraintOperationError::SearchInProgress);
        }
        if self.infeasible_root {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        Ok(())
    }

    fn record_root_result(
        &mut self,
        result: Result<(), Contradiction>,
    ) -> Result<(), ConstraintOperationError> {
        result.map_err(|_| {
            self.infeasible_root = true;
            ConstraintOperationError::InfeasiblePropagator
        })
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Creates a default [`IndependentVariableValueBrancher`] which branches on every variable
    /// of the solver, smallest domain first, assigning the smallest value first.
    pub fn default_brancher(&self) -> DefaultBrancher {
        IndependentVariableValueBrancher::new(
            FirstFail::new(&self.domains().domain_ids()),
            InDomainMin,
        )
    }

    /// Propagate the root to a fixpoint without searching.
    ///
    /// Returns `false` when the model is found to be unsatisfiable.
    pub fn propagate(&mut self) -> Result<bool, SolverError> {
        self.check_call(SolveCall::Propagate)?;
        if self.infeasible_root {
            return Ok(false);
        }

        let result = self.state.initial_propagation();
        Ok(self.record_root_result(result).is_ok())
    }

    /// Solves the current model until it finds a solution (or is indicated to terminate by the
    /// provided [`TerminationCondition`]).
    ///
    /// Further solutions can be requested with [`Solver::next_solution`], with the same
    /// brancher.
    pub fn find_solution(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> Result<SatisfactionResult, SolverError> {
        self.check_call(SolveCall::FindSolution)?;
        self.start(SolveState::Enumerating {
            last: SolveCall::FindSolution,
            exhausted: false,
        });
        self.search.set_restarts_enabled(true);

        Ok(match self.search_next_solution(brancher, termination) {
            IteratedSolution::Solution(solution) => SatisfactionResult::Satisfiable(solution),
            IteratedSolution::Finished => SatisfactionResult::Unsatisfiable,
            IteratedSolution::Unknown => SatisfactionResult::Unknown,
        })
    }

    /// Continue the search of [`Solver::find_solution`] after the last solution it returned.
    ///
    /// Every solution is returned exactly once; [`IteratedSolution::Finished`] signals that no
    /// other solution exists.
    pub fn next_solution(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> Result<IteratedSolution, SolverError> {
        self.check_call(SolveCall::NextSolution)?;
        let SolveState::Enumerating { exhausted, .. } = self.solve_state else {
            unreachable!("next_solution is only legal while enumerating");
        };
        self.solve_state = SolveState::Enumerating {
            last: SolveCall::NextSolution,
            exhausted,
        };
        if exhausted {
            return Ok(IteratedSolution::Finished);
        }

        Ok(self.search_next_solution(brancher, termination))
    }

    /// Enumerate every solution of the model (or until the provided [`TerminationCondition`]
    /// triggers). The solutions are kept in the solution pool, up to its capacity, and reported
    /// to the search monitors.
    pub fn find_all_solutions(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> Result<EnumerationResult, SolverError> {
        self.check_call(SolveCall::FindAllSolutions)?;
        self.start(SolveState::Completed(SolveCall::FindAllSolutions));
        self.search.set_restarts_enabled(false);

        let mut num_solutions = 0;
        if self.infeasible_root {
            return Ok(EnumerationResult {
                num_solutions,
                complete: true,
            });
        }

        loop {
            match self.run_search(brancher, termination) {
                SearchOutcome::Solution(_) => num_solutions += 1,
                SearchOutcome::Exhausted => {
                    return Ok(EnumerationResult {
                        num_solutions,
                        complete: true,
                    })
                }
                SearchOutcome::Stopped => {
                    return Ok(EnumerationResult {
                        num_solutions,
                        complete: false,
                    })
                }
            }
        }
    }

    /// Solves the model to optimality in the given `direction` of the `objective` variable (or
    /// until the provided [`TerminationCondition`] triggers).
    ///
    /// Every solution found is strictly better than the previous one. Once the search ends, the
    /// solver is left in the best solution, so its domains can be queried directly.
    pub fn find_optimal_solution(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        direction: OptimisationDirection,
        objective: DomainId,
    ) -> Result<OptimisationResult, SolverError> {
        self.check_call(SolveCall::FindOptimalSolution)?;
        if objective.index() >= self.num_variables() {
            return Err(SolverError::UnknownVariable(objective.index()));
        }
        self.start(SolveState::Completed(SolveCall::FindOptimalSolution));
        if self.infeasible_root {
            return Ok(OptimisationResult::Unsatisfiable);
        }

        self.objective = Some(ObjectiveManager::new(direction, objective));
        self.search.set_restarts_enabled(true);

        let proven = loop {
            match self.run_search(brancher, termination) {
                SearchOutcome::Solution(solution) => {
                    if let Some(manager) = self.objective.as_mut() {
                        manager.on_solution(&solution);
                    }
                }
                SearchOutcome::Exhausted => break true,
                SearchOutcome::Stopped => break false,
            }
        };
        self.search.reset(&mut self.state);

        let Some(best) = self.solutions.best().cloned() else {
            return Ok(if proven {
                OptimisationResult::Unsatisfiable
            } else {
                OptimisationResult::Unknown
            });
        };
        self.restore_solution(&best);

        Ok(if proven {
            OptimisationResult::Optimal(best)
        } else {
            OptimisationResult::Satisfiable(best)
        })
    }

    /// Abandon the current search and return to the root, after which any solve call is legal
    /// again and constraints may be added.
    ///
    /// The solution pool and the statistics are kept.
    pub fn reset(&mut self) {
        self.search.reset(&mut self.state);
        self.state.pop_world_to(0);
        self.objective = None;
        self.solve_state = SolveState::Idle;
    }

    /// Create a fresh solver with the same variables, constraints and options, holding the
    /// current root domains. Search monitors and statistics are not copied.
    ///
    /// Fails when a propagator does not support duplication.
    pub fn duplicate(&self) -> Result<Solver, SolverError> {
        self.check_call(SolveCall::Duplicate)?;

        let mut duplicate = Solver::with_options(self.options);
        duplicate.state = self.state.duplicate()?;
        duplicate.variable_names = self.variable_names.clone();
        duplicate.infeasible_root = self.infeasible_root;
        Ok(duplicate)
    }

    /// The number of solutions found by the current (or last) solve call.
    pub fn solution_count(&self) -> u64 {
        self.solutions.num_recorded()
    }

    /// The most recent solution; after an optimisation this is the best one.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.solutions.best()
    }

    /// The solutions kept in the solution pool, oldest first.
    pub fn solutions(&self) -> impl Iterator<Item = &Solution> + '_ {
        self.solutions.iter()
    }

    fn check_call(&self, call: SolveCall) -> Result<(), SolverError> {
        let legal = match (call, self.solve_state) {
            (SolveCall::NextSolution, state) => matches!(state, SolveState::Enumerating { .. }),
            (_, state) => state == SolveState::Idle,
        };
        if legal {
            Ok(())
        } else {
            Err(SolverError::IllegalCallSequence {
                call,
                previous: self.solve_state.last_call(),
            })
        }
    }

    fn start(&mut self, solve_state: SolveState) {
        self.solve_state = solve_state;
        self.solutions.clear();
        self.objective = None;
    }

    fn search_next_solution(
        &mut self,
        brancher: &mut dyn Brancher,
        termination: &mut dyn TerminationCondition,
    ) -> IteratedSolution {
        let outcome = if self.infeasible_root {
            SearchOutcome::Exhausted
        } else {
            self.run_search(brancher, termination)
        };

        match outcome {
            SearchOutcome::Solution(solution) => {
                // Restarting would revisit the solutions that were already reported.
                self.search.set_restarts_enabled(false);
                IteratedSolution::Solution(solution)
            }
            SearchOutcome::Exhausted => {
                self.solve_state = SolveState::Enumerating {
                    last: self.solve_state.last_call().unwrap_or(SolveCall::FindSolution),
                    exhausted: true,
                };
                IteratedSolution::Finished
            }
            SearchOutcome::Stopped => IteratedSolution::Unknown,
        }
    }

    fn run_search(
        &mut self,
        brancher: &mut dyn Brancher,
        termination: &mut dyn TerminationCondition,
    ) -> SearchOutcome {
        let start = Instant::now();
        let mut environment = SearchEnvironment {
            state: &mut self.state,
            brancher,
            termination,
            monitor: &mut self.monitors,
            random: &mut self.random,
            statistics: &mut self.statistics,
            cut: self.objective.and_then(|objective| objective.cut()),
        };
        let outcome = self.search.run(&mut environment);
        self.statistics.time_spent_in_solver += start.elapsed().as_millis() as u64;

        if let SearchOutcome::Solution(solution) = &outcome {
            self.solutions.add(solution.clone());
        }
        outcome
    }

    /// Fix every variable to its value in `solution`, in a world of its own.
    fn restore_solution(&mut self, solution: &Solution) {
        self.state.push_world();
        for (variable, value) in solution.iter() {
            let result = self
                .state
                .assignments
                .instantiate(&mut self.state.store, variable, value);
            bramble_assert_simple!(
                result.is_ok(),
                "the solution {variable} = {value} is not in the root domain"
            );
        }
        self.state.assignments.clear_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::engine::termination::DecisionBudget;
    use crate::engine::termination::Indefinite;

    fn solver_with_ordered_pair() -> (Solver, DomainId, DomainId) {
        let mut solver = Solver::default();
        let x = solver.new_bounded_variable(0, 2);
        let y = solver.new_bounded_variable(0, 2);
        solver
            .add_constraint(constraints::binary_less_than(x, y))
            .post()
            .expect("x < y is satisfiable");
        (solver, x, y)
    }

    #[test]
    fn posting_propagates_the_root() {
        let (solver, x, y) = solver_with_ordered_pair();

        assert_eq!(solver.upper_bound(x), 1);
        assert_eq!(solver.lower_bound(y), 1);
    }

    #[test]
    fn the_propagators_of_a_constraint_share_a_group() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_variable(0, 5);
        let y = solver.new_bounded_variable(0, 5);
        solver
            .add_constraint(constraints::linear_equals([1, 1], [x, y], 5))
            .post()
            .expect("x + y = 5 is satisfiable");

        assert_eq!(solver.state.constraints.num_constraints(), 1);
        assert_eq!(solver.state.propagators.len(), 2);
    }

    #[test]
    fn an_infeasible_constraint_makes_the_root_infeasible() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_variable(0, 2);
        let y = solver.new_bounded_variable(0, 2);

        let result = solver
            .add_constraint(constraints::less_than_or_equals([1, 1], [x, y], -1))
            .post();
        assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));

        let result = solver
            .add_constraint(constraints::binary_not_equals(x, y))
            .post();
        assert_eq!(result, Err(ConstraintOperationError::InfeasibleState));

        let mut brancher = solver.default_brancher();
        assert_eq!(
            solver.find_solution(&mut brancher, &mut Indefinite),
            Ok(SatisfactionResult::Unsatisfiable)
        );
    }

    #[test]
    fn constraints_cannot_be_added_while_searching() {
        let (mut solver, x, y) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();
        let _ = solver
            .find_solution(&mut brancher, &mut Indefinite)
            .expect("first call");

        let result = solver
            .add_constraint(constraints::binary_not_equals(x, y))
            .post();
        assert_eq!(result, Err(ConstraintOperationError::SearchInProgress));

        solver.reset();
        assert_eq!(
            solver
                .add_constraint(constraints::binary_not_equals(x, y))
                .post(),
            Ok(())
        );
    }

    #[test]
    fn next_solution_enumerates_until_finished() {
        let (mut solver, x, y) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();

        let mut found = vec![];
        let SatisfactionResult::Satisfiable(first) = solver
            .find_solution(&mut brancher, &mut Indefinite)
            .expect("first call")
        else {
            panic!("x < y has solutions");
        };
        found.push((first.value(x), first.value(y)));

        while let IteratedSolution::Solution(solution) = solver
            .next_solution(&mut brancher, &mut Indefinite)
            .expect("enumerating")
        {
            found.push((solution.value(x), solution.value(y)));
        }

        found.sort();
        assert_eq!(found, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(
            solver.next_solution(&mut brancher, &mut Indefinite),
            Ok(IteratedSolution::Finished)
        );
        assert_eq!(solver.solution_count(), 3);
    }

    #[test]
    fn illegal_sequences_are_reported() {
        let (mut solver, _, _) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();

        assert_eq!(
            solver.next_solution(&mut brancher, &mut Indefinite),
            Err(SolverError::IllegalCallSequence {
                call: SolveCall::NextSolution,
                previous: None,
            })
        );

        let _ = solver
            .find_all_solutions(&mut brancher, &mut Indefinite)
            .expect("first call");
        assert_eq!(
            solver.find_solution(&mut brancher, &mut Indefinite),
            Err(SolverError::IllegalCallSequence {
                call: SolveCall::FindSolution,
                previous: Some(SolveCall::FindAllSolutions),
            })
        );
        assert!(matches!(
            solver.duplicate(),
            Err(SolverError::IllegalCallSequence {
                call: SolveCall::Duplicate,
                ..
            })
        ));

        solver.reset();
        assert!(solver.find_solution(&mut brancher, &mut Indefinite).is_ok());
    }

    #[test]
    fn optimisation_leaves_the_solver_in_the_best_solution() {
        let (mut solver, x, y) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();

        let result = solver
            .find_optimal_solution(
                &mut brancher,
                &mut Indefinite,
                OptimisationDirection::Maximise,
                x,
            )
            .expect("first call");

        let OptimisationResult::Optimal(best) = result else {
            panic!("the search is not limited");
        };
        assert_eq!(best.value(x), 1);
        assert_eq!(solver.value(x), Some(1));
        assert_eq!(solver.value(y), Some(2));

        solver.reset();
        assert_eq!(solver.lower_bound(x), 0);
        assert_eq!(solver.upper_bound(x), 1);
    }

    #[test]
    fn an_unknown_objective_is_rejected() {
        let (mut solver, _, _) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();

        assert_eq!(
            solver.find_optimal_solution(
                &mut brancher,
                &mut Indefinite,
                OptimisationDirection::Minimise,
                DomainId::new(7),
            ),
            Err(SolverError::UnknownVariable(7))
        );
    }

    #[test]
    fn a_stopped_enumeration_is_incomplete() {
        let (mut solver, _, _) = solver_with_ordered_pair();
        let mut brancher = solver.default_brancher();

        let result = solver
            .find_all_solutions(&mut brancher, &mut DecisionBudget::new(1))
            .expect("first call");

        assert!(!result.complete);
        assert!(result.num_solutions < 3);
    }

    #[test]
    fn member_constraints_restrict_the_root() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_variable(0, 9);
        solver
            .add_constraint(constraints::member(x, [1, 4, 7]))
            .post()
            .expect("values remain");
        solver
            .add_constraint(constraints::not_member(x, [4]))
            .post()
            .expect("values remain");

        assert_eq!(solver.domains().values(x).collect::<Vec<_>>(), vec![1, 7]);
        assert_eq!(
            solver.add_constraint(constraints::member(x, [2, 3])).post(),
            Err(ConstraintOperationError::InfeasiblePropagator)
        );
    }

    #[test]
    fn duplicates_are_independent() {
        let (solver, x, y) = solver_with_ordered_pair();
        let mut duplicate = solver.duplicate().expect("idle solvers can be duplicated");
        assert_eq!(duplicate.upper_bound(x), 1);
        assert_eq!(duplicate.lower_bound(y), 1);

        let mut brancher = duplicate.default_brancher();
        let result = duplicate
            .find_all_solutions(&mut brancher, &mut Indefinite)
            .expect("first call");

        assert_eq!(result.num_solutions, 3);
        assert!(result.complete);
        assert_eq!(solver.solution_count(), 0);
    }
}
