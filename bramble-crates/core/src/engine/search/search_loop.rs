use log::debug;
use log::trace;

use super::RestartStrategy;
use super::SearchMonitor;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Random;
use crate::basic_types::Solution;
use crate::bramble_assert_advanced;
use crate::bramble_assert_simple;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::termination::TerminationCondition;
use crate::engine::ReadDomains;
use crate::engine::SolverStatistics;
use crate::engine::State;
use crate::optimisation::ObjectiveCut;

/// How the search restores the domains of a node when it backtracks to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktrackingDiscipline {
    /// Push a world before every branch and pop back to it.
    #[default]
    Trailing,
    /// Push a world only every `interval` levels of the tree; the nodes in between are restored
    /// by re-applying their decisions from the closest world above them.
    Recomputation { interval: u32 },
}

impl BacktrackingDiscipline {
    fn checkpoints_at(self, depth: usize) -> bool {
        match self {
            BacktrackingDiscipline::Trailing => true,
            BacktrackingDiscipline::Recomputation { interval } => {
                depth % interval.max(1) as usize == 0
            }
        }
    }
}

/// Why [`SearchLoop::run`] returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// A leaf in which every variable is fixed. Calling `run` again continues after it.
    Solution(Solution),
    /// The tree has been explored completely.
    Exhausted,
    /// The termination condition triggered. Calling `run` again continues where it stopped.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Init,
    InitialPropagation,
    OpenNode,
    DownLeftBranch,
    DownRightBranch,
    UpBranch,
    Restart,
    Resume,
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct DecisionNode {
    decision: Decision,
    branch: Branch,
    /// Whether a world is pushed before the branch is applied.
    checkpointed: bool,
    /// The world index before the branch was applied; only meaningful when checkpointed.
    world_before: usize,
}

impl DecisionNode {
    fn has_alternative(&self) -> bool {
        self.branch == Branch::Left
    }
}

/// Everything the search loop borrows from the solver while it runs.
pub(crate) struct SearchEnvironment<'a> {
    pub(crate) state: &'a mut State,
    pub(crate) brancher: &'a mut dyn Brancher,
    pub(crate) termination: &'a mut dyn TerminationCondition,
    pub(crate) monitor: &'a mut dyn SearchMonitor,
    pub(crate) random: &'a mut dyn Random,
    pub(crate) statistics: &'a mut SolverStatistics,
    /// The bound every node must improve on, if the search optimises.
    pub(crate) cut: Option<ObjectiveCut>,
}

impl std::fmt::Debug for SearchEnvironment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEnvironment")
            .field("cut", &self.cut)
            .finish_non_exhaustive()
    }
}

/// The depth-first search over binary decisions.
///
/// The stack of decisions is the path from the root to the current node. Each node records
/// which of its two branches is being explored; a node on its right branch has no alternative
/// left and is discarded when the search backtracks past it.
#[derive(Debug)]
pub(crate) struct SearchLoop {
    discipline: BacktrackingDiscipline,
    restarts: RestartStrategy,
    decisions: Vec<DecisionNode>,
    next_state: SearchState,
    /// The world the solver was in before the search started.
    root_world: usize,
}

impl SearchLoop {
    pub(crate) fn new(discipline: BacktrackingDiscipline, restarts: RestartStrategy) -> Self {
        SearchLoop {
            discipline,
            restarts,
            decisions: vec![],
            next_state: SearchState::Init,
            root_world: 0,
        }
    }

    pub(crate) fn discipline(&self) -> BacktrackingDiscipline {
        self.discipline
    }

    pub(crate) fn set_restarts_enabled(&mut self, enabled: bool) {
        self.restarts.set_enabled(enabled);
    }

    /// Whether the search has started and not yet been reset.
    pub(crate) fn is_started(&self) -> bool {
        self.next_state != SearchState::Init
    }

    pub(crate) fn depth(&self) -> usize {
        self.decisions.len()
    }

    /// Abandon the search and return the state to the world it was in before it started.
    pub(crate) fn reset(&mut self, state: &mut State) {
        if self.is_started() {
            state.pop_world_to(self.root_world);
        }
        self.decisions.clear();
        self.next_state = SearchState::Init;
    }

    /// Explore the tree until a solution is found, the tree is exhausted or the termination
    /// condition triggers.
    pub(crate) fn run(&mut self, environment: &mut SearchEnvironment<'_>) -> SearchOutcome {
        loop {
            match self.next_state {
                SearchState::Init => {
                    self.root_world = environment.state.world_index();
                    environment.state.push_world();
                    self.next_state = SearchState::InitialPropagation;
                }
                SearchState::InitialPropagation => {
                    self.decisions.clear();
                    let result = Self::apply_cut(environment)
                        .and_then(|_| environment.state.initial_propagation());
                    if result.is_err() {
                        debug!("Initial propagation failed, the problem is infeasible");
                        environment.state.pop_world_to(self.search_world());
                        self.next_state = SearchState::Finished;
                        return SearchOutcome::Exhausted;
                    }
                    self.next_state = SearchState::OpenNode;
                }
                SearchState::OpenNode => {
                    if environment.termination.should_stop() {
                        return SearchOutcome::Stopped;
                    }
                    environment.statistics.num_nodes += 1;
                    environment.monitor.on_open_node(self.depth());

                    match self.next_decision(environment) {
                        Some(decision) => {
                            environment.termination.decision_has_been_made();
                            environment.statistics.num_decisions += 1;

                            let depth = self.depth();
                            self.decisions.push(DecisionNode {
                                decision,
                                branch: Branch::Left,
                                checkpointed: self.discipline.checkpoints_at(depth),
                                world_before: 0,
                            });
                            environment.statistics.max_depth =
                                environment.statistics.max_depth.max(self.depth() as u64);
                            self.next_state = SearchState::DownLeftBranch;
                        }
                        None => {
                            let solution = self.record_solution(environment);
                            self.next_state = SearchState::Resume;
                            return SearchOutcome::Solution(solution);
                        }
                    }
                }
                SearchState::DownLeftBranch | SearchState::DownRightBranch => {
                    let world_index = environment.state.world_index();
                    let top = self.decisions.len() - 1;
                    let node = &mut self.decisions[top];
                    if node.checkpointed {
                        node.world_before = world_index;
                        environment.state.push_world();
                    }
                    let (decision, branch) = (node.decision, node.branch);
                    trace!("Applying {branch:?} branch of {decision}");

                    match Self::apply_branch(environment, decision, branch) {
                        Ok(()) => self.next_state = SearchState::OpenNode,
                        Err(_) => self.on_failure(environment),
                    }
                }
                SearchState::UpBranch => {
                    if environment.termination.should_stop() {
                        return SearchOutcome::Stopped;
                    }
                    while self
                        .decisions
                        .last()
                        .is_some_and(|node| !node.has_alternative())
                    {
                        let _ = self.decisions.pop();
                    }
                    let Some(top) = self.decisions.last_mut() else {
                        environment.state.pop_world_to(self.search_world());
                        self.next_state = SearchState::Finished;
                        return SearchOutcome::Exhausted;
                    };
                    top.branch = Branch::Right;
                    environment.statistics.num_backtracks += 1;

                    match self.restore_top(environment) {
                        Ok(()) => self.next_state = SearchState::DownRightBranch,
                        Err(failed_at) => {
                            // The replayed branch of that node failed, so its subtree is empty.
                            self.decisions.truncate(failed_at + 1);
                            self.on_failure(environment);
                        }
                    }
                }
                SearchState::Restart => {
                    debug!(
                        "Restarting after {} failures",
                        environment.statistics.num_failures
                    );
                    environment.statistics.num_restarts += 1;
                    environment.monitor.on_restart();
                    environment.brancher.on_restart();
                    self.restarts.notify_restart();

                    self.decisions.clear();
                    environment.state.pop_world_to(self.root_world);
                    environment.state.push_world();
                    self.next_state = SearchState::InitialPropagation;
                }
                SearchState::Resume => {
                    self.next_state = SearchState::UpBranch;
                }
                SearchState::Finished => return SearchOutcome::Exhausted,
            }
        }
    }

    /// The world in which the search tree is rooted, just above the initial propagation.
    fn search_world(&self) -> usize {
        self.root_world + 1
    }

    fn next_decision(&self, environment: &mut SearchEnvironment<'_>) -> Option<Decision> {
        let mut context = SelectionContext::new(environment.state.domains(), environment.random);
        let decision = environment
            .brancher
            .next_decision(&mut context)
            .or_else(|| complete_assignment(&context));

        if let Some(decision) = decision {
            bramble_assert_simple!(
                decision.splits(&context),
                "the brancher returned {decision}, which does not split the domain of {}",
                decision.variable()
            );
        }
        decision
    }

    fn record_solution(&self, environment: &mut SearchEnvironment<'_>) -> Solution {
        bramble_assert_advanced!(
            environment.state.no_constraint_is_violated(),
            "a solution violates a constraint"
        );

        let solution = Solution::from_domains(environment.state.domains());
        debug!("Found a solution at depth {}", self.depth());
        environment.statistics.num_solutions += 1;
        environment.termination.solution_has_been_found();
        environment.monitor.on_solution(&solution);
        environment.brancher.on_solution(&solution);
        solution
    }

    fn on_failure(&mut self, environment: &mut SearchEnvironment<'_>) {
        environment.statistics.num_failures += 1;
        environment.termination.failure_has_occurred();
        environment.monitor.on_failure(self.depth());
        self.restarts.notify_failure();

        self.next_state = if self.restarts.should_restart() {
            SearchState::Restart
        } else {
            SearchState::UpBranch
        };
    }

    /// Bring the state back to the node above the top decision.
    ///
    /// Pops to the closest checkpointed node at or above the top, then replays the decisions
    /// between it and the top. If one of the replayed branches fails, the index of its node is
    /// returned.
    fn restore_top(&mut self, environment: &mut SearchEnvironment<'_>) -> Result<(), usize> {
        let top = self.decisions.len() - 1;
        let checkpoint = self.decisions[..=top]
            .iter()
            .rposition(|node| node.checkpointed)
            .unwrap_or(0);
        bramble_assert_simple!(
            self.decisions[checkpoint].checkpointed,
            "the root decision is always checkpointed"
        );

        environment
            .state
            .pop_world_to(self.decisions[checkpoint].world_before);

        if checkpoint < top {
            debug!("Replaying {} decisions", top - checkpoint);
        }
        for index in checkpoint..top {
            let world_index = environment.state.world_index();
            let node = &mut self.decisions[index];
            if node.checkpointed {
                node.world_before = world_index;
                environment.state.push_world();
            }
            let (decision, branch) = (node.decision, node.branch);
            environment.statistics.num_replayed_decisions += 1;

            Self::apply_branch(environment, decision, branch).map_err(|_| index)?;
        }
        Ok(())
    }

    fn apply_branch(
        environment: &mut SearchEnvironment<'_>,
        decision: Decision,
        branch: Branch,
    ) -> PropagationStatus {
        let _ = decision.apply(branch, environment.state)?;
        Self::apply_cut(environment)?;
        environment.state.propagate_to_fixpoint()
    }

    fn apply_cut(environment: &mut SearchEnvironment<'_>) -> PropagationStatus {
        if let Some(cut) = environment.cut {
            let _ = cut.apply(environment.state)?;
        }
        Ok(())
    }
}

/// Fix the first unfixed variable, in creation order, to its smallest value.
fn complete_assignment(domains: &impl ReadDomains) -> Option<Decision> {
    domains
        .domain_ids()
        .into_iter()
        .find(|&variable| !domains.is_fixed(variable))
        .map(|variable| Decision::Assign {
            variable,
            value: domains.lower_bound(variable),
        })
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::basic_types::sequence_generators::SequenceGeneratorType;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::branching::IndependentVariableValueBrancher;
    use crate::engine::domains::DomainKind;
    use crate::engine::domains::IntRangeSet;
    use crate::engine::search::RestartOptions;
    use crate::engine::termination::DecisionBudget;
    use crate::engine::termination::Indefinite;
    use crate::engine::variables::DomainId;
    use crate::propagators::NotEqualsPropagator;

    /// Three variables over `[0, upper]` which are pairwise different.
    fn all_different_state(upper: i32) -> (State, Vec<DomainId>) {
        let mut state = State::default();
        let x = (0..3)
            .map(|_| state.new_domain(DomainKind::RangeList, &IntRangeSet::from_range(0, upper)))
            .collect::<Vec<_>>();
        let constraint = state.new_constraint();
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let _ = state.add_propagator(NotEqualsPropagator::new(x[a], x[b], 0), constraint);
        }
        (state, x)
    }

    fn enumerate(
        state: &mut State,
        variables: &[DomainId],
        search: &mut SearchLoop,
        termination: &mut dyn TerminationCondition,
    ) -> (Vec<Vec<i32>>, SearchOutcome, SolverStatistics) {
        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(variables), InDomainMin);
        let mut monitor: Vec<Box<dyn SearchMonitor>> = vec![];
        let mut random = SmallRng::seed_from_u64(42);
        let mut statistics = SolverStatistics::default();
        let mut solutions = vec![];

        let outcome = loop {
            let mut environment = SearchEnvironment {
                state: &mut *state,
                brancher: &mut brancher,
                termination: &mut *termination,
                monitor: &mut monitor,
                random: &mut random,
                statistics: &mut statistics,
                cut: None,
            };
            match search.run(&mut environment) {
                SearchOutcome::Solution(solution) => solutions.push(
                    variables
                        .iter()
                        .map(|&variable| solution.value(variable))
                        .collect(),
                ),
                outcome => break outcome,
            }
        };
        (solutions, outcome, statistics)
    }

    #[test]
    fn all_solutions_are_enumerated_in_order() {
        let (mut state, x) = all_different_state(2);
        let mut search = SearchLoop::new(BacktrackingDiscipline::Trailing, RestartStrategy::default());

        let (solutions, outcome, statistics) =
            enumerate(&mut state, &x, &mut search, &mut Indefinite);

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(
            solutions,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        assert_eq!(statistics.num_solutions, 6);
        assert_eq!(statistics.num_replayed_decisions, 0);
    }

    #[test]
    fn recomputation_visits_the_same_solutions() {
        let (mut trailing_state, x) = all_different_state(3);
        let mut trailing =
            SearchLoop::new(BacktrackingDiscipline::Trailing, RestartStrategy::default());
        let (expected, _, _) = enumerate(&mut trailing_state, &x, &mut trailing, &mut Indefinite);

        for interval in [1, 2, 3, 5] {
            let (mut state, x) = all_different_state(3);
            let mut search = SearchLoop::new(
                BacktrackingDiscipline::Recomputation { interval },
                RestartStrategy::default(),
            );
            let (solutions, outcome, statistics) =
                enumerate(&mut state, &x, &mut search, &mut Indefinite);

            assert_eq!(outcome, SearchOutcome::Exhausted);
            assert_eq!(solutions, expected, "interval {interval}");
            if interval > 1 {
                assert!(statistics.num_replayed_decisions > 0);
            }
        }
    }

    #[test]
    fn exhausting_the_tree_restores_the_search_world() {
        let (mut state, x) = all_different_state(2);
        let mut search = SearchLoop::new(
            BacktrackingDiscipline::Recomputation { interval: 2 },
            RestartStrategy::default(),
        );
        let _ = enumerate(&mut state, &x, &mut search, &mut Indefinite);

        assert_eq!(state.world_index(), 1);
        for &variable in &x {
            assert_eq!(state.domains().size(variable), 3);
        }

        search.reset(&mut state);
        assert_eq!(state.world_index(), 0);
    }

    #[test]
    fn infeasible_problems_are_exhausted_without_solutions() {
        let (mut state, x) = all_different_state(1);
        let mut search = SearchLoop::new(BacktrackingDiscipline::Trailing, RestartStrategy::default());

        let (solutions, outcome, statistics) =
            enumerate(&mut state, &x, &mut search, &mut Indefinite);

        assert!(solutions.is_empty());
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert!(statistics.num_failures > 0);
    }

    #[test]
    fn a_stopped_search_can_be_resumed() {
        let (mut state, x) = all_different_state(2);
        let mut search = SearchLoop::new(BacktrackingDiscipline::Trailing, RestartStrategy::default());

        let mut budget = DecisionBudget::new(1);
        let (solutions, outcome, _) = enumerate(&mut state, &x, &mut search, &mut budget);
        assert!(solutions.is_empty());
        assert_eq!(outcome, SearchOutcome::Stopped);

        let (solutions, outcome, _) = enumerate(&mut state, &x, &mut search, &mut Indefinite);
        assert_eq!(solutions.len(), 6);
        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn restarts_return_to_the_root() {
        let (mut state, x) = all_different_state(1);
        let mut restarts = RestartStrategy::new(RestartOptions {
            sequence_generator_type: Some(SequenceGeneratorType::Constant),
            base_interval: 1,
            geometric_coef: 1.0,
        });
        restarts.set_enabled(true);
        let mut search = SearchLoop::new(BacktrackingDiscipline::Trailing, restarts);

        let mut budget = DecisionBudget::new(10);
        let (solutions, outcome, statistics) = enumerate(&mut state, &x, &mut search, &mut budget);

        assert!(solutions.is_empty());
        assert_eq!(outcome, SearchOutcome::Stopped);
        assert!(statistics.num_restarts > 0);
    }
}
