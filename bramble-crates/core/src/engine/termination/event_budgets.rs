//! Budgets on the number of search events: decisions, failures and solutions.
use super::TerminationCondition;

#[derive(Debug, Copy, Clone)]
struct Counter {
    budget: u64,
    count: u64,
}

impl Counter {
    fn new(budget: u64) -> Self {
        Counter { budget, count: 0 }
    }

    fn is_spent(&self) -> bool {
        self.count >= self.budget
    }

    fn record(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

/// Stops after a number of decisions, i.e. after that many nodes have been branched on.
#[derive(Debug, Copy, Clone)]
pub struct DecisionBudget(Counter);

impl DecisionBudget {
    pub fn new(budget: u64) -> Self {
        DecisionBudget(Counter::new(budget))
    }
}

impl TerminationCondition for DecisionBudget {
    fn should_stop(&mut self) -> bool {
        self.0.is_spent()
    }

    fn decision_has_been_made(&mut self) {
        self.0.record();
    }
}

/// Stops once the search has failed a number of times.
#[derive(Debug, Copy, Clone)]
pub struct FailBudget(Counter);

impl FailBudget {
    pub fn new(budget: u64) -> Self {
        FailBudget(Counter::new(budget))
    }
}

impl TerminationCondition for FailBudget {
    fn should_stop(&mut self) -> bool {
        self.0.is_spent()
    }

    fn failure_has_occurred(&mut self) {
        self.0.record();
    }
}

/// Stops once a number of solutions has been found.
#[derive(Debug, Copy, Clone)]
pub struct SolutionBudget(Counter);

impl SolutionBudget {
    pub fn new(budget: u64) -> Self {
        SolutionBudget(Counter::new(budget))
    }
}

impl TerminationCondition for SolutionBudget {
    fn should_stop(&mut self) -> bool {
        self.0.is_spent()
    }

    fn solution_has_been_found(&mut self) {
        self.0.record();
    }
}
