//! A [`TerminationCondition`] is polled by the search loop between nodes. It tells the solver to
//! give up, even though no definitive conclusion has been reached; the solve call then reports
//! an unknown outcome.
mod background_timer;
mod combinator;
mod event_budgets;
mod indefinite;
mod time_budget;

pub use background_timer::BackgroundTimer;
pub use combinator::Combinator;
pub use event_budgets::DecisionBudget;
pub use event_budgets::FailBudget;
pub use event_budgets::SolutionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    fn decision_has_been_made(&mut self) {}

    fn failure_has_occurred(&mut self) {}

    fn solution_has_been_found(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }

    fn failure_has_occurred(&mut self) {
        if let Some(t) = self {
            t.failure_has_occurred()
        }
    }

    fn solution_has_been_found(&mut self) {
        if let Some(t) = self {
            t.solution_has_been_found()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for Box<T> {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }

    fn failure_has_occurred(&mut self) {
        (**self).failure_has_occurred()
    }

    fn solution_has_been_found(&mut self) {
        (**self).solution_has_been_found()
    }
}
