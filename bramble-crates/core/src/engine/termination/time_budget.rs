use std::time::Duration;
use std::time::Instant;

use super::TerminationCondition;

/// Stops once a deadline has passed, reading the clock every time it is polled.
///
/// [`super::BackgroundTimer`] enforces the same limit from another thread and only reads a flag
/// when polled.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    /// [`None`] when the budget reaches beyond what an [`Instant`] can represent.
    deadline: Option<Instant>,
}

impl TimeBudget {
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            deadline: Instant::now().checked_add(budget),
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}
