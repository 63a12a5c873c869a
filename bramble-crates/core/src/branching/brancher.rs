use super::Decision;
use super::SelectionContext;
use crate::basic_types::Solution;

/// Chooses the decisions of the search.
///
/// Returning [`None`] means the brancher has nothing left to branch on. If some variable is still
/// unfixed at that point, the search completes the assignment itself by fixing the remaining
/// variables to their smallest value, in creation order.
///
/// A returned decision must remove at least one value on each branch (see
/// [`Decision::splits`]); in particular, only the bounds of a variable without holes can be
/// assigned.
pub trait Brancher {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision>;

    /// Called when the search found a solution.
    fn on_solution(&mut self, _solution: &Solution) {}

    /// Called when the search restarts from the root.
    fn on_restart(&mut self) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        (**self).next_decision(context)
    }

    fn on_solution(&mut self, solution: &Solution) {
        (**self).on_solution(solution)
    }

    fn on_restart(&mut self) {
        (**self).on_restart()
    }
}
