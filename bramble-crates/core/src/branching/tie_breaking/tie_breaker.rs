/// Considers variables together with a score and keeps the best one according to its
/// [`Direction`].
pub trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value);

    /// The variable which was selected. Forgets every considered variable, so the tie-breaker
    /// can be reused for the next selection.
    fn select(&mut self) -> Option<Var>;

    fn direction(&self) -> Direction;
}

/// Whether a [`TieBreaker`] looks for the variable with the largest or the smallest score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
