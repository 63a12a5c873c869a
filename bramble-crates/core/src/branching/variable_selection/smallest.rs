use log::warn;

use super::variable_selector::select_by_score;
use super::VariableSelector;
use crate::bramble_assert_eq_simple;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// Selects the variable with the smallest lower bound.
///
/// Ties are broken by a [`TieBreaker`], by default the [`InOrderTieBreaker`]; use
/// [`Smallest::with_tie_breaker`] to provide another one.
#[derive(Debug, Clone)]
pub struct Smallest<TieBreaking = InOrderTieBreaker<DomainId, i32>> {
    variables: Vec<DomainId>,
    tie_breaker: TieBreaking,
}

impl Smallest {
    pub fn new(variables: &[DomainId]) -> Self {
        Self::with_tie_breaker(variables, InOrderTieBreaker::new(Direction::Minimum))
    }
}

impl<TieBreaking: TieBreaker<DomainId, i32>> Smallest<TieBreaking> {
    pub fn with_tie_breaker(variables: &[DomainId], tie_breaker: TieBreaking) -> Self {
        bramble_assert_eq_simple!(
            tie_breaker.direction(),
            Direction::Minimum,
            "Smallest needs a tie-breaker looking for the minimum"
        );
        if variables.is_empty() {
            warn!("The Smallest variable selector was not provided with any variables");
        }
        Smallest {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for Smallest<TieBreaking>
where
    TieBreaking: TieBreaker<DomainId, i32>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        select_by_score(
            &self.variables,
            context,
            &mut self.tie_breaker,
            |context, variable| context.lower_bound(variable),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_smallest_lower_bound_is_selected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 10);
        let y = solver.new_variable(-2, 0);
        let z = solver.new_variable(-4, -4);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(Smallest::new(&[x, y, z]).select_variable(&mut context), Some(y));
    }
}
