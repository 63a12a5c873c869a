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

/// Selects the variable with the most values in its domain.
///
/// Ties are broken by a [`TieBreaker`], by default the [`InOrderTieBreaker`]; use
/// [`AntiFirstFail::with_tie_breaker`] to provide another one.
#[derive(Debug, Clone)]
pub struct AntiFirstFail<TieBreaking = InOrderTieBreaker<DomainId, u64>> {
    variables: Vec<DomainId>,
    tie_breaker: TieBreaking,
}

impl AntiFirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        Self::with_tie_breaker(variables, InOrderTieBreaker::new(Direction::Maximum))
    }
}

impl<TieBreaking: TieBreaker<DomainId, u64>> AntiFirstFail<TieBreaking> {
    pub fn with_tie_breaker(variables: &[DomainId], tie_breaker: TieBreaking) -> Self {
        bramble_assert_eq_simple!(
            tie_breaker.direction(),
            Direction::Maximum,
            "AntiFirstFail needs a tie-breaker looking for the maximum"
        );
        if variables.is_empty() {
            warn!("The AntiFirstFail variable selector was not provided with any variables");
        }
        AntiFirstFail {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for AntiFirstFail<TieBreaking>
where
    TieBreaking: TieBreaker<DomainId, u64>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        select_by_score(
            &self.variables,
            context,
            &mut self.tie_breaker,
            |context, variable| context.size(variable),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn the_largest_domain_is_selected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(5, 20);
        let z = solver.new_variable(-5, 10);
        let mut rng = TestRandom::default();
        let mut selector = AntiFirstFail::new(&[x, y, z]);

        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(y));

        let _ = solver.set_upper_bound(y, 6).expect("non-empty");
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(z));
    }
}
