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

/// Selects the variable with the fewest values in its domain.
///
/// Ties are broken by a [`TieBreaker`], by default the [`InOrderTieBreaker`]; use
/// [`FirstFail::with_tie_breaker`] to provide another one.
#[derive(Debug, Clone)]
pub struct FirstFail<TieBreaking = InOrderTieBreaker<DomainId, u64>> {
    variables: Vec<DomainId>,
    tie_breaker: TieBreaking,
}

impl FirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        Self::with_tie_breaker(variables, InOrderTieBreaker::new(Direction::Minimum))
    }
}

impl<TieBreaking: TieBreaker<DomainId, u64>> FirstFail<TieBreaking> {
    pub fn with_tie_breaker(variables: &[DomainId], tie_breaker: TieBreaking) -> Self {
        bramble_assert_eq_simple!(
            tie_breaker.direction(),
            Direction::Minimum,
            "FirstFail needs a tie-breaker looking for the minimum"
        );
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for FirstFail<TieBreaking>
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
    fn the_smallest_domain_is_selected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(5, 20);
        let mut rng = TestRandom::default();
        let mut selector = FirstFail::new(&[x, y]);

        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(x));

        let _ = solver.set_lower_bound(y, 15).expect("non-empty");
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);
        assert_eq!(selector.select_variable(&mut context), Some(y));
    }

    #[test]
    fn holes_count_towards_the_size() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 3);
        let y = solver.new_sparse_variable(&[0, 10, 20]);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(FirstFail::new(&[x, y]).select_variable(&mut context), Some(y));
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(10, 10);
        let y = solver.new_variable(20, 20);
        let mut rng = TestRandom::default();
        let mut context = SelectionContext::new(solver.state.domains(), &mut rng);

        assert_eq!(FirstFail::new(&[x, y]).select_variable(&mut context), None);
    }
}
